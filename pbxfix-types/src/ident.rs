//! Synthetic object identifiers.
//!
//! Each new file gets two identifiers built from the same counter value: one
//! for its `PBXFileReference` record and one for its `PBXBuildFile` record.
//! The two kinds differ only by prefix, so the prefixes must never be equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdSchemeError {
    #[error("identifier prefix must be non-empty ASCII alphanumeric, got '{prefix}'")]
    InvalidPrefix { prefix: String },

    #[error("file reference and build file prefixes must differ (both '{prefix}')")]
    PrefixCollision { prefix: String },

    #[error("identifier width must be at least 1")]
    ZeroWidth,

    #[error("identifier counter exhausted: {value} does not fit in {width} digits")]
    Exhausted { value: u64, width: usize },
}

/// A manifest object identifier, e.g. `BB00000000000000005000`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formatting rules for the two identifier kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdScheme {
    file_ref_prefix: String,
    build_file_prefix: String,
    width: usize,
}

impl IdScheme {
    pub const DEFAULT_FILE_REF_PREFIX: &'static str = "BB";
    pub const DEFAULT_BUILD_FILE_PREFIX: &'static str = "CC";
    pub const DEFAULT_WIDTH: usize = 20;

    pub fn new(
        file_ref_prefix: impl Into<String>,
        build_file_prefix: impl Into<String>,
        width: usize,
    ) -> Result<Self, IdSchemeError> {
        let file_ref_prefix = file_ref_prefix.into();
        let build_file_prefix = build_file_prefix.into();

        for prefix in [&file_ref_prefix, &build_file_prefix] {
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(IdSchemeError::InvalidPrefix {
                    prefix: prefix.clone(),
                });
            }
        }
        if file_ref_prefix == build_file_prefix {
            return Err(IdSchemeError::PrefixCollision {
                prefix: file_ref_prefix,
            });
        }
        if width == 0 {
            return Err(IdSchemeError::ZeroWidth);
        }

        Ok(Self {
            file_ref_prefix,
            build_file_prefix,
            width,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn file_ref(&self, counter: u64) -> Identifier {
        self.format(&self.file_ref_prefix, counter)
    }

    pub fn build_file(&self, counter: u64) -> Identifier {
        self.format(&self.build_file_prefix, counter)
    }

    fn format(&self, prefix: &str, counter: u64) -> Identifier {
        Identifier(format!("{prefix}{counter:0width$}", width = self.width))
    }

    /// Largest counter value that still fits the digit width, if bounded by it.
    fn max_counter(&self) -> Option<u64> {
        u32::try_from(self.width)
            .ok()
            .and_then(|w| 10u64.checked_pow(w))
            .map(|cap| cap - 1)
    }
}

impl Default for IdScheme {
    fn default() -> Self {
        Self {
            file_ref_prefix: Self::DEFAULT_FILE_REF_PREFIX.to_string(),
            build_file_prefix: Self::DEFAULT_BUILD_FILE_PREFIX.to_string(),
            width: Self::DEFAULT_WIDTH,
        }
    }
}

/// Monotonic counter handing out identifier pairs.
///
/// Seeded above the range used by hand-authored entries so generated ids
/// never collide with existing ones.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    scheme: IdScheme,
    next: u64,
}

impl IdAllocator {
    pub const DEFAULT_START: u64 = 5000;

    pub fn new(scheme: IdScheme, start: u64) -> Self {
        Self {
            scheme,
            next: start,
        }
    }

    pub fn scheme(&self) -> &IdScheme {
        &self.scheme
    }

    /// Returns `(file_ref, build_file)` for the next counter value.
    pub fn next_pair(&mut self) -> Result<(Identifier, Identifier), IdSchemeError> {
        let value = self.next;
        if let Some(max) = self.scheme.max_counter()
            && value > max
        {
            return Err(IdSchemeError::Exhausted {
                value,
                width: self.scheme.width,
            });
        }
        self.next = value.checked_add(1).ok_or(IdSchemeError::Exhausted {
            value,
            width: self.scheme.width,
        })?;
        Ok((self.scheme.file_ref(value), self.scheme.build_file(value)))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(IdScheme::default(), Self::DEFAULT_START)
    }
}
