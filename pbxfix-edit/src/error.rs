//! Error types for pbxfix-edit.
//!
//! Only filesystem failures are errors. A manifest whose markers do not
//! match is not an error; the affected injection is simply reported as
//! missed.

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    /// The manifest path does not point at a file.
    #[error("manifest not found: {path}")]
    ManifestMissing { path: Utf8PathBuf },

    /// Reading the manifest, writing it back, or writing the backup failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using EditError.
pub type EditResult<T> = Result<T, EditError>;
