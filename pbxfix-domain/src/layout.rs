//! Fixed knowledge about the project being patched.
//!
//! Defaults reproduce the Inc macOS app layout: five category folders under
//! `Inc/`, Swift sources, and hand-authored ids in the `AA…` range.

use pbxfix_types::Category;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("file extension must be non-empty")]
    EmptyExtension,

    #[error("category '{category}' is listed more than once")]
    DuplicateCategory { category: String },

    #[error("category '{category}' has no group definition")]
    MissingGroup { category: String },

    #[error("group id for '{category}' must be non-empty ASCII alphanumeric")]
    InvalidGroupId { category: String },

    #[error("sources build phase id must be non-empty ASCII alphanumeric")]
    InvalidPhaseId,
}

/// A group block to emit for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub category: Category,
    pub id: String,
}

impl GroupSpec {
    pub fn new(category: &str, id: &str) -> Self {
        Self {
            category: Category::new(category),
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Scan order. Determines id assignment order.
    pub categories: Vec<Category>,
    /// Emission order of group blocks, with their fixed ids.
    pub groups: Vec<GroupSpec>,
    pub extension: String,
    /// `lastKnownFileType` written into file references.
    pub file_type: String,
    /// Entry points that are already registered by hand.
    pub exclude: BTreeSet<String>,
    pub sources_phase_id: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            categories: ["Views", "ViewModels", "Models", "Services", "Components"]
                .into_iter()
                .map(Category::new)
                .collect(),
            groups: vec![
                GroupSpec::new("Models", "AA0000100000000000000001"),
                GroupSpec::new("ViewModels", "AA0000110000000000000001"),
                GroupSpec::new("Views", "AA0000120000000000000001"),
                GroupSpec::new("Services", "AA0000130000000000000001"),
                GroupSpec::new("Components", "AA0000140000000000000001"),
            ],
            extension: "swift".to_string(),
            file_type: "sourcecode.swift".to_string(),
            exclude: ["IncApp.swift", "ContentView.swift"]
                .into_iter()
                .map(String::from)
                .collect(),
            sources_phase_id: "AA9999940000000000000001".to_string(),
        }
    }
}

impl ProjectLayout {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(LayoutError::EmptyExtension);
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category) {
                return Err(LayoutError::DuplicateCategory {
                    category: category.to_string(),
                });
            }
            if self.group_for(category).is_none() {
                return Err(LayoutError::MissingGroup {
                    category: category.to_string(),
                });
            }
        }

        for group in &self.groups {
            if !is_object_id(&group.id) {
                return Err(LayoutError::InvalidGroupId {
                    category: group.category.to_string(),
                });
            }
        }

        if !is_object_id(&self.sources_phase_id) {
            return Err(LayoutError::InvalidPhaseId);
        }

        Ok(())
    }

    pub fn group_for(&self, category: &Category) -> Option<&GroupSpec> {
        self.groups.iter().find(|g| &g.category == category)
    }

    pub fn is_excluded(&self, filename: &str) -> bool {
        self.exclude.contains(filename)
    }

    pub fn is_watched(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.as_str() == category)
    }

    /// Extension without a leading dot.
    pub fn bare_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

fn is_object_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}
