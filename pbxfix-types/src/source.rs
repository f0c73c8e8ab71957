use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical grouping of sources.
///
/// The name is at once the subdirectory scanned for files, the group's
/// `path` in the manifest, and the comment used to spot stale folder
/// references.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A discovered candidate source file. Identity is `(category, filename)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceFile {
    pub category: Category,
    /// Base name only, no directory component.
    pub filename: String,
}

impl SourceFile {
    pub fn new(category: impl Into<Category>, filename: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            filename: filename.into(),
        }
    }

    /// `Category/filename`, as printed in confirmations.
    pub fn display_path(&self) -> String {
        format!("{}/{}", self.category, self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_joins_category_and_name() {
        let f = SourceFile::new("Views", "Sidebar.swift");
        assert_eq!(f.display_path(), "Views/Sidebar.swift");
        assert_eq!(f.category.as_str(), "Views");
    }

    #[test]
    fn category_serializes_as_plain_string() {
        let json = serde_json::to_string(&Category::new("Models")).unwrap();
        assert_eq!(json, "\"Models\"");
    }
}
