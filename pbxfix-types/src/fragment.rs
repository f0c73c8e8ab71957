use crate::ident::Identifier;
use crate::source::{Category, SourceFile};
use std::collections::BTreeMap;

/// Which manifest table a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    FileReference,
    BuildFile,
    SourcesPhase,
    GroupChild,
}

/// One generated manifest line, newline included. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A file scheduled for registration together with its two identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub file: SourceFile,
    pub file_ref: Identifier,
    pub build_file: Identifier,
}

/// Everything the splicer injects, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    pub entries: Vec<PlannedEntry>,
    pub file_refs: Vec<Fragment>,
    pub build_files: Vec<Fragment>,
    pub sources: Vec<Fragment>,
    pub groups: BTreeMap<Category, Vec<Fragment>>,
}

impl FragmentSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group children for `category`; empty when nothing was discovered there.
    pub fn group_children(&self, category: &Category) -> &[Fragment] {
        self.groups.get(category).map(Vec::as_slice).unwrap_or(&[])
    }
}
