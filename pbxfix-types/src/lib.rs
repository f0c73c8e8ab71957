//! Shared types for the pbxfix workspace.
//!
//! # Design constraints
//! - Everything here is built fresh for one run and dropped after the write.
//! - `report` types are serialized to disk or stdout; prefer adding optional
//!   fields over changing semantics.

pub mod fragment;
pub mod ident;
pub mod report;
pub mod source;

pub use fragment::{Fragment, FragmentKind, FragmentSet, PlannedEntry};
pub use ident::{IdAllocator, IdScheme, IdSchemeError, Identifier};
pub use source::{Category, SourceFile};

/// Schema identifiers.
pub mod schema {
    pub const PBXFIX_REPORT_V1: &str = "pbxfix.report.v1";
}
