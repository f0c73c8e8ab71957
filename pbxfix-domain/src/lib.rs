//! Discovery and fragment generation.
//!
//! This crate knows which files belong in the project and what their
//! manifest records look like. It never touches the manifest itself; that is
//! `pbxfix-edit`'s job.

pub mod discover;
pub mod fragments;
pub mod layout;
pub mod ports;

pub use discover::{discover, without_registered};
pub use fragments::{generate, group_block};
pub use layout::{GroupSpec, LayoutError, ProjectLayout};
pub use ports::{FsSourceTree, SourceTree};
