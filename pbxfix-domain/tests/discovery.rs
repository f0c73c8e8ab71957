//! Discovery against a real directory tree.

use camino::Utf8PathBuf;
use pbxfix_domain::{FsSourceTree, ProjectLayout, discover, generate};
use pbxfix_types::{IdAllocator, SourceFile};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn create_source_root(files: &[&str]) -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    for rel in files {
        let path = td.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "import SwiftUI\n").unwrap();
    }
    td
}

fn tree(td: &TempDir) -> FsSourceTree {
    FsSourceTree::new(Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8"))
}

#[test]
fn test_views_scanned_before_models() {
    let td = create_source_root(&["Views/A.swift", "Models/B.swift"]);
    let files = discover(&tree(&td), &ProjectLayout::default()).unwrap();
    assert_eq!(
        files,
        vec![
            SourceFile::new("Views", "A.swift"),
            SourceFile::new("Models", "B.swift"),
        ]
    );
}

#[test]
fn test_missing_category_directories_are_skipped() {
    let td = create_source_root(&["Services/Api.swift"]);
    let files = discover(&tree(&td), &ProjectLayout::default()).unwrap();
    assert_eq!(files, vec![SourceFile::new("Services", "Api.swift")]);
}

#[test]
fn test_empty_root_yields_nothing() {
    let td = create_source_root(&[]);
    let files = discover(&tree(&td), &ProjectLayout::default()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_subdirectories_and_other_extensions_ignored() {
    let td = create_source_root(&[
        "Views/Row.swift",
        "Views/Row.swift.orig",
        "Views/README.md",
        "Views/Nested/Deep.swift",
        "Views/ContentView.swift",
    ]);
    fs::create_dir_all(td.path().join("Views").join("Folder.swift")).unwrap();

    let files = discover(&tree(&td), &ProjectLayout::default()).unwrap();
    assert_eq!(files, vec![SourceFile::new("Views", "Row.swift")]);
}

#[test]
fn test_unwatched_directories_ignored() {
    let td = create_source_root(&["Helpers/X.swift", "Models/M.swift"]);
    let files = discover(&tree(&td), &ProjectLayout::default()).unwrap();
    assert_eq!(files, vec![SourceFile::new("Models", "M.swift")]);
}

#[test]
fn test_generation_counts_match_discovery() {
    let td = create_source_root(&[
        "Views/A.swift",
        "Views/B.swift",
        "Models/C.swift",
        "Components/D.swift",
    ]);
    let layout = ProjectLayout::default();
    let files = discover(&tree(&td), &layout).unwrap();
    let set = generate(&files, &layout, &mut IdAllocator::default()).unwrap();

    assert_eq!(set.file_refs.len(), files.len());
    assert_eq!(set.build_files.len(), files.len());
    assert_eq!(set.sources.len(), files.len());
    assert_eq!(set.groups.len(), 3);
}
