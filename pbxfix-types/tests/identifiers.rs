//! Identifier uniqueness and report serialization.

use pbxfix_types::report::{Injections, PatchReport, ToolInfo};
use pbxfix_types::{
    Fragment, FragmentKind, FragmentSet, IdAllocator, IdScheme, PlannedEntry, SourceFile,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn allocated_ids_never_repeat(start in 0u64..1_000_000, count in 1usize..200) {
        let mut ids = IdAllocator::new(IdScheme::default(), start);
        let mut seen = HashSet::new();
        for _ in 0..count {
            let (file_ref, build_file) = ids.next_pair().unwrap();
            prop_assert!(seen.insert(file_ref));
            prop_assert!(seen.insert(build_file));
        }
        prop_assert_eq!(seen.len(), count * 2);
    }

    #[test]
    fn ids_keep_fixed_length(value in 0u64..10_000_000) {
        let scheme = IdScheme::default();
        prop_assert_eq!(scheme.file_ref(value).as_str().len(), 22);
        prop_assert_eq!(scheme.build_file(value).as_str().len(), 22);
    }
}

#[test]
fn missed_injections_are_named() {
    let inj = Injections {
        file_refs: true,
        build_files: true,
        groups: true,
        sources: false,
    };
    assert!(!inj.all());
    assert_eq!(inj.missed(), vec!["PBXSourcesBuildPhase"]);
    assert_eq!(Injections::default().missed().len(), 4);
}

#[test]
fn report_lists_entries_in_order() {
    let mut ids = IdAllocator::default();
    let mut set = FragmentSet::default();
    for file in [
        SourceFile::new("Views", "A.swift"),
        SourceFile::new("Models", "B.swift"),
    ] {
        let (file_ref, build_file) = ids.next_pair().unwrap();
        set.sources.push(Fragment::new(
            FragmentKind::SourcesPhase,
            format!("{build_file},\n"),
        ));
        set.entries.push(PlannedEntry {
            file,
            file_ref,
            build_file,
        });
    }

    let tool = ToolInfo {
        name: "pbxfix".to_string(),
        version: Some("0.0.0".to_string()),
    };
    let report = PatchReport::new(tool, "project.pbxproj".into(), &set);

    assert_eq!(report.schema, pbxfix_types::schema::PBXFIX_REPORT_V1);
    assert!(!report.applied);
    let names: Vec<_> = report.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["A.swift", "B.swift"]);
    assert_eq!(report.files[1].file_ref_id.as_str(), "BB00000000000000005001");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["files"][0]["category"], "Views");
    assert_eq!(json["files"][0]["build_file_id"], "CC00000000000000005000");
    assert_eq!(json["injections"]["sources"], false);
}
