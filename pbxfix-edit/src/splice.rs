//! Single-pass rewrite of the manifest.
//!
//! Lines are split with their terminators kept, so anything not touched is
//! reproduced byte for byte. Four regions are recognised; inside a region no
//! other marker is examined.

use crate::markers::{self, Markers};
use pbxfix_domain::{ProjectLayout, group_block};
use pbxfix_types::report::Injections;
use pbxfix_types::{Fragment, FragmentSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Outside,
    FileReferences,
    BuildFiles,
    /// Inside the Sources phase object, before `files = (`.
    SourcesHeader,
    /// Inside the Sources phase's `files` list.
    SourcesFiles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOutcome {
    pub text: String,
    pub injections: Injections,
    pub folder_refs_dropped: usize,
}

pub fn splice(manifest: &str, fragments: &FragmentSet, layout: &ProjectLayout) -> SpliceOutcome {
    let markers = Markers::new(&layout.sources_phase_id);
    let mut out = String::with_capacity(manifest.len() + 256 * fragments.len());
    let mut injections = Injections::default();
    let mut dropped = 0;
    let mut region = Region::Outside;

    for line in manifest.split_inclusive('\n') {
        region = match region {
            Region::Outside => {
                let next = if line.contains(markers::BUILD_FILE_BEGIN) {
                    Region::BuildFiles
                } else if line.contains(markers::FILE_REF_BEGIN) {
                    Region::FileReferences
                } else if line.contains(markers::GROUP_END) {
                    for group in &layout.groups {
                        let children = fragments.group_children(&group.category);
                        if !children.is_empty() {
                            out.push_str(&group_block(group, children));
                        }
                    }
                    injections.groups = true;
                    Region::Outside
                } else if line.contains(markers.sources_phase()) {
                    Region::SourcesHeader
                } else {
                    Region::Outside
                };
                out.push_str(line);
                next
            }

            Region::FileReferences => {
                if line.contains(markers::FILE_REF_END) {
                    push_all(&mut out, &fragments.file_refs);
                    out.push_str(line);
                    injections.file_refs = true;
                    Region::Outside
                } else {
                    let watched = layout.categories.iter().map(|c| c.as_str());
                    if markers::is_folder_ref_for(line, watched) {
                        dropped += 1;
                    } else {
                        out.push_str(line);
                    }
                    Region::FileReferences
                }
            }

            Region::BuildFiles => {
                if line.contains(markers::BUILD_FILE_END) {
                    push_all(&mut out, &fragments.build_files);
                    out.push_str(line);
                    injections.build_files = true;
                    Region::Outside
                } else {
                    out.push_str(line);
                    Region::BuildFiles
                }
            }

            Region::SourcesHeader => {
                out.push_str(line);
                if line.contains(markers::FILES_OPEN) {
                    Region::SourcesFiles
                } else {
                    Region::SourcesHeader
                }
            }

            Region::SourcesFiles => {
                if line.contains(markers::LIST_CLOSE) {
                    push_all(&mut out, &fragments.sources);
                    out.push_str(line);
                    injections.sources = true;
                    Region::Outside
                } else {
                    out.push_str(line);
                    Region::SourcesFiles
                }
            }
        };
    }

    SpliceOutcome {
        text: out,
        injections,
        folder_refs_dropped: dropped,
    }
}

fn push_all(out: &mut String, fragments: &[Fragment]) {
    for f in fragments {
        out.push_str(f.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbxfix_domain::generate;
    use pbxfix_types::{IdAllocator, SourceFile};
    use pretty_assertions::assert_eq;

    fn fragments_for(files: &[(&str, &str)]) -> FragmentSet {
        let files: Vec<_> = files.iter().map(|(c, f)| SourceFile::new(*c, *f)).collect();
        generate(&files, &ProjectLayout::default(), &mut IdAllocator::default()).unwrap()
    }

    #[test]
    fn manifest_without_markers_is_untouched() {
        let text = "// !$*UTF8*$!\n{\n\tarchiveVersion = 1;\n}\n";
        let out = splice(text, &fragments_for(&[("Views", "A.swift")]), &ProjectLayout::default());
        assert_eq!(out.text, text);
        assert_eq!(out.injections, Injections::default());
    }

    #[test]
    fn missing_trailing_newline_is_preserved() {
        let text = "/* Begin PBXBuildFile section */\n/* End PBXBuildFile section */";
        let out = splice(text, &fragments_for(&[("Views", "A.swift")]), &ProjectLayout::default());
        assert!(out.text.ends_with("/* End PBXBuildFile section */"));
        assert!(out.injections.build_files);
    }

    #[test]
    fn crlf_lines_survive() {
        let text = "a\r\n/* End PBXGroup section */\r\nb\r\n";
        let out = splice(text, &FragmentSet::default(), &ProjectLayout::default());
        assert_eq!(out.text, text);
        assert!(out.injections.groups);
    }

    #[test]
    fn unterminated_region_swallows_later_markers() {
        let text = "/* Begin PBXBuildFile section */\n\
                    x\n\
                    /* End PBXGroup section */\n";
        let out = splice(text, &fragments_for(&[("Views", "A.swift")]), &ProjectLayout::default());
        assert_eq!(out.text, text);
        assert!(!out.injections.build_files);
        assert!(!out.injections.groups);
    }

    #[test]
    fn sources_phase_without_files_list_is_a_no_op() {
        let text = "\t\tAA9999940000000000000001 /* Sources */ = {\n\
                    \t\t\tisa = PBXSourcesBuildPhase;\n\
                    \t\t};\n";
        let out = splice(text, &fragments_for(&[("Views", "A.swift")]), &ProjectLayout::default());
        assert_eq!(out.text, text);
        assert!(!out.injections.sources);
    }

    #[test]
    fn other_build_phases_are_ignored() {
        let text = "\t\tAA9999950000000000000001 /* Frameworks */ = {\n\
                    \t\t\tfiles = (\n\
                    \t\t\t);\n\
                    \t\t};\n";
        let out = splice(text, &fragments_for(&[("Views", "A.swift")]), &ProjectLayout::default());
        assert_eq!(out.text, text);
    }

    #[test]
    fn folder_refs_outside_file_ref_section_are_kept() {
        let text = "\t\tAA01 /* Views */ = {lastKnownFileType = folder; };\n";
        let out = splice(text, &FragmentSet::default(), &ProjectLayout::default());
        assert_eq!(out.text, text);
        assert_eq!(out.folder_refs_dropped, 0);
    }
}
