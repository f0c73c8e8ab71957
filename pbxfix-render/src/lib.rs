//! Rendering helpers (plain text and markdown) for human-readable output.

use pbxfix_types::report::PatchReport;

/// Confirmation block printed to stdout after a run.
pub fn render_text(report: &PatchReport) -> String {
    let mut out = String::new();
    let n = report.files.len();
    if report.applied {
        out.push_str(&format!("Added {n} source files to Xcode project\n"));
    } else {
        out.push_str(&format!("Dry run: {n} source files would be added to Xcode project\n"));
    }
    for f in &report.files {
        out.push_str(&format!("   - {}/{}\n", f.category, f.filename));
    }
    out
}

pub fn render_md(report: &PatchReport) -> String {
    let mut out = String::new();
    out.push_str("# pbxfix\n\n");
    out.push_str(&format!("- Manifest: `{}`\n", report.manifest));
    out.push_str(&format!("- Applied: `{}`\n", report.applied));
    out.push_str(&format!("- Files added: {}\n", report.files.len()));
    out.push_str(&format!(
        "- Folder references removed: {}\n",
        report.folder_refs_dropped
    ));
    out.push_str(&format!(
        "- sha256: {} → {}\n\n",
        short_sha(&report.before_sha256),
        short_sha(&report.after_sha256)
    ));

    let missed = report.injections.missed();
    if !missed.is_empty() {
        out.push_str("## Missed sections\n\n");
        for name in missed {
            out.push_str(&format!("- `{}`\n", name));
        }
        out.push('\n');
    }

    out.push_str("## Files\n\n");
    if report.files.is_empty() {
        out.push_str("_No new files._\n");
        return out;
    }

    out.push_str("| Category | File | File reference | Build file |\n");
    out.push_str("|---|---|---|---|\n");
    for f in &report.files {
        out.push_str(&format!(
            "| {} | `{}` | `{}` | `{}` |\n",
            f.category, f.filename, f.file_ref_id, f.build_file_id
        ));
    }

    out
}

fn short_sha(sha: &str) -> &str {
    if sha.is_empty() {
        "-"
    } else {
        &sha[..sha.len().min(12)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbxfix_types::report::{Injections, ToolInfo};
    use pbxfix_types::{FragmentSet, IdAllocator, PlannedEntry, SourceFile};
    use pretty_assertions::assert_eq;

    fn report(applied: bool) -> PatchReport {
        let mut ids = IdAllocator::default();
        let mut set = FragmentSet::default();
        for file in [
            SourceFile::new("Views", "A.swift"),
            SourceFile::new("Models", "B.swift"),
        ] {
            let (file_ref, build_file) = ids.next_pair().unwrap();
            set.entries.push(PlannedEntry {
                file,
                file_ref,
                build_file,
            });
        }
        let tool = ToolInfo {
            name: "pbxfix".to_string(),
            version: None,
        };
        let mut r = PatchReport::new(tool, "Inc.xcodeproj/project.pbxproj".into(), &set);
        r.applied = applied;
        r
    }

    #[test]
    fn text_lists_each_file() {
        assert_eq!(
            render_text(&report(true)),
            "Added 2 source files to Xcode project\n   - Views/A.swift\n   - Models/B.swift\n"
        );
    }

    #[test]
    fn text_marks_dry_run() {
        assert!(render_text(&report(false)).starts_with("Dry run: 2 source files"));
    }

    #[test]
    fn markdown_lists_missed_sections_and_ids() {
        let mut r = report(true);
        r.injections = Injections {
            file_refs: true,
            build_files: true,
            groups: true,
            sources: false,
        };
        let md = render_md(&r);
        assert!(md.contains("## Missed sections\n\n- `PBXSourcesBuildPhase`\n"));
        assert!(md.contains("| Views | `A.swift` | `BB00000000000000005000` | `CC00000000000000005000` |"));
        assert!(md.contains("- sha256: - → -"));
    }

    #[test]
    fn markdown_without_files() {
        let tool = ToolInfo {
            name: "pbxfix".to_string(),
            version: None,
        };
        let r = PatchReport::new(tool, "p".into(), &FragmentSet::default());
        assert!(render_md(&r).ends_with("_No new files._\n"));
    }
}
