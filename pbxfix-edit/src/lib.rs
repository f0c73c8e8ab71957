//! Edit engine for pbxfix.
//!
//! Responsibilities:
//! - Splice generated fragments into a manifest (`splice`).
//! - Read the manifest, write it back once, optionally keeping a backup.
//! - Generate a unified diff preview.

pub mod error;
pub mod markers;
pub mod registered;
pub mod splice;

pub use error::{EditError, EditResult};
pub use registered::registered_file_names;
pub use splice::{SpliceOutcome, splice};

use camino::{Utf8Path, Utf8PathBuf};
use diffy::PatchFormatter;
use fs_err as fs;
use pbxfix_domain::ProjectLayout;
use pbxfix_types::FragmentSet;
use pbxfix_types::report::Injections;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub dry_run: bool,
    /// Copy the original manifest to `<manifest><suffix>` before writing.
    pub backup_suffix: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub before: String,
    pub after: String,
    pub patch: String,
    pub injections: Injections,
    pub folder_refs_dropped: usize,
    pub written: bool,
    pub backup: Option<Utf8PathBuf>,
}

/// Load the whole manifest into memory.
pub fn read_manifest(path: &Utf8Path) -> EditResult<String> {
    if !path.is_file() {
        return Err(EditError::ManifestMissing {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Splice `fragments` into `before` and, unless `opts.dry_run`, write the
/// result to `path` in one write. Unchanged output is never written.
pub fn apply_patch(
    path: &Utf8Path,
    before: String,
    fragments: &FragmentSet,
    layout: &ProjectLayout,
    opts: &ApplyOptions,
) -> EditResult<ApplyOutcome> {
    let spliced = splice(&before, fragments, layout);
    let patch = render_patch(path, &before, &spliced.text);

    let changed = spliced.text != before;
    let mut backup = None;
    let mut written = false;

    if opts.dry_run {
        debug!(manifest = %path, "dry-run: not written");
    } else if changed {
        if let Some(suffix) = &opts.backup_suffix {
            let backup_path = Utf8PathBuf::from(format!("{path}{suffix}"));
            fs::write(&backup_path, &before)?;
            debug!(backup = %backup_path, "wrote backup");
            backup = Some(backup_path);
        }
        fs::write(path, &spliced.text)?;
        info!(manifest = %path, "wrote manifest");
        written = true;
    } else {
        debug!(manifest = %path, "no changes to write");
    }

    Ok(ApplyOutcome {
        before,
        after: spliced.text,
        patch,
        injections: spliced.injections,
        folder_refs_dropped: spliced.folder_refs_dropped,
        written,
        backup,
    })
}

/// Unified diff of `before` → `after`, empty when they are equal.
pub fn render_patch(path: &Utf8Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    let formatted = PatchFormatter::new().fmt_patch(&patch).to_string();
    // diffy prints its own `--- original` / `+++ modified` header first.
    let hunks = formatted.splitn(3, '\n').nth(2).unwrap_or_default();
    out.push_str(hunks);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_patch_is_empty_without_changes() {
        assert!(render_patch(Utf8Path::new("p"), "a\n", "a\n").is_empty());
    }

    #[test]
    fn render_patch_uses_git_headers() {
        let patch = render_patch(Utf8Path::new("project.pbxproj"), "a\nb\n", "a\nx\nb\n");
        assert!(patch.starts_with("diff --git a/project.pbxproj b/project.pbxproj\n"));
        assert!(patch.contains("--- a/project.pbxproj\n+++ b/project.pbxproj\n"));
        assert!(!patch.contains("original"));
        assert!(patch.contains("+x\n"));
    }

    #[test]
    fn sha256_of_empty_string() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
