use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use glob::{Pattern, glob};

/// Read-only view of the source directory.
///
/// Discovery goes through this so it can be tested against an in-memory tree.
pub trait SourceTree {
    fn root(&self) -> &Utf8Path;

    fn is_dir(&self, rel: &Utf8Path) -> bool;

    /// Base names of regular files in `rel` with the given extension, any order.
    fn list_files(&self, rel: &Utf8Path, extension: &str) -> anyhow::Result<Vec<String>>;
}

/// File-system backed `SourceTree`.
#[derive(Debug, Clone)]
pub struct FsSourceTree {
    root: Utf8PathBuf,
}

impl FsSourceTree {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl SourceTree for FsSourceTree {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn is_dir(&self, rel: &Utf8Path) -> bool {
        self.abs(rel).is_dir()
    }

    fn list_files(&self, rel: &Utf8Path, extension: &str) -> anyhow::Result<Vec<String>> {
        let dir = self.abs(rel);
        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(dir.as_str()),
            Pattern::escape(extension)
        );

        let mut out = Vec::new();
        for entry in glob(&pattern).with_context(|| format!("glob {pattern}"))? {
            let path = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                out.push(name.to_string());
            }
        }
        Ok(out)
    }
}
