use crate::layout::ProjectLayout;
use crate::ports::SourceTree;
use anyhow::Context;
use camino::Utf8Path;
use pbxfix_types::SourceFile;
use std::collections::BTreeSet;
use tracing::debug;

/// Find candidate sources, category-major in layout order, sorted by name
/// within each category. Missing category directories are skipped.
pub fn discover(tree: &dyn SourceTree, layout: &ProjectLayout) -> anyhow::Result<Vec<SourceFile>> {
    let mut out = Vec::new();

    for category in &layout.categories {
        let rel = Utf8Path::new(category.as_str());
        if !tree.is_dir(rel) {
            debug!(category = %category, root = %tree.root(), "category directory missing, skipping");
            continue;
        }

        let mut names = tree
            .list_files(rel, layout.bare_extension())
            .with_context(|| format!("list {} sources in {}", category, tree.root()))?;
        names.sort();

        for name in names {
            if layout.is_excluded(&name) {
                debug!(file = %name, "excluded entry point");
                continue;
            }
            out.push(SourceFile::new(category.clone(), name));
        }
    }

    Ok(out)
}

/// Drop files whose names the manifest already references.
pub fn without_registered(files: Vec<SourceFile>, registered: &BTreeSet<String>) -> Vec<SourceFile> {
    files
        .into_iter()
        .filter(|f| {
            let known = registered.contains(&f.filename);
            if known {
                debug!(file = %f.display_path(), "already registered");
            }
            !known
        })
        .collect()
}
