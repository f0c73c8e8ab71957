use crate::markers;
use std::collections::BTreeSet;

/// Base names of every `path = …;` in the PBXFileReference section.
pub fn registered_file_names(manifest: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let mut inside = false;

    for line in manifest.lines() {
        if !inside {
            inside = line.contains(markers::FILE_REF_BEGIN);
            continue;
        }
        if line.contains(markers::FILE_REF_END) {
            break;
        }
        if let Some(path) = path_value(line) {
            let name = path.rsplit('/').next().unwrap_or(path);
            out.insert(name.to_string());
        }
    }

    out
}

fn path_value(line: &str) -> Option<&str> {
    let start = line.find("path = ")? + "path = ".len();
    let rest = &line[start..];
    let value = if let Some(quoted) = rest.strip_prefix('"') {
        &quoted[..quoted.find('"')?]
    } else {
        &rest[..rest.find(';')?]
    };
    (!value.is_empty()).then_some(value)
}
