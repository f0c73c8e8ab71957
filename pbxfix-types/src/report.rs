use crate::fragment::FragmentSet;
use crate::ident::Identifier;
use crate::source::Category;
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Which of the four injection points fired during a splice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injections {
    pub file_refs: bool,
    pub build_files: bool,
    pub groups: bool,
    pub sources: bool,
}

impl Injections {
    /// Names of the regions whose markers were never matched.
    pub fn missed(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !self.file_refs {
            out.push("PBXFileReference");
        }
        if !self.build_files {
            out.push("PBXBuildFile");
        }
        if !self.groups {
            out.push("PBXGroup");
        }
        if !self.sources {
            out.push("PBXSourcesBuildPhase");
        }
        out
    }

    pub fn all(&self) -> bool {
        self.missed().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedFile {
    pub category: Category,
    pub filename: String,
    pub file_ref_id: Identifier,
    pub build_file_id: Identifier,
}

/// Outcome of one run, suitable for `--format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    pub schema: String,
    pub tool: ToolInfo,
    #[serde(default)]
    pub run: RunInfo,
    pub manifest: Utf8PathBuf,
    /// False for dry runs.
    pub applied: bool,
    pub before_sha256: String,
    pub after_sha256: String,
    pub files: Vec<AddedFile>,
    pub injections: Injections,
    #[serde(default)]
    pub folder_refs_dropped: u64,
}

impl PatchReport {
    pub fn new(tool: ToolInfo, manifest: Utf8PathBuf, fragments: &FragmentSet) -> Self {
        let files = fragments
            .entries
            .iter()
            .map(|e| AddedFile {
                category: e.file.category.clone(),
                filename: e.file.filename.clone(),
                file_ref_id: e.file_ref.clone(),
                build_file_id: e.build_file.clone(),
            })
            .collect();

        Self {
            schema: crate::schema::PBXFIX_REPORT_V1.to_string(),
            tool,
            run: RunInfo {
                started_at: Some(Utc::now()),
                ended_at: None,
            },
            manifest,
            applied: false,
            before_sha256: String::new(),
            after_sha256: String::new(),
            files,
            injections: Injections::default(),
            folder_refs_dropped: 0,
        }
    }
}
