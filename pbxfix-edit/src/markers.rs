//! The only structural knowledge pbxfix has of the manifest format.
//!
//! Every marker is matched as a substring of a single line.

pub const FILE_REF_BEGIN: &str = "/* Begin PBXFileReference section */";
pub const FILE_REF_END: &str = "/* End PBXFileReference section */";
pub const BUILD_FILE_BEGIN: &str = "/* Begin PBXBuildFile section */";
pub const BUILD_FILE_END: &str = "/* End PBXBuildFile section */";
pub const GROUP_END: &str = "/* End PBXGroup section */";
pub const FILES_OPEN: &str = "files = (";
pub const LIST_CLOSE: &str = ");";
pub const FOLDER_TYPE: &str = "lastKnownFileType = folder;";

/// Markers that depend on the project layout.
#[derive(Debug, Clone)]
pub struct Markers {
    sources_phase: String,
}

impl Markers {
    pub fn new(sources_phase_id: &str) -> Self {
        Self {
            sources_phase: format!("{sources_phase_id} /* Sources */ = {{"),
        }
    }

    /// Opening line of the `PBXSourcesBuildPhase` object.
    pub fn sources_phase(&self) -> &str {
        &self.sources_phase
    }
}

/// Whether `line` is a folder reference named after a watched category.
pub fn is_folder_ref_for<'a>(line: &str, mut categories: impl Iterator<Item = &'a str>) -> bool {
    line.contains(FOLDER_TYPE) && categories.any(|c| line.contains(&format!("/* {c} */")))
}
