//! Text templates for the records pbxfix injects.

use crate::layout::{GroupSpec, ProjectLayout};
use pbxfix_types::{
    Fragment, FragmentKind, FragmentSet, IdAllocator, IdSchemeError, Identifier, PlannedEntry,
    SourceFile,
};

/// Allocate ids for `files` in order and build all four fragment lists.
pub fn generate(
    files: &[SourceFile],
    layout: &ProjectLayout,
    ids: &mut IdAllocator,
) -> Result<FragmentSet, IdSchemeError> {
    let mut set = FragmentSet::default();

    for file in files {
        let (file_ref, build_file) = ids.next_pair()?;
        let name = file.filename.as_str();

        set.file_refs.push(Fragment::new(
            FragmentKind::FileReference,
            file_reference_line(&file_ref, name, &layout.file_type),
        ));
        set.build_files.push(Fragment::new(
            FragmentKind::BuildFile,
            build_file_line(&build_file, &file_ref, name),
        ));
        set.sources.push(Fragment::new(
            FragmentKind::SourcesPhase,
            sources_line(&build_file, name),
        ));
        set.groups
            .entry(file.category.clone())
            .or_default()
            .push(Fragment::new(
                FragmentKind::GroupChild,
                group_child_line(&file_ref, name),
            ));

        set.entries.push(PlannedEntry {
            file: file.clone(),
            file_ref,
            build_file,
        });
    }

    Ok(set)
}

pub fn file_reference_line(id: &Identifier, name: &str, file_type: &str) -> String {
    format!(
        "\t\t{id} /* {name} */ = {{isa = PBXFileReference; lastKnownFileType = {file_type}; \
         path = {name}; sourceTree = \"<group>\"; }};\n"
    )
}

pub fn build_file_line(id: &Identifier, file_ref: &Identifier, name: &str) -> String {
    format!(
        "\t\t{id} /* {name} in Sources */ = {{isa = PBXBuildFile; fileRef = {file_ref} /* {name} */; }};\n"
    )
}

pub fn sources_line(build_file: &Identifier, name: &str) -> String {
    format!("\t\t\t\t{build_file} /* {name} in Sources */,\n")
}

pub fn group_child_line(file_ref: &Identifier, name: &str) -> String {
    format!("\t\t\t\t{file_ref} /* {name} */,\n")
}

/// A complete `PBXGroup` definition for one category.
pub fn group_block(group: &GroupSpec, children: &[Fragment]) -> String {
    let category = &group.category;
    let mut out = String::new();
    out.push_str(&format!("\t\t{} /* {category} */ = {{\n", group.id));
    out.push_str("\t\t\tisa = PBXGroup;\n");
    out.push_str("\t\t\tchildren = (\n");
    for child in children {
        out.push_str(child.as_str());
    }
    out.push_str("\t\t\t);\n");
    out.push_str(&format!("\t\t\tpath = {category};\n"));
    out.push_str("\t\t\tsourceTree = \"<group>\";\n");
    out.push_str("\t\t};\n");
    out
}
