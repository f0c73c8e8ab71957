//! Configuration file loading for pbxfix.
//!
//! Discovers and loads `pbxfix.toml` from the project directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use pbxfix_domain::{GroupSpec, ProjectLayout};
use pbxfix_types::{Category, IdAllocator, IdScheme};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "pbxfix.toml";

/// Top-level configuration from pbxfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PbxfixConfig {
    pub project: ProjectConfig,
    pub layout: LayoutConfig,
    pub ids: IdsConfig,
    pub backups: BackupsConfig,
}

/// Where the sources and the manifest live, relative to the project directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Target name; `<name>/` holds sources and `<name>.xcodeproj` the manifest.
    pub name: String,
    pub source_dir: Option<Utf8PathBuf>,
    pub manifest: Option<Utf8PathBuf>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Inc".to_string(),
            source_dir: None,
            manifest: None,
        }
    }
}

/// Overrides for [`ProjectLayout`]; anything unset keeps the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub categories: Option<Vec<String>>,
    pub groups: Option<Vec<GroupSpec>>,
    pub extension: Option<String>,
    pub file_type: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub sources_phase_id: Option<String>,
    /// Skip files the manifest already references.
    pub skip_registered: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdsConfig {
    pub file_ref_prefix: String,
    pub build_file_prefix: String,
    pub width: usize,
    pub start: u64,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            file_ref_prefix: IdScheme::DEFAULT_FILE_REF_PREFIX.to_string(),
            build_file_prefix: IdScheme::DEFAULT_BUILD_FILE_PREFIX.to_string(),
            width: IdScheme::DEFAULT_WIDTH,
            start: IdAllocator::DEFAULT_START,
        }
    }
}

/// Backups section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupsConfig {
    /// Whether to copy the manifest aside before writing it.
    pub enabled: bool,

    /// Suffix for backup files.
    pub suffix: String,
}

impl Default for BackupsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suffix: ".pbxfix.bak".to_string(),
        }
    }
}

/// Discover the pbxfix.toml config file.
///
/// Returns `None` if no config file is found in `project_dir`.
pub fn discover_config(project_dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a pbxfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<PbxfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<PbxfixConfig> {
    let config: PbxfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the project directory, or return default if not found.
pub fn load_or_default(project_dir: &Utf8Path) -> anyhow::Result<PbxfixConfig> {
    match discover_config(project_dir) {
        Some(path) => load_config(&path),
        None => Ok(PbxfixConfig::default()),
    }
}

/// CLI values that take part in the merge.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub project_dir: Utf8PathBuf,
    pub source_dir: Option<Utf8PathBuf>,
    pub manifest: Option<Utf8PathBuf>,
    pub exclude: Vec<String>,
    pub no_backup: bool,
    pub skip_registered: bool,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub source_dir: Utf8PathBuf,
    pub manifest: Utf8PathBuf,
    pub layout: ProjectLayout,
    pub ids: IdAllocator,
    /// `None` when backups are disabled.
    pub backup_suffix: Option<String>,
    pub skip_registered: bool,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: PbxfixConfig,
}

impl ConfigMerger {
    pub fn new(config: PbxfixConfig) -> Self {
        Self { config }
    }

    /// CLI paths override config paths; CLI `exclude` extends the config list;
    /// CLI booleans can only switch behaviour on (`skip_registered`) or
    /// backups off (`no_backup`).
    pub fn merge(self, cli: &CliOverrides) -> anyhow::Result<MergedConfig> {
        let project = &self.config.project;
        let source_dir = cli
            .source_dir
            .clone()
            .or_else(|| project.source_dir.as_ref().map(|p| cli.project_dir.join(p)))
            .unwrap_or_else(|| cli.project_dir.join(&project.name));
        let manifest = cli
            .manifest
            .clone()
            .or_else(|| project.manifest.as_ref().map(|p| cli.project_dir.join(p)))
            .unwrap_or_else(|| {
                cli.project_dir
                    .join(format!("{}.xcodeproj", project.name))
                    .join("project.pbxproj")
            });

        let mut layout = build_layout(&self.config.layout);
        for name in &cli.exclude {
            layout.exclude.insert(name.clone());
        }
        layout.validate().context("invalid [layout] configuration")?;

        let ids = &self.config.ids;
        let scheme = IdScheme::new(
            ids.file_ref_prefix.clone(),
            ids.build_file_prefix.clone(),
            ids.width,
        )
        .context("invalid [ids] configuration")?;

        let backup_suffix = (self.config.backups.enabled && !cli.no_backup)
            .then(|| self.config.backups.suffix.clone());

        Ok(MergedConfig {
            source_dir,
            manifest,
            layout,
            ids: IdAllocator::new(scheme, ids.start),
            backup_suffix,
            skip_registered: cli.skip_registered || self.config.layout.skip_registered,
        })
    }
}

fn build_layout(cfg: &LayoutConfig) -> ProjectLayout {
    let mut layout = ProjectLayout::default();
    if let Some(categories) = &cfg.categories {
        layout.categories = categories.iter().map(|c| Category::new(c.as_str())).collect();
    }
    if let Some(groups) = &cfg.groups {
        layout.groups = groups.clone();
    }
    if let Some(ext) = &cfg.extension {
        layout.extension = ext.clone();
        layout.file_type = format!("sourcecode.{}", layout.bare_extension());
    }
    if let Some(file_type) = &cfg.file_type {
        layout.file_type = file_type.clone();
    }
    if let Some(exclude) = &cfg.exclude {
        layout.exclude = exclude.iter().cloned().collect();
    }
    if let Some(id) = &cfg.sources_phase_id {
        layout.sources_phase_id = id.clone();
    }
    layout
}
