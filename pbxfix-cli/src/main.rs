mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Parser;
use config::{CliOverrides, ConfigMerger};
use fs_err as fs;
use pbxfix_domain::{FsSourceTree, discover, generate, without_registered};
use pbxfix_edit::{ApplyOptions, apply_patch, read_manifest, registered_file_names, sha256_hex};
use pbxfix_render::{render_md, render_text};
use pbxfix_types::report::{PatchReport, ToolInfo};
use std::process::ExitCode;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "pbxfix",
    version,
    about = "Register new Swift sources in an Xcode project manifest without opening Xcode."
)]
struct Cli {
    /// Project directory holding the sources folder and the .xcodeproj (default: current directory).
    #[arg(long, default_value = ".")]
    project_dir: Utf8PathBuf,

    /// Sources directory containing the category folders (default: <project_dir>/Inc).
    #[arg(long)]
    source_dir: Option<Utf8PathBuf>,

    /// Manifest to patch (default: <project_dir>/Inc.xcodeproj/project.pbxproj).
    #[arg(long)]
    manifest: Option<Utf8PathBuf>,

    /// Config file (default: <project_dir>/pbxfix.toml if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Compute the patch and print a diff instead of writing the manifest.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Do not keep a copy of the original manifest.
    #[arg(long, default_value_t = false)]
    no_backup: bool,

    /// Skip files whose names the manifest already references.
    #[arg(long, default_value_t = false)]
    skip_registered: bool,

    /// Additional file names to leave out (repeatable).
    #[arg(long)]
    exclude: Vec<String>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write a markdown summary to this path.
    #[arg(long)]
    summary_md: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(&cli.project_dir).context("load pbxfix.toml config")?,
    };
    let overrides = CliOverrides {
        project_dir: cli.project_dir.clone(),
        source_dir: cli.source_dir.clone(),
        manifest: cli.manifest.clone(),
        exclude: cli.exclude.clone(),
        no_backup: cli.no_backup,
        skip_registered: cli.skip_registered,
    };
    let mut merged = ConfigMerger::new(file_config).merge(&overrides)?;

    debug!(
        "merged config: source_dir={}, manifest={}, exclude={:?}, skip_registered={}, backup={:?}",
        merged.source_dir,
        merged.manifest,
        merged.layout.exclude,
        merged.skip_registered,
        merged.backup_suffix
    );

    let tree = FsSourceTree::new(merged.source_dir.clone());
    let mut files = discover(&tree, &merged.layout)
        .with_context(|| format!("discover sources under {}", merged.source_dir))?;

    let before = read_manifest(&merged.manifest)
        .with_context(|| format!("read manifest {}", merged.manifest))?;

    if merged.skip_registered {
        files = without_registered(files, &registered_file_names(&before));
    }

    if cli.format == OutputFormat::Text {
        println!("Found {} files to add to Xcode project", files.len());
    }

    let fragments =
        generate(&files, &merged.layout, &mut merged.ids).context("allocate identifiers")?;

    let opts = ApplyOptions {
        dry_run: cli.dry_run,
        backup_suffix: merged.backup_suffix.clone(),
    };
    let outcome = apply_patch(&merged.manifest, before, &fragments, &merged.layout, &opts)
        .with_context(|| format!("patch {}", merged.manifest))?;

    for region in outcome.injections.missed() {
        warn!(
            manifest = %merged.manifest,
            "{} section marker not found; its entries were not inserted",
            region
        );
    }

    let mut report = PatchReport::new(tool_info(), merged.manifest.clone(), &fragments);
    report.applied = !cli.dry_run;
    report.before_sha256 = sha256_hex(&outcome.before);
    report.after_sha256 = sha256_hex(&outcome.after);
    report.injections = outcome.injections;
    report.folder_refs_dropped = outcome.folder_refs_dropped as u64;
    report.run.ended_at = Some(Utc::now());

    match cli.format {
        OutputFormat::Text => {
            if cli.dry_run && !outcome.patch.is_empty() {
                print!("{}", outcome.patch);
            }
            print!("{}", render_text(&report));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("serialize report")?
            );
        }
    }

    if let Some(path) = &cli.summary_md {
        write_summary(path, &report)?;
    }

    Ok(())
}

fn write_summary(path: &Utf8Path, report: &PatchReport) -> anyhow::Result<()> {
    fs::write(path, render_md(report)).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "pbxfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
