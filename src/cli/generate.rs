//! Generate command implementation.
//!
//! Renders the full icon set into an output directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::GeneratorConfig;
use crate::error::{IconError, Result};
use crate::export::{export_each, plan, write_manifest, BatchReport};
use crate::output::{display_path, plural, Printer};

/// Render every icon into the output directory
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Output directory (created if missing)
    #[arg(long, short, default_value = "icons")]
    pub output: PathBuf,

    /// Config file (default: ./icons.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Also write manifest-icons.json for the web app manifest
    #[arg(long)]
    pub manifest: bool,

    /// URL prefix for icon paths in manifest-icons.json
    #[arg(long, default_value = "/icons/")]
    pub base_url: String,

    /// Suppress progress output (per-file results are still printed)
    #[arg(long, short)]
    pub quiet: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("icons"),
            config: None,
            manifest: false,
            base_url: "/icons/".to_string(),
            quiet: false,
        }
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let report = generate(&args, printer)?;

    let failed = report.failed().count();
    if failed > 0 {
        return Err(IconError::Batch {
            failed,
            total: report.len(),
        });
    }

    Ok(())
}

/// Run the batch and print its results, returning the report.
///
/// Only setup problems (bad config, uncreatable output directory) are
/// errors here; per-file failures live in the report.
pub fn generate(args: &GenerateArgs, printer: &Printer) -> Result<BatchReport> {
    let cwd = std::env::current_dir().map_err(|e| IconError::Io {
        path: PathBuf::from("."),
        message: format!("Failed to read working directory: {}", e),
    })?;
    let (config, source) = GeneratorConfig::discover(args.config.as_deref(), &cwd)?;
    if let Some(path) = &source {
        printer.info("Config", &display_path(path));
    }

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| IconError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let total = plan(&config).len();
    printer.status(
        "Rendering",
        &format!("{} to {}", plural(total, "icon", "icons"), display_path(&args.output)),
    );

    let report = export_each(&args.output, &config, |status| {
        if let Some(e) = &status.error {
            printer.error("Failed", &format!("{}: {}", status.job.file_name, e));
        } else {
            printer.status(
                "Wrote",
                &format!("{} ({1}x{1})", status.job.file_name, status.job.size),
            );
        }
        printer.file_result(status);
    });

    if args.manifest {
        let path = write_manifest(&report, &args.output, &args.base_url)?;
        printer.status("Wrote", &display_path(&path));
    }

    let failed = report.failed().count();
    if failed == 0 {
        printer.status("Finished", &plural(report.len(), "icon", "icons"));
    } else {
        printer.error(
            "Finished",
            &format!("{} written, {} failed", report.len() - failed, failed),
        );
    }

    Ok(report)
}
