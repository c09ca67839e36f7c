//! Install command - Re-emit materialized rules for an IDE target.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use rulekit_install::{install, InstallOptions, InstallTarget};

#[derive(Args)]
pub struct InstallArgs {
    /// Destination profile (cursor, vscode)
    #[arg(short, long, alias = "ide")]
    target: String,

    /// Source rules directory
    #[arg(long, default_value = "rules")]
    src: PathBuf,

    /// Project root receiving the IDE layout
    #[arg(short, long, default_value = ".")]
    project_path: PathBuf,

    /// Skip the .bak copy before overwriting changed files
    #[arg(long)]
    no_backup: bool,
}

pub fn execute(args: InstallArgs) -> Result<()> {
    let target = InstallTarget::find(&args.target).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown install target '{}' (expected one of: {})",
            args.target,
            InstallTarget::names().join(", ")
        )
    })?;

    let options = InstallOptions {
        source_dir: args.src,
        project_path: args.project_path,
        backup: !args.no_backup,
    };

    info!("Installing rules for target '{}'", target.name);
    let summary = install(target, &options)?;

    println!(
        "✅ Installed {} files for '{}' ({} created, {} updated, {} unchanged)",
        summary.files.len(),
        target.name,
        summary.created,
        summary.updated,
        summary.unchanged
    );

    Ok(())
}
