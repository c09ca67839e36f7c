//! Generate command - Materialize rule templates for a project.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use rulekit_config::KitConfig;
use rulekit_core::{materialize, ProjectContext};
use rulekit_detect::StackDetector;

#[derive(Args)]
pub struct GenerateArgs {
    /// Stack to generate rules for (auto-detected when omitted)
    #[arg(short, long)]
    stack: Option<String>,

    /// Path of the target project as it should appear in glob prefixes
    #[arg(short, long, default_value = ".")]
    project_path: String,

    /// Directory holding the rule template library
    #[arg(short, long, default_value = "templates")]
    templates: PathBuf,

    /// Destination directory for materialized rules
    #[arg(short, long, default_value = "rules")]
    rules_dir: PathBuf,

    /// Architecture overlay to include (e.g. atomic, ddd)
    #[arg(short, long)]
    architecture: Option<String>,

    /// State-management overlay to include (e.g. redux, pinia)
    #[arg(long)]
    state_management: Option<String>,

    /// Raw version override, skipping manifest detection
    #[arg(long)]
    version: Option<String>,
}

pub fn execute(args: GenerateArgs, debug: bool) -> Result<()> {
    let config = KitConfig::load_from_dir(&args.templates);
    let detector = StackDetector::new();
    let project = PathBuf::from(&args.project_path);

    let detections = detector.detect(&project);

    let (stack, detected_raw) = match args.stack {
        Some(stack) => {
            let raw = detections
                .iter()
                .find(|d| d.stack == stack)
                .and_then(|d| d.raw_version.clone());
            (stack, raw)
        }
        None => {
            let first = detections
                .first()
                .context("No stack detected in the project manifests; pass one with --stack")?;
            (first.stack.clone(), first.raw_version.clone())
        }
    };
    info!("Generating rules for stack '{}'", stack);

    let raw_version = args.version.or(detected_raw);
    let major = raw_version
        .as_deref()
        .and_then(|raw| detector.extract_major(raw));
    let range = major
        .as_deref()
        .and_then(|major| config.version_range(&stack, major))
        .map(str::to_string);

    let mut ctx = ProjectContext::new(args.project_path.as_str())
        .with_stack(stack.as_str())
        .with_debug(debug);
    if let Some(major) = major {
        ctx = ctx.with_version(major, range);
    }
    if let Some(architecture) = args.architecture {
        ctx = ctx.with_architecture(architecture);
    }
    if let Some(state) = args.state_management {
        ctx = ctx.with_state_management(state);
    }

    let report = materialize(&args.templates, &args.rules_dir, &ctx, &config)
        .context("Failed to materialize rules")?;

    println!("✅ Materialized {} rules for '{}'", report.written.len(), stack);
    if !report.skipped_tiers.is_empty() {
        println!("   ⚠️  Skipped tiers: {}", report.skipped_tiers.join(", "));
    }
    println!();
    println!("Location: {:?}", args.rules_dir.join(&stack));
    println!();
    println!("Next steps:");
    println!("  rulekit install --target cursor");

    Ok(())
}
