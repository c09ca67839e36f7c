//! List command - Show configured stacks, install targets and detections.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use rulekit_config::KitConfig;
use rulekit_detect::StackDetector;
use rulekit_install::TARGETS;

#[derive(Args)]
pub struct ListArgs {
    /// Directory holding the rule template library
    #[arg(short, long, default_value = "templates")]
    templates: PathBuf,

    /// Project to probe for frameworks
    #[arg(short, long, default_value = ".")]
    project_path: PathBuf,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let config = KitConfig::load_from_dir(&args.templates);

    println!("📦 Configured stacks:");
    let names: Vec<&str> = config.stack_names().collect();
    if names.is_empty() {
        println!("   (none - no kit-config.json found)");
    }
    for name in names {
        println!("   - {}", name);
    }

    println!();
    println!("🎯 Install targets:");
    for target in TARGETS {
        let shape = if target.multiple {
            "one file per rule"
        } else {
            "single document"
        };
        println!("   - {} ({})", target.name, shape);
    }

    println!();
    println!("🔍 Detected in {:?}:", args.project_path);
    let detections = StackDetector::new().detect(&args.project_path);
    if detections.is_empty() {
        println!("   (no known framework found)");
    }
    for detection in detections {
        match &detection.raw_version {
            Some(version) => println!("   - {} ({})", detection.stack, version),
            None => println!("   - {}", detection.stack),
        }
    }

    Ok(())
}
