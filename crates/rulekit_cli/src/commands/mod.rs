//! CLI command definitions.
//!
//! Each subcommand maps to one pipeline: `generate` materializes rule
//! templates, `install` re-emits them for an IDE, `list` reports what is
//! available.

use clap::{Parser, Subcommand};

pub mod generate;
pub mod install;
pub mod list;

/// RuleKit - AI assistant rule scaffolding for web projects
#[derive(Parser)]
#[command(name = "rulekit")]
#[command(version, about = "RuleKit - AI assistant rule scaffolding for web projects")]
#[command(long_about = r#"
RuleKit detects which framework a project uses, materializes a library of
markdown rule templates into a project rules directory, and installs the
result into IDE-specific formats.

WORKFLOWS:
  generate  → Detect the stack and materialize annotated rules
  install   → Re-emit materialized rules for an IDE target
  list      → Show configured stacks, install targets and detections

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments

For more information, visit: https://github.com/rulekit/rulekit
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Materialize rule templates for a project
    Generate(generate::GenerateArgs),

    /// Install materialized rules into an IDE layout
    Install(install::InstallArgs),

    /// List configured stacks and install targets
    List(list::ListArgs),
}
