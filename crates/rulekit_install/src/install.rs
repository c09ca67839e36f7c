//! Install re-emission: transform materialized rules into an IDE layout.

use std::fs;
use std::path::{Path, PathBuf};

use rulekit_core::frontmatter::RuleDocument;
use tracing::info;

use crate::error::{InstallError, InstallResult};
use crate::target::InstallTarget;
use crate::writer::{write_rule, WriteOutcome};

/// Options for one install run.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Directory holding materialized `.mdc` rules.
    pub source_dir: PathBuf,
    /// Project root receiving the target layout.
    pub project_path: PathBuf,
    /// Copy `<dest>.bak` before overwriting changed files.
    pub backup: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("rules"),
            project_path: PathBuf::from("."),
            backup: true,
        }
    }
}

/// Summary of an install run.
#[derive(Debug, Default)]
pub struct InstallSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Destination paths, in emission order.
    pub files: Vec<PathBuf>,
}

impl InstallSummary {
    fn record(&mut self, dest: PathBuf, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Created => self.created += 1,
            WriteOutcome::Updated => self.updated += 1,
            WriteOutcome::Unchanged => self.unchanged += 1,
        }
        self.files.push(dest);
    }
}

/// Install the materialized rules into `target`'s layout.
///
/// An empty source rule set is an error the caller surfaces to the user.
pub fn install(target: &InstallTarget, options: &InstallOptions) -> InstallResult<InstallSummary> {
    let sources = collect_sources(&options.source_dir)?;
    if sources.is_empty() {
        return Err(InstallError::NoRules(options.source_dir.clone()));
    }
    info!("Installing {} rules for target '{}'", sources.len(), target.name);

    if target.multiple {
        install_per_rule(target, &sources, options)
    } else {
        install_single_file(target, &sources, options)
    }
}

/// All `*.mdc` files under the source directory, sorted lexicographically
/// by file name.
fn collect_sources(source_dir: &Path) -> InstallResult<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.mdc", source_dir.display());
    let mut sources: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .collect();
    sources.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    Ok(sources)
}

/// One destination file per rule; front matter stripped when the target
/// does not keep it.
fn install_per_rule(
    target: &InstallTarget,
    sources: &[PathBuf],
    options: &InstallOptions,
) -> InstallResult<InstallSummary> {
    let dest_dir = options.project_path.join(target.dir);
    let mut summary = InstallSummary::default();

    for source in sources {
        let content = fs::read_to_string(source)?;
        let content = if target.keep_front_matter {
            content
        } else {
            RuleDocument::strip_front_matter(&content)
        };

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let dest = dest_dir.join(format!("{}.{}", stem, target.extension));
        let outcome = write_rule(&dest, &content, options.backup)?;
        summary.record(dest, outcome);
    }

    Ok(summary)
}

/// One concatenated document: a numbered index of titles, then a `##`
/// section per rule with its front matter stripped. Titles come from the
/// front-matter `description`, falling back to the file name stem.
fn install_single_file(
    target: &InstallTarget,
    sources: &[PathBuf],
    options: &InstallOptions,
) -> InstallResult<InstallSummary> {
    let Some(file) = target.file else {
        return Err(InstallError::MissingDestination(target.name.to_string()));
    };

    let mut titles = Vec::new();
    let mut sections = Vec::new();

    for source in sources {
        let content = fs::read_to_string(source)?;
        let document = RuleDocument::parse(&content);

        let title = document
            .front_matter
            .text("description")
            .map(str::to_string)
            .unwrap_or_else(|| {
                source
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string()
            });

        sections.push(format!("## {}\n\n{}", title, document.body.trim_end()));
        titles.push(title);
    }

    let index = titles
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{}. {}", i + 1, title))
        .collect::<Vec<_>>()
        .join("\n");
    let combined = format!("{}\n\n{}\n", index, sections.join("\n\n"));

    let dest = options.project_path.join(file);
    let mut summary = InstallSummary::default();
    let outcome = write_rule(&dest, &combined, options.backup)?;
    summary.record(dest, outcome);

    Ok(summary)
}
