//! Rule emission: read a template, resolve front matter, substitute
//! placeholders, write the materialized rule.

use std::fs;
use std::path::{Path, PathBuf};

use rulekit_config::KitConfig;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::context::ProjectContext;
use crate::error::{CoreError, CoreResult};
use crate::frontmatter::{FrontMatter, RuleDocument};
use crate::resolver::resolve_front_matter;
use crate::substitute::substitute;
use crate::tiers::{plan_tiers, TEMPLATE_EXT};

/// Emits materialized rules from templates.
pub struct RuleEmitter<'a> {
    config: &'a KitConfig,
}

impl<'a> RuleEmitter<'a> {
    pub fn new(config: &'a KitConfig) -> Self {
        Self { config }
    }

    /// Materialize one template into `dest`.
    ///
    /// The template's own front matter (if any) stays underneath the
    /// resolved map: resolved keys override in place, new keys append.
    /// Writes are direct overwrites with no temp-file staging;
    /// destination directories are created on demand. A missing source
    /// file is fatal for that file.
    pub fn emit(&self, source: &Path, dest: &Path, supplied: &FrontMatter) -> CoreResult<()> {
        if !source.exists() {
            return Err(CoreError::TemplateNotFound(source.to_path_buf()));
        }
        let content = fs::read_to_string(source)?;

        let document = RuleDocument::parse(&content);
        let resolved = resolve_front_matter(source, supplied, self.config);

        let mut front = document.front_matter;
        front.merge(&resolved);

        let body = substitute(&document.body, &front);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, front.serialize(&body))?;

        debug!("Materialized {:?} -> {:?}", source, dest);
        Ok(())
    }
}

/// Summary of one materialization run.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Destination paths written, in emission order.
    pub written: Vec<PathBuf>,
    /// Tiers skipped because their template directory is absent.
    pub skipped_tiers: Vec<String>,
}

/// Materialize every planned tier for `ctx` into `rules_dir/<stack>/`.
///
/// A tier whose template directory is absent is skipped with a warning;
/// the run still succeeds for the remaining tiers.
pub fn materialize(
    templates_root: &Path,
    rules_dir: &Path,
    ctx: &ProjectContext,
    config: &KitConfig,
) -> CoreResult<MaterializeReport> {
    let emitter = RuleEmitter::new(config);
    let supplied = ctx.to_front_matter();
    let dest_dir = match ctx.stack.as_deref() {
        Some(stack) => rules_dir.join(stack),
        None => rules_dir.to_path_buf(),
    };

    let mut report = MaterializeReport::default();
    for tier in plan_tiers(templates_root, ctx) {
        if !tier.dir.is_dir() {
            warn!("Skipping tier '{}': no directory at {:?}", tier.name, tier.dir);
            report.skipped_tiers.push(tier.name.clone());
            continue;
        }

        let mut sources: Vec<PathBuf> = WalkDir::new(&tier.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXT))
            .collect();
        sources.sort();

        let mut meta = supplied.clone();
        meta.merge(&tier.extra);

        for source in &sources {
            let dest = dest_dir.join(tier.dest_file_name(source));
            emitter.emit(source, &dest, &meta)?;
            report.written.push(dest);
        }
        info!("Tier '{}': {} rules", tier.name, sources.len());
    }

    Ok(report)
}
