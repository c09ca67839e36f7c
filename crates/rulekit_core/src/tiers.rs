//! Tier planning and destination naming.
//!
//! One parameterized tier table drives every stack: each tier contributes
//! a source directory under the templates root, a destination file-name
//! prefix, and extra pass-through metadata for its emissions.

use std::path::{Path, PathBuf};

use crate::context::ProjectContext;
use crate::frontmatter::{FrontMatter, Value};

/// Extension of template rule files.
pub const TEMPLATE_EXT: &str = "md";

/// Extension of materialized rule files.
pub const TARGET_EXT: &str = "mdc";

/// One template tier scheduled for materialization.
#[derive(Debug, Clone)]
pub struct Tier {
    /// Display name used in logs and skip reports.
    pub name: String,
    /// Source directory under the templates root.
    pub dir: PathBuf,
    /// Prefix applied to destination file names, keeping the flat
    /// per-stack destination folder collision-free.
    pub prefix: String,
    /// Extra metadata merged into the supplied front matter.
    pub extra: FrontMatter,
}

impl Tier {
    fn new(name: impl Into<String>, dir: PathBuf) -> Self {
        Self {
            name: name.into(),
            dir,
            prefix: String::new(),
            extra: FrontMatter::new(),
        }
    }

    fn prefixed(mut self, prefix: String) -> Self {
        self.prefix = prefix;
        self
    }

    fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.set(key, value);
        self
    }

    /// Destination file name for a source template in this tier.
    ///
    /// `foo.md` under `base` becomes `foo.mdc`; prefixed tiers produce
    /// e.g. `architecture-atomic-foo.mdc` or `testing-foo.mdc`.
    pub fn dest_file_name(&self, source: &Path) -> String {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        format!("{}{}.{}", self.prefix, stem, TARGET_EXT)
    }
}

/// Plan the tiers for one materialization run, in application order.
///
/// Absent directories are not filtered here; the caller skips them with
/// a warning so the report can name what was missing.
pub fn plan_tiers(templates_root: &Path, ctx: &ProjectContext) -> Vec<Tier> {
    let mut tiers = vec![Tier::new("global", templates_root.join("global"))];

    let Some(stack) = ctx.stack.as_deref() else {
        return tiers;
    };
    let stack_root = templates_root.join("stacks").join(stack);

    tiers.push(Tier::new("base", stack_root.join("base")));

    if let (Some(range), Some(version)) = (
        ctx.version_range.as_deref(),
        ctx.detected_version.as_deref(),
    ) {
        tiers.push(
            Tier::new(format!("version {}", range), stack_root.join(range))
                .prefixed(format!("version-{}-", version)),
        );
    }

    if let Some(arch) = ctx.architecture.as_deref() {
        tiers.push(
            Tier::new(
                format!("architecture {}", arch),
                stack_root.join("architectures").join(arch),
            )
            .prefixed(format!("architecture-{}-", arch)),
        );
    }

    tiers.push(
        Tier::new("testing", stack_root.join("testing"))
            .prefixed("testing-".to_string())
            .with_extra("testing", true),
    );

    if let Some(state) = ctx.state_management.as_deref() {
        tiers.push(
            Tier::new(
                format!("state management {}", state),
                stack_root.join("state-management").join(state),
            )
            .prefixed(format!("state-{}-", state))
            .with_extra("stateManagement", state),
        );
    }

    tiers
}
