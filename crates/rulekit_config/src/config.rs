//! Kit configuration model and loading.
//!
//! Top-level keys of `kit-config.json` are stack names plus a `global`
//! section. Key order is preserved everywhere it is observable: the
//! override order of `pattern_rules` entries is the object's own-key
//! order.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigResult;

/// Placeholder inside configured glob patterns that expands to the
/// project-relative path prefix.
pub const ROOT_PLACEHOLDER: &str = "<root>/";

/// File name of the kit configuration document.
pub const CONFIG_FILE: &str = "kit-config.json";

/// One or many rule-file path fragments referenced by a pattern rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RuleRefs {
    One(String),
    Many(Vec<String>),
}

impl RuleRefs {
    /// The referenced rule paths.
    pub fn paths(&self) -> &[String] {
        match self {
            RuleRefs::One(path) => std::slice::from_ref(path),
            RuleRefs::Many(paths) => paths,
        }
    }
}

/// A named version-range bucket.
///
/// Newer documents store an object carrying `range_name`; older ones
/// store the range identifier as a bare string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VersionRange {
    Detailed {
        range_name: String,
        #[serde(default)]
        name: Option<String>,
    },
    Plain(String),
}

impl VersionRange {
    /// The identifier that selects the overlay template directory.
    pub fn range_name(&self) -> &str {
        match self {
            VersionRange::Detailed { range_name, .. } => range_name,
            VersionRange::Plain(name) => name,
        }
    }

    /// Human-readable display name, when declared.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            VersionRange::Detailed { name, .. } => name.as_deref(),
            VersionRange::Plain(_) => None,
        }
    }
}

/// Globs and pattern rules scoped to one architecture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopedRules {
    #[serde(default)]
    pub globs: Option<Vec<String>>,
    #[serde(default)]
    pub pattern_rules: Option<IndexMap<String, RuleRefs>>,
}

/// Per-stack configuration entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackRules {
    /// Stack-level default glob patterns (may contain `<root>/`).
    #[serde(default)]
    pub globs: Option<Vec<String>>,
    /// Glob pattern → rule files that should carry exactly that pattern.
    #[serde(default)]
    pub pattern_rules: Option<IndexMap<String, RuleRefs>>,
    /// Architecture name → scoped overrides.
    #[serde(default)]
    pub architectures: Option<IndexMap<String, ScopedRules>>,
    /// Major version → named range bucket.
    #[serde(default)]
    pub version_ranges: Option<IndexMap<String, VersionRange>>,
}

/// The `global` configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// File names that receive `alwaysApply: true` wherever they occur.
    #[serde(default)]
    pub always: Vec<String>,
}

/// The loaded kit configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    /// Stack name → configuration, in document order.
    #[serde(flatten)]
    pub stacks: IndexMap<String, StackRules>,
}

impl KitConfig {
    /// Parse a configuration document.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the configuration from a file.
    ///
    /// Re-reads from disk on every call; there is no cache. A missing or
    /// unparseable file degrades to the empty default so that processing
    /// continues with base-tier behavior only.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("No kit configuration at {:?}: {}", path, e);
                return Self::default();
            }
        };

        match Self::parse(&content) {
            Ok(config) => {
                debug!("Loaded kit configuration from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Invalid kit configuration at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load from the conventional location inside a templates directory.
    pub fn load_from_dir(templates_dir: impl AsRef<Path>) -> Self {
        Self::load(templates_dir.as_ref().join(CONFIG_FILE))
    }

    /// Configuration entry for a stack.
    pub fn stack(&self, name: &str) -> Option<&StackRules> {
        self.stacks.get(name)
    }

    /// Whether a file name is on the global always-apply list.
    pub fn always_applies(&self, file_name: &str) -> bool {
        self.global.always.iter().any(|f| f == file_name)
    }

    /// Map a detected major version to its named range bucket.
    ///
    /// Exact string-key lookup only; no interpolation or nearest-match.
    pub fn version_range(&self, stack: &str, major: &str) -> Option<&str> {
        self.stack(stack)?
            .version_ranges
            .as_ref()?
            .get(major)
            .map(VersionRange::range_name)
    }

    /// Stack names declared in the document, in document order.
    pub fn stack_names(&self) -> impl Iterator<Item = &str> {
        self.stacks.keys().map(String::as_str)
    }
}
