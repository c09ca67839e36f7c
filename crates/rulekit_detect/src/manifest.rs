//! Project manifest reading.
//!
//! Only the dependency tables are decoded; everything else in a manifest
//! is irrelevant to stack detection.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

/// Dependency tables of a `package.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeManifest {
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl NodeManifest {
    pub const FILE: &'static str = "package.json";

    /// Version string for a package, checking runtime then dev dependencies.
    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.dependencies
            .get(package)
            .or_else(|| self.dev_dependencies.get(package))
            .map(String::as_str)
    }
}

/// Dependency tables of a `composer.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerManifest {
    #[serde(default)]
    pub require: IndexMap<String, String>,
    #[serde(default, rename = "require-dev")]
    pub require_dev: IndexMap<String, String>,
}

impl ComposerManifest {
    pub const FILE: &'static str = "composer.json";

    /// Version string for a package, checking runtime then dev requirements.
    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.require
            .get(package)
            .or_else(|| self.require_dev.get(package))
            .map(String::as_str)
    }
}

/// Read and decode a manifest file.
///
/// A missing or malformed manifest is not an error: detection simply has
/// nothing to probe in it.
pub(crate) fn read_manifest<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No manifest at {:?}", path);
            return None;
        }
        Err(e) => {
            warn!("Unreadable manifest {:?}: {}", path, e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            warn!("Malformed manifest {:?}: {}", path, e);
            None
        }
    }
}
