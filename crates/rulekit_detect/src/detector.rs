//! Stack probing and major-version extraction.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::manifest::{read_manifest, ComposerManifest, NodeManifest};

/// Which manifest a probe inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Node,
    Composer,
}

/// A single stack probe: the presence of `package` in the probed manifest
/// names the stack.
#[derive(Debug, Clone, Copy)]
pub struct StackProbe {
    pub stack: &'static str,
    pub manifest: ManifestKind,
    pub package: &'static str,
}

/// Ordered probe table. Meta-frameworks come before the libraries they
/// bundle so that e.g. a Next.js project is not reported as plain React.
pub const PROBES: &[StackProbe] = &[
    StackProbe {
        stack: "laravel",
        manifest: ManifestKind::Composer,
        package: "laravel/framework",
    },
    StackProbe {
        stack: "nextjs",
        manifest: ManifestKind::Node,
        package: "next",
    },
    StackProbe {
        stack: "nuxt",
        manifest: ManifestKind::Node,
        package: "nuxt",
    },
    StackProbe {
        stack: "angular",
        manifest: ManifestKind::Node,
        package: "@angular/core",
    },
    StackProbe {
        stack: "sveltekit",
        manifest: ManifestKind::Node,
        package: "@sveltejs/kit",
    },
    StackProbe {
        stack: "svelte",
        manifest: ManifestKind::Node,
        package: "svelte",
    },
    StackProbe {
        stack: "astro",
        manifest: ManifestKind::Node,
        package: "astro",
    },
    StackProbe {
        stack: "vue",
        manifest: ManifestKind::Node,
        package: "vue",
    },
    StackProbe {
        stack: "react",
        manifest: ManifestKind::Node,
        package: "react",
    },
];

/// A stack found in a project, with the raw dependency version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub stack: String,
    pub raw_version: Option<String>,
}

/// Detects stacks and versions by inspecting project manifests.
pub struct StackDetector {
    version_pattern: Regex,
}

impl Default for StackDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl StackDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self {
            // First contiguous run of digits in a dependency version string
            version_pattern: Regex::new(r"\d+").unwrap(),
        }
    }

    /// Probe the project's manifests for known stacks, in table order.
    pub fn detect(&self, project_path: &Path) -> Vec<Detection> {
        let node: Option<NodeManifest> = read_manifest(&project_path.join(NodeManifest::FILE));
        let composer: Option<ComposerManifest> =
            read_manifest(&project_path.join(ComposerManifest::FILE));

        let mut detections = Vec::new();
        for probe in PROBES {
            let raw = match probe.manifest {
                ManifestKind::Node => node.as_ref().and_then(|m| m.dependency(probe.package)),
                ManifestKind::Composer => {
                    composer.as_ref().and_then(|m| m.dependency(probe.package))
                }
            };

            if let Some(raw) = raw {
                debug!("Detected stack '{}' via {}", probe.stack, probe.package);
                detections.push(Detection {
                    stack: probe.stack.to_string(),
                    raw_version: Some(raw.to_string()),
                });
            }
        }

        detections
    }

    /// Extract the major version as the first contiguous digit run.
    ///
    /// Lossy by design: range operators, pre-release tags and later
    /// version components are ignored. A string with no digits yields
    /// nothing, and the pipeline proceeds base-tier only.
    pub fn extract_major(&self, raw: &str) -> Option<String> {
        self.version_pattern
            .find(raw)
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_major() {
        let detector = StackDetector::new();

        assert_eq!(detector.extract_major("^10.4.2"), Some("10".to_string()));
        assert_eq!(detector.extract_major("~2"), Some("2".to_string()));
        assert_eq!(detector.extract_major("18.2.0-canary.3"), Some("18".to_string()));
        assert_eq!(detector.extract_major("next"), None);
        assert_eq!(detector.extract_major(""), None);
    }

    #[test]
    fn test_detect_meta_framework_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{ "dependencies": { "next": "^14.1.0", "react": "^18.2.0" } }"#,
        )
        .unwrap();

        let detections = StackDetector::new().detect(dir.path());
        let stacks: Vec<&str> = detections.iter().map(|d| d.stack.as_str()).collect();

        assert_eq!(stacks, vec!["nextjs", "react"]);
        assert_eq!(detections[0].raw_version.as_deref(), Some("^14.1.0"));
    }

    #[test]
    fn test_detect_laravel_from_composer() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("composer.json"),
            r#"{ "require": { "laravel/framework": "^10.0" } }"#,
        )
        .unwrap();

        let detections = StackDetector::new().detect(dir.path());
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].stack, "laravel");
        assert_eq!(detections[0].raw_version.as_deref(), Some("^10.0"));
    }

    #[test]
    fn test_detect_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let detections = StackDetector::new().detect(dir.path());
        assert!(detections.is_empty());
    }

    #[test]
    fn test_detect_dev_dependency() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{ "devDependencies": { "astro": "^4.0.0" } }"#,
        )
        .unwrap();

        let detections = StackDetector::new().detect(dir.path());
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].stack, "astro");
    }
}
