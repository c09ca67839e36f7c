//! Per-run project context threaded through the pipeline.

use crate::frontmatter::FrontMatter;
use crate::substitute::normalize_project_path;

/// Metadata for one materialization run.
///
/// `debug` only controls logging verbosity; it is stripped before any
/// front matter is emitted and never lives in ambient state.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    /// Project path as given; normalized on read.
    pub project_path: String,
    pub stack: Option<String>,
    pub detected_version: Option<String>,
    pub version_range: Option<String>,
    pub architecture: Option<String>,
    pub state_management: Option<String>,
    pub debug: bool,
}

impl ProjectContext {
    /// Create a context for a project path.
    pub fn new(project_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            ..Default::default()
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Record the detected major version and its resolved range bucket.
    pub fn with_version(mut self, detected: impl Into<String>, range: Option<String>) -> Self {
        self.detected_version = Some(detected.into());
        self.version_range = range;
        self
    }

    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    pub fn with_state_management(mut self, state_management: impl Into<String>) -> Self {
        self.state_management = Some(state_management.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Normalized project path (`""` and `"."` become `"./"`).
    pub fn normalized_path(&self) -> String {
        normalize_project_path(Some(self.project_path.as_str()))
    }

    /// The supplied front matter for this run's emissions.
    pub fn to_front_matter(&self) -> FrontMatter {
        let mut front = FrontMatter::new();
        if let Some(stack) = &self.stack {
            front.set("stack", stack.as_str());
        }
        front.set("projectPath", self.normalized_path());
        if let Some(version) = &self.detected_version {
            front.set("detectedVersion", version.as_str());
        }
        if let Some(range) = &self.version_range {
            front.set("versionRange", range.as_str());
        }
        if let Some(architecture) = &self.architecture {
            front.set("architecture", architecture.as_str());
        }
        if let Some(state) = &self.state_management {
            front.set("stateManagement", state.as_str());
        }
        front
    }
}
