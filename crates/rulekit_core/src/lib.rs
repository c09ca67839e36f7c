//! # rulekit_core
//!
//! The rule-materialization pipeline.
//!
//! A materialization run takes markdown rule templates from a tiered
//! template hierarchy, computes each file's front matter from the layered
//! kit configuration, substitutes placeholder tokens in the body, and
//! writes annotated `.mdc` files into a flat per-stack rules folder.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use rulekit_config::KitConfig;
//! use rulekit_core::{materialize, ProjectContext};
//!
//! let config = KitConfig::load_from_dir("templates");
//! let ctx = ProjectContext::new("apps/web")
//!     .with_stack("react")
//!     .with_version("18", Some("v18".to_string()));
//!
//! let report = materialize(Path::new("templates"), Path::new("rules"), &ctx, &config).unwrap();
//! println!("{} rules written", report.written.len());
//! ```

pub mod context;
pub mod emitter;
pub mod error;
pub mod frontmatter;
pub mod resolver;
pub mod substitute;
pub mod tiers;

pub use context::ProjectContext;
pub use emitter::{materialize, MaterializeReport, RuleEmitter};
pub use error::{CoreError, CoreResult};
pub use frontmatter::{FrontMatter, RuleDocument, Value};
pub use resolver::resolve_front_matter;
pub use substitute::{normalize_project_path, substitute};
pub use tiers::{plan_tiers, Tier};
