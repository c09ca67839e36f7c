//! # rulekit_config
//!
//! Layered kit configuration for RuleKit.
//!
//! The configuration document (`kit-config.json`) declares, per supported
//! stack, default glob patterns, per-file pattern overrides, architecture
//! overrides and version-range buckets, plus a `global` section with the
//! always-apply file list.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rulekit_config::KitConfig;
//!
//! let config = KitConfig::load_from_dir("templates");
//! if let Some(range) = config.version_range("laravel", "10") {
//!     println!("version overlay: {}", range);
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{
    GlobalConfig, KitConfig, RuleRefs, ScopedRules, StackRules, VersionRange, CONFIG_FILE,
    ROOT_PLACEHOLDER,
};
pub use error::{ConfigError, ConfigResult};
