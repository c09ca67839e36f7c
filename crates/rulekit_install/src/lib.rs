//! # rulekit_install
//!
//! Re-emits materialized rules into IDE-specific destinations.
//!
//! Two destination shapes exist: one file per rule with front matter
//! preserved (cursor-like), and one concatenated document with front
//! matter stripped and a titled section per rule (copilot-like). Writes
//! are idempotent: byte-identical destinations are never touched, and
//! changed destinations are backed up to `<path>.bak` first unless
//! backups are disabled.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rulekit_install::{install, InstallOptions, InstallTarget};
//!
//! let target = InstallTarget::find("cursor").unwrap();
//! let summary = install(target, &InstallOptions::default()).unwrap();
//! println!("{} files", summary.files.len());
//! ```

pub mod error;
pub mod install;
pub mod target;
pub mod writer;

pub use error::{InstallError, InstallResult};
pub use install::{install, InstallOptions, InstallSummary};
pub use target::{InstallTarget, TARGETS};
pub use writer::{write_rule, WriteOutcome};
