//! # rulekit_detect
//!
//! Stack and version detection from project manifests.
//!
//! Detection inspects `package.json` and `composer.json` dependency
//! tables against an ordered probe table. Version extraction is a lossy
//! first-integer match: `^10.2.0` yields `10`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use rulekit_detect::StackDetector;
//!
//! let detector = StackDetector::new();
//! for detection in detector.detect(Path::new(".")) {
//!     println!("{}", detection.stack);
//! }
//! ```

pub mod detector;
pub mod manifest;

pub use detector::{Detection, ManifestKind, StackDetector, StackProbe, PROBES};
pub use manifest::{ComposerManifest, NodeManifest};
