//! Idempotent destination writes with optional backups.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::InstallResult;

/// What a write attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Destination did not exist.
    Created,
    /// Destination existed with different content and was overwritten.
    Updated,
    /// Destination already held byte-identical content; nothing touched.
    Unchanged,
}

/// Write `content` to `dest` unless it is already byte-identical.
///
/// When overwriting and `backup` is set, the previous content is copied
/// to `<dest>.bak` first. Destination directories are created on demand.
pub fn write_rule(dest: &Path, content: &str, backup: bool) -> InstallResult<WriteOutcome> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::read(dest) {
        Ok(existing) if existing == content.as_bytes() => {
            debug!("Unchanged: {:?}", dest);
            Ok(WriteOutcome::Unchanged)
        }
        Ok(_) => {
            if backup {
                let bak = backup_path(dest);
                fs::copy(dest, &bak)?;
                debug!("Backed up {:?} -> {:?}", dest, bak);
            }
            fs::write(dest, content)?;
            Ok(WriteOutcome::Updated)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(dest, content)?;
            Ok(WriteOutcome::Created)
        }
        Err(e) => Err(e.into()),
    }
}

/// `<path>.bak`, appended to the full file name.
fn backup_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    dest.with_file_name(format!("{}.bak", name))
}
