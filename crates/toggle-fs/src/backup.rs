//! One-generation backup persistence.
//!
//! Every applied toggle copies the previous file content to
//! `<path>.backup`, overwriting any older backup, before the new content
//! is written.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::io;

pub const BACKUP_SUFFIX: &str = ".backup";

/// `<path>.backup`, with the suffix appended to the full file name.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Write `original` to the backup, then `new` to `path`.
///
/// The primary write is only attempted once the backup is on disk, and both
/// writes are atomic, so a failure never leaves `path` partially written.
pub fn save(path: &Path, original: &str, new: &str) -> Result<()> {
    let backup = backup_path(path);
    io::write_text(&backup, original)?;
    tracing::debug!(?backup, "Wrote backup");

    io::write_text(path, new)?;
    tracing::info!(?path, bytes = new.len(), "Saved document");
    Ok(())
}
