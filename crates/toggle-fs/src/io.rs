//! Atomic I/O operations with file locking

use fs2::FileExt;
use std::fs::{self, OpenOptions, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Temp file next to `path`, so the final rename stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so the target either keeps its old
/// content or holds the new content in full. The temp file is removed if
/// any step fails. An existing target keeps its permissions, and a symlink
/// is written through to the file it points at.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());
    let temp = temp_path(&target);
    let result = write_temp(&temp, &target, content, permissions)
        .and_then(|()| fs::rename(&temp, &target).map_err(|e| Error::io(&target, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

/// The file a write to `path` should replace.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            let target = fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
            tracing::debug!(link = %path.display(), target = %target.display(), "Writing through symlink");
            Ok(target)
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn write_temp(
    temp: &Path,
    target: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)
        .map_err(|e| Error::io(temp, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    file.write_all(content).map_err(|e| Error::io(temp, e))?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)
            .map_err(|e| Error::io(temp, e))?;
    }
    file.sync_all().map_err(|e| Error::io(temp, e))?;

    file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
