use crate::error::{Result, StoreError};
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copies the book file at `source` to `path`.
///
/// Refuses targets that resolve to `source` itself, including hard links.
pub fn backup_to(source: &Path, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let target = canonicalize_path(path)?;
    let source_target = canonicalize_path(source)?;
    if source_target == target || is_same_file_identity(&target, &source_target)? {
        return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
    }
    fs::copy(&source_target, &target)?;
    paths::restrict_file_permissions(&target)?;
    debug!(from = %source_target.display(), to = %target.display(), "backed up address book");
    Ok(())
}

fn canonicalize_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let parent = fs::canonicalize(parent)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    Ok(parent.join(file_name))
}

#[cfg(unix)]
fn is_same_file_identity(target: &Path, source: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() || !source.exists() {
        return Ok(false);
    }
    let target_meta = fs::metadata(target)?;
    let source_meta = fs::metadata(source)?;
    Ok(target_meta.dev() == source_meta.dev() && target_meta.ino() == source_meta.ino())
}

#[cfg(not(unix))]
fn is_same_file_identity(_target: &Path, _source: &Path) -> Result<bool> {
    Ok(false)
}
