use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Remove `dir` if it exists, then create it with its parents.
///
/// Running it twice leaves the same empty directory behind.
pub fn reset_dir(dir: &Path) -> Result<()> {
    remove_dir_if_exists(dir)?;
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Remove a directory tree. Returns whether anything was removed.
pub fn remove_dir_if_exists(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    debug!(path = %dir.display(), "Removing directory");
    fs::remove_dir_all(dir)?;
    Ok(true)
}

/// Copy `src` into `dest`, creating `dest` and any subdirectories.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
        }
    }

    Ok(())
}
