//! Non-destructive merge of the memory starter template.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::copy_dir_recursive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeAction {
    Copied,
    /// Destination already had an entry with this name.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryEntry {
    pub name: String,
    pub kind: EntryKind,
    pub action: MergeAction,
}

/// Copy each top-level entry of `source` into `dest` unless `dest` already
/// has it. Directories are copied whole; existing ones are not merged into.
///
/// Returns `None` when the starter template itself is missing.
pub fn merge_memory_starters(source: &Path, dest: &Path) -> Result<Option<Vec<MemoryEntry>>> {
    if !source.is_dir() {
        warn!(path = %source.display(), "Memory starter directory not found, skipping");
        return Ok(None);
    }

    fs::create_dir_all(dest)?;

    let mut items: Vec<_> = fs::read_dir(source)?.collect::<std::io::Result<_>>()?;
    items.sort_by_key(|e| e.file_name());

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let name = item.file_name();
        let src_path = item.path();
        let dest_path = dest.join(&name);
        let kind = if src_path.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let action = if dest_path.exists() {
            debug!(path = %dest_path.display(), "Memory entry exists, leaving untouched");
            MergeAction::Skipped
        } else {
            match kind {
                EntryKind::Directory => copy_dir_recursive(&src_path, &dest_path)?,
                EntryKind::File => {
                    fs::copy(&src_path, &dest_path)?;
                }
            }
            debug!(path = %dest_path.display(), "Copied memory entry");
            MergeAction::Copied
        };

        entries.push(MemoryEntry {
            name: name.to_string_lossy().into_owned(),
            kind,
            action,
        });
    }

    Ok(Some(entries))
}
