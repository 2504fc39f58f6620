//! Results of installer operations, rendered by the CLI as text or JSON.

use std::path::PathBuf;

use serde::Serialize;

use super::memory::MemoryEntry;
use super::numbering::NumberedCopy;

#[derive(Debug, Clone, Serialize)]
pub struct RuleSetListing {
    pub root: PathBuf,
    pub rule_sets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub target: PathBuf,
    pub rule_set: String,
    /// An earlier project rules directory was deleted first.
    pub replaced_project_rules: bool,
    pub project_rules_dir: PathBuf,
    pub project_rules: Vec<NumberedCopy>,
    pub memory_dir: PathBuf,
    /// `None` when there was no memory starter template to merge.
    pub memory: Option<Vec<MemoryEntry>>,
    pub generated_rules_dir: PathBuf,
    pub generated_rules: Vec<NumberedCopy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub source_dir: PathBuf,
    pub generated_rules_dir: PathBuf,
    pub generated_rules: Vec<NumberedCopy>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    pub target: PathBuf,
    /// Configured names of the directories that were deleted.
    pub removed: Vec<String>,
    /// Kept on purpose (the memory directory for `clean-rules`).
    pub preserved: Option<String>,
    pub cancelled: bool,
}

impl CleanReport {
    pub fn nothing_removed(&self) -> bool {
        self.removed.is_empty()
    }
}
