//! Rule installation.
//!
//! - `Installer`: list, install, sync, clean-rules and clean-all operations
//! - `copy_numbered`: the shared copy-and-renumber stage
//! - `merge_memory_starters`: copy-if-missing merge of the memory template
//! - `ConfirmPrompt`: injectable confirmation for destructive operations

mod confirm;
mod manager;
mod memory;
mod numbering;
mod report;

pub use confirm::{ConfirmPrompt, FixedAnswer, is_confirmation};
pub use manager::Installer;
pub use memory::{EntryKind, MemoryEntry, MergeAction, merge_memory_starters};
pub use numbering::{NumberedCopy, NumberingPlan, collect_sources, copy_numbered};
pub use report::{CleanReport, InstallReport, RuleSetListing, SyncReport};
