//! Shared utility functions.
//!
//! - Directory primitives (reset, remove-if-present, recursive copy)
//! - Target path sanitizing and lexical normalization

mod file_ops;
mod path;

pub use file_ops::{copy_dir_recursive, remove_dir_if_exists, reset_dir};
pub use path::{absolutize, normalize_lexically, sanitize_target_path};
