//! Command-line interface definitions.
//!
//! - `Cli`, `Commands`: argument definitions via clap
//! - `Display`: styled terminal output
//! - `InteractivePrompt`: stdin-backed confirmation for `clean-all`

mod commands;
mod display;
mod interactive;

pub use commands::{Cli, Commands, ConfigAction, OutputFormat};
pub use display::Display;
pub use interactive::InteractivePrompt;
