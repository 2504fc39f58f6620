pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod output;
pub mod utils;

pub use config::{InstallerConfig, TargetPaths};
pub use error::{Result, RulesError};
pub use installer::{ConfirmPrompt, FixedAnswer, Installer};
