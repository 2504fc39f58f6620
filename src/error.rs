use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Rules root not found: {}", .0.display())]
    RulesRootMissing(PathBuf),

    #[error("No rule sets found in {}", .0.display())]
    NoRuleSets(PathBuf),

    #[error("Rule set '{name}' not found in {}", .root.display())]
    RuleSetNotFound { name: String, root: PathBuf },

    #[error("{} does not exist. Run 'cursor-rules install' first.", .0.display())]
    NotInstalled(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RulesError {
    /// Missing source tree (rules root, rule set) as opposed to a broken target.
    pub fn is_missing_source(&self) -> bool {
        matches!(
            self,
            Self::RulesRootMissing(_) | Self::NoRuleSets(_) | Self::RuleSetNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;
