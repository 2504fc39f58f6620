use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

const EXAMPLES: &str = "\
Examples:
  cursor-rules list-rules
  cursor-rules install ~/my-project
  cursor-rules install ~/my-project --rule-set heavy-spec
  cursor-rules sync ~/my-project
  cursor-rules clean-rules ~/my-project
  cursor-rules clean-all ~/my-project";

#[derive(Parser)]
#[command(name = "cursor-rules")]
#[command(author, version, about = "Cursor rules manager", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Installation root containing rule_sets/ and memory_starters/
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available rule sets
    ListRules,

    /// Install a rule set into a project
    Install {
        /// Target project path
        target_repo_path: String,

        /// Rule set name (default: light-spec)
        #[arg(long)]
        rule_set: Option<String>,
    },

    /// Regenerate .cursor/rules from project_rules
    Sync {
        /// Target project path
        target_repo_path: String,
    },

    /// Remove installed rules (keeps memory)
    CleanRules {
        /// Target project path
        target_repo_path: String,
    },

    /// Remove rules and memory
    CleanAll {
        /// Target project path
        target_repo_path: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
}
