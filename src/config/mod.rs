//! Configuration types and loading.
//!
//! - `InstallerConfig`: directory names, default rule set and numbering mode
//! - `TargetPaths`: the three directories the installer manages in a target project
//! - `resolve_install_root`: locates the tree that holds `rule_sets/`

mod settings;

pub use settings::{
    CONFIG_FILE_NAME, ExtensionMode, InstallerConfig, NumberingConfig, SourceConfig,
    TargetConfig, TargetPaths, resolve_install_root,
};
