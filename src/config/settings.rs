use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RulesError};
use crate::utils::sanitize_target_path;

/// Optional per-installation overrides, read from the installation root.
pub const CONFIG_FILE_NAME: &str = "cursor-rules.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Directory holding `rule_sets/` and `memory_starters/`. Set at load time.
    #[serde(skip)]
    pub install_root: PathBuf,
    pub source: SourceConfig,
    pub target: TargetConfig,
    pub numbering: NumberingConfig,
}

impl InstallerConfig {
    /// Default layout rooted at `install_root`, ignoring any config file.
    pub fn for_root(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
            ..Self::default()
        }
    }

    pub fn load(install_root: &Path) -> Result<Self> {
        let config_path = install_root.join(CONFIG_FILE_NAME);
        let mut config: Self = if config_path.exists() {
            debug!(path = %config_path.display(), "Loading installer config");
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.install_root = install_root.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RulesError::Config(e.to_string()))
    }

    pub fn rule_sets_root(&self) -> PathBuf {
        self.install_root.join(&self.source.rule_sets_dir)
    }

    pub fn rule_set_dir(&self, name: &str) -> PathBuf {
        self.rule_sets_root().join(name)
    }

    pub fn memory_starters_root(&self) -> PathBuf {
        self.install_root.join(&self.source.memory_starters_dir)
    }

    /// Validate directory names and numbering settings.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        let dirs = [
            ("source.rule_sets_dir", &self.source.rule_sets_dir),
            ("source.memory_starters_dir", &self.source.memory_starters_dir),
            ("target.project_rules_dir", &self.target.project_rules_dir),
            ("target.memory_dir", &self.target.memory_dir),
            ("target.generated_rules_dir", &self.target.generated_rules_dir),
        ];
        for (key, value) in dirs {
            if let Some(problem) = relative_dir_problem(value) {
                errors.push(format!("{} {}", key, problem));
            }
        }

        if self.source.default_rule_set.trim().is_empty() {
            errors.push("source.default_rule_set must not be empty".into());
        }

        let target = &self.target;
        if target.project_rules_dir == target.memory_dir
            || target.project_rules_dir == target.generated_rules_dir
            || target.memory_dir == target.generated_rules_dir
        {
            errors.push("target directories must be distinct".into());
        }

        if self.numbering.width == 0 {
            errors.push("numbering.width must be greater than 0".into());
        }
        let ext = &self.numbering.source_extension;
        if ext.is_empty() || ext.starts_with('.') {
            errors.push(
                "numbering.source_extension must be non-empty and have no leading dot".into(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RulesError::Config(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

fn relative_dir_problem(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("must not be empty");
    }
    let path = Path::new(value);
    if path.is_absolute() {
        return Some("must be a relative path");
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Some("must not contain '..'");
    }
    None
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory of rule sets, relative to the installation root.
    pub rule_sets_dir: String,
    /// Template tree merged into each target's memory directory.
    pub memory_starters_dir: String,
    /// Rule set used by `install` when `--rule-set` is omitted.
    pub default_rule_set: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            rule_sets_dir: "rule_sets".into(),
            memory_starters_dir: "memory_starters".into(),
            default_rule_set: "light-spec".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub project_rules_dir: String,
    pub memory_dir: String,
    /// Editor-facing mirror of the project rules.
    pub generated_rules_dir: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            project_rules_dir: "project_rules".into(),
            memory_dir: "memory".into(),
            generated_rules_dir: ".cursor/rules".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionMode {
    /// Numbered files end in `.mdc`.
    #[default]
    AddMdc,
    /// Numbered files keep `.md`.
    KeepMd,
}

impl ExtensionMode {
    /// Extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::AddMdc => "mdc",
            Self::KeepMd => "md",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberingConfig {
    pub extension_mode: ExtensionMode,
    /// Extension collected from a rule set (case-sensitive, no dot).
    pub source_extension: String,
    /// Minimum digits of the sequence prefix. Larger numbers widen it.
    pub width: usize,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            extension_mode: ExtensionMode::AddMdc,
            source_extension: "md".into(),
            width: 2,
        }
    }
}

/// Locate the installation root.
///
/// An explicit root wins. Otherwise walk up from the executable looking for
/// a directory that holds the rule sets, and fall back to the working directory.
pub fn resolve_install_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    if let Some(root) = explicit {
        return Ok(crate::utils::absolutize(root, &cwd));
    }

    let rule_sets_dir = SourceConfig::default().rule_sets_dir;
    if let Ok(exe) = std::env::current_exe()
        && let Some(found) = exe
            .ancestors()
            .skip(1)
            .find(|dir| dir.join(&rule_sets_dir).is_dir())
    {
        debug!(root = %found.display(), "Found install root next to executable");
        return Ok(found.to_path_buf());
    }

    Ok(cwd)
}

/// Directories the installer manages inside one target project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    pub root: PathBuf,
    pub project_rules_dir: PathBuf,
    pub memory_dir: PathBuf,
    pub generated_rules_dir: PathBuf,
}

impl TargetPaths {
    pub fn new(root: PathBuf, config: &InstallerConfig) -> Self {
        Self {
            project_rules_dir: root.join(&config.target.project_rules_dir),
            memory_dir: root.join(&config.target.memory_dir),
            generated_rules_dir: root.join(&config.target.generated_rules_dir),
            root,
        }
    }

    /// Build from a raw, possibly mangled, command-line argument.
    pub fn from_arg(raw: &str, config: &InstallerConfig) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(sanitize_target_path(raw, &cwd), config))
    }
}
