use std::fs;

use tracing::{debug, info, warn};

use super::confirm::ConfirmPrompt;
use super::memory::merge_memory_starters;
use super::numbering::{NumberedCopy, NumberingPlan, copy_numbered};
use super::report::{CleanReport, InstallReport, RuleSetListing, SyncReport};
use crate::config::{InstallerConfig, TargetPaths};
use crate::error::{Result, RulesError};
use crate::utils::{remove_dir_if_exists, reset_dir};

/// Installs rule sets into target projects.
///
/// Every call re-reads the filesystem; the installer holds only configuration.
pub struct Installer {
    config: InstallerConfig,
}

impl Installer {
    pub fn new(config: InstallerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Resolve a raw command-line target argument.
    pub fn target(&self, raw: &str) -> Result<TargetPaths> {
        TargetPaths::from_arg(raw, &self.config)
    }

    pub fn list_rule_sets(&self) -> Result<RuleSetListing> {
        let root = self.config.rule_sets_root();
        if !root.is_dir() {
            return Err(RulesError::RulesRootMissing(root));
        }

        let mut rule_sets = Vec::new();
        for entry in fs::read_dir(&root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                rule_sets.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        if rule_sets.is_empty() {
            return Err(RulesError::NoRuleSets(root));
        }
        rule_sets.sort();

        Ok(RuleSetListing { root, rule_sets })
    }

    /// Install `rule_set` (or the configured default) into `target`.
    ///
    /// The rule set is checked before anything under the target is touched.
    pub fn install(&self, target: &TargetPaths, rule_set: Option<&str>) -> Result<InstallReport> {
        let rule_set = rule_set.unwrap_or(&self.config.source.default_rule_set);
        let source_dir = self.config.rule_set_dir(rule_set);
        if !source_dir.is_dir() {
            return Err(RulesError::RuleSetNotFound {
                name: rule_set.to_string(),
                root: self.config.rule_sets_root(),
            });
        }

        info!(project = %target.root.display(), rule_set, "Installing rules");

        let replaced_project_rules = remove_dir_if_exists(&target.project_rules_dir)?;
        if replaced_project_rules {
            warn!(
                path = %target.project_rules_dir.display(),
                "Existing project rules replaced"
            );
        }
        fs::create_dir_all(&target.project_rules_dir)?;

        let project_rules = copy_numbered(
            &source_dir,
            &target.project_rules_dir,
            &NumberingPlan::for_rule_set(&self.config.numbering),
        )?;
        debug!(count = project_rules.len(), "Project rules written");

        let memory =
            merge_memory_starters(&self.config.memory_starters_root(), &target.memory_dir)?;

        let generated_rules = self.regenerate(target)?;

        Ok(InstallReport {
            target: target.root.clone(),
            rule_set: rule_set.to_string(),
            replaced_project_rules,
            project_rules_dir: target.project_rules_dir.clone(),
            project_rules,
            memory_dir: target.memory_dir.clone(),
            memory,
            generated_rules_dir: target.generated_rules_dir.clone(),
            generated_rules,
        })
    }

    /// Rebuild generated rules from the project rules already in `target`.
    pub fn sync(&self, target: &TargetPaths) -> Result<SyncReport> {
        if !target.project_rules_dir.is_dir() {
            return Err(RulesError::NotInstalled(target.project_rules_dir.clone()));
        }

        info!(project = %target.root.display(), "Syncing generated rules");
        let generated_rules = self.regenerate(target)?;

        Ok(SyncReport {
            source_dir: target.project_rules_dir.clone(),
            generated_rules_dir: target.generated_rules_dir.clone(),
            generated_rules,
        })
    }

    /// Delete project and generated rules; memory is kept.
    pub fn clean_rules(&self, target: &TargetPaths) -> Result<CleanReport> {
        let mut report = self.remove_rules(target)?;
        report.preserved = Some(self.config.target.memory_dir.clone());
        Ok(report)
    }

    /// Delete project rules, generated rules and memory after confirmation.
    pub fn clean_all(
        &self,
        target: &TargetPaths,
        prompt: &mut dyn ConfirmPrompt,
    ) -> Result<CleanReport> {
        if !prompt.confirm("Are you sure you want to continue? (y/N): ")? {
            info!(project = %target.root.display(), "Clean cancelled");
            return Ok(CleanReport {
                target: target.root.clone(),
                cancelled: true,
                ..CleanReport::default()
            });
        }

        let mut report = self.remove_rules(target)?;
        if remove_dir_if_exists(&target.memory_dir)? {
            report.removed.push(self.config.target.memory_dir.clone());
        }
        Ok(report)
    }

    fn remove_rules(&self, target: &TargetPaths) -> Result<CleanReport> {
        let mut removed = Vec::new();
        if remove_dir_if_exists(&target.project_rules_dir)? {
            removed.push(self.config.target.project_rules_dir.clone());
        }
        if remove_dir_if_exists(&target.generated_rules_dir)? {
            removed.push(self.config.target.generated_rules_dir.clone());
        }

        Ok(CleanReport {
            target: target.root.clone(),
            removed,
            ..CleanReport::default()
        })
    }

    fn regenerate(&self, target: &TargetPaths) -> Result<Vec<NumberedCopy>> {
        reset_dir(&target.generated_rules_dir)?;
        copy_numbered(
            &target.project_rules_dir,
            &target.generated_rules_dir,
            &NumberingPlan::for_project_rules(&self.config.numbering),
        )
    }
}
