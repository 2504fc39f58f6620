use console::style;

use crate::config::TargetConfig;
use crate::installer::{
    CleanReport, EntryKind, InstallReport, MemoryEntry, MergeAction, NumberedCopy,
    RuleSetListing, SyncReport,
};

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self) {
        println!("{}", style("═".repeat(60)).dim());
        println!("{}", style("Cursor Rules Manager").bold().cyan());
        println!("{}", style("═".repeat(60)).dim());
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("─".repeat(30)).dim());
    }

    pub fn print_rule_sets(&self, listing: &RuleSetListing) {
        self.print_header("Available rule sets:");
        for (i, name) in listing.rule_sets.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
        println!();
        println!(
            "{}",
            style("Install with: cursor-rules install <project-path> --rule-set <name>").dim()
        );
    }

    pub fn print_install_report(&self, report: &InstallReport, names: &TargetConfig) {
        println!();
        self.print_info(&format!("Installing rules into: {}", report.target.display()));
        self.print_info(&format!("Rule set: {}", report.rule_set));
        if report.replaced_project_rules {
            self.print_warning(&format!(
                "{} already existed and was replaced",
                names.project_rules_dir
            ));
        }

        self.print_header("Copying rule set...");
        self.print_copies(&report.project_rules);

        self.print_header("Setting up memory...");
        match &report.memory {
            Some(entries) => self.print_memory_entries(entries),
            None => self.print_warning("No memory starters found, skipped"),
        }

        self.print_header("Generating Cursor rules...");
        self.print_copies(&report.generated_rules);

        println!();
        self.print_success("Installation complete!");
        self.print_info(&format!(
            "Cursor rules:  {}",
            report.generated_rules_dir.display()
        ));
        self.print_info(&format!(
            "Project rules: {}",
            report.project_rules_dir.display()
        ));
        self.print_info(&format!("Memory:        {}", report.memory_dir.display()));

        println!();
        println!("{}", style("Next steps:").bold());
        println!("  1. Add {} to .gitignore", names.generated_rules_dir);
        println!("  2. Commit the {}/ directory", names.memory_dir);
        println!("  3. Start developing with Cursor!");
    }

    pub fn print_sync_report(&self, report: &SyncReport) {
        self.print_header("Syncing rules...");
        println!("Source: {}", report.source_dir.display());
        println!("Target: {}", report.generated_rules_dir.display());
        self.print_copies(&report.generated_rules);
        println!();
        self.print_success("Sync complete!");
    }

    pub fn print_clean_report(&self, report: &CleanReport) {
        if report.cancelled {
            self.print_info("Cancelled");
            return;
        }

        for name in &report.removed {
            self.print_info(&format!("Deleted: {}", name));
        }

        if report.nothing_removed() {
            self.print_info("Nothing to clean");
            return;
        }

        match &report.preserved {
            Some(kept) => self.print_success(&format!("Clean complete! {} was kept", kept)),
            None => self.print_success("Clean complete!"),
        }
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    pub fn print_warning(&self, message: &str) {
        println!("{} {}", style("!").yellow().bold(), message);
    }

    pub fn print_info(&self, message: &str) {
        println!("{} {}", style("→").cyan(), message);
    }

    fn print_copies(&self, copies: &[NumberedCopy]) {
        if copies.is_empty() {
            println!("  {}", style("(no rule files)").dim());
        }
        for copy in copies {
            println!("  Created: {}", copy.file_name);
        }
    }

    fn print_memory_entries(&self, entries: &[MemoryEntry]) {
        for entry in entries {
            let name = display_name(entry);
            match entry.action {
                MergeAction::Copied => match entry.kind {
                    EntryKind::Directory => println!("  Created directory: {}", name),
                    EntryKind::File => println!("  Copied file: {}", name),
                },
                MergeAction::Skipped => {
                    println!("  {}", style(format!("Kept existing: {}", name)).dim())
                }
            }
        }
    }
}

fn display_name(entry: &MemoryEntry) -> String {
    match entry.kind {
        EntryKind::Directory => format!("{}/", entry.name),
        EntryKind::File => entry.name.clone(),
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
