use std::io::{self, Write};

use serde::Serialize;

use crate::cli::{Display, OutputFormat};
use crate::config::{InstallerConfig, TargetConfig};
use crate::error::Result;
use crate::installer::{CleanReport, InstallReport, RuleSetListing, SyncReport};

/// Renders reports in the format chosen on the command line.
pub struct OutputWriter {
    format: OutputFormat,
    display: Display,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            display: Display::new(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn emit_listing(&self, listing: &RuleSetListing) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.display.print_rule_sets(listing);
                Ok(())
            }
            OutputFormat::Json => self.write_json(listing),
        }
    }

    pub fn emit_install(&self, report: &InstallReport, names: &TargetConfig) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.display.print_install_report(report, names);
                Ok(())
            }
            OutputFormat::Json => self.write_json(report),
        }
    }

    pub fn emit_sync(&self, report: &SyncReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.display.print_sync_report(report);
                Ok(())
            }
            OutputFormat::Json => self.write_json(report),
        }
    }

    pub fn emit_clean(&self, report: &CleanReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.display.print_clean_report(report);
                Ok(())
            }
            OutputFormat::Json => self.write_json(report),
        }
    }

    pub fn emit_config(&self, config: &InstallerConfig) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!("# install root: {}", config.install_root.display());
                print!("{}", config.to_toml()?);
                Ok(())
            }
            OutputFormat::Json => self.write_json(config),
        }
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        stdout.flush()?;
        Ok(())
    }
}
