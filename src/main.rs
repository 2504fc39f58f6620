use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cursor_rules::cli::{Cli, Commands, ConfigAction, InteractivePrompt, OutputFormat};
use cursor_rules::config::{InstallerConfig, resolve_install_root};
use cursor_rules::error::Result;
use cursor_rules::installer::{ConfirmPrompt, FixedAnswer, Installer};
use cursor_rules::output::OutputWriter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let writer = OutputWriter::new(cli.output);
    match run(cli, &writer) {
        Ok(code) => code,
        Err(e) => {
            writer.display().print_error(&e.to_string());
            if e.is_missing_source() && writer.format() == OutputFormat::Text {
                writer
                    .display()
                    .print_info("Run 'cursor-rules list-rules' to see the available rule sets");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cursor_rules=debug")
    } else {
        EnvFilter::new("cursor_rules=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli, writer: &OutputWriter) -> Result<ExitCode> {
    let Some(command) = cli.command else {
        writer.display().print_banner();
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    let root = resolve_install_root(cli.root.as_deref())?;
    let installer = Installer::new(InstallerConfig::load(&root)?);

    match command {
        Commands::ListRules => writer.emit_listing(&installer.list_rule_sets()?)?,
        Commands::Install {
            target_repo_path,
            rule_set,
        } => {
            let target = installer.target(&target_repo_path)?;
            let report = installer.install(&target, rule_set.as_deref())?;
            writer.emit_install(&report, &installer.config().target)?;
        }
        Commands::Sync { target_repo_path } => {
            let target = installer.target(&target_repo_path)?;
            writer.emit_sync(&installer.sync(&target)?)?;
        }
        Commands::CleanRules { target_repo_path } => {
            let target = installer.target(&target_repo_path)?;
            writer.emit_clean(&installer.clean_rules(&target)?)?;
        }
        Commands::CleanAll {
            target_repo_path,
            yes,
        } => {
            let target = installer.target(&target_repo_path)?;
            if writer.format() == OutputFormat::Text {
                writer.display().print_warning(&format!(
                    "This will delete all rule files and the memory directory in {}",
                    target.root.display()
                ));
            }
            let mut prompt: Box<dyn ConfirmPrompt> = if yes {
                Box::new(FixedAnswer(true))
            } else {
                Box::new(InteractivePrompt::stdin())
            };
            writer.emit_clean(&installer.clean_all(&target, prompt.as_mut())?)?;
        }
        Commands::Config {
            action: ConfigAction::Show,
        } => writer.emit_config(installer.config())?,
    }

    Ok(ExitCode::SUCCESS)
}
