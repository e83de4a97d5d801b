//! Skipper CLI - build, preview, and deploy a static website
//!
//! Usage: skipper <COMMAND>
//!
//! Commands:
//!   build    Compile the site into the build directory
//!   preview  Serve the site locally
//!   watch    Rebuild the site when sources change
//!   env      Show a deployment environment's configuration
//!   deploy   Upload the build directory to its deployment target

mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use skipper::config::{self, ConfigWarning};
use skipper::process::{CommandRunner, DryRunRunner, SystemRunner};
use skipper::{ui, SkipperError};

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(&format!("error: {err:#}"));
            let code = err
                .downcast_ref::<SkipperError>()
                .map(SkipperError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) = config::load_or_default(&project_root)?;
    print_config_warnings(&project_root.join(config::CONFIG_FILE), &warnings);

    let runner = SystemRunner::new(cli.verbose > 0);

    match cli.command {
        Commands::Build => commands::build::cmd_build(&runner, &config),
        Commands::Preview => commands::preview::cmd_preview(&runner, &config),
        Commands::Watch => commands::watch::cmd_watch(&runner, &config),
        Commands::Env { name } => commands::env::cmd_env(&config, &name),
        Commands::Deploy { env, dry_run } => {
            let runner: &dyn CommandRunner = if dry_run { &DryRunRunner } else { &runner };
            commands::deploy::cmd_deploy(runner, &config, env.as_deref())
        }
    }
}

fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
