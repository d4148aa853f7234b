//! Shadow CLI
//!
//! Reconciles sentinel-annotated files with their plain copies.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let cwd = std::env::current_dir()?;
    let ctx = Context::load(&cwd, cli.config.as_deref(), cli.language.clone())?;

    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            annotated,
            plain,
            dry_run,
            force,
        } => commands::run_sync(ctx, &annotated, &plain, dry_run, force),
        Commands::Strip {
            annotated,
            plain,
            dry_run,
        } => commands::run_strip(ctx, &annotated, &plain, dry_run),
        Commands::Check {
            annotated,
            plain,
            json,
        } => commands::run_check(ctx, &annotated, &plain, json),
        Commands::Locate { annotated, line } => commands::run_locate(ctx, &annotated, line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sync_command_updates_annotated() {
        let dir = TempDir::new().unwrap();
        let annotated = dir.path().join("x.shadow.py");
        let plain = dir.path().join("x.py");
        fs::write(&annotated, "#@+leo-ver=5\n#@+node:1\nold line here\n#@-leo\n").unwrap();
        fs::write(&plain, "new line here\n").unwrap();

        let ctx = Context::default();
        execute_command(
            &ctx,
            Commands::Sync {
                annotated: annotated.clone(),
                plain,
                dry_run: false,
                force: false,
            },
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&annotated).unwrap(),
            "#@+leo-ver=5\n#@+node:1\nnew line here\n#@-leo\n"
        );
    }

    #[test]
    fn test_locate_rejects_line_zero() {
        let dir = TempDir::new().unwrap();
        let annotated = dir.path().join("x.py");
        fs::write(&annotated, "a\n").unwrap();

        let result = execute_command(
            &Context::default(),
            Commands::Locate { annotated, line: 0 },
        );
        assert!(result.is_err());
    }
}
