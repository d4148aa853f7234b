//! Sync command implementation
//!
//! Propagates plain-file edits into the annotated file.

use std::path::Path;

use colored::Colorize;
use shadow_core::Changed;

use super::Context;
use crate::error::Result;

/// Run the sync command
pub fn run_sync(
    ctx: &Context,
    annotated: &Path,
    plain: &Path,
    dry_run: bool,
    force: bool,
) -> Result<()> {
    let reconciler = ctx.reconciler().with_dry_run(dry_run);
    let report = if force {
        reconciler.reconcile(annotated, plain)?
    } else {
        reconciler.sync(annotated, plain)?
    };

    if report.skipped {
        println!(
            "{} {} is too small to propagate (use {} to override).",
            "SKIP".yellow().bold(),
            plain.display().to_string().cyan(),
            "--force".cyan()
        );
        return Ok(());
    }

    if report.malformed_verbatim > 0 {
        println!(
            "{} {} dangling verbatim sentinel(s) in {}",
            "WARN".yellow().bold(),
            report.malformed_verbatim,
            annotated.display()
        );
    }

    if let Some(check) = report.check.as_ref().filter(|c| !c.is_ok()) {
        println!("{} Self-check failed: {}", "WARN".red().bold(), check);
    }

    match (report.changed, dry_run) {
        (Changed::No, _) => println!(
            "{} {} is up to date.",
            "OK".green().bold(),
            annotated.display()
        ),
        (Changed::Yes, true) => println!(
            "{} Would update {} from {}",
            "[dry-run]".yellow(),
            annotated.display().to_string().cyan(),
            plain.display()
        ),
        (Changed::Yes, false) => println!(
            "{} Updated {} from {}",
            "=>".blue().bold(),
            annotated.display().to_string().cyan(),
            plain.display()
        ),
    }

    Ok(())
}
