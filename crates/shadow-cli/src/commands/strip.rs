//! Strip command implementation

use std::path::Path;

use colored::Colorize;
use shadow_core::Changed;

use super::Context;
use crate::error::Result;

/// Run the strip command
///
/// Writes the plain file derived from the annotated file.
pub fn run_strip(ctx: &Context, annotated: &Path, plain: &Path, dry_run: bool) -> Result<()> {
    let changed = ctx
        .reconciler()
        .with_dry_run(dry_run)
        .strip(annotated, plain)?;

    match (changed, dry_run) {
        (Changed::No, _) => println!("{} {} is up to date.", "OK".green().bold(), plain.display()),
        (Changed::Yes, true) => println!(
            "{} Would write {}",
            "[dry-run]".yellow(),
            plain.display().to_string().cyan()
        ),
        (Changed::Yes, false) => println!(
            "{} Wrote {}",
            "=>".blue().bold(),
            plain.display().to_string().cyan()
        ),
    }
    Ok(())
}
