//! Check command implementation
//!
//! Runs a sync in memory with the self-check enabled and reports the result.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::error::{CliError, Result};

/// Run the check command
pub fn run_check(ctx: &Context, annotated: &Path, plain: &Path, json: bool) -> Result<()> {
    let mut config = ctx.config.clone();
    config.self_check = true;
    config.strict_check = false;

    let report = shadow_core::Reconciler::new(config)
        .with_language(ctx.language.clone())
        .with_dry_run(true)
        .reconcile(annotated, plain)?;

    let check = report.check.unwrap_or_default();

    if json {
        let output = json!({
            "would_change": report.changed.is_changed(),
            "malformed_verbatim": report.malformed_verbatim,
            "consistent": check.is_ok(),
            "plain_diff": check.plain_diff,
            "sentinel_diff": check.sentinel_diff,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if check.is_ok() {
        println!(
            "{} Sentinels preserved. {}",
            "OK".green().bold(),
            if report.changed.is_changed() {
                "A sync would update the annotated file."
            } else {
                "Nothing to sync."
            }
        );
    } else {
        println!("{} {}", "MISMATCH".red().bold(), check);
        print!("{}", check.dump());
    }

    if check.is_ok() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "self-check failed for {}",
            annotated.display()
        )))
    }
}
