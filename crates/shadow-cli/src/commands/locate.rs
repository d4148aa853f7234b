//! Locate command implementation

use std::path::Path;

use shadow_core::mapping;
use shadow_fs::io;

use super::Context;
use crate::error::{CliError, Result};

/// Run the locate command
///
/// Prints the 1-based annotated line holding the 1-based plain `line`.
pub fn run_locate(ctx: &Context, annotated: &Path, line: usize) -> Result<()> {
    if line == 0 {
        return Err(CliError::user("line numbers start at 1"));
    }

    let lines = io::read_lines(annotated)?;
    let marker = ctx.reconciler().marker_for(&lines, annotated);

    match mapping::annotated_line_for(&lines, &marker, line - 1) {
        Some(index) => {
            println!("{}", index + 1);
            Ok(())
        }
        None => Err(CliError::user(format!(
            "{} has no plain line {}",
            annotated.display(),
            line
        ))),
    }
}
