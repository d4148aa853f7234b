//! Error types for shadow-core

use crate::check::CheckReport;

/// Result type for shadow-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling a file pair
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read input: {0}")]
    Read(#[source] shadow_fs::Error),

    #[error("Failed to write result: {0}")]
    Write(#[source] shadow_fs::Error),

    #[error("Failed to load configuration: {0}")]
    Config(#[source] shadow_fs::Error),

    /// A verbatim escape with nothing after it to escape.
    #[error("Nothing follows verbatim sentinel at line(s) {lines:?}")]
    MalformedVerbatim { lines: Vec<usize> },

    /// The aligner left a hole or overlap between consecutive opcodes.
    #[error("Alignment gap: expected {side} range to start at {expected}, got {actual}")]
    AlignmentGap {
        side: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Self-check failed: {report}")]
    SelfCheck { report: Box<CheckReport> },
}
