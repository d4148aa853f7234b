//! Sentinel-preserving reconciliation of annotated and plain files
//!
//! An annotated file interleaves content lines with sentinel lines. Its
//! plain twin holds only the content. When the plain file is edited
//! elsewhere, [`reconcile`] carries those edits back into the annotated
//! file without losing, duplicating, or reordering a single sentinel.

pub mod align;
pub mod check;
pub mod classify;
pub mod config;
pub mod error;
pub mod language;
pub mod mapping;
pub mod marker;
pub mod reconcile;
pub mod replay;

pub use align::{OpTag, Opcode, align};
pub use check::{CheckReport, Separated, separate, verify};
pub use classify::{Classified, classify};
pub use config::ShadowConfig;
pub use error::{Error, Result};
pub use language::Delims;
pub use marker::Marker;
pub use reconcile::{Changed, Outcome, Reconciler, Report, reconcile, reconcile_lines, strip};
pub use replay::{replay, replay_ops};
