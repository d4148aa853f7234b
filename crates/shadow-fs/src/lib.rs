//! File I/O for shadow file pairs
//!
//! Provides line splitting, change-aware atomic writes, and
//! format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod lines;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use lines::{join_lines, split_lines};
