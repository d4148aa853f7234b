//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shadow - keep sentinel-annotated files in step with their plain copies
#[derive(Parser, Debug)]
#[command(name = "shadow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to .shadow.toml in the current directory)
    #[arg(short, long, global = true, env = "SHADOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Language to assume when the annotated file has no @+leo header
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Carry edits of the plain file back into the annotated file
    Sync {
        /// File with sentinels
        annotated: PathBuf,

        /// File without sentinels
        plain: PathBuf,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Propagate even if the plain file is tiny
        #[arg(long)]
        force: bool,
    },

    /// Regenerate the plain file from the annotated file
    Strip {
        /// File with sentinels
        annotated: PathBuf,

        /// File without sentinels
        plain: PathBuf,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify that a sync would preserve every sentinel
    Check {
        /// File with sentinels
        annotated: PathBuf,

        /// File without sentinels
        plain: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the annotated line number for a plain line number
    Locate {
        /// File with sentinels
        annotated: PathBuf,

        /// 1-based line number in the plain file
        line: usize,
    },
}
