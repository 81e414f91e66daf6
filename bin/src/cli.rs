//! Command-line interface configuration.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "braid", about = "Rope string playground", long_about = None)]
pub struct Cli {
    /// Write logs to this file or directory instead of the default
    /// location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Join the given parts into one rope and print it
    Concat {
        /// Pieces to concatenate, in order
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Print a slice of the input without copying its bytes
    Slice {
        text: String,
        /// Start of the byte range (inclusive)
        start: usize,
        /// End of the byte range (exclusive)
        end: usize,
    },

    /// Print the byte at a position
    Index {
        text: String,
        index: usize,
    },
}
