//! Command-line argument definitions for the easel CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control scene selection, output destination,
//! and logging verbosity.

use clap::Parser;

/// Command-line arguments for the easel drawing tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML scene file describing the chain to draw
    #[arg(help = "Path to the scene file (renders the built-in demonstration when omitted)")]
    pub scene: Option<String>,

    /// Path to the output text file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
