//! CLI structure definition.
//!
//! This module defines the command-line surface using clap's derive
//! macros. The tool is single-purpose: one positional config file plus
//! verbosity and dry-run flags.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool for rewriting C/C++ include directives to
/// file-relative paths.
#[derive(Parser)]
#[command(name = "relinc")]
#[command(
    version,
    about = "Rewrite C/C++ include directives relative to their source files",
    long_about = None
)]
pub struct Cli {
    /// JSON config file to run this tool
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: PathBuf,

    /// Silent output (errors only)
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Print debug messages
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Report what would change without copying or writing anything
    #[arg(long)]
    pub dry_run: bool,
}
