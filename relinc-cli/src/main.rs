//! Main entry point for the relinc CLI.
//!
//! Reads the JSON config file named on the command line, copies the
//! configured library tree into the output directory, and rewrites the
//! include directives in the copy so they resolve relative to the files
//! that contain them.

mod cli;
mod error;
mod run;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let logger = relinc::init_logger(cli.debug, cli.silent);

    // Execute and map failures to exit codes
    match run::run(&cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
