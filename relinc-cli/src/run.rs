//! Run pipeline: config → prepare → process.

use crate::cli::Cli;
use crate::error::CliError;
use relinc::fs::DiskFilesystem;
use relinc::{prepare_workspace, ConfigLoader, ConfigValidator, Logger, TreeProcessor};

/// Execute a full run from parsed CLI arguments.
pub fn run(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    // 1. Load and validate the configuration
    let config = ConfigLoader::load_file(&cli.config_file)?;
    ConfigValidator::validate(&config)?;

    // 2. Pick the working root. A normal run copies the library into the
    //    output directory and rewrites the copy; a dry run reads the
    //    library in place and writes nothing.
    let root = if cli.dry_run {
        if !config.lib_path.exists() {
            return Err(relinc::Error::LibraryPathMissing {
                path: config.lib_path.clone(),
            }
            .into());
        }
        logger.info("Dry run: reporting changes without copying or writing");
        config.lib_path.clone()
    } else {
        prepare_workspace(&config, logger)?
    };

    // 3. Walk the tree and rewrite includes
    let fs = DiskFilesystem;
    let mut processor = TreeProcessor::new(
        root,
        &config.include_paths,
        config.options,
        &fs,
        logger,
    );
    if cli.dry_run {
        processor = processor.dry_run();
    }
    processor.run()?;

    Ok(())
}
