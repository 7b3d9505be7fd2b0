//! Tree processing: walk, rewrite, persist.
//!
//! The processor walks the working root, hands every eligible source file
//! to the rewrite engine, and writes back the files that changed. Files
//! are processed independently; the only cross-file state is the summary
//! counters.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::RewriteOptions;
use crate::error::{Error, Result};
use crate::fs::Filesystem;
use crate::include::RewriteEngine;
use crate::logging::Logger;

/// File extensions eligible for include rewriting.
const SOURCE_EXTENSIONS: [&str; 4] = ["c", "cpp", "h", "hpp"];

/// Counters describing one processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Eligible source files visited.
    pub files_scanned: usize,
    /// Files with at least one rewritten include.
    pub files_changed: usize,
    /// Total include directives rewritten.
    pub includes_rewritten: usize,
}

/// Walks the working root and rewrites includes file by file.
///
/// # Examples
///
/// ```no_run
/// use relinc::config::RewriteOptions;
/// use relinc::fs::DiskFilesystem;
/// use relinc::operations::TreeProcessor;
/// use relinc::{Logger, LogLevel};
/// use std::path::PathBuf;
///
/// let fs = DiskFilesystem;
/// let logger = Logger::new(LogLevel::Normal);
/// let processor = TreeProcessor::new(
///     PathBuf::from("RelativeLib_Out"),
///     &[PathBuf::from("include")],
///     RewriteOptions::default(),
///     &fs,
///     &logger,
/// );
/// let summary = processor.run().unwrap();
/// println!("changed {} files", summary.files_changed);
/// ```
pub struct TreeProcessor<'a> {
    root: PathBuf,
    engine: RewriteEngine<'a>,
    logger: &'a Logger,
    dry_run: bool,
}

impl<'a> TreeProcessor<'a> {
    /// Creates a processor over `root` with the given search roots and
    /// policy flags.
    #[must_use]
    pub fn new(
        root: PathBuf,
        search_roots: &[PathBuf],
        options: RewriteOptions,
        fs: &'a dyn Filesystem,
        logger: &'a Logger,
    ) -> Self {
        let engine = RewriteEngine::new(root.clone(), search_roots, options, fs, logger);
        Self {
            root,
            engine,
            logger,
            dry_run: false,
        }
    }

    /// Switches the processor to dry-run mode: report, but write nothing.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Process the whole tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] for walk failures and [`Error::InvalidPath`]
    /// for files that cannot be read or written.
    pub fn run(&self) -> Result<ProcessSummary> {
        let mut summary = ProcessSummary::default();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() || !is_source_file(entry.path()) {
                continue;
            }

            summary.files_scanned += 1;
            self.logger
                .debug(&format!("parsing {}", entry.path().display()));

            let contents = read_file(entry.path())?;
            let Some(rewrite) = self.engine.rewrite_file(entry.path(), &contents) else {
                continue;
            };

            if !self.dry_run {
                write_file(entry.path(), &rewrite.contents)?;
            }
            self.logger.info(&format!("Updated {}", entry.path().display()));
            summary.files_changed += 1;
            summary.includes_rewritten += rewrite.rewritten;
        }

        self.logger
            .info(&format!("Changed {} files", summary.files_changed));
        Ok(summary)
    }
}

/// True for the C/C++ translation-unit and header extensions handled.
fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("failed to read source file: {e}"),
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("failed to write rewritten file: {e}"),
    })
}
