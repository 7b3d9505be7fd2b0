//! Output-directory preparation.
//!
//! Before any rewriting happens the library tree is copied wholesale into
//! the output directory, which then becomes the working root. Everything
//! here is fail-fast: a missing library path or an output collision
//! without overwrite permission aborts the run before a single file is
//! touched.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::Logger;

/// Validates the library path, claims the output directory, and copies the
/// library tree into it.
///
/// Returns the output directory, which is the working root for all
/// subsequent processing. All paths are handled relative to the caller's
/// working directory; nothing chdirs.
///
/// # Errors
///
/// - [`Error::LibraryPathMissing`] if the configured library path does not
///   exist.
/// - [`Error::OutputDirExists`] if the output directory exists and
///   `out.overwrite` is false.
/// - [`Error::Io`] for copy failures.
pub fn prepare_workspace(config: &Config, logger: &Logger) -> Result<PathBuf> {
    if !config.lib_path.exists() {
        return Err(Error::LibraryPathMissing {
            path: config.lib_path.clone(),
        });
    }

    let out_dir = config.out.dir.clone();
    if out_dir.exists() {
        if !config.out.overwrite {
            return Err(Error::OutputDirExists { path: out_dir });
        }
        logger.debug(&format!("removing existing output dir {}", out_dir.display()));
        fs::remove_dir_all(&out_dir)?;
    }

    let copied = copy_tree(&config.lib_path, &out_dir, logger)?;
    logger.debug(&format!(
        "copied {copied} files from {} to {}",
        config.lib_path.display(),
        out_dir.display()
    ));

    Ok(out_dir)
}

/// Recursively copy `src` into `dest`, returning the number of files copied.
///
/// Symlinks are skipped: resolution across links is out of scope for the
/// rewriting step, so carrying them over would only create targets the
/// engine cannot reason about.
fn copy_tree(src: &Path, dest: &Path, logger: &Logger) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| Error::InvalidPath {
                path: entry.path().to_path_buf(),
                reason: "walked outside the library tree".to_string(),
            })?;
        let target = dest.join(rel);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        } else {
            logger.debug(&format!("skipping symlink {}", entry.path().display()));
        }
    }

    Ok(copied)
}
