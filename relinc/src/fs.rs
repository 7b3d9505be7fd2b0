//! Filesystem capability abstraction.
//!
//! Include resolution uses filesystem existence as its only oracle. The
//! checks are funneled through the [`Filesystem`] trait so tests can run
//! the engine against an in-memory fixture without touching real disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Capability interface for the existence checks the rewrite engine needs.
pub trait Filesystem {
    /// Returns true if `path` names an existing file or directory.
    fn exists(&self, path: &Path) -> bool;
}

/// [`Filesystem`] implementation backed by the real filesystem.
///
/// # Examples
///
/// ```
/// use relinc::fs::{DiskFilesystem, Filesystem};
/// use std::path::Path;
///
/// let fs = DiskFilesystem;
/// assert!(!fs.exists(Path::new("/definitely/not/a/real/path.h")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFilesystem;

impl Filesystem for DiskFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory [`Filesystem`] fixture.
///
/// Holds a set of file paths; a path "exists" if it was inserted, or if it
/// is a directory prefix of an inserted file. `.` and `..` components are
/// resolved lexically, as the real filesystem would for paths without
/// symlinks. Intended for unit tests of the resolution engine.
///
/// # Examples
///
/// ```
/// use relinc::fs::{Filesystem, MemoryFilesystem};
/// use std::path::Path;
///
/// let mut fs = MemoryFilesystem::new();
/// fs.insert("/lib/include/bar.h");
/// assert!(fs.exists(Path::new("/lib/include/bar.h")));
/// assert!(fs.exists(Path::new("/lib/include")));
/// assert!(fs.exists(Path::new("/lib/src/../include/bar.h")));
/// assert!(!fs.exists(Path::new("/lib/include/baz.h")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Creates an empty fixture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file path as existing.
    pub fn insert(&mut self, path: impl Into<PathBuf>) {
        self.files.insert(path.into());
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let path = lexical_normalize(path);
        if self.files.contains(&path) {
            return true;
        }
        // Directories exist implicitly as prefixes of inserted files.
        self.files.iter().any(|f| f.starts_with(&path))
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
