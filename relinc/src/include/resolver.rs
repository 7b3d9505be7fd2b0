//! Search-root lookup for include tokens.
//!
//! Resolution is a first-match scan over the configured search roots:
//! filesystem existence of `root/token` is the only oracle. A token found
//! in no root is a terminal "leave the line unchanged" outcome for the
//! engine, never an error.

use crate::fs::Filesystem;
use std::path::{Path, PathBuf};

/// Resolves partial include tokens against an ordered list of search roots.
///
/// # Examples
///
/// ```
/// use relinc::fs::MemoryFilesystem;
/// use relinc::include::SearchResolver;
/// use std::path::{Path, PathBuf};
///
/// let mut fs = MemoryFilesystem::new();
/// fs.insert("/out/include/bar.h");
///
/// let resolver = SearchResolver::new(&[PathBuf::from("include")], Path::new("/out"));
/// let hit = resolver.resolve(Path::new("bar.h"), &fs);
/// assert_eq!(hit, Some(PathBuf::from("/out/include/bar.h")));
/// assert_eq!(resolver.resolve(Path::new("baz.h"), &fs), None);
/// ```
#[derive(Debug, Clone)]
pub struct SearchResolver {
    roots: Vec<PathBuf>,
}

impl SearchResolver {
    /// Creates a resolver from configured search roots.
    ///
    /// Relative roots are anchored at `base` (the working root); absolute
    /// roots are used as-is. Declaration order is preserved and decides
    /// which root wins when several contain the token.
    #[must_use]
    pub fn new(roots: &[PathBuf], base: &Path) -> Self {
        let roots = roots
            .iter()
            .map(|root| {
                if root.is_absolute() {
                    root.clone()
                } else {
                    base.join(root)
                }
            })
            .collect();
        Self { roots }
    }

    /// The resolved search roots, in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find the first search root containing `token`.
    #[must_use]
    pub fn resolve(&self, token: &Path, fs: &dyn Filesystem) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(token))
            .find(|candidate| fs.exists(candidate))
    }
}
