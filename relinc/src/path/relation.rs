//! Include nesting classification.
//!
//! This module determines how a resolved include target relates to the
//! file that includes it: below the includer's directory, above it, or in
//! an unrelated branch of the tree. The relation drives which relative
//! path shape the rewrite engine emits.

use std::path::{Path, PathBuf};

/// Positional relation between an including file and its resolved target.
///
/// Each variant carries exactly the payload its rewrite shape needs, so an
/// up-relation without a hop count (or a down-relation without a subpath)
/// is unrepresentable.
///
/// Containment is checked component-wise on the textual paths; no
/// filesystem access is involved.
///
/// # Examples
///
/// ```
/// use relinc::path::IncludeRelation;
/// use std::path::{Path, PathBuf};
///
/// let relation = IncludeRelation::classify(
///     Path::new("/lib/src/foo.cpp"),
///     Path::new("/lib/src/sub/bar.h"),
/// );
/// assert_eq!(relation, IncludeRelation::Down { subpath: PathBuf::from("sub/bar.h") });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeRelation {
    /// The target lives at or below the includer's directory. Carries the
    /// subpath from the includer's directory to the target file.
    Down {
        /// Relative path from the includer's directory to the target.
        subpath: PathBuf,
    },

    /// The includer lives below the target's directory. Carries the number
    /// of parent-directory hops from the includer's directory up to the
    /// target's directory.
    Up {
        /// Parent-directory hop count.
        levels: usize,
    },

    /// Neither path contains the other (sibling branches).
    Unrelated,
}

impl IncludeRelation {
    /// Classify the relation between an including file and a target file.
    ///
    /// Both paths must be rooted the same way (both absolute, or both
    /// relative to the same base). A target in the includer's own directory
    /// classifies as `Down` with a bare-filename subpath; the down-check is
    /// evaluated first so that outcome wins over the equally-true
    /// up-containment.
    ///
    /// # Examples
    ///
    /// ```
    /// use relinc::path::IncludeRelation;
    /// use std::path::Path;
    ///
    /// // Includer nested under the target's directory: one hop up.
    /// let relation = IncludeRelation::classify(
    ///     Path::new("/lib/src/sub/foo.cpp"),
    ///     Path::new("/lib/src/bar.h"),
    /// );
    /// assert_eq!(relation, IncludeRelation::Up { levels: 1 });
    ///
    /// // Sibling branches are unrelated.
    /// let relation = IncludeRelation::classify(
    ///     Path::new("/lib/src/foo.cpp"),
    ///     Path::new("/lib/include/bar.h"),
    /// );
    /// assert_eq!(relation, IncludeRelation::Unrelated);
    /// ```
    #[must_use]
    pub fn classify(including_file: &Path, target: &Path) -> Self {
        let includer_dir = parent_dir(including_file);
        let target_dir = parent_dir(target);

        if let Ok(subpath) = target.strip_prefix(includer_dir) {
            return Self::Down {
                subpath: subpath.to_path_buf(),
            };
        }

        if includer_dir.starts_with(target_dir) {
            return Self::Up {
                levels: hops_between(includer_dir, target_dir),
            };
        }

        Self::Unrelated
    }

    /// True when the subpath has no directory component, i.e. the target
    /// sits in the includer's own directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use relinc::path::IncludeRelation;
    /// use std::path::PathBuf;
    ///
    /// let same = IncludeRelation::Down { subpath: PathBuf::from("bar.h") };
    /// assert!(same.is_same_directory());
    ///
    /// let nested = IncludeRelation::Down { subpath: PathBuf::from("sub/bar.h") };
    /// assert!(!nested.is_same_directory());
    /// ```
    #[must_use]
    pub fn is_same_directory(&self) -> bool {
        match self {
            Self::Down { subpath } => subpath.components().count() == 1,
            _ => false,
        }
    }
}

/// Number of directories `dir` sits below `root`.
///
/// Returns 0 when `dir` equals `root` or is not below it.
///
/// # Examples
///
/// ```
/// use relinc::path::nesting_depth;
/// use std::path::Path;
///
/// assert_eq!(nesting_depth(Path::new("/lib/src/a"), Path::new("/lib")), 2);
/// assert_eq!(nesting_depth(Path::new("/lib"), Path::new("/lib")), 0);
/// ```
#[must_use]
pub fn nesting_depth(dir: &Path, root: &Path) -> usize {
    dir.strip_prefix(root)
        .map(|rel| rel.components().count())
        .unwrap_or(0)
}

/// Parent directory of a file path; the empty path for a bare filename.
fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Count parent hops from `from` up to `to`, assuming `from` starts with `to`.
fn hops_between(from: &Path, to: &Path) -> usize {
    let mut current = from;
    let mut count = 0;
    while current != to {
        match current.parent() {
            Some(parent) => {
                current = parent;
                count += 1;
            }
            None => break,
        }
    }
    count
}
