//! Path relationship handling.
//!
//! The rewrite engine reasons about where a resolved include target sits
//! relative to the file that includes it. This module provides that
//! classification ([`IncludeRelation`]) plus the depth helper used for
//! library-root-relative addressing.
//!
//! All checks are textual, component-wise containment checks; symlinks are
//! deliberately not resolved.
//!
//! # Examples
//!
//! ```
//! use relinc::path::{nesting_depth, IncludeRelation};
//! use std::path::Path;
//!
//! let relation = IncludeRelation::classify(
//!     Path::new("/lib/src/sub/foo.cpp"),
//!     Path::new("/lib/src/bar.h"),
//! );
//! assert_eq!(relation, IncludeRelation::Up { levels: 1 });
//!
//! assert_eq!(nesting_depth(Path::new("/lib/src/sub"), Path::new("/lib")), 2);
//! ```

pub mod relation;

pub use relation::{nesting_depth, IncludeRelation};
