#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # relinc
//!
//! A library for rewriting C/C++ `#include` directives so that every
//! include path is correctly relative to the file that contains it.
//!
//! Library maintainers use this to ship trees whose headers resolve
//! without compiler `-I` search-path flags, for build systems (e.g.
//! Arduino) that only add the library root to the search path. The
//! library tree is copied into an output directory and the copy is
//! rewritten in place; the original is never modified.
//!
//! ## Core Types
//!
//! - [`Config`]: run configuration loaded from a JSON file
//! - [`RewriteEngine`]: per-file include rewriting
//! - [`IncludeRelation`]: includer/target nesting classification
//! - [`TreeProcessor`]: walks the output tree and persists changes
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use relinc::path::IncludeRelation;
//! use std::path::{Path, PathBuf};
//!
//! let relation = IncludeRelation::classify(
//!     Path::new("/lib/src/foo.cpp"),
//!     Path::new("/lib/src/sub/bar.h"),
//! );
//! assert_eq!(relation, IncludeRelation::Down { subpath: PathBuf::from("sub/bar.h") });
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod include;
pub mod logging;
pub mod operations;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader, ConfigValidator, RewriteOptions};
pub use error::{Error, Result};
pub use include::{FileRewrite, IncludeParser, RewriteEngine, SearchResolver};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{prepare_workspace, ProcessSummary, TreeProcessor};
pub use path::IncludeRelation;
