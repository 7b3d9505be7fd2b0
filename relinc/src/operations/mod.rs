//! High-level run operations.
//!
//! A run is two phases: [`prepare_workspace`] validates the configuration
//! against the filesystem and copies the library tree into the output
//! directory, then [`TreeProcessor`] walks that copy and rewrites the
//! includes. Preparation failures are fatal and happen before any source
//! file is read.

pub mod prepare;
pub mod process;

pub use prepare::prepare_workspace;
pub use process::{ProcessSummary, TreeProcessor};
