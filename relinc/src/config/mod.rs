//! Configuration system for relinc.
//!
//! A run is driven by a single JSON configuration file:
//!
//! ```json
//! {
//!     "lib_path": "MyLib",
//!     "include_paths": ["MyLib/include", "MyLib/src"],
//!     "out": { "dir": "RelativeLib_Out", "overwrite": true },
//!     "options": { "include_same_dir": true, "root_include": true }
//! }
//! ```
//!
//! Only `lib_path` is required; everything else has defaults. Loading and
//! validation are both fatal on failure, before any file is touched.

pub mod loader;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use loader::ConfigLoader;
pub use schema::{Config, OutputConfig, RewriteOptions};
pub use validator::ConfigValidator;
