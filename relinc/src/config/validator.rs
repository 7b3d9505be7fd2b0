//! Configuration validation.
//!
//! Structural checks performed before any filesystem work. Existence of
//! the library path is checked later, by the output-preparation step,
//! which also owns the overwrite decision.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Validates configuration before a run.
///
/// # Examples
///
/// ```
/// use relinc::config::{Config, ConfigValidator};
///
/// let config: Config = serde_json::from_str(r#"{"lib_path": "MyLib"}"#).unwrap();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for empty paths or an output directory
    /// that overlaps the library tree.
    pub fn validate(config: &Config) -> Result<()> {
        if config.lib_path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: "lib_path".into(),
                message: "cannot be empty".into(),
            });
        }

        if config.out.dir.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: "out.dir".into(),
                message: "cannot be empty".into(),
            });
        }

        // The output directory is deleted and recreated; it must not overlap
        // the library tree it is copied from.
        if Self::overlaps(&config.out.dir, &config.lib_path) {
            return Err(Error::Validation {
                field: "out.dir".into(),
                message: format!(
                    "output directory {} overlaps library path {}",
                    config.out.dir.display(),
                    config.lib_path.display()
                ),
            });
        }

        for (i, root) in config.include_paths.iter().enumerate() {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: format!("include_paths[{i}]"),
                    message: "cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    fn overlaps(a: &Path, b: &Path) -> bool {
        a.starts_with(b) || b.starts_with(a)
    }
}
