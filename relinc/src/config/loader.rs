//! Configuration file loading.
//!
//! This module handles reading and parsing the JSON config file named on
//! the command line. A missing or unparsable file is a fatal configuration
//! error raised before any file is touched.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Loads the configuration file.
///
/// # Examples
///
/// ```no_run
/// use relinc::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("relinc.json")).unwrap();
/// println!("library: {}", config.lib_path.display());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file does not exist or cannot
    /// be read, and [`Error::Configuration`] if the JSON is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "config file does not exist".to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read config file: {e}"),
        })?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
