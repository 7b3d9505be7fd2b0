//! Configuration schema definitions.
//!
//! This module defines the JSON configuration structure for relinc: the
//! library path to copy, the ordered include-search directories, output
//! directory settings, and the rewrite policy flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Deserialized from the JSON config file passed on the command line.
/// Unknown keys are rejected so typos fail fast.
///
/// # Examples
///
/// ```
/// use relinc::config::Config;
///
/// let config: Config = serde_json::from_str(r#"{
///     "lib_path": "MyLib",
///     "include_paths": ["MyLib/include"]
/// }"#).unwrap();
/// assert_eq!(config.out.dir.to_str(), Some("RelativeLib_Out"));
/// assert!(config.out.overwrite);
/// assert!(config.options.include_same_dir);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Library tree that will be copied into the output directory and
    /// rewritten.
    pub lib_path: PathBuf,

    /// Ordered include-search directories; the first root containing a
    /// token wins. Relative entries are resolved against the working root.
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,

    /// Output directory settings.
    #[serde(default)]
    pub out: OutputConfig,

    /// Rewrite policy flags.
    #[serde(default)]
    pub options: RewriteOptions,
}

/// Output directory settings.
///
/// # Examples
///
/// ```
/// use relinc::config::OutputConfig;
///
/// let out = OutputConfig::default();
/// assert_eq!(out.dir.to_str(), Some("RelativeLib_Out"));
/// assert!(out.overwrite);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the library tree is copied into.
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,

    /// Whether a pre-existing output directory may be deleted and replaced.
    #[serde(default = "default_true")]
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
            overwrite: true,
        }
    }
}

/// Rewrite policy flags.
///
/// # Examples
///
/// ```
/// use relinc::config::RewriteOptions;
///
/// let options = RewriteOptions::default();
/// assert!(options.include_same_dir);
/// assert!(options.root_include);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RewriteOptions {
    /// When false, a target resolved to the includer's own directory is
    /// addressed through the parent directory instead of bare-filename
    /// form, sidestepping `-I` search-path ambiguity between same-named
    /// headers.
    #[serde(default = "default_true")]
    pub include_same_dir: bool,

    /// When true, targets unrelated to the includer are addressed relative
    /// to the library root with no `../` prefix, assuming the build system
    /// adds the library root to the search path (e.g. Arduino).
    #[serde(default = "default_true")]
    pub root_include: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            include_same_dir: true,
            root_include: true,
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("RelativeLib_Out")
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let json = r#"{"lib_path": "MyLib"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.lib_path, PathBuf::from("MyLib"));
        assert!(config.include_paths.is_empty());
        assert_eq!(config.out, OutputConfig::default());
        assert_eq!(config.options, RewriteOptions::default());
    }

    #[test]
    fn test_complete_config() {
        let json = r#"{
            "lib_path": "MyLib",
            "include_paths": ["MyLib/include", "MyLib/src"],
            "out": {"dir": "Build_Out", "overwrite": false},
            "options": {"include_same_dir": false, "root_include": false}
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.include_paths.len(), 2);
        assert_eq!(config.out.dir, PathBuf::from("Build_Out"));
        assert!(!config.out.overwrite);
        assert!(!config.options.include_same_dir);
        assert!(!config.options.root_include);
    }

    #[test]
    fn test_missing_lib_path_is_rejected() {
        let json = r#"{"include_paths": []}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_deny_unknown_fields() {
        let json = r#"{"lib_path": "MyLib", "unknown_field": 1}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_nested_deny_unknown_fields() {
        let json = r#"{"lib_path": "MyLib", "options": {"root_inclde": true}}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_out_section() {
        let json = r#"{"lib_path": "MyLib", "out": {"overwrite": false}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.out.dir, PathBuf::from("RelativeLib_Out"));
        assert!(!config.out.overwrite);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            lib_path: PathBuf::from("MyLib"),
            include_paths: vec![PathBuf::from("MyLib/include")],
            out: OutputConfig::default(),
            options: RewriteOptions {
                include_same_dir: false,
                root_include: true,
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
