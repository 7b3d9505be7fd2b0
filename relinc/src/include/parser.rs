//! Include-directive recognition and token extraction.
//!
//! A line is an include directive when it has the shape: optional leading
//! whitespace, `#`, optional whitespace, `include`, optional whitespace,
//! then `<path>` or `"path"`. Both delimiter forms are treated identically;
//! anything else is not an include line and is passed through untouched by
//! the caller. Directives split across physical lines are not recognized.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

static INCLUDE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*#\s*include\s*(?:<([^>]+)>|"([^"]+)")"#)
        .expect("include directive pattern is valid")
});

/// The path text between the delimiters of an include directive, exactly as
/// written in source (separators preserved).
///
/// # Examples
///
/// ```
/// use relinc::include::IncludeParser;
///
/// let token = IncludeParser::parse("#include <sub/bar.h>").unwrap();
/// assert_eq!(token.as_str(), "sub/bar.h");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeToken {
    raw: String,
}

impl IncludeToken {
    /// The token exactly as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The token as a path, with backslashes normalized to forward slashes
    /// so Windows-style source survives on any host.
    ///
    /// # Examples
    ///
    /// ```
    /// use relinc::include::IncludeParser;
    /// use std::path::PathBuf;
    ///
    /// let token = IncludeParser::parse(r#"#include "sub\bar.h""#).unwrap();
    /// assert_eq!(token.lookup_path(), PathBuf::from("sub/bar.h"));
    /// ```
    #[must_use]
    pub fn lookup_path(&self) -> PathBuf {
        PathBuf::from(self.raw.replace('\\', "/"))
    }

    /// Splits off leading parent segments (`../` or `..\`), returning how
    /// many there were and the remaining tail as a lookup path.
    ///
    /// Upward-relative prefixes encode the original author's directory
    /// assumptions, not the true target location, so the resolver only ever
    /// sees the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use relinc::include::IncludeParser;
    /// use std::path::PathBuf;
    ///
    /// let token = IncludeParser::parse("#include \"../../inc/bar.h\"").unwrap();
    /// let (levels, tail) = token.strip_parent_segments();
    /// assert_eq!(levels, 2);
    /// assert_eq!(tail, PathBuf::from("inc/bar.h"));
    /// ```
    #[must_use]
    pub fn strip_parent_segments(&self) -> (usize, PathBuf) {
        let mut rest = self.raw.as_str();
        let mut levels = 0;
        loop {
            if let Some(tail) = rest.strip_prefix("../") {
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("..\\") {
                rest = tail;
            } else {
                break;
            }
            levels += 1;
        }
        (levels, PathBuf::from(rest.replace('\\', "/")))
    }
}

/// Recognizes include-directive lines and extracts their path token.
pub struct IncludeParser;

impl IncludeParser {
    /// Parse a single line, returning the include token if the line is an
    /// include directive.
    ///
    /// # Examples
    ///
    /// ```
    /// use relinc::include::IncludeParser;
    ///
    /// assert!(IncludeParser::parse("#include <foo.h>").is_some());
    /// assert!(IncludeParser::parse("  #  include \"foo.h\"").is_some());
    /// assert!(IncludeParser::parse("int include = 0;").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<IncludeToken> {
        let captures = INCLUDE_DIRECTIVE.captures(line)?;
        let raw = captures
            .get(1)
            .or_else(|| captures.get(2))?
            .as_str()
            .to_string();
        Some(IncludeToken { raw })
    }
}
