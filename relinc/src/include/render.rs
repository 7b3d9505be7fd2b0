//! Relative include-directive rendering.
//!
//! Rewritten directives are always emitted in quoted form with forward
//! slashes, regardless of how the original was written.

use std::path::Path;

/// Builds replacement include-directive text.
///
/// # Examples
///
/// ```
/// use relinc::include::RelativePathBuilder;
/// use std::path::Path;
///
/// let line = RelativePathBuilder::build(2, Path::new("x/y.h"));
/// assert_eq!(line, "#include \"../../x/y.h\"");
///
/// // Zero levels with a bare filename is a same-directory include.
/// assert_eq!(RelativePathBuilder::build(0, Path::new("bar.h")), "#include \"bar.h\"");
/// ```
pub struct RelativePathBuilder;

impl RelativePathBuilder {
    /// Produce `#include "…"` text with `up_levels` leading `../` segments
    /// followed by `tail`, slashes normalized to forward slashes. The line
    /// terminator is the caller's concern.
    #[must_use]
    pub fn build(up_levels: usize, tail: &Path) -> String {
        let tail = tail.to_string_lossy().replace('\\', "/");
        format!("#include \"{}{}\"", "../".repeat(up_levels), tail)
    }
}
