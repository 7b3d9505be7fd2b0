//! The include rewrite engine.
//!
//! For each line of a source file the engine decides whether the include
//! directive needs fixing, and if so what the corrected directive is:
//!
//! 1. An include that already resolves relative to its file is left alone,
//!    even if it could also be expressed differently.
//! 2. Otherwise the token (minus any leading `../` segments) is looked up
//!    in the configured search roots; an unlocatable token is left alone.
//! 3. The relation between the including file and the located target picks
//!    the rewrite shape: subpath for targets below the includer, `../`
//!    hops for targets above it, library-root-relative addressing for
//!    unrelated targets.
//!
//! A file's transformation is a pure function of its contents, its path,
//! and the immutable configuration; files are independent of each other.

use std::path::{Path, PathBuf};

use crate::config::RewriteOptions;
use crate::fs::Filesystem;
use crate::include::parser::IncludeParser;
use crate::include::render::RelativePathBuilder;
use crate::include::resolver::SearchResolver;
use crate::logging::Logger;
use crate::path::{nesting_depth, IncludeRelation};

/// Result of rewriting one file.
#[derive(Debug, Clone)]
pub struct FileRewrite {
    /// The full transformed file contents.
    pub contents: String,
    /// Number of include directives that were rewritten.
    pub rewritten: usize,
}

/// Per-file include rewriter.
///
/// Holds only the immutable run configuration: the working root, the
/// resolved search roots, and the policy flags.
///
/// # Examples
///
/// ```
/// use relinc::config::RewriteOptions;
/// use relinc::fs::MemoryFilesystem;
/// use relinc::include::RewriteEngine;
/// use relinc::{Logger, LogLevel};
/// use std::path::{Path, PathBuf};
///
/// let mut fs = MemoryFilesystem::new();
/// fs.insert("/out/src/sub/bar.h");
///
/// let logger = Logger::new(LogLevel::Quiet);
/// let engine = RewriteEngine::new(
///     PathBuf::from("/out"),
///     &[PathBuf::from("src/sub")],
///     RewriteOptions::default(),
///     &fs,
///     &logger,
/// );
///
/// let result = engine
///     .rewrite_file(Path::new("/out/src/foo.cpp"), "#include <bar.h>\n")
///     .unwrap();
/// assert_eq!(result.contents, "#include \"sub/bar.h\"\n");
/// assert_eq!(result.rewritten, 1);
/// ```
pub struct RewriteEngine<'a> {
    root: PathBuf,
    resolver: SearchResolver,
    options: RewriteOptions,
    fs: &'a dyn Filesystem,
    logger: &'a Logger,
}

impl<'a> RewriteEngine<'a> {
    /// Creates an engine for one run.
    ///
    /// `root` is the working root (the copied output tree); relative search
    /// roots are anchored there.
    #[must_use]
    pub fn new(
        root: PathBuf,
        search_roots: &[PathBuf],
        options: RewriteOptions,
        fs: &'a dyn Filesystem,
        logger: &'a Logger,
    ) -> Self {
        let resolver = SearchResolver::new(search_roots, &root);
        Self {
            root,
            resolver,
            options,
            fs,
            logger,
        }
    }

    /// The working root this engine rewrites against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rewrite every fixable include directive in `contents`.
    ///
    /// Returns `None` when no line changed. Untouched lines are preserved
    /// byte-for-byte; rewritten lines keep their original terminator.
    #[must_use]
    pub fn rewrite_file(&self, file: &Path, contents: &str) -> Option<FileRewrite> {
        let mut out = String::with_capacity(contents.len());
        let mut rewritten = 0;

        for segment in contents.split_inclusive('\n') {
            let (body, terminator) = split_line_terminator(segment);
            match self.rewrite_line(file, body) {
                Some(new_line) => {
                    out.push_str(&new_line);
                    out.push_str(terminator);
                    rewritten += 1;
                }
                None => out.push_str(segment),
            }
        }

        (rewritten > 0).then_some(FileRewrite {
            contents: out,
            rewritten,
        })
    }

    /// Rewrite a single line, or `None` to keep it unchanged.
    fn rewrite_line(&self, file: &Path, line: &str) -> Option<String> {
        let token = IncludeParser::parse(line)?;
        let includer_dir = file.parent().unwrap_or_else(|| Path::new(""));

        // An include that already works always wins over resolution.
        if self.fs.exists(&includer_dir.join(token.lookup_path())) {
            self.logger
                .debug(&format!("include {} already valid in {}", token.as_str(), file.display()));
            return None;
        }

        // Leading ../ segments encode the original author's layout, not the
        // real one; only the tail is a trustworthy search key.
        let (_, tail) = token.strip_parent_segments();
        let Some(target) = self.resolver.resolve(&tail, self.fs) else {
            self.logger
                .debug(&format!("include {} not found in any search root", token.as_str()));
            return None;
        };

        let new_line = match IncludeRelation::classify(file, &target) {
            IncludeRelation::Down { subpath } => self.render_down(includer_dir, &target, subpath)?,
            IncludeRelation::Up { levels } => {
                RelativePathBuilder::build(levels, Path::new(target.file_name()?))
            }
            IncludeRelation::Unrelated => self.render_root_relative(includer_dir, &target),
        };

        self.logger.debug(&format!(
            "include {} changed to {new_line} in {}",
            token.as_str(),
            file.display()
        ));
        Some(new_line)
    }

    /// Target at or below the includer's directory.
    fn render_down(&self, includer_dir: &Path, target: &Path, subpath: PathBuf) -> Option<String> {
        let at_root = includer_dir == self.root;
        let same_dir = subpath.components().count() == 1;

        if !self.options.include_same_dir && !at_root && same_dir {
            // Route through the parent so a flat -I search path cannot pick
            // up a same-named header from another directory.
            let folder = includer_dir.file_name()?;
            let tail = Path::new(folder).join(target.file_name()?);
            return Some(RelativePathBuilder::build(1, &tail));
        }

        Some(RelativePathBuilder::build(0, &subpath))
    }

    /// Target in an unrelated branch: address it from the library root.
    fn render_root_relative(&self, includer_dir: &Path, target: &Path) -> String {
        let root_rel = target
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| target.to_path_buf());

        let levels = if self.options.root_include {
            // The build system adds the library root to the search path.
            0
        } else {
            nesting_depth(includer_dir, &self.root)
        };

        RelativePathBuilder::build(levels, &root_rel)
    }
}

/// Split a `split_inclusive('\n')` segment into its body and terminator.
fn split_line_terminator(segment: &str) -> (&str, &str) {
    if let Some(body) = segment.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = segment.strip_suffix('\n') {
        (body, "\n")
    } else {
        (segment, "")
    }
}
