//! Run configuration with the built-in defaults.
//!
//! A `Config` is built once at startup (usually from the CLI), never mutated
//! afterwards, and passed by reference to the search and output layers.
//! Compiled patterns live separately in `PatternSet`.

use std::path::PathBuf;

use encoding_rs::{Encoding, UTF_8};

/// Comment markers searched as literal substrings in every line.
pub const DEFAULT_COMMENTS: &[&str] = &["#", "//", "/*", "<!--"];

/// Patterns searched inside comment-bearing lines.
pub const DEFAULT_PATTERNS: &[&str] = &[r"\bTODO\b", r"\bFIXME\b"];

/// Directory names whose whole subtree is skipped.
pub const DEFAULT_SUPPRESSED: &[&str] = &[".git", ".svn", "CVS"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Literal substrings that mark a line as comment-bearing.
    pub comments: Vec<String>,
    /// Regular expression sources, in priority order.
    pub patterns: Vec<String>,
    /// File extension allow-list; `None` allows all files.
    pub extensions: Option<Vec<String>>,
    /// Directory names excluded together with their subtrees.
    pub suppressed: Vec<String>,
    /// Encoding used to decode scanned files.
    pub encoding: &'static Encoding,
    /// Lines captured per match (the matching line plus trailing context).
    pub num_lines: usize,
    pub ignore_case: bool,
    /// Root directories to scan.
    pub directories: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comments: DEFAULT_COMMENTS.iter().map(|s| s.to_string()).collect(),
            patterns: DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect(),
            extensions: None,
            suppressed: DEFAULT_SUPPRESSED.iter().map(|s| s.to_string()).collect(),
            encoding: UTF_8,
            num_lines: 1,
            ignore_case: false,
            directories: vec![PathBuf::from(".")],
        }
    }
}

/// Normalize a file extension to carry a leading dot (`py` -> `.py`).
pub fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

/// Resolve an encoding label (e.g. `utf-8`, `latin1`) to an encoding.
///
/// Returns `None` for unrecognized labels; callers are expected to fall back
/// to UTF-8 with a warning rather than abort.
pub fn resolve_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
}
