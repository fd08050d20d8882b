//! Per-line matching and context capture.

use std::path::{Path, PathBuf};

use crate::patterns::PatternSet;

/// One recorded pattern occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Source text of the pattern that matched.
    pub pattern: String,
    /// File the match was found in.
    pub path: PathBuf,
    /// 1-based line number of the matching line.
    pub position: usize,
    /// The matching line plus trailing context, trailing whitespace stripped.
    /// Always at least one line; clipped at end of file.
    pub lines: Vec<String>,
}

/// Decides for a single line whether it yields a `Comment`.
pub struct LineMatcher<'a> {
    comments: &'a [String],
    patterns: &'a PatternSet,
    num_lines: usize,
}

impl<'a> LineMatcher<'a> {
    pub fn new(comments: &'a [String], patterns: &'a PatternSet, num_lines: usize) -> Self {
        Self {
            comments,
            patterns,
            // The match record always carries the matching line itself.
            num_lines: num_lines.max(1),
        }
    }

    /// Test one line of a file.
    ///
    /// A line only qualifies when it contains at least one comment marker as
    /// a literal substring; this cheap gate runs before any regex. Patterns
    /// are then tried in configuration order and the first match wins, so a
    /// line produces at most one `Comment`. The substring gate is not a
    /// lexer: markers inside string literals count, and pattern tokens on a
    /// bare continuation line of a block comment do not.
    pub fn match_line(
        &self,
        path: &Path,
        position: usize,
        line: &str,
        all_lines: &[&str],
    ) -> Option<Comment> {
        if !self.contains_comment(line) {
            return None;
        }

        for pattern in self.patterns.iter() {
            if pattern.regex.is_match(line) {
                return Some(Comment {
                    pattern: pattern.text.clone(),
                    path: path.to_path_buf(),
                    position,
                    lines: capture_lines(all_lines, position - 1, self.num_lines),
                });
            }
        }

        None
    }

    fn contains_comment(&self, line: &str) -> bool {
        self.comments.iter().any(|marker| line.contains(marker.as_str()))
    }
}

/// Take up to `count` lines starting at zero-based `start`, clipped at end
/// of file, with trailing whitespace stripped from each line.
fn capture_lines(lines: &[&str], start: usize, count: usize) -> Vec<String> {
    let end = (start + count).min(lines.len());
    lines[start..end]
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}
