//! Plain text report: `path:line: content` per captured line.

use std::io::{self, Write};

use colored::Colorize;
use regex::Regex;

use crate::matcher::Comment;
use crate::output::Formatter;
use crate::patterns::PatternSet;
use crate::summary::Summary;

/// Delimiter between match blocks when context spans multiple lines.
const MULTILINE_DELIMITER: &str = "--";

pub struct TxtFormatter<'a> {
    /// More than one line is captured per match, so blocks get delimited.
    multiline: bool,
    /// When set, match segments are colorized with the winning pattern's
    /// regex. Only meaningful for terminal output.
    highlight: Option<&'a PatternSet>,
}

impl<'a> TxtFormatter<'a> {
    pub fn plain(multiline: bool) -> Self {
        Self {
            multiline,
            highlight: None,
        }
    }

    pub fn highlighted(multiline: bool, patterns: &'a PatternSet) -> Self {
        Self {
            multiline,
            highlight: Some(patterns),
        }
    }

    fn render_line(&self, comment: &Comment, line: &str) -> String {
        let regex = self
            .highlight
            .and_then(|patterns| patterns.regex_for(&comment.pattern));
        match regex {
            Some(regex) => highlight_segments(line, regex),
            None => line.to_string(),
        }
    }
}

impl Formatter for TxtFormatter<'_> {
    fn kind(&self) -> &'static str {
        "TXT"
    }

    fn write_header(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn write_data(
        &self,
        out: &mut dyn Write,
        comments: &[Comment],
        _summary: &Summary,
    ) -> io::Result<()> {
        if self.multiline {
            writeln!(out, "{MULTILINE_DELIMITER}")?;
        }

        for comment in comments {
            let mut position = comment.position;
            for line in &comment.lines {
                writeln!(
                    out,
                    "{}:{}: {}",
                    comment.path.display(),
                    position,
                    self.render_line(comment, line)
                )?;
                position += 1;
            }

            if self.multiline {
                writeln!(out, "{MULTILINE_DELIMITER}")?;
            }
        }

        Ok(())
    }

    fn write_footer(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Rebuild `line` with every regex match wrapped in a bold red ANSI span.
fn highlight_segments(line: &str, re: &Regex) -> String {
    let mut result = String::with_capacity(line.len() + 16);
    let mut last = 0;
    for m in re.find_iter(line) {
        if m.start() > last {
            result.push_str(&line[last..m.start()]);
        }
        result.push_str(&line[m.start()..m.end()].red().bold().to_string());
        last = m.end();
    }
    if last < line.len() {
        result.push_str(&line[last..]);
    }
    result
}
