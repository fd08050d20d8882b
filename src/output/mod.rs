//! Report rendering.
//!
//! The search core hands the finished match list and `Summary` to this
//! module and never branches on formats itself. Each format implements the
//! `Formatter` trait; `OutputWriter` decides which formatters run and where
//! their output goes (files or stdout).

mod html;
mod txt;
mod xml;

pub use html::HtmlFormatter;
pub use txt::TxtFormatter;
pub use xml::XmlFormatter;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, TodosError};
use crate::matcher::Comment;
use crate::patterns::PatternSet;
use crate::search::SearchOutcome;
use crate::summary::Summary;

/// A report format: header, data, footer, written in that order.
pub trait Formatter {
    /// Short format name used in diagnostics, e.g. `TXT`.
    fn kind(&self) -> &'static str;

    fn write_header(&self, out: &mut dyn Write) -> io::Result<()>;

    fn write_data(
        &self,
        out: &mut dyn Write,
        comments: &[Comment],
        summary: &Summary,
    ) -> io::Result<()>;

    fn write_footer(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Output destinations and policies, typically taken from the CLI.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub out_txt: Option<PathBuf>,
    pub out_xml: Option<PathBuf>,
    pub out_html: Option<PathBuf>,
    /// Overwrite existing output files.
    pub force: bool,
    /// Highlight match segments in plain-text stdout output.
    pub color: bool,
}

/// Writes the search results in every requested format.
pub struct OutputWriter<'a> {
    cfg: &'a Config,
    opts: &'a OutputOptions,
}

impl<'a> OutputWriter<'a> {
    pub fn new(cfg: &'a Config, opts: &'a OutputOptions) -> Self {
        Self { cfg, opts }
    }

    /// Write all requested reports; the plain-text report goes to stdout
    /// when no output file is named at all.
    pub fn output(&self, outcome: &SearchOutcome, patterns: &PatternSet) -> Result<()> {
        let multiline = self.cfg.num_lines > 1;
        let mut written = false;

        if let Some(path) = &self.opts.out_txt {
            self.output_to_file(path, &TxtFormatter::plain(multiline), outcome)?;
            written = true;
        }

        if let Some(path) = &self.opts.out_xml {
            let formatter = XmlFormatter::new(self.cfg.encoding.name());
            self.output_to_file(path, &formatter, outcome)?;
            written = true;
        }

        if let Some(path) = &self.opts.out_html {
            let formatter = HtmlFormatter::new(self.cfg, self.opts);
            self.output_to_file(path, &formatter, outcome)?;
            written = true;
        }

        if !written {
            let formatter = if self.opts.color {
                TxtFormatter::highlighted(multiline, patterns)
            } else {
                TxtFormatter::plain(multiline)
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_report(&mut out, &formatter, outcome).map_err(TodosError::Io)?;
        }

        Ok(())
    }

    fn output_to_file(
        &self,
        path: &Path,
        formatter: &dyn Formatter,
        outcome: &SearchOutcome,
    ) -> Result<()> {
        log::debug!("writing {} output: {}", formatter.kind(), path.display());

        if path.exists() && !self.opts.force {
            log::warn!(
                "file exists, use force parameter to override: {}",
                path.display()
            );
            return Ok(());
        }

        let into_error = |source| TodosError::Output {
            kind: formatter.kind(),
            path: path.to_path_buf(),
            source,
        };

        // Reports render as UTF-8 internally and are transcoded on the way
        // out, so the encoding the XML/HTML headers declare is the encoding
        // of the bytes on disk.
        let mut rendered = Vec::new();
        write_report(&mut rendered, formatter, outcome).map_err(into_error)?;
        let text = String::from_utf8_lossy(&rendered);
        let (bytes, _, had_errors) = self.cfg.encoding.encode(&text);
        if had_errors {
            log::warn!(
                "some characters are not representable in {}: {}",
                self.cfg.encoding.name(),
                path.display()
            );
        }
        fs::write(path, &bytes).map_err(into_error)
    }
}

/// Run one formatter over a stream: header, data, footer.
pub fn write_report(
    out: &mut dyn Write,
    formatter: &dyn Formatter,
    outcome: &SearchOutcome,
) -> io::Result<()> {
    formatter.write_header(out)?;
    formatter.write_data(out, &outcome.comments, &outcome.summary)?;
    formatter.write_footer(out)
}

/// Replace the XML/HTML special characters `& " < >` with entities.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
