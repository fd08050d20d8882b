//! XML report: one `<Comment>` element per match.

use std::io::{self, Write};

use crate::matcher::Comment;
use crate::output::{Formatter, escape};
use crate::summary::Summary;

/// Version of the XML document structure, independent of the crate version.
const XML_FORMAT_VERSION: &str = "0.1.0";

pub struct XmlFormatter {
    encoding: &'static str,
}

impl XmlFormatter {
    pub fn new(encoding: &'static str) -> Self {
        Self { encoding }
    }
}

impl Formatter for XmlFormatter {
    fn kind(&self) -> &'static str {
        "XML"
    }

    fn write_header(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            r#"<?xml version="1.0" encoding="{}" standalone="yes"?>"#,
            self.encoding
        )?;
        writeln!(out, "<Todos>")?;
        writeln!(
            out,
            "\t<Version todos=\"{}\" format=\"{}\"/>",
            env!("CARGO_PKG_VERSION"),
            XML_FORMAT_VERSION
        )?;
        writeln!(out, "\t<Comments>")
    }

    fn write_data(
        &self,
        out: &mut dyn Write,
        comments: &[Comment],
        _summary: &Summary,
    ) -> io::Result<()> {
        for comment in comments {
            writeln!(
                out,
                "\t\t<Comment pattern=\"{}\" file=\"{}\" line=\"{}\">",
                escape(&comment.pattern),
                escape(&comment.path.to_string_lossy()),
                comment.position
            )?;

            for line in &comment.lines {
                writeln!(out, "\t\t\t{}", escape(line))?;
            }

            writeln!(out, "\t\t</Comment>")?;
        }

        Ok(())
    }

    fn write_footer(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\t</Comments>")?;
        writeln!(out, "</Todos>")
    }
}
