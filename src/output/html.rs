//! HTML report: a self-contained page with summary tables and match details.

use std::env;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::config::Config;
use crate::matcher::Comment;
use crate::output::{Formatter, OutputOptions, escape};
use crate::summary::Summary;

pub struct HtmlFormatter<'a> {
    cfg: &'a Config,
    opts: &'a OutputOptions,
}

impl<'a> HtmlFormatter<'a> {
    pub fn new(cfg: &'a Config, opts: &'a OutputOptions) -> Self {
        Self { cfg, opts }
    }

    fn write_toc(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            r##"<div class="menu_title">Menu</div>

<ul>
<li><a href="#commentsReport">Comments Report</a>
    <ul>
    <li><a href="#inputParameters">Input Parameters</a></li>
    <li><a href="#summary">Summary</a>
        <ul>
        <li><a href="#general">General</a></li>
        <li><a href="#per_patterns">Per Patterns</a></li>
        <li><a href="#per_files">Per Files</a></li>
        </ul>
    </li>
    <li><a href="#details">Details</a></li>
    </ul>
</li>
</ul>"##
        )
    }

    fn write_input_parameters(&self, out: &mut dyn Write) -> io::Result<()> {
        let working_dir = env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let command_line: Vec<String> = env::args().collect();

        writeln!(out, "<pre>")?;
        writeln!(out, "cd {}", escape(&working_dir))?;
        writeln!(out, "{}", escape(&command_line.join(" ")))?;
        writeln!(out, "</pre>")?;

        let extensions = match &self.cfg.extensions {
            Some(exts) => exts.join(", "),
            None => "all files".to_string(),
        };
        let out_path = |path: &Option<std::path::PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        let rows = [
            ("Working Directory", working_dir),
            ("Comments", self.cfg.comments.join(", ")),
            ("Patterns", self.cfg.patterns.join(", ")),
            ("Extensions", extensions),
            ("Suppressed Directories", self.cfg.suppressed.join(", ")),
            ("Encoding", self.cfg.encoding.name().to_string()),
            ("Ignore Case", self.cfg.ignore_case.to_string()),
            ("Number of Lines", self.cfg.num_lines.to_string()),
            ("Output TXT File", out_path(&self.opts.out_txt)),
            ("Output XML File", out_path(&self.opts.out_xml)),
            ("Output HTML File", out_path(&self.opts.out_html)),
            ("Force", self.opts.force.to_string()),
            (
                "Directories",
                self.cfg
                    .directories
                    .iter()
                    .map(|d| d.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        ];
        let rows: Vec<[String; 2]> = rows
            .into_iter()
            .map(|(name, value)| [name.to_string(), escape(&value)])
            .collect();
        write_table(out, &["Parameter", "Value"], &rows)
    }

    fn write_general_summary(&self, out: &mut dyn Write, summary: &Summary) -> io::Result<()> {
        let rows = [
            ["Searched Patterns".to_string(), summary.per_pattern.len().to_string()],
            [
                "Files with Matches".to_string(),
                summary.files_with_matches().to_string(),
            ],
            ["Total Files".to_string(), summary.total_files.to_string()],
            [
                "Total Directories".to_string(),
                summary.total_directories.to_string(),
            ],
        ];
        write_table(out, &["Parameter", "Value"], &rows)
    }

    fn write_per_pattern(&self, out: &mut dyn Write, summary: &Summary) -> io::Result<()> {
        let mut counted: Vec<(&String, &usize)> = summary.per_pattern.iter().collect();
        counted.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        let rows: Vec<[String; 2]> = counted
            .into_iter()
            .map(|(pattern, count)| [escape(pattern), count.to_string()])
            .collect();
        write_table(out, &["Pattern", "Occurrences"], &rows)
    }

    fn write_per_file(&self, out: &mut dyn Write, summary: &Summary) -> io::Result<()> {
        let mut counted: Vec<(&Path, usize)> = summary
            .per_file
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(path, &count)| (path.as_path(), count))
            .collect();
        counted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        let rows: Vec<[String; 2]> = counted
            .into_iter()
            .map(|(path, count)| [file_link(path), count.to_string()])
            .collect();
        write_table(out, &["File", "Occurrences"], &rows)
    }

    fn write_comments(&self, out: &mut dyn Write, comments: &[Comment]) -> io::Result<()> {
        let rows: Vec<[String; 4]> = comments
            .iter()
            .map(|comment| {
                [
                    file_link(&comment.path),
                    comment.position.to_string(),
                    escape(&comment.pattern),
                    format!("<pre>{}</pre>", escape(&comment.lines.join("\n"))),
                ]
            })
            .collect();
        write_table(out, &["File", "Line", "Pattern", "Content"], &rows)
    }
}

impl Formatter for HtmlFormatter<'_> {
    fn kind(&self) -> &'static str {
        "HTML"
    }

    fn write_header(&self, out: &mut dyn Write) -> io::Result<()> {
        let encoding = self.cfg.encoding.name();
        writeln!(
            out,
            r#"<!DOCTYPE html>
<html lang="en">

<head>
<meta charset="{encoding}" />
<title>Comments Report - todos</title>

<style type="text/css" media="all">
body
{{
    margin: 2em; padding: 0px;
    background-color: white; color: black;
    font-family: Verdana, "Bitstream Vera Sans", Geneva, Arial, sans-serif;
    font-size: 10pt; line-height: 1.6em;
}}

pre         {{ line-height: 1.1em; margin: 0.2em 0 0.2em 0; }}
a:hover     {{ color: blue; }}

table       {{ margin-top: 1em; margin-bottom: 1em; max-width: 100%; }}
th          {{ background-color: #AFB3CC; text-align: left; }}
th, td      {{ vertical-align: top; padding: 0.2em 0.5em 0.2em 0.5em; }}
tr          {{ background-color: #D0D0EE; }}
tr:hover    {{ background-color: #C0C0FF; }}

#page       {{ margin-left: 17%; }}
#sidebar    {{ position: fixed; top: 0px; left: 0px; width: 15%; padding: 2em; }}
#footer     {{ font-size: 9pt; margin-top: 2em; border-top: 1px solid silver;
              color: gray; clear: both; }}

#sidebar .menu_title {{ font-weight: bold; font-size: 14pt; }}
#sidebar ul {{ margin-left: 1em; padding-left: 0px; }}
#sidebar ul ul {{ margin-left: 2em; padding-left: 0px; }}
</style>

<style type="text/css" media="print">
#page       {{ margin-left: 0px; }}
#sidebar    {{ display: none; }}
</style>

</head>

<body>"#
        )
    }

    fn write_data(
        &self,
        out: &mut dyn Write,
        comments: &[Comment],
        summary: &Summary,
    ) -> io::Result<()> {
        writeln!(out, r#"<div id="sidebar">"#)?;
        self.write_toc(out)?;
        writeln!(out, r#"</div><!-- id="sidebar" -->"#)?;

        writeln!(out, r#"<div id="page">"#)?;
        writeln!(out, r##"<h1 id="commentsReport">Comments Report</h1>"##)?;

        writeln!(out, r##"<h2 id="inputParameters">Input Parameters</h2>"##)?;
        self.write_input_parameters(out)?;

        writeln!(out, r##"<h2 id="summary">Summary</h2>"##)?;
        writeln!(out, r##"<h3 id="general">General</h3>"##)?;
        self.write_general_summary(out, summary)?;

        writeln!(out, r##"<h3 id="per_patterns">Per Patterns</h3>"##)?;
        self.write_per_pattern(out, summary)?;

        writeln!(out, r##"<h3 id="per_files">Per Files</h3>"##)?;
        self.write_per_file(out, summary)?;

        writeln!(out, r##"<h2 id="details">Details</h2>"##)?;
        self.write_comments(out, comments)?;

        writeln!(out, r#"</div><!-- id="page" -->"#)
    }

    fn write_footer(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            r#"<p id="footer">Page generated: {}, todos {}.</p>"#,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

/// An anchor whose target is the absolute path and whose label is the path
/// as it was scanned.
fn file_link(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!(
        r#"<a href="{}">{}</a>"#,
        escape(&absolute.to_string_lossy()),
        escape(&path.to_string_lossy())
    )
}

/// Write one HTML table with a header row.
fn write_table<const N: usize>(
    out: &mut dyn Write,
    headers: &[&str; N],
    rows: &[[String; N]],
) -> io::Result<()> {
    writeln!(out, "<table>\n<thead>\n<tr>")?;
    for header in headers {
        writeln!(out, "<th>{header}</th>")?;
    }
    writeln!(out, "</tr>\n</thead>\n\n<tbody>")?;

    for row in rows {
        writeln!(out, "<tr>")?;
        for cell in row {
            writeln!(out, "<td>{cell}</td>")?;
        }
        writeln!(out, "</tr>")?;
    }

    writeln!(out, "</tbody>\n</table>")
}
