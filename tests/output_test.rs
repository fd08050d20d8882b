use std::fs;
use std::path::PathBuf;

use todos::output::{
    HtmlFormatter, OutputOptions, OutputWriter, TxtFormatter, XmlFormatter, write_report,
};
use todos::{Comment, Config, PatternSet, SearchOutcome, Strictness, Summary};

fn sample_outcome() -> (Config, PatternSet, SearchOutcome) {
    let cfg = Config {
        patterns: vec!["TODO".to_string(), "FIXME".to_string()],
        ..Default::default()
    };
    let patterns =
        PatternSet::compile(&cfg.patterns, cfg.ignore_case, Strictness::Strict).unwrap();

    let comments = vec![
        Comment {
            pattern: "TODO".to_string(),
            path: PathBuf::from("src/a.rs"),
            position: 3,
            lines: vec!["// TODO first".to_string()],
        },
        Comment {
            pattern: "TODO".to_string(),
            path: PathBuf::from("src/b.rs"),
            position: 1,
            lines: vec!["// TODO second".to_string()],
        },
        Comment {
            pattern: "FIXME".to_string(),
            path: PathBuf::from("src/b.rs"),
            position: 7,
            lines: vec!["// FIXME third".to_string()],
        },
    ];

    let mut summary = Summary::new(&cfg.patterns);
    summary.total_directories = 2;
    summary.record_file(PathBuf::from("src/a.rs"), ["TODO"].into_iter());
    summary.record_file(PathBuf::from("src/b.rs"), ["TODO", "FIXME"].into_iter());
    summary.record_file(PathBuf::from("src/empty.rs"), std::iter::empty());

    (cfg, patterns, SearchOutcome { comments, summary })
}

fn render(formatter: &dyn todos::output::Formatter, outcome: &SearchOutcome) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, formatter, outcome).unwrap();
    String::from_utf8(buf).unwrap()
}

// ============ TXT FORMAT TESTS ============

#[test]
fn test_txt_lines_follow_path_position_content_shape() {
    let (_, _, outcome) = sample_outcome();
    let out = render(&TxtFormatter::plain(false), &outcome);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "src/a.rs:3: // TODO first",
            "src/b.rs:1: // TODO second",
            "src/b.rs:7: // FIXME third",
        ]
    );
}

#[test]
fn test_txt_multiline_blocks_are_delimited() {
    let (_, _, mut outcome) = sample_outcome();
    outcome.comments.truncate(1);
    outcome.comments[0].lines.push("next line".to_string());

    let out = render(&TxtFormatter::plain(true), &outcome);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        ["--", "src/a.rs:3: // TODO first", "src/a.rs:4: next line", "--"]
    );
}

// ============ XML FORMAT TESTS ============

#[test]
fn test_xml_document_structure() {
    let (cfg, _, outcome) = sample_outcome();
    let out = render(&XmlFormatter::new(cfg.encoding.name()), &outcome);

    assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
    assert!(out.contains("<Todos>"));
    assert!(out.contains("<Comments>"));
    assert!(out.contains(r#"<Comment pattern="TODO" file="src/a.rs" line="3">"#));
    assert!(out.contains("\t\t\t// TODO first"));
    assert!(out.ends_with("</Todos>\n"));
    assert_eq!(out.matches("</Comment>").count(), 3);
}

#[test]
fn test_xml_escapes_special_characters() {
    let (cfg, _, mut outcome) = sample_outcome();
    outcome.comments.truncate(1);
    outcome.comments[0].pattern = "A&B".to_string();
    outcome.comments[0].lines = vec!["// <b>\"quoted\" & more</b>".to_string()];

    let out = render(&XmlFormatter::new(cfg.encoding.name()), &outcome);
    assert!(out.contains(r#"pattern="A&amp;B""#));
    assert!(out.contains("&lt;b&gt;&quot;quoted&quot; &amp; more&lt;/b&gt;"));
    assert!(!out.contains("<b>"));
}

// ============ HTML FORMAT TESTS ============

#[test]
fn test_html_report_sections_and_counts() {
    let (cfg, _, outcome) = sample_outcome();
    let opts = OutputOptions::default();
    let out = render(&HtmlFormatter::new(&cfg, &opts), &outcome);

    assert!(out.contains("<h1 id=\"commentsReport\">Comments Report</h1>"));
    assert!(out.contains("<td>Total Files</td>"));
    assert!(out.contains("<td>Total Directories</td>"));
    // Per-pattern table is sorted by descending occurrences: TODO(2), FIXME(1).
    let todo_at = out.find("<td>TODO</td>").unwrap();
    let fixme_at = out.find("<td>FIXME</td>").unwrap();
    assert!(todo_at < fixme_at);
    // Zero-count files are excluded from the per-file table.
    assert!(!out.contains("empty.rs</a></td>"));
    // Details carry the captured content in a pre block.
    assert!(out.contains("<pre>// TODO first</pre>"));
}

#[test]
fn test_html_escapes_content() {
    let (cfg, _, mut outcome) = sample_outcome();
    outcome.comments.truncate(1);
    outcome.comments[0].lines = vec!["// TODO <script>".to_string()];

    let opts = OutputOptions::default();
    let out = render(&HtmlFormatter::new(&cfg, &opts), &outcome);
    assert!(out.contains("&lt;script&gt;"));
    assert!(!out.contains("<script>"));
}

// ============ OUTPUT WRITER TESTS ============

#[test]
fn test_writer_produces_all_requested_formats() {
    let (cfg, patterns, outcome) = sample_outcome();
    let td = tempfile::tempdir().unwrap();

    let opts = OutputOptions {
        out_txt: Some(td.path().join("report.txt")),
        out_xml: Some(td.path().join("report.xml")),
        out_html: Some(td.path().join("report.html")),
        ..Default::default()
    };
    OutputWriter::new(&cfg, &opts)
        .output(&outcome, &patterns)
        .unwrap();

    let txt = fs::read_to_string(td.path().join("report.txt")).unwrap();
    assert!(txt.contains("src/a.rs:3: // TODO first"));
    let xml = fs::read_to_string(td.path().join("report.xml")).unwrap();
    assert!(xml.contains("<Todos>"));
    let html = fs::read_to_string(td.path().join("report.html")).unwrap();
    assert!(html.contains("Comments Report"));
}

#[test]
fn test_existing_output_is_kept_without_force() {
    let (cfg, patterns, outcome) = sample_outcome();
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("report.txt");
    fs::write(&path, "previous run\n").unwrap();

    let opts = OutputOptions {
        out_txt: Some(path.clone()),
        ..Default::default()
    };
    OutputWriter::new(&cfg, &opts)
        .output(&outcome, &patterns)
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n");
}

#[test]
fn test_force_overwrites_existing_output() {
    let (cfg, patterns, outcome) = sample_outcome();
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("report.txt");
    fs::write(&path, "previous run\n").unwrap();

    let opts = OutputOptions {
        out_txt: Some(path.clone()),
        force: true,
        ..Default::default()
    };
    OutputWriter::new(&cfg, &opts)
        .output(&outcome, &patterns)
        .unwrap();

    let txt = fs::read_to_string(&path).unwrap();
    assert!(!txt.contains("previous run"));
    assert!(txt.contains("src/a.rs:3: // TODO first"));
}

#[test]
fn test_report_files_use_configured_encoding() {
    let (mut cfg, patterns, mut outcome) = sample_outcome();
    cfg.encoding = todos::config::resolve_encoding("windows-1252").unwrap();
    outcome.comments.truncate(1);
    outcome.comments[0].lines = vec!["// TODO café".to_string()];

    let td = tempfile::tempdir().unwrap();
    let opts = OutputOptions {
        out_txt: Some(td.path().join("report.txt")),
        out_xml: Some(td.path().join("report.xml")),
        ..Default::default()
    };
    OutputWriter::new(&cfg, &opts)
        .output(&outcome, &patterns)
        .unwrap();

    // "café" is the single byte 0xE9 in Windows-1252, not the UTF-8 pair.
    let txt = fs::read(td.path().join("report.txt")).unwrap();
    assert!(txt.windows(4).any(|w| w == b"caf\xe9".as_slice()));
    assert!(!txt.windows(2).any(|w| w == b"\xc3\xa9".as_slice()));

    // The XML declaration names the encoding the bytes are written in.
    let xml = fs::read(td.path().join("report.xml")).unwrap();
    let header = String::from_utf8_lossy(&xml);
    assert!(header.contains(r#"encoding="windows-1252""#));
    assert!(xml.windows(4).any(|w| w == b"caf\xe9".as_slice()));
}

#[test]
fn test_unwritable_output_destination_is_fatal() {
    let (cfg, patterns, outcome) = sample_outcome();
    let td = tempfile::tempdir().unwrap();

    let opts = OutputOptions {
        out_txt: Some(td.path().join("missing-dir/report.txt")),
        ..Default::default()
    };
    let err = OutputWriter::new(&cfg, &opts)
        .output(&outcome, &patterns)
        .unwrap_err();
    assert!(matches!(err, todos::TodosError::Output { kind: "TXT", .. }));
}
