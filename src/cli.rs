//! Command-line argument parsing for the todos binary.
//!
//! This module defines the CLI interface (flags and options) and converts
//! parsed arguments into a `Config` plus `OutputOptions`. Usage errors are
//! clap's job and end the process with exit code 2 before we get here; an
//! unrecognized encoding is only a warning and falls back to UTF-8.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use todos::config::{self, Config};
use todos::output::OutputOptions;

/// Build the clap Command describing the todos CLI.
///
/// Separated from `from_matches` so the caller can initialize logging from
/// the `--verbose` flag before configuration warnings are emitted.
pub fn build_cli() -> Command {
    Command::new("todos")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search project directories for TODO, FIXME and similar comments")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Increase output verbosity"),
        )
        .arg(
            Arg::new("comment")
                .short('c')
                .long("comment")
                .value_name("MARKER")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("The comment markers that make a line eligible for matching"),
        )
        .arg(
            Arg::new("pattern")
                .short('e')
                .long("regexp")
                .value_name("PATTERN")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("The pattern to search for (regular expression)"),
        )
        .arg(
            Arg::new("num-lines")
                .short('A')
                .long("after-context")
                .value_name("NUM")
                .value_parser(value_parser!(usize))
                .help("Number of lines sent to the output together with the matching line"),
        )
        .arg(
            Arg::new("extension")
                .short('t')
                .long("file-ext")
                .value_name("EXT")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Check only files with the specified extension"),
        )
        .arg(
            Arg::new("suppressed")
                .short('D')
                .long("suppressed")
                .value_name("DIR")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Suppress the specified directory name and its whole subtree"),
        )
        .arg(
            Arg::new("encoding")
                .short('n')
                .long("encoding")
                .value_name("NAME")
                .help("The encoding of the scanned files"),
        )
        .arg(
            Arg::new("ignore-case")
                .short('i')
                .long("ignore-case")
                .action(ArgAction::SetTrue)
                .help("Ignore case distinctions in patterns"),
        )
        .arg(
            Arg::new("out-txt")
                .short('o')
                .long("out-txt")
                .value_name("TXT")
                .value_parser(value_parser!(PathBuf))
                .help("The output text file; standard output is used if no output file is given"),
        )
        .arg(
            Arg::new("out-xml")
                .short('x')
                .long("out-xml")
                .value_name("XML")
                .value_parser(value_parser!(PathBuf))
                .help("The output XML file"),
        )
        .arg(
            Arg::new("out-html")
                .short('m')
                .long("out-html")
                .value_name("HTML")
                .value_parser(value_parser!(PathBuf))
                .help("The output HTML file"),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Override existing output files"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .action(ArgAction::SetTrue)
                .help("Highlight matches in plain-text terminal output"),
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf))
                .help("The input directory to search in"),
        )
}

fn collect_strings(matches: &ArgMatches, name: &str) -> Option<Vec<String>> {
    matches
        .get_many::<String>(name)
        .map(|vals| vals.map(|s| s.to_string()).collect())
}

/// Turn parsed arguments into the run configuration and output options.
pub fn from_matches(matches: &ArgMatches) -> (Config, OutputOptions) {
    let mut cfg = Config::default();

    if let Some(comments) = collect_strings(matches, "comment") {
        cfg.comments = comments;
    }
    if let Some(patterns) = collect_strings(matches, "pattern") {
        cfg.patterns = patterns;
    }
    if let Some(suppressed) = collect_strings(matches, "suppressed") {
        cfg.suppressed = suppressed;
    }
    cfg.extensions = collect_strings(matches, "extension")
        .map(|exts| exts.iter().map(|e| config::normalize_extension(e)).collect());

    if let Some(num_lines) = matches.get_one::<usize>("num-lines") {
        // A match record always carries at least the matching line.
        cfg.num_lines = (*num_lines).max(1);
    }

    if let Some(label) = matches.get_one::<String>("encoding") {
        match config::resolve_encoding(label) {
            Some(encoding) => cfg.encoding = encoding,
            None => {
                log::warn!("unknown encoding: {label}");
                log::warn!("changing encoding to default: {}", cfg.encoding.name());
            }
        }
    }

    cfg.ignore_case = matches.get_flag("ignore-case");

    if let Some(directories) = matches.get_many::<PathBuf>("directory") {
        cfg.directories = directories.cloned().collect();
    }

    let opts = OutputOptions {
        out_txt: matches.get_one::<PathBuf>("out-txt").cloned(),
        out_xml: matches.get_one::<PathBuf>("out-xml").cloned(),
        out_html: matches.get_one::<PathBuf>("out-html").cloned(),
        force: matches.get_flag("force"),
        color: matches.get_flag("color"),
    };

    (cfg, opts)
}

/// Dump the effective configuration at debug level.
pub fn dump_parameters(cfg: &Config, opts: &OutputOptions) {
    log::debug!("comments: {:?}", cfg.comments);
    log::debug!("patterns: {:?}", cfg.patterns);
    log::debug!("extensions: {:?}", cfg.extensions);
    log::debug!("suppressed-dirs: {:?}", cfg.suppressed);
    log::debug!("encoding: {}", cfg.encoding.name());
    log::debug!("ignore-case: {}", cfg.ignore_case);
    log::debug!("num-lines: {}", cfg.num_lines);
    log::debug!("out-txt: {:?}", opts.out_txt);
    log::debug!("out-xml: {:?}", opts.out_xml);
    log::debug!("out-html: {:?}", opts.out_html);
    log::debug!("force: {}", opts.force);
    log::debug!("directories: {:?}", cfg.directories);
}
