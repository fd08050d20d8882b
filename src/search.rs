//! Directory traversal and per-file scanning.
//!
//! The walk itself is sequential and depth-first: suppressed directories are
//! pruned before anything under them is counted, every surviving directory
//! bumps the directory counter and every surviving file becomes a scan
//! candidate. Candidate files are then scanned in parallel with rayon; each
//! file is independent, so the per-file reports are merged afterwards into
//! one `Summary` and one match list, re-sorted by `(path, position)` so the
//! final ordering does not depend on scheduling or on how the file system
//! enumerates directory entries.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::binary::is_binary;
use crate::config::Config;
use crate::matcher::{Comment, LineMatcher};
use crate::patterns::PatternSet;
use crate::summary::Summary;

/// The ordered match list and the finalized counters of one run.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub comments: Vec<Comment>,
    pub summary: Summary,
}

/// Matches found in a single examined file.
struct FileReport {
    path: PathBuf,
    comments: Vec<Comment>,
}

/// Recursively search the configured root directories.
///
/// Every per-file and per-directory problem (missing root, suppressed
/// subtree, disallowed extension, binary file, I/O or decode failure) is a
/// recoverable skip that is logged and leaves the counters untouched, so the
/// search itself cannot fail.
pub fn search(cfg: &Config, patterns: &PatternSet) -> SearchOutcome {
    let mut summary = Summary::new(&cfg.patterns);
    let mut candidates = Vec::new();

    for root in &cfg.directories {
        walk_directory(root, cfg, &mut summary, &mut candidates);
    }

    let matcher = LineMatcher::new(&cfg.comments, patterns, cfg.num_lines);
    let reports: Vec<FileReport> = candidates
        .par_iter()
        .filter_map(|path| scan_file(path, cfg, &matcher))
        .collect();

    let mut comments = Vec::new();
    for report in reports {
        summary.record_file(
            report.path,
            report.comments.iter().map(|c| c.pattern.as_str()),
        );
        comments.extend(report.comments);
    }

    comments.sort_by(|a, b| a.path.cmp(&b.path).then(a.position.cmp(&b.position)));

    SearchOutcome { comments, summary }
}

/// Pre-order walk of one root: count directories, collect candidate files.
fn walk_directory(
    root: &Path,
    cfg: &Config,
    summary: &mut Summary,
    candidates: &mut Vec<PathBuf>,
) {
    if !root.is_dir() {
        log::debug!("skipping directory (not a directory): {}", root.display());
        return;
    }

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_suppressed(cfg, entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("traversal failed: {err}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            summary.total_directories += 1;
        } else if entry.file_type().is_file() {
            candidates.push(entry.into_path());
        }
    }
}

/// Suppression matches the directory's own name, not its full path.
fn is_suppressed(cfg: &Config, entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let suppressed = entry
        .file_name()
        .to_str()
        .is_some_and(|name| cfg.suppressed.iter().any(|s| s == name));
    if suppressed {
        log::debug!(
            "skipping directory (suppressed): {}",
            entry.path().display()
        );
    }
    suppressed
}

/// Apply the per-file filters and scan every line of the file.
///
/// Returns `None` when the file is skipped; a skipped file contributes
/// neither to `total_files` nor to `per_file`.
fn scan_file(path: &Path, cfg: &Config, matcher: &LineMatcher<'_>) -> Option<FileReport> {
    if !is_extension_allowed(cfg, path) {
        log::debug!("skipping file (file extension): {}", path.display());
        return None;
    }

    if is_binary(path) {
        log::debug!("skipping file (binary file): {}", path.display());
        return None;
    }

    log::debug!("parsing file: {}", path.display());

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("reading from file failed: {}, {err}", path.display());
            return None;
        }
    };

    let Some(text) = decode_text(cfg.encoding, &bytes) else {
        log::warn!(
            "skipping file (malformed {} data): {}",
            cfg.encoding.name(),
            path.display()
        );
        return None;
    };

    let lines: Vec<&str> = text.lines().collect();
    let mut comments = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if let Some(comment) = matcher.match_line(path, idx + 1, line, &lines) {
            comments.push(comment);
        }
    }

    Some(FileReport {
        path: path.to_path_buf(),
        comments,
    })
}

/// The allow-list compares path suffixes, so an entry like `.py` matches
/// `a.py` but not `a.pyc`. No filter configured means every file passes.
fn is_extension_allowed(cfg: &Config, path: &Path) -> bool {
    let Some(extensions) = &cfg.extensions else {
        return true;
    };
    let name = path.to_string_lossy();
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Decode the raw file contents with the configured encoding.
///
/// Malformed input yields `None` instead of replacement characters, so the
/// caller can skip the file the way the decode-failure policy requires.
fn decode_text(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}
