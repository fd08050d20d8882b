//! Aggregate counters produced alongside the match list.

use std::collections::HashMap;
use std::path::PathBuf;

/// Counters for one search run.
///
/// `per_pattern` holds an entry for every configured pattern, pre-seeded to
/// zero. `per_file` holds an entry for every file that was actually examined
/// (opened, decoded and scanned), even when no match was found in it; files
/// skipped by the extension filter, the binary heuristic or a decode failure
/// never appear.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total_files: usize,
    pub total_directories: usize,
    pub per_pattern: HashMap<String, usize>,
    pub per_file: HashMap<PathBuf, usize>,
}

impl Summary {
    /// A fresh summary with zero counts for every configured pattern.
    ///
    /// Seeding happens from the configured pattern sources, so a pattern
    /// dropped during lenient compilation keeps its zero entry and still
    /// shows up in the per-pattern report.
    pub fn new(patterns: &[String]) -> Self {
        let per_pattern = patterns.iter().map(|t| (t.clone(), 0)).collect();
        Summary {
            total_files: 0,
            total_directories: 0,
            per_pattern,
            per_file: HashMap::new(),
        }
    }

    /// Record an examined file and its matches by pattern text.
    pub fn record_file<'a>(
        &mut self,
        path: PathBuf,
        matched_patterns: impl Iterator<Item = &'a str>,
    ) {
        self.total_files += 1;
        let mut count = 0;
        for pattern in matched_patterns {
            count += 1;
            *self.per_pattern.entry(pattern.to_string()).or_insert(0) += 1;
        }
        self.per_file.insert(path, count);
    }

    /// Number of examined files that contained at least one match.
    pub fn files_with_matches(&self) -> usize {
        self.per_file.values().filter(|&&count| count > 0).count()
    }

    /// Total number of recorded matches.
    pub fn total_matches(&self) -> usize {
        self.per_pattern.values().sum()
    }
}
