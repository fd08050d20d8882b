//! Error types shared across the crate.
//!
//! Only genuinely fatal conditions surface as `TodosError`; per-file and
//! per-directory problems during a scan are recoverable skips that are
//! logged and never abort the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodosError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("pattern compilation failed: {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("no valid pattern remains after compilation")]
    NoValidPatterns,

    #[error("writing {kind} output failed: {path}: {source}")]
    Output {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TodosError>;
