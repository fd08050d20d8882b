//! todos: search TODO, FIXME and similar comments in project files.
//!
//! This crate provides the search engine used by the todos binary, but it
//! can also be embedded as a library. The public API lets you:
//! - Configure a scan via [`Config`] (comment markers, patterns, filters).
//! - Compile the active patterns once into a [`PatternSet`].
//! - Run the recursive scan with [`search`], producing the ordered match
//!   list and a [`Summary`] of counters.
//! - Render reports through the formatters in [`output`].
//!
//! Quick example: scan a directory tree
//!
//! ```no_run
//! use todos::{Config, PatternSet, Strictness, search};
//!
//! let cfg = Config::default();
//! let patterns =
//!     PatternSet::compile(&cfg.patterns, cfg.ignore_case, Strictness::Lenient).unwrap();
//! let outcome = search(&cfg, &patterns);
//! for comment in &outcome.comments {
//!     println!("{}:{}: {}", comment.path.display(), comment.position, comment.lines[0]);
//! }
//! println!("{} files examined", outcome.summary.total_files);
//! ```
//!
//! Only comment-bearing lines are searched: a line must contain one of the
//! configured comment markers as a literal substring before any pattern is
//! tried. This is a heuristic, not a lexer, and its imprecision is accepted.

pub mod binary;
pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod patterns;
pub mod search;
pub mod summary;

pub use config::Config;
pub use error::{Result, TodosError};
pub use matcher::Comment;
pub use patterns::{CompiledPattern, PatternSet, Strictness};
pub use search::{SearchOutcome, search};
pub use summary::Summary;
