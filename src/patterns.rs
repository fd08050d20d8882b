//! Pattern compilation.
//!
//! The raw pattern strings from the configuration are compiled once into a
//! `PatternSet` before the scan starts. The set preserves configuration
//! order, which is also the match priority order: the first pattern that
//! matches a line wins.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, TodosError};

/// One searchable pattern: its original source text and the compiled regex.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub text: String,
    pub regex: Regex,
}

/// How `PatternSet::compile` treats patterns that fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Log a warning and drop the failing pattern; the rest stay active.
    Lenient,
    /// Abort compilation on the first failing pattern.
    Strict,
}

/// The active, ordered set of compiled patterns for one run.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile `patterns` into a set, honoring the case-insensitivity flag.
    ///
    /// With `Strictness::Lenient` an invalid pattern is reported via
    /// `log::warn!` and excluded; the returned set may end up empty, which
    /// callers can escalate to `TodosError::NoValidPatterns` if their policy
    /// requires at least one usable pattern.
    pub fn compile(
        patterns: &[String],
        case_insensitive: bool,
        strictness: Strictness,
    ) -> Result<PatternSet> {
        let mut compiled = Vec::with_capacity(patterns.len());

        for text in patterns {
            let built = RegexBuilder::new(text)
                .case_insensitive(case_insensitive)
                .build();
            match built {
                Ok(regex) => compiled.push(CompiledPattern {
                    text: text.clone(),
                    regex,
                }),
                Err(source) => match strictness {
                    Strictness::Strict => {
                        return Err(TodosError::Pattern {
                            pattern: text.clone(),
                            source,
                        });
                    }
                    Strictness::Lenient => {
                        log::warn!("pattern compilation failed: {text}, {source}");
                    }
                },
            }
        }

        Ok(PatternSet { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Patterns in configuration (priority) order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    /// Source texts of the active patterns, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.text.as_str())
    }

    /// Look up the compiled regex for a pattern's source text.
    pub fn regex_for(&self, text: &str) -> Option<&Regex> {
        self.patterns.iter().find(|p| p.text == text).map(|p| &p.regex)
    }
}
