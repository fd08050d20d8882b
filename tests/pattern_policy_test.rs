use std::fs;

use todos::{Config, PatternSet, Strictness, TodosError, search};

#[test]
fn test_run_continues_after_dropping_invalid_pattern() {
    let td = tempfile::tempdir().unwrap();
    let root = td.path();
    fs::write(root.join("a.txt"), "# TODO still found\n").unwrap();

    let cfg = Config {
        patterns: vec!["(unclosed".to_string(), "TODO".to_string()],
        directories: vec![root.to_path_buf()],
        ..Default::default()
    };
    let patterns =
        PatternSet::compile(&cfg.patterns, cfg.ignore_case, Strictness::Lenient).unwrap();
    assert_eq!(patterns.len(), 1);

    let outcome = search(&cfg, &patterns);
    assert_eq!(outcome.comments.len(), 1);
    assert_eq!(outcome.comments[0].pattern, "TODO");
    // Every configured pattern keeps a summary entry; the dropped one
    // simply never accumulates a count.
    assert_eq!(outcome.summary.per_pattern.len(), 2);
    assert_eq!(outcome.summary.per_pattern["(unclosed"], 0);
    assert_eq!(outcome.summary.per_pattern["TODO"], 1);
}

#[test]
fn test_strict_policy_surfaces_the_offending_pattern() {
    let sources = vec!["TODO".to_string(), "(unclosed".to_string()];
    let err = PatternSet::compile(&sources, false, Strictness::Strict).unwrap_err();
    match err {
        TodosError::Pattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_all_patterns_invalid_leaves_an_empty_set() {
    let sources = vec!["(".to_string(), "[".to_string()];
    let patterns = PatternSet::compile(&sources, false, Strictness::Lenient).unwrap();
    // The caller's policy decides whether an empty set is fatal.
    assert!(patterns.is_empty());
}
