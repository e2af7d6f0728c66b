//! Integration tests for documentation resolution and assembly.
//!
//! These tests exercise the full path from a topic name or file path to
//! rendered documentation, over a fixture docs directory on disk.

use std::fs;

use tempfile::TempDir;

use xano_developer_mcp::docs::{assemble, xanoscript, DocsContext, DocsMode};

/// Builds a docs directory carrying the files the shipped registry expects
/// for the topics under test.
fn docs_fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("version.json"), r#"{"version":"1.2.3"}"#).unwrap();
    fs::write(
        dir.path().join("README.md"),
        "# XanoScript\n\nThe XanoScript language.",
    )
    .unwrap();
    fs::write(
        dir.path().join("syntax.md"),
        "# Syntax\n\nExpressions.\n\n## Quick Reference\n\nvar $x = 1\n\n## Details\n\nLong form.",
    )
    .unwrap();
    fs::write(dir.path().join("apis.md"), "# APIs\n\nquery blocks.").unwrap();
    fs::write(dir.path().join("tables.md"), "# Tables\n\ntable blocks.").unwrap();
    dir
}

#[test]
fn overview_includes_readme_and_version_trailer() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let out = assemble::overview(&ctx, &registry).unwrap();
    assert!(out.contains("The XanoScript language."));
    assert!(out.ends_with("Documentation version: 1.2.3"));
}

#[test]
fn topic_resolves_through_aliases() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let direct = assemble::topic(&ctx, &registry, "apis", DocsMode::Full).unwrap();
    let via_alias = assemble::topic(&ctx, &registry, "endpoint", DocsMode::Full).unwrap();
    assert_eq!(direct, via_alias);
}

#[test]
fn topic_resolution_normalises_case_and_whitespace() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let out = assemble::topic(&ctx, &registry, "  SYNTAX  ", DocsMode::Full).unwrap();
    assert!(out.contains("Expressions."));
}

#[test]
fn quick_reference_mode_extracts_only_that_section() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let out = assemble::topic(&ctx, &registry, "syntax", DocsMode::QuickReference).unwrap();
    assert!(out.contains("var $x = 1"));
    assert!(!out.contains("Long form."));
}

#[test]
fn unknown_topic_lists_available_identifiers() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let err = assemble::topic(&ctx, &registry, "not_a_topic_at_all", DocsMode::Full).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("not_a_topic_at_all"));
    assert!(text.contains("syntax"));
    assert!(text.contains("apis"));
}

#[test]
fn missing_backing_file_is_a_hard_error_for_single_topic() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    // The registry knows "functions" but the fixture has no functions.md.
    let err = assemble::topic(&ctx, &registry, "functions", DocsMode::Full).unwrap_err();
    assert!(err.to_string().contains("functions.md"));
}

#[test]
fn file_path_query_returns_header_and_matched_topics() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let blocks = assemble::for_path(&ctx, &registry, "apis/users/create.xs", DocsMode::Full, &[]);
    assert!(blocks.len() >= 3);
    assert!(blocks[0].contains("apis/users/create.xs"));
    assert!(blocks[0].contains("Matched topics:"));
    assert!(blocks.iter().any(|b| b.contains("query blocks.")));
    // Foundational topic is always present.
    assert!(blocks[0].contains("syntax"));
}

#[test]
fn file_path_query_honours_exclusions() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let blocks = assemble::for_path(
        &ctx,
        &registry,
        "apis/users/create.xs",
        DocsMode::Full,
        &["apis".to_string()],
    );
    assert!(!blocks[0].contains("apis,"));
    assert!(!blocks.iter().any(|b| b.contains("query blocks.")));
}

#[test]
fn file_path_query_inlines_placeholder_for_missing_files() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    // tables/*.xs matches topics whose backing files the fixture omits.
    let blocks = assemble::for_path(&ctx, &registry, "tables/users.xs", DocsMode::Full, &[]);
    assert!(blocks.iter().any(|b| b.contains("table blocks.")));
    assert!(blocks
        .iter()
        .any(|b| b.starts_with("[Error reading ") && b.ends_with(": file not found]")));
}

#[test]
fn glob_star_does_not_cross_directory_separators() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    // tables/*.xs must not match a nested path.
    let nested = assemble::for_path(&ctx, &registry, "tables/sub/users.xs", DocsMode::Full, &[]);
    assert!(!nested.iter().any(|b| b.contains("table blocks.")));
}

#[test]
fn index_lists_topics_with_sizes() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    let registry = xanoscript::build_registry();

    let out = assemble::index(&ctx, &registry);
    assert!(out.contains("# XanoScript Documentation Index"));
    assert!(out.contains("Version: 1.2.3"));
    assert!(out.contains("| `syntax` |"));
    // Topics without a backing file on disk show a dash for size.
    assert!(out.contains("| - |") || out.contains(" - |"));
}

#[test]
fn version_degrades_to_unknown_without_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# Docs").unwrap();
    let ctx = DocsContext::new(dir.path().to_path_buf());
    assert_eq!(ctx.version(), "unknown");
}

#[test]
fn content_reads_are_cached() {
    let dir = docs_fixture();
    let ctx = DocsContext::new(dir.path().to_path_buf());

    let first = ctx.read("syntax.md").unwrap();
    // Deleting the file does not invalidate an already-cached read.
    fs::remove_file(dir.path().join("syntax.md")).unwrap();
    let second = ctx.read("syntax.md").unwrap();
    assert_eq!(first, second);
}
