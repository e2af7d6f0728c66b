//! Integration tests for XanoScript validation.
//!
//! These tests exercise the full validation path: source in, report out,
//! across raw code, single files, batches, and directory globs.

use std::fs;

use tempfile::TempDir;

use xano_developer_mcp::validate::Validator;

fn project_fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("apis/users")).unwrap();
    fs::create_dir_all(dir.path().join("tables")).unwrap();
    fs::write(
        dir.path().join("apis/users/create.xs"),
        "query create_user {\n  var $name = \"anon\"\n}\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("apis/users/broken.xs"),
        "query broken {\n  var $a = [1, 2\n}\n",
    )
    .unwrap();
    fs::write(dir.path().join("tables/users.xs"), "table users {\n}\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a script").unwrap();
    dir
}

#[test]
fn valid_code_reports_success() {
    let validator = Validator::new();
    let outcome = validator.validate_code("query q {\n  var $x = 1\n}");
    assert!(outcome.valid);
    assert_eq!(outcome.message, "XanoScript is valid. No syntax errors found.");
    assert!(outcome.errors.is_empty());
}

#[test]
fn errors_carry_one_based_positions() {
    let validator = Validator::new();
    // The unclosed brace opens at line 1, column 9.
    let outcome = validator.validate_code("query q {\n  var $x = 1\n");
    assert!(!outcome.valid);
    assert!(outcome.message.starts_with("Found 1 error(s):"));
    assert!(outcome.message.contains("1. [Line 1, Column 9]"));
    assert!(outcome.message.contains("Unclosed delimiter '{'"));
}

#[test]
fn report_includes_offending_source_line() {
    let validator = Validator::new();
    let outcome = validator.validate_code("query q {\n  var $a = \"oops\n}");
    assert!(!outcome.valid);
    assert!(outcome.message.contains("Code at line 2:"));
    assert!(outcome.message.contains("var $a = \"oops"));
}

#[test]
fn suggestions_surface_in_the_report() {
    let validator = Validator::new();
    let outcome = validator.validate_code("query q {\n  if ($a) {\n  } else if ($b) {\n  }\n");
    assert!(!outcome.valid);
    assert!(outcome.message.contains("\u{1f4a1} Suggestion:"));
    assert!(outcome.message.contains("elseif"));
}

#[test]
fn multiple_errors_are_numbered() {
    let validator = Validator::new();
    let outcome = validator.validate_code("query q { [\n var $s = 'x\n");
    assert!(!outcome.valid);
    assert!(outcome.message.contains("1. [Line"));
    assert!(outcome.message.contains("2. [Line"));
}

#[test]
fn file_validation_uses_basename_in_verdict() {
    let dir = project_fixture();
    let validator = Validator::new();

    let outcome = validator.validate_file(&dir.path().join("apis/users/create.xs"));
    assert!(outcome.valid);
    assert_eq!(outcome.message, "\u{2713} create.xs: Valid");

    let outcome = validator.validate_file(&dir.path().join("apis/users/broken.xs"));
    assert!(!outcome.valid);
    assert!(outcome.message.starts_with("\u{2717} broken.xs: "));
}

#[test]
fn missing_file_is_invalid_not_fatal() {
    let validator = Validator::new();
    let outcome = validator.validate_file(std::path::Path::new("/nonexistent/never.xs"));
    assert!(!outcome.valid);
    assert!(outcome.message.contains("File not found: /nonexistent/never.xs"));
}

#[test]
fn batch_summary_counts_and_sections() {
    let dir = project_fixture();
    let validator = Validator::new();
    let paths = vec![
        dir.path().join("apis/users/create.xs"),
        dir.path().join("apis/users/broken.xs"),
        dir.path().join("tables/users.xs"),
    ];

    let outcome = validator.validate_batch(&paths);
    assert!(!outcome.valid);
    assert_eq!(outcome.total_files, 3);
    assert_eq!(outcome.valid_files, 2);
    assert_eq!(outcome.invalid_files, 1);
    assert!(outcome
        .message
        .starts_with("Validated 3 file(s): 2 valid, 1 invalid"));
    assert!(outcome.message.contains("\u{274c} Files with errors:"));
    assert!(outcome.message.contains("\u{2705} Valid files:"));
}

#[test]
fn batch_with_only_valid_files_is_valid() {
    let dir = project_fixture();
    let validator = Validator::new();
    let paths = vec![dir.path().join("tables/users.xs")];

    let outcome = validator.validate_batch(&paths);
    assert!(outcome.valid);
    assert!(outcome
        .message
        .starts_with("Validated 1 file(s): 1 valid, 0 invalid"));
    assert!(!outcome.message.contains("\u{274c}"));
}

#[test]
fn directory_validation_finds_nested_files() {
    let dir = project_fixture();
    let validator = Validator::new();

    let outcome = validator.validate_directory(dir.path(), None);
    assert_eq!(outcome.total_files, 3);
    assert_eq!(outcome.invalid_files, 1);
}

#[test]
fn directory_pattern_narrows_the_match_set() {
    let dir = project_fixture();
    let validator = Validator::new();

    let outcome = validator.validate_directory(dir.path(), Some("tables/*.xs"));
    assert!(outcome.valid);
    assert_eq!(outcome.total_files, 1);
}

#[test]
fn empty_directory_is_a_valid_no_op() {
    let empty = tempfile::tempdir().unwrap();
    let validator = Validator::new();

    let outcome = validator.validate_directory(empty.path(), None);
    assert!(outcome.valid);
    assert_eq!(outcome.total_files, 0);
    assert!(outcome.message.starts_with("No .xs files found in directory:"));
    assert!(!outcome.message.contains("matching pattern"));

    let outcome = validator.validate_directory(empty.path(), Some("apis/*.xs"));
    assert!(outcome.valid);
    assert!(outcome.message.ends_with("matching pattern: apis/*.xs"));
}

#[test]
fn invalid_glob_pattern_is_an_invalid_outcome() {
    let dir = project_fixture();
    let validator = Validator::new();

    let outcome = validator.validate_directory(dir.path(), Some("[oops"));
    assert!(!outcome.valid);
    assert!(outcome.message.starts_with("Invalid glob pattern \"[oops\":"));
}
