//! XanoScript validation: position translation, suggestion enrichment, and
//! batch runs over files and directories.
//!
//! The parser reports byte offsets; everything downstream (editors, the MCP
//! text report) wants 0-based line/character positions, so the translation
//! happens here. Reports are plain text with 1-based positions.

pub mod parser;
pub mod suggest;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;

use parser::{classify_scheme, SyntaxParser, XsParser};
use suggest::enhance_message;

/// Default glob for directory validation.
pub const DEFAULT_BATCH_PATTERN: &str = "**/*.xs";

/// Glob semantics for batch file selection: `*` stays within one path
/// segment, `**` crosses segments.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 0-based line/character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// Half-open source range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// One translated, enriched error.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub range: Range,
    pub message: String,
    pub source: String,
}

/// Result of validating one document.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub message: String,
    pub file_path: Option<PathBuf>,
}

/// Result of validating a set of files.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub valid: bool,
    pub total_files: usize,
    pub valid_files: usize,
    pub invalid_files: usize,
    pub results: Vec<ValidationOutcome>,
    pub message: String,
}

/// Validator over a pluggable [`SyntaxParser`].
#[derive(Debug, Clone, Default)]
pub struct Validator<P = XsParser> {
    parser: P,
}

impl Validator<XsParser> {
    #[must_use]
    pub const fn new() -> Self {
        Self { parser: XsParser }
    }
}

impl<P: SyntaxParser> Validator<P> {
    pub const fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Validates raw XanoScript code.
    #[must_use]
    pub fn validate_code(&self, code: &str) -> ValidationOutcome {
        self.run(code, None)
    }

    /// Validates one file; an unreadable file is an invalid outcome, not a
    /// panic or a hard error.
    #[must_use]
    pub fn validate_file(&self, path: &Path) -> ValidationOutcome {
        match read_source(path) {
            Ok(content) => self.run(&content, Some(path)),
            Err(message) => ValidationOutcome {
                valid: false,
                errors: Vec::new(),
                message,
                file_path: Some(path.to_path_buf()),
            },
        }
    }

    /// Validates a list of files and builds the summary report.
    #[must_use]
    pub fn validate_batch(&self, paths: &[PathBuf]) -> BatchOutcome {
        let results: Vec<ValidationOutcome> =
            paths.iter().map(|p| self.validate_file(p)).collect();
        summarize(results)
    }

    /// Validates every matching `.xs` file under `directory`.
    ///
    /// An empty match set is a valid no-op; an unreadable directory or a
    /// malformed pattern is an invalid outcome with a descriptive message.
    #[must_use]
    pub fn validate_directory(&self, directory: &Path, pattern: Option<&str>) -> BatchOutcome {
        let effective = pattern.unwrap_or(DEFAULT_BATCH_PATTERN);
        let compiled = match Pattern::new(effective) {
            Ok(p) => p,
            Err(e) => {
                return empty_batch(false, format!("Invalid glob pattern \"{effective}\": {e}"));
            }
        };

        let files = find_xs_files(directory, &compiled);
        if files.is_empty() {
            let suffix = pattern.map_or_else(String::new, |p| format!(" matching pattern: {p}"));
            return empty_batch(
                true,
                format!("No .xs files found in directory: {}{suffix}", directory.display()),
            );
        }

        debug!(count = files.len(), directory = %directory.display(), "validating directory");
        self.validate_batch(&files)
    }

    fn run(&self, text: &str, file_path: Option<&Path>) -> ValidationOutcome {
        let scheme = classify_scheme(text);
        let outcome = self.parser.parse(text, scheme);

        if outcome.errors.is_empty() {
            let message = file_path.map_or_else(
                || "XanoScript is valid. No syntax errors found.".to_string(),
                |p| format!("\u{2713} {}: Valid", basename(p)),
            );
            return ValidationOutcome {
                valid: true,
                errors: Vec::new(),
                message,
                file_path: file_path.map(Path::to_path_buf),
            };
        }

        let diagnostics: Vec<Diagnostic> = outcome
            .errors
            .into_iter()
            .map(|error| {
                let start_offset = error.token.map_or(0, |t| t.start_offset);
                let end_offset = error.token.map_or(start_offset + 5, |t| t.end_offset);

                let start = position_at(text, start_offset);
                // End spans are inclusive, so the end position sits one
                // past the token's last byte. An end offset before the
                // start clamps to the start so ranges never invert.
                let end = position_at(text, end_offset.max(start_offset) + 1);

                let message = enhance_message(&error.message, text, start.line);
                Diagnostic {
                    range: Range { start, end },
                    message,
                    source: error.name.unwrap_or_else(|| "XanoScript Parser".to_string()),
                }
            })
            .collect();

        let entries: Vec<String> = diagnostics
            .iter()
            .enumerate()
            .map(|(i, d)| {
                format!(
                    "{}. [Line {}, Column {}] {}",
                    i + 1,
                    d.range.start.line + 1,
                    d.range.start.character + 1,
                    d.message
                )
            })
            .collect();

        let prefix = file_path.map_or_else(String::new, |p| format!("\u{2717} {}: ", basename(p)));
        let message = format!(
            "{prefix}Found {} error(s):\n\n{}",
            diagnostics.len(),
            entries.join("\n")
        );

        ValidationOutcome {
            valid: false,
            errors: diagnostics,
            message,
            file_path: file_path.map(Path::to_path_buf),
        }
    }
}

/// Translates a byte offset into a 0-based line/character position.
///
/// Offsets beyond the end of the text clamp to the end; offsets inside a
/// multi-byte character clamp down to its start.
#[must_use]
fn position_at(text: &str, offset: usize) -> Position {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let prefix = &text[..offset];
    let line = prefix.matches('\n').count();
    let character = prefix
        .rsplit_once('\n')
        .map_or(prefix, |(_, tail)| tail)
        .chars()
        .count();
    Position { line, character }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn read_source(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            format!("File not found: {}", path.display())
        } else {
            format!("Error reading file: {e}")
        }
    })
}

fn empty_batch(valid: bool, message: String) -> BatchOutcome {
    BatchOutcome {
        valid,
        total_files: 0,
        valid_files: 0,
        invalid_files: 0,
        results: Vec::new(),
        message,
    }
}

/// Recursively collects `.xs` files whose directory-relative path matches
/// the pattern. Results are sorted for deterministic reports.
fn find_xs_files(directory: &Path, pattern: &Pattern) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_xs_files(directory, directory, pattern, &mut files);
    files.sort();
    files
}

fn collect_xs_files(root: &Path, dir: &Path, pattern: &Pattern, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        debug!(dir = %dir.display(), "skipping unreadable directory");
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_xs_files(root, &path, pattern, files);
        } else if path.extension().is_some_and(|e| e == "xs") {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if pattern.matches_path_with(relative, GLOB_OPTIONS) {
                files.push(path);
            }
        }
    }
}

/// Builds the batch summary: counts, failing reports first, then the paths
/// of the files that passed.
fn summarize(results: Vec<ValidationOutcome>) -> BatchOutcome {
    let total_files = results.len();
    let valid_files = results.iter().filter(|r| r.valid).count();
    let invalid_files = total_files - valid_files;

    let mut lines = vec![
        format!("Validated {total_files} file(s): {valid_files} valid, {invalid_files} invalid"),
        String::new(),
    ];

    if invalid_files > 0 {
        lines.push("\u{274c} Files with errors:".to_string());
        for result in results.iter().filter(|r| !r.valid) {
            lines.push(format!("\n{}", result.message));
        }
        lines.push(String::new());
    }

    if valid_files > 0 {
        lines.push("\u{2705} Valid files:".to_string());
        for result in results.iter().filter(|r| r.valid) {
            if let Some(path) = &result.file_path {
                lines.push(format!("  {}", path.display()));
            }
        }
    }

    BatchOutcome {
        valid: invalid_files == 0,
        total_files,
        valid_files,
        invalid_files,
        results,
        message: lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::parser::{ParseOutcome, RawParseError, Scheme, TokenSpan};
    use super::*;
    use std::io::Write;

    /// Parser that reports a fixed error list regardless of input.
    struct FixedParser(Vec<RawParseError>);

    impl SyntaxParser for FixedParser {
        fn parse(&self, _text: &str, _scheme: Scheme) -> ParseOutcome {
            ParseOutcome {
                errors: self.0.clone(),
            }
        }
    }

    fn raw_error(message: &str, span: Option<(usize, usize)>) -> RawParseError {
        RawParseError {
            message: message.to_string(),
            name: None,
            token: span.map(|(start_offset, end_offset)| TokenSpan {
                start_offset,
                end_offset,
            }),
        }
    }

    #[test]
    fn position_translation_counts_lines_and_characters() {
        let text = "abc\ndef\nghi";
        assert_eq!(position_at(text, 0), Position { line: 0, character: 0 });
        assert_eq!(position_at(text, 5), Position { line: 1, character: 1 });
        assert_eq!(position_at(text, 8), Position { line: 2, character: 0 });
    }

    #[test]
    fn position_clamps_past_end_and_inside_multibyte() {
        let text = "a\u{e9}b";
        assert_eq!(position_at(text, 100), Position { line: 0, character: 3 });
        // Offset 2 is inside the two-byte character and clamps down.
        assert_eq!(position_at(text, 2), Position { line: 0, character: 1 });
    }

    #[test]
    fn valid_code_reports_success_message() {
        let validator = Validator::new();
        let outcome = validator.validate_code("query q {\n  var $a = 1\n}");
        assert!(outcome.valid);
        assert_eq!(outcome.message, "XanoScript is valid. No syntax errors found.");
    }

    #[test]
    fn report_positions_are_one_based() {
        let validator = Validator::with_parser(FixedParser(vec![raw_error(
            "Unexpected token",
            Some((4, 6)),
        )]));
        let outcome = validator.validate_code("ab\ncdef\ng");
        assert!(!outcome.valid);
        // Offset 4 is line 1 char 1 (0-based), so the report says 2/2.
        assert!(outcome.message.contains("1. [Line 2, Column 2] Unexpected token"));
        assert_eq!(outcome.errors[0].range.start, Position { line: 1, character: 1 });
    }

    #[test]
    fn end_position_is_one_past_the_token() {
        let validator =
            Validator::with_parser(FixedParser(vec![raw_error("err", Some((0, 2)))]));
        let outcome = validator.validate_code("abcdef");
        assert_eq!(outcome.errors[0].range.end, Position { line: 0, character: 3 });
    }

    #[test]
    fn inverted_span_clamps_end_to_start() {
        let validator =
            Validator::with_parser(FixedParser(vec![raw_error("err", Some((10, 3)))]));
        let outcome = validator.validate_code("abcdefghijklmnop");
        let range = &outcome.errors[0].range;
        assert_eq!(range.start, Position { line: 0, character: 10 });
        assert_eq!(range.end, Position { line: 0, character: 11 });
    }

    #[test]
    fn missing_token_defaults_span_to_document_start() {
        let validator = Validator::with_parser(FixedParser(vec![raw_error("err", None)]));
        let outcome = validator.validate_code("abcdefghij");
        assert_eq!(outcome.errors[0].range.start, Position { line: 0, character: 0 });
        assert_eq!(outcome.errors[0].range.end, Position { line: 0, character: 6 });
    }

    #[test]
    fn default_source_names_the_parser() {
        let validator = Validator::with_parser(FixedParser(vec![raw_error("err", None)]));
        let outcome = validator.validate_code("x");
        assert_eq!(outcome.errors[0].source, "XanoScript Parser");
    }

    #[test]
    fn file_validation_reports_basename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.xs");
        fs::write(&path, "query q {\n}").unwrap();

        let validator = Validator::new();
        let outcome = validator.validate_file(&path);
        assert!(outcome.valid);
        assert_eq!(outcome.message, "\u{2713} hello.xs: Valid");
    }

    #[test]
    fn invalid_file_message_carries_cross_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xs");
        fs::write(&path, "query q {\n").unwrap();

        let validator = Validator::new();
        let outcome = validator.validate_file(&path);
        assert!(!outcome.valid);
        assert!(outcome.message.starts_with("\u{2717} broken.xs: Found 1 error(s):"));
    }

    #[test]
    fn missing_file_is_invalid_not_fatal() {
        let validator = Validator::new();
        let outcome = validator.validate_file(Path::new("/no/such/file.xs"));
        assert!(!outcome.valid);
        assert!(outcome.message.starts_with("File not found:"));
    }

    #[test]
    fn batch_summary_orders_failures_before_passes() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.xs");
        let bad = dir.path().join("bad.xs");
        fs::write(&good, "query q {\n}").unwrap();
        fs::write(&bad, "query q {\n").unwrap();

        let validator = Validator::new();
        let outcome = validator.validate_batch(&[good.clone(), bad]);
        assert!(!outcome.valid);
        assert_eq!(outcome.total_files, 2);
        assert_eq!(outcome.valid_files, 1);
        assert_eq!(outcome.invalid_files, 1);
        assert!(outcome.message.starts_with("Validated 2 file(s): 1 valid, 1 invalid"));

        let errors_at = outcome.message.find("\u{274c} Files with errors:").unwrap();
        let valid_at = outcome.message.find("\u{2705} Valid files:").unwrap();
        assert!(errors_at < valid_at);
        assert!(outcome.message.contains(&format!("  {}", good.display())));
    }

    #[test]
    fn directory_validation_recurses_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("apis/users")).unwrap();
        fs::create_dir_all(dir.path().join("tables")).unwrap();
        fs::write(dir.path().join("apis/users/get.xs"), "query q {\n}").unwrap();
        fs::write(dir.path().join("tables/users.xs"), "table t {\n}").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a script").unwrap();

        let validator = Validator::new();
        let all = validator.validate_directory(dir.path(), None);
        assert!(all.valid);
        assert_eq!(all.total_files, 2);

        let apis_only = validator.validate_directory(dir.path(), Some("apis/**/*.xs"));
        assert_eq!(apis_only.total_files, 1);

        // A single-segment glob does not cross directories.
        let top_only = validator.validate_directory(dir.path(), Some("tables/*.xs"));
        assert_eq!(top_only.total_files, 1);
        let nested = validator.validate_directory(dir.path(), Some("*.xs"));
        assert_eq!(nested.total_files, 0);
        assert!(nested.valid);
    }

    #[test]
    fn empty_directory_is_a_valid_noop() {
        let dir = tempfile::tempdir().unwrap();
        let validator = Validator::new();

        let outcome = validator.validate_directory(dir.path(), None);
        assert!(outcome.valid);
        assert_eq!(outcome.total_files, 0);
        assert!(outcome.message.starts_with("No .xs files found in directory:"));
        assert!(!outcome.message.contains("matching pattern"));

        let with_pattern = validator.validate_directory(dir.path(), Some("apis/**/*.xs"));
        assert!(with_pattern.message.contains("matching pattern: apis/**/*.xs"));
    }

    #[test]
    fn malformed_pattern_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let validator = Validator::new();
        let outcome = validator.validate_directory(dir.path(), Some("[invalid"));
        assert!(!outcome.valid);
        assert!(outcome.message.starts_with("Invalid glob pattern"));
    }

    #[test]
    fn unreadable_file_in_batch_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.xs");
        let mut f = fs::File::create(&good).unwrap();
        writeln!(f, "query q {{").unwrap();
        writeln!(f, "}}").unwrap();

        let validator = Validator::new();
        let outcome =
            validator.validate_batch(&[good, dir.path().join("missing.xs")]);
        assert!(!outcome.valid);
        assert_eq!(outcome.valid_files, 1);
        assert_eq!(outcome.invalid_files, 1);
        assert!(outcome.message.contains("File not found:"));
    }
}
