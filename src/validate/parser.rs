//! The syntax-parser boundary and the bundled structural checker.
//!
//! [`SyntaxParser`] is the seam between the validation translator and
//! whatever parser actually produces errors. The bundled [`XsParser`] checks
//! document structure only (delimiter balance and string termination); a
//! full language-server parser can be dropped in behind the same trait.

use tracing::debug;

/// Top-level object scheme of a XanoScript document, detected from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Api,
    Function,
    Table,
    Task,
    Trigger,
    Agent,
    Tool,
    Job,
    Service,
    Middleware,
    Unknown,
}

impl Scheme {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("query", Self::Api),
        ("function", Self::Function),
        ("table", Self::Table),
        ("task", Self::Task),
        ("trigger", Self::Trigger),
        ("agent", Self::Agent),
        ("tool", Self::Tool),
        ("job", Self::Job),
        ("service", Self::Service),
        ("middleware", Self::Middleware),
    ];
}

/// Detects the document scheme from the first top-level keyword.
///
/// Comment lines and blank lines are skipped; an unrecognized leading
/// keyword yields [`Scheme::Unknown`], which parsers treat permissively.
#[must_use]
pub fn classify_scheme(text: &str) -> Scheme {
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#') {
            continue;
        }
        let keyword = trimmed
            .split(|c: char| c.is_whitespace() || c == '{')
            .next()
            .unwrap_or("");
        let scheme = Scheme::KEYWORDS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map_or(Scheme::Unknown, |(_, s)| *s);
        debug!(keyword, ?scheme, "classified document scheme");
        return scheme;
    }
    Scheme::Unknown
}

/// Byte-offset span of the token an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start_offset: usize,
    pub end_offset: usize,
}

/// One raw error as reported by a parser, before position translation.
#[derive(Debug, Clone)]
pub struct RawParseError {
    pub message: String,
    /// Error class name, used as the diagnostic source when present.
    pub name: Option<String>,
    pub token: Option<TokenSpan>,
}

/// Everything a parse pass produced.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub errors: Vec<RawParseError>,
}

/// Boundary trait for XanoScript parsers.
pub trait SyntaxParser {
    fn parse(&self, text: &str, scheme: Scheme) -> ParseOutcome;
}

/// Bundled structural checker.
///
/// Verifies that braces, brackets, and parentheses nest correctly and that
/// string literals terminate. Line comments (`//` and `#`) and escaped
/// quotes inside strings are honored.
#[derive(Debug, Clone, Copy, Default)]
pub struct XsParser;

impl XsParser {
    const fn closing_for(open: char) -> char {
        match open {
            '{' => '}',
            '[' => ']',
            _ => ')',
        }
    }
}

impl SyntaxParser for XsParser {
    fn parse(&self, text: &str, _scheme: Scheme) -> ParseOutcome {
        let mut errors = Vec::new();
        let mut stack: Vec<(char, usize)> = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '/' if matches!(chars.peek(), Some((_, '/'))) => {
                    for (_, n) in chars.by_ref() {
                        if n == '\n' {
                            break;
                        }
                    }
                }
                '#' => {
                    for (_, n) in chars.by_ref() {
                        if n == '\n' {
                            break;
                        }
                    }
                }
                '"' | '\'' => {
                    let quote = c;
                    let mut terminated = false;
                    while let Some((_, n)) = chars.next() {
                        match n {
                            '\\' => {
                                chars.next();
                            }
                            '\n' => break,
                            _ if n == quote => {
                                terminated = true;
                                break;
                            }
                            _ => {}
                        }
                    }
                    if !terminated {
                        errors.push(RawParseError {
                            message: format!("Unterminated string literal starting with {quote}"),
                            name: Some("LexerError".to_string()),
                            token: Some(TokenSpan {
                                start_offset: offset,
                                end_offset: offset,
                            }),
                        });
                    }
                }
                '{' | '[' | '(' => stack.push((c, offset)),
                '}' | ']' | ')' => match stack.pop() {
                    Some((open, _)) if Self::closing_for(open) == c => {}
                    Some((open, open_offset)) => {
                        errors.push(RawParseError {
                            message: format!(
                                "Mismatched delimiter: expected '{}' to close '{open}', found '{c}'",
                                Self::closing_for(open)
                            ),
                            name: Some("ParserError".to_string()),
                            token: Some(TokenSpan {
                                start_offset: offset,
                                end_offset: offset,
                            }),
                        });
                        // Reopen so later closers still pair up.
                        stack.push((open, open_offset));
                    }
                    None => {
                        errors.push(RawParseError {
                            message: format!("Unexpected closing delimiter '{c}'"),
                            name: Some("ParserError".to_string()),
                            token: Some(TokenSpan {
                                start_offset: offset,
                                end_offset: offset,
                            }),
                        });
                    }
                },
                _ => {}
            }
        }

        for (open, offset) in stack {
            errors.push(RawParseError {
                message: format!(
                    "Unclosed delimiter '{open}': expected '{}' before end of input",
                    Self::closing_for(open)
                ),
                name: Some("ParserError".to_string()),
                token: Some(TokenSpan {
                    start_offset: offset,
                    end_offset: offset,
                }),
            });
        }

        ParseOutcome { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_schemes() {
        assert_eq!(classify_scheme("query get_users {\n}"), Scheme::Api);
        assert_eq!(classify_scheme("function helper {\n}"), Scheme::Function);
        assert_eq!(classify_scheme("job nightly {\n}"), Scheme::Job);
        assert_eq!(classify_scheme("table users {\n}"), Scheme::Table);
    }

    #[test]
    fn classification_skips_comments_and_blank_lines() {
        let text = "// a comment\n\n# another\nservice api {\n}";
        assert_eq!(classify_scheme(text), Scheme::Service);
    }

    #[test]
    fn unrecognized_leading_keyword_is_unknown() {
        assert_eq!(classify_scheme("banana x {}"), Scheme::Unknown);
        assert_eq!(classify_scheme(""), Scheme::Unknown);
    }

    #[test]
    fn keyword_detection_handles_brace_without_space() {
        assert_eq!(classify_scheme("function{\n}"), Scheme::Function);
    }

    #[test]
    fn balanced_document_has_no_errors() {
        let parser = XsParser;
        let text = "query q {\n  var $a = [1, (2), {\"k\": 3}]\n}";
        assert!(parser.parse(text, Scheme::Api).errors.is_empty());
    }

    #[test]
    fn unclosed_brace_is_reported_at_its_opening_offset() {
        let parser = XsParser;
        let text = "query q {\n  var $a = 1\n";
        let outcome = parser.parse(text, Scheme::Api);
        assert_eq!(outcome.errors.len(), 1);
        let err = &outcome.errors[0];
        assert!(err.message.contains("Unclosed delimiter '{'"));
        assert_eq!(err.token.unwrap().start_offset, 8);
    }

    #[test]
    fn stray_closer_is_reported() {
        let parser = XsParser;
        let outcome = parser.parse("}", Scheme::Unknown);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].message.contains("Unexpected closing delimiter"));
    }

    #[test]
    fn mismatched_pair_is_reported() {
        let parser = XsParser;
        let outcome = parser.parse("query q { [ }", Scheme::Api);
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.message.contains("Mismatched delimiter")));
    }

    #[test]
    fn unterminated_string_is_reported() {
        let parser = XsParser;
        let outcome = parser.parse("var $a = \"hello\n", Scheme::Unknown);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].message.contains("Unterminated string"));
    }

    #[test]
    fn escaped_quote_does_not_terminate_string() {
        let parser = XsParser;
        let outcome = parser.parse(r#"var $a = "he said \"hi\"""#, Scheme::Unknown);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn delimiters_inside_strings_and_comments_are_ignored() {
        let parser = XsParser;
        let text = "query q {\n  // ignore } this\n  var $a = \"{[(\"\n}";
        assert!(parser.parse(text, Scheme::Api).errors.is_empty());
    }
}
