//! Suggestion heuristics appended to parser error messages.
//!
//! The tables below encode the mistakes people coming from other languages
//! make most often: wrong type names, reserved `$` variables, and syntax
//! carried over from other templating systems.

use std::sync::OnceLock;

use regex::Regex;

/// Type names users try, mapped to the XanoScript spelling.
pub const TYPE_ALIASES: &[(&str, &str)] = &[
    ("boolean", "bool"),
    ("integer", "int"),
    ("string", "text"),
    ("number", "decimal"),
    ("float", "decimal"),
    ("double", "decimal"),
    ("array", "type[]"),
    ("list", "type[]"),
    ("object", "json"),
    ("map", "json"),
    ("dict", "json"),
    ("dictionary", "json"),
];

/// Variable names the runtime reserves; user declarations shadow them.
pub const RESERVED_VARIABLES: &[&str] = &[
    "$response",
    "$output",
    "$input",
    "$index",
    "$auth",
    "$env",
    "$db",
    "$this",
    "$result",
];

/// Mistake patterns paired with the fix to suggest. The optional guard
/// pattern vetoes the suggestion when it also matches, standing in for
/// lookahead (`integer(` is a function call, not a type).
const SYNTAX_SUGGESTIONS: &[(&str, Option<&str>, &str)] = &[
    (
        r"else\s+if",
        None,
        r#"Use "elseif" (one word) instead of "else if""#,
    ),
    (
        r"body\s*=",
        None,
        r#"Use "params" instead of "body" for api.request request body"#,
    ),
    (
        r"\|default:",
        None,
        r#"There is no "default" filter. Use "first_notnull" or "??" operator instead"#,
    ),
    (
        r"boolean",
        None,
        r#"Use "bool" instead of "boolean" for type declaration"#,
    ),
    (
        r"integer",
        Some(r"integer\s*\("),
        r#"Use "int" instead of "integer" for type declaration"#,
    ),
    (
        r"string",
        Some(r"string\s*\("),
        r#"Use "text" instead of "string" for type declaration"#,
    ),
];

fn alias_patterns() -> &'static Vec<(Regex, &'static str, &'static str)> {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        TYPE_ALIASES
            .iter()
            .map(|&(alias, correct)| {
                let re = Regex::new(&format!(r"(?i)\b{alias}\b"))
                    .unwrap_or_else(|e| panic!("invalid alias pattern for {alias}: {e}"));
                (re, alias, correct)
            })
            .collect()
    })
}

fn syntax_patterns() -> &'static Vec<(Regex, Option<Regex>, &'static str)> {
    static PATTERNS: OnceLock<Vec<(Regex, Option<Regex>, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SYNTAX_SUGGESTIONS
            .iter()
            .map(|&(pattern, guard, suggestion)| {
                let re = Regex::new(pattern)
                    .unwrap_or_else(|e| panic!("invalid suggestion pattern {pattern}: {e}"));
                let guard = guard.map(|g| {
                    Regex::new(g).unwrap_or_else(|e| panic!("invalid guard pattern {g}: {e}"))
                });
                (re, guard, suggestion)
            })
            .collect()
    })
}

/// Appends suggestions and the offending source line to a parser message.
///
/// `line_number` is 0-based. At most one suggestion from each table is
/// appended, matching on the error line first and falling back to the whole
/// document for the syntax table.
#[must_use]
pub fn enhance_message(message: &str, code: &str, line_number: usize) -> String {
    let mut enhanced = message.to_string();
    let error_line = code.lines().nth(line_number).unwrap_or("");

    for (re, alias, correct) in alias_patterns() {
        if re.is_match(error_line) {
            enhanced.push_str(&format!(
                "\n\n\u{1f4a1} Suggestion: Use \"{correct}\" instead of \"{alias}\""
            ));
            break;
        }
    }

    for reserved in RESERVED_VARIABLES {
        if error_line.contains(&format!("var {reserved}"))
            || error_line.contains(&format!("var.update {reserved}"))
        {
            let replacement = reserved.replace('$', "$my_");
            enhanced.push_str(&format!(
                "\n\n\u{1f4a1} \"{reserved}\" is a reserved variable name. \
                 Try a different name like \"{replacement}\""
            ));
            break;
        }
    }

    for (re, guard, suggestion) in syntax_patterns() {
        let hit = |text: &str| {
            re.is_match(text) && !guard.as_ref().is_some_and(|g| g.is_match(text))
        };
        if hit(error_line) || hit(code) {
            enhanced.push_str(&format!("\n\n\u{1f4a1} Suggestion: {suggestion}"));
            break;
        }
    }

    let trimmed = error_line.trim();
    if !trimmed.is_empty() {
        enhanced.push_str(&format!("\n\nCode at line {}:\n  {trimmed}", line_number + 1));
    }

    enhanced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_type_alias_replacement() {
        let out = enhance_message("Unexpected token", "input { boolean active }", 0);
        assert!(out.contains(r#"Use "bool" instead of "boolean""#));
    }

    #[test]
    fn alias_match_is_case_insensitive_and_word_bounded() {
        let out = enhance_message("err", "var $x:Integer = 1", 0);
        assert!(out.contains(r#"Use "int" instead of "integer""#));

        let none = enhance_message("err", "var $listing = 1", 0);
        assert!(!none.contains("instead of \"list\""));
    }

    #[test]
    fn flags_reserved_variable_declarations() {
        let out = enhance_message("err", "var $response = 1", 0);
        assert!(out.contains(r#""$response" is a reserved variable name"#));
        assert!(out.contains("$my_response"));
    }

    #[test]
    fn suggests_elseif_for_split_keyword() {
        let code = "if ($a) {\n} else if ($b) {\n}";
        let out = enhance_message("Unexpected token", code, 1);
        assert!(out.contains(r#"Use "elseif" (one word)"#));
    }

    #[test]
    fn syntax_patterns_fall_back_to_whole_document() {
        // Error on line 0, mistake on line 2.
        let code = "query x {\n  var $a = 1\n  if ($a) {} else if ($b) {}\n}";
        let out = enhance_message("err", code, 1);
        assert!(out.contains("elseif"));
    }

    #[test]
    fn appends_offending_line_with_one_based_number() {
        let out = enhance_message("err", "first\n  second line  \nthird", 1);
        assert!(out.ends_with("Code at line 2:\n  second line"));
    }

    #[test]
    fn blank_error_line_appends_nothing() {
        let out = enhance_message("err", "first\n\nthird", 1);
        assert_eq!(out, "err");
    }

    #[test]
    fn at_most_one_suggestion_per_table() {
        let out = enhance_message("err", "boolean integer string", 0);
        let count = out.matches("Suggestion:").count();
        assert_eq!(count, 2); // one alias suggestion + one syntax suggestion
    }
}
