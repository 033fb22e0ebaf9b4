// crates/todo_marker/src/lib.rs

//! The single-line TODO comment convention shared by the scanner crates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a TODO comment: `//`, optional whitespace, `TODO` in any case,
/// then any run of `:` and whitespace. Group 1 is the rest of the line.
pub const TODO_PATTERN: &str = r"(?i)//\s*TODO[:\s]*(.*)";

static TODO_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TODO_PATTERN).expect("TODO_PATTERN is a valid regex"));

/// Returns the untrimmed text following the first TODO marker on `line`,
/// or `None` if the line carries no marker.
pub fn match_todo(line: &str) -> Option<&str> {
    TODO_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_with_colon() {
        assert_eq!(match_todo("// TODO: fix this"), Some("fix this"));
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        assert_eq!(match_todo("  //todo refactor"), Some("refactor"));
        assert_eq!(match_todo("//  ToDo:: later"), Some("later"));
    }

    #[test]
    fn test_marker_after_code() {
        assert_eq!(match_todo("let x = 1; // TODO bob; 2024; check"), Some("bob; 2024; check"));
    }

    #[test]
    fn test_bare_marker_has_empty_payload() {
        assert_eq!(match_todo("// TODO"), Some(""));
    }

    #[test]
    fn test_first_marker_wins() {
        assert_eq!(match_todo("// TODO first // TODO second"), Some("first // TODO second"));
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(match_todo("// plain comment"), None);
        assert_eq!(match_todo("TODO without slashes"), None);
        assert_eq!(match_todo("/* TODO block */"), None);
    }
}
