//! Placeholder parser for `{{name}}` syntax
//!
//! Parses strings to extract placeholder references with their positions.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `{{identifier}}` where identifier is a run of ASCII letters,
/// digits and underscores.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid regex"));

/// A placeholder found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name (without `{{ }}`).
    pub name: String,

    /// Byte range in the original string covering the whole placeholder.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Extracts all placeholder references, left to right and non-overlapping.
///
/// # Examples
///
/// ```
/// use probe_application::variable_resolver::parser::parse_variables;
///
/// let refs = parse_variables("/users/{{user_id}}/posts/{{post_id}}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "user_id");
/// assert_eq!(refs[1].name, "post_id");
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    PLACEHOLDER
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(VariableReference::new(name.as_str(), whole.range()))
        })
        .collect()
}

/// Returns true if the input contains at least one placeholder.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    PLACEHOLDER.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_variable() {
        let refs = parse_variables("{{host}}");
        assert_eq!(refs, vec![VariableReference::new("host", 0..8)]);
    }

    #[test]
    fn test_parse_embedded_variables() {
        let refs = parse_variables("Bearer {{token}} for {{user_1}}");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "token");
        assert_eq!(refs[0].span, 7..16);
        assert_eq!(refs[1].name, "user_1");
    }

    #[test]
    fn test_non_word_names_are_not_placeholders() {
        assert!(parse_variables("{{ spaced }}").is_empty());
        assert!(parse_variables("{{$uuid}}").is_empty());
        assert!(parse_variables("{{a-b}}").is_empty());
        assert!(parse_variables("{{}}").is_empty());
    }

    #[test]
    fn test_unclosed_braces() {
        assert!(parse_variables("{{name").is_empty());
        assert!(!has_variables("{name}"));
    }

    #[test]
    fn test_triple_braces_match_inner_placeholder() {
        let refs = parse_variables("{{{id}}}");
        assert_eq!(refs, vec![VariableReference::new("id", 1..7)]);
    }

    #[test]
    fn test_non_ascii_names_are_not_placeholders() {
        assert!(parse_variables("/caf/{{café}}").is_empty());
        assert!(!has_variables("{{名前}}"));
        assert!(!has_variables("{{ünïcode_id}}"));
    }
}
