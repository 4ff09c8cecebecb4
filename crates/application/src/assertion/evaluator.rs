//! JSON assertion evaluation

use indexmap::IndexMap;
use serde_json::Value;

use super::error::{AssertionError, ComparisonOperator};
use super::path::{Extracted, extract_value};
use super::render::{NumberStyle, format_float, render_value};

/// A parsed `>N` / `<N` rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRule {
    /// Operator.
    pub operator: ComparisonOperator,
    /// Bound the actual value is compared against.
    pub bound: f64,
}

impl ComparisonRule {
    /// Parses an expected string as a comparison rule.
    ///
    /// Returns `None` unless the string starts with `>` or `<`. The bound is
    /// read from the longest numeric prefix of the remainder after trimming;
    /// when there is none the bound is `0`.
    #[must_use]
    pub fn parse(expected: &str) -> Option<Self> {
        let operator = if expected.starts_with('>') {
            ComparisonOperator::GreaterThan
        } else if expected.starts_with('<') {
            ComparisonOperator::LessThan
        } else {
            return None;
        };

        let rule = expected.trim();
        let bound = parse_bound(&rule[1..]).unwrap_or(0.0);

        Some(Self { operator, bound })
    }

    /// Whether `actual` satisfies the rule.
    #[must_use]
    pub fn holds(&self, actual: f64) -> bool {
        match self.operator {
            ComparisonOperator::GreaterThan => actual > self.bound,
            ComparisonOperator::LessThan => actual < self.bound,
        }
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    let text = text.trim_start();
    text.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
}

/// Checks every rule against an already-parsed document.
///
/// Rules are checked in map order and the first failure is returned.
///
/// # Errors
///
/// Returns the first failing rule's [`AssertionError`].
pub fn evaluate(document: &Value, rules: &IndexMap<String, Value>) -> Result<(), AssertionError> {
    for (path, expected) in rules {
        let actual = extract_value(document, path)?;
        check_rule(path, actual, expected)?;
    }
    Ok(())
}

/// Parses `body` as JSON and checks every rule against it.
///
/// # Errors
///
/// [`AssertionError::InvalidJson`] if the body does not parse, otherwise as
/// [`evaluate`].
pub fn assert_json(body: &[u8], rules: &IndexMap<String, Value>) -> Result<(), AssertionError> {
    let document: Value =
        serde_json::from_slice(body).map_err(|_| AssertionError::InvalidJson)?;
    evaluate(&document, rules)
}

fn check_rule(path: &str, actual: Extracted<'_>, expected: &Value) -> Result<(), AssertionError> {
    if let Some(rule) = expected.as_str().and_then(ComparisonRule::parse) {
        let Some(actual_num) = actual.as_f64() else {
            return Err(AssertionError::ComparisonOnNonNumber {
                path: path.to_string(),
            });
        };
        if rule.holds(actual_num) {
            return Ok(());
        }
        return Err(AssertionError::ComparisonFailed {
            path: path.to_string(),
            actual: format_float(actual_num),
            operator: rule.operator,
            bound: format_float(rule.bound),
        });
    }

    let actual_text = render_actual(actual);
    let expected_text = render_value(expected, NumberStyle::Native);
    if actual_text == expected_text {
        Ok(())
    } else {
        Err(AssertionError::ValueMismatch {
            path: path.to_string(),
            expected: expected_text,
            actual: actual_text,
        })
    }
}

fn render_actual(actual: Extracted<'_>) -> String {
    match actual {
        Extracted::Length(n) => n.to_string(),
        Extracted::Value(value) => render_value(value, NumberStyle::Float),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn rules(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_printed_form_equality() {
        let doc = json!({"count": 1, "ratio": 1.0, "label": "1"});
        for expected in [json!(1), json!(1.0), json!("1")] {
            for path in ["count", "ratio", "label"] {
                assert_eq!(
                    evaluate(&doc, &rules(&[(path, expected.clone())])),
                    Ok(()),
                    "{path} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_bool_and_collections_compare_by_print() {
        let doc = json!({"ok": true, "tags": ["a", "b"], "meta": {"x": 1}});
        assert_eq!(evaluate(&doc, &rules(&[("ok", json!("true"))])), Ok(()));
        assert_eq!(evaluate(&doc, &rules(&[("tags", json!("[a b]"))])), Ok(()));
        assert_eq!(evaluate(&doc, &rules(&[("tags", json!(["a", "b"]))])), Ok(()));
        assert_eq!(evaluate(&doc, &rules(&[("meta", json!({"x": 1}))])), Ok(()));
    }

    #[test]
    fn test_large_response_numbers_print_as_floats() {
        let doc = json!({"total": 1_000_000});
        assert_eq!(
            evaluate(&doc, &rules(&[("total", json!(1_000_000))])),
            Err(AssertionError::ValueMismatch {
                path: "total".to_string(),
                expected: "1000000".to_string(),
                actual: "1e+06".to_string(),
            })
        );
        assert_eq!(evaluate(&doc, &rules(&[("total", json!("1e+06"))])), Ok(()));
    }

    #[test]
    fn test_greater_than() {
        let rule = rules(&[("n", json!(">5"))]);
        assert_eq!(evaluate(&json!({"n": 6}), &rule), Ok(()));
        assert_eq!(
            evaluate(&json!({"n": 5}), &rule),
            Err(AssertionError::ComparisonFailed {
                path: "n".to_string(),
                actual: "5".to_string(),
                operator: ComparisonOperator::GreaterThan,
                bound: "5".to_string(),
            })
        );
    }

    #[test]
    fn test_less_than_with_float_bound() {
        let rule = rules(&[("latency", json!("< 2.5"))]);
        assert_eq!(evaluate(&json!({"latency": 2.4}), &rule), Ok(()));
        let err = evaluate(&json!({"latency": 2.5}), &rule).unwrap_err();
        assert_eq!(
            err.to_string(),
            "assertion failed at latency: 2.5 is not < 2.5"
        );
    }

    #[test]
    fn test_comparison_on_length() {
        let doc = json!([1, 2, 3]);
        assert_eq!(evaluate(&doc, &rules(&[("$.length", json!(">2"))])), Ok(()));
        assert!(evaluate(&doc, &rules(&[("$.length", json!("<3"))])).is_err());
    }

    #[test]
    fn test_comparison_on_non_number() {
        let doc = json!({"name": "Ada", "flag": true});
        assert_eq!(
            evaluate(&doc, &rules(&[("name", json!(">1"))])),
            Err(AssertionError::ComparisonOnNonNumber {
                path: "name".to_string()
            })
        );
        assert!(evaluate(&doc, &rules(&[("flag", json!("<1"))])).is_err());
    }

    #[test]
    fn test_numeric_string_is_not_a_number_for_comparison() {
        let doc = json!({"count": "10"});
        assert!(matches!(
            evaluate(&doc, &rules(&[("count", json!(">5"))])),
            Err(AssertionError::ComparisonOnNonNumber { .. })
        ));
    }

    #[test]
    fn test_comparison_only_for_string_expected() {
        // A non-string expected value is never a comparison rule.
        let doc = json!({"n": 3});
        assert!(evaluate(&doc, &rules(&[("n", json!(4))])).is_err());
    }

    #[test]
    fn test_comparison_rule_parsing() {
        assert_eq!(ComparisonRule::parse("5"), None);
        assert_eq!(ComparisonRule::parse(" >5"), None);
        assert_eq!(
            ComparisonRule::parse(">  10.5 "),
            Some(ComparisonRule {
                operator: ComparisonOperator::GreaterThan,
                bound: 10.5
            })
        );
        assert_eq!(ComparisonRule::parse("<1e3").map(|r| r.bound), Some(1000.0));
        assert_eq!(ComparisonRule::parse(">5ms").map(|r| r.bound), Some(5.0));
        assert_eq!(ComparisonRule::parse(">abc").map(|r| r.bound), Some(0.0));
        assert_eq!(ComparisonRule::parse(">=5").map(|r| r.bound), Some(0.0));
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = assert_json(b"[1, 2]", &rules(&[("$.length", json!(3))])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "assertion failed at $.length: expected 3, got 2"
        );
    }

    #[test]
    fn test_first_failure_aborts() {
        let doc = json!({"a": 1, "b": 2});
        let err = evaluate(&doc, &rules(&[("a", json!(9)), ("missing", json!(1))])).unwrap_err();
        assert!(matches!(err, AssertionError::ValueMismatch { .. }));
    }

    #[test]
    fn test_extraction_errors_propagate() {
        let doc = json!({"a": 1});
        assert_eq!(
            evaluate(&doc, &rules(&[("b", json!(1))])),
            Err(AssertionError::FieldNotFound {
                path: "b".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_json_body() {
        assert_eq!(
            assert_json(b"<html>", &rules(&[("a", json!(1))])),
            Err(AssertionError::InvalidJson)
        );
    }

    #[test]
    fn test_null_expected_matches_null() {
        let doc = json!({"deleted_at": null});
        assert_eq!(evaluate(&doc, &rules(&[("deleted_at", json!(null))])), Ok(()));
        assert_eq!(evaluate(&doc, &rules(&[("deleted_at", json!("<nil>"))])), Ok(()));
    }
}
