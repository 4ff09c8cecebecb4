//! Printed form of JSON values
//!
//! Equality rules compare values by how they print, not by type. The
//! printed form is fixed: `<nil>` for null, strings without quotes,
//! `[a b]` for arrays and `map[k:v]` with sorted keys for objects.

use serde_json::Value;

/// How numbers are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// Every number is a 64-bit float. Used for values decoded from a
    /// response body.
    Float,
    /// Integers print as integers and only true floats use float form.
    /// Used for expected literals from the suite definition.
    Native,
}

/// Renders a value in printed form.
#[must_use]
pub fn render_value(value: &Value, style: NumberStyle) -> String {
    match value {
        Value::Null => "<nil>".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match style {
            NumberStyle::Float => format_float(n.as_f64().unwrap_or_default()),
            NumberStyle::Native => {
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(u) = n.as_u64() {
                    u.to_string()
                } else {
                    format_float(n.as_f64().unwrap_or_default())
                }
            }
        },
        Value::Array(items) => {
            let parts: Vec<_> = items.iter().map(|v| render_value(v, style)).collect();
            format!("[{}]", parts.join(" "))
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let parts: Vec<_> = entries
                .into_iter()
                .map(|(k, v)| format!("{k}:{}", render_value(v, style)))
                .collect();
            format!("map[{}]", parts.join(" "))
        }
    }
}

/// Formats a float with the fewest digits that round-trip.
///
/// Exponent form (`1e+06`, `1.5e-05`) is used when the decimal exponent is
/// below -4 or at least 6; otherwise plain decimal form without trailing
/// zeros.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let sign = if mantissa.starts_with('-') { "-" } else { "" };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    if !(-4..6).contains(&exponent) {
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{sign}{first}{fraction}e{exp_sign}{:02}",
            exponent.unsigned_abs()
        );
    }

    if exponent < 0 {
        let zeros = usize::try_from(-exponent - 1).unwrap_or_default();
        return format!("{sign}0.{}{digits}", "0".repeat(zeros));
    }

    let int_len = usize::try_from(exponent + 1).unwrap_or_default();
    if digits.len() <= int_len {
        format!("{sign}{digits}{}", "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{sign}{int_part}.{frac_part}")
    }
}
