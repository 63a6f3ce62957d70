// ABOUTME: Total scalar coercions turning loosely-typed spreadsheet cells into canonical values
// ABOUTME: The only escape hatch from untyped row data; every coercion has fallback behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Row coercion utilities.
//!
//! Spreadsheet cells arrive as whatever the source felt like sending: numbers
//! as strings, booleans as strings, free text with stray whitespace, or
//! nothing at all. Every field the normalizer reads passes through exactly one
//! of these three functions. All of them are total; none can fail.

use serde_json::Value;

/// Coerce a numeric-ish cell to a number.
///
/// Numbers pass through as-is. Strings are trimmed and parsed as a decimal
/// number. Anything else (missing cells, empty strings, unparseable or
/// non-finite values) yields `fallback`.
#[must_use]
pub fn to_number(value: &Value, fallback: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(fallback),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return fallback;
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => fallback,
            }
        }
        _ => fallback,
    }
}

/// Coerce a boolean-ish cell to a bool.
///
/// Real booleans pass through. Strings compare case-insensitively against
/// `"true"`; anything else (including missing cells) is `false`.
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Coerce a free-text cell to a trimmed string.
///
/// Missing cells become the empty string, never an option. Numbers and
/// booleans render as their display form.
#[must_use]
pub fn clean_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string().trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_passes_through() {
        assert_eq!(to_number(&json!(3.5), 0.0), 3.5);
        assert_eq!(to_number(&json!(7), 0.0), 7.0);
    }

    #[test]
    fn string_parses_after_trim() {
        assert_eq!(to_number(&json!(" 3.5 "), 0.0), 3.5);
        assert_eq!(to_number(&json!("3.5"), 0.0), 3.5);
    }

    #[test]
    fn unparseable_falls_back() {
        assert_eq!(to_number(&json!("abc"), 0.0), 0.0);
        assert_eq!(to_number(&json!("1,5"), 0.0), 0.0);
    }

    #[test]
    fn missing_uses_fallback() {
        assert_eq!(to_number(&Value::Null, 2.0), 2.0);
    }

    #[test]
    fn empty_string_uses_fallback() {
        assert_eq!(to_number(&json!(""), 7.0), 7.0);
        assert_eq!(to_number(&json!("   "), 7.0), 7.0);
    }

    #[test]
    fn non_finite_falls_back() {
        assert_eq!(to_number(&json!("Infinity"), 0.0), 0.0);
        assert_eq!(to_number(&json!("NaN"), 0.0), 0.0);
    }

    #[test]
    fn bool_is_case_insensitive_true() {
        assert!(to_bool(&json!("TRUE")));
        assert!(to_bool(&json!("true")));
        assert!(to_bool(&json!("True")));
    }

    #[test]
    fn bool_other_strings_are_false() {
        assert!(!to_bool(&json!("yes")));
        assert!(!to_bool(&json!("1")));
        assert!(!to_bool(&json!("")));
        assert!(!to_bool(&Value::Null));
    }

    #[test]
    fn bool_passes_through() {
        assert!(to_bool(&json!(true)));
        assert!(!to_bool(&json!(false)));
    }

    #[test]
    fn text_missing_is_empty() {
        assert_eq!(clean_text(&Value::Null), "");
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(clean_text(&json!("  Bench Press ")), "Bench Press");
    }

    #[test]
    fn text_renders_scalars() {
        assert_eq!(clean_text(&json!(3)), "3");
        assert_eq!(clean_text(&json!(3.5)), "3.5");
        assert_eq!(clean_text(&json!(true)), "true");
    }
}
