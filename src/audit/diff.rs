//! Diff generation for audit logging
//!
//! Produces a one-line summary of the top-level fields that changed between
//! two serialized records.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are listed. Returns `None` if nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if let Some(after_val) = after_obj.get(key) {
                    if before_val != after_val {
                        changes.push(format!(
                            "{}: {} -> {}",
                            key,
                            format_value(before_val),
                            format_value(after_val)
                        ));
                    }
                } else {
                    changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    ));
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ => {
            if before != after {
                Some(format!(
                    "{} -> {}",
                    format_value(before),
                    format_value(after)
                ))
            } else {
                None
            }
        }
    }
}

/// Format a JSON value for display, truncating long strings
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"category": "Food", "amount": 2500});
        let after = json!({"category": "Food", "amount": 3000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 2500 -> 3000");
    }

    #[test]
    fn test_string_field_change() {
        let before = json!({"note": "Rent"});
        let after = json!({"note": "Rent payment"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("note: \"Rent\" -> \"Rent payment\""));
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"a": 1});
        let after = json!({"b": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> 2"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Same"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(100), &json!(250)),
            Some("100 -> 250".to_string())
        );
    }

    #[test]
    fn test_long_multibyte_string_is_truncated() {
        let long = "₹".repeat(60);
        let diff = generate_diff(&json!({"note": ""}), &json!({"note": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }
}
