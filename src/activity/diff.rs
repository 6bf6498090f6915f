//! Field-level diffs for update results
//!
//! Summarises what an update changed compared to the loaded post.

use serde_json::Value;

/// Describe top-level field changes between two JSON objects
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

/// Short display form; long strings are cut to 40 characters
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 40 => {
            let cut: String = s.chars().take(37).collect();
            format!("\"{}...\"", cut)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_field() {
        let before = json!({"id": 1, "title": "Old"});
        let after = json!({"id": 1, "title": "New"});
        assert_eq!(
            generate_diff(&before, &after),
            Some("title: \"Old\" -> \"New\"".to_string())
        );
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"id": 1, "title": "Same"});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_added_and_removed() {
        let before = json!({"a": 1});
        let after = json!({"b": 2});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> 2"));
    }

    #[test]
    fn test_long_strings_truncated() {
        let before = json!({"body": "x".repeat(60)});
        let after = json!({"body": "y"});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("..."));
        assert!(diff.len() < 80);
    }
}
