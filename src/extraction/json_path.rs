//! JSON path resolution.
//!
//! Resolves dot-notation paths like "profile.full_name" to values in JSON.

use serde_json::Value;

/// Resolve a dot-notation path to a value in JSON.
///
/// # Examples
/// ```
/// use fleetcheck_core::extraction::resolve_json_path;
/// use serde_json::json;
/// let row = json!({"driver": {"name": "Otieno"}});
/// assert_eq!(resolve_json_path(&row, "driver.name"), Some(&json!("Otieno")));
/// ```
pub fn resolve_json_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(data);
    }

    let mut current = data;
    for part in path.split('.') {
        match current {
            Value::Object(obj) => {
                current = obj.get(part)?;
            }
            Value::Array(arr) => {
                // "items.0.name"
                let index: usize = part.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Convert a JSON value to its display string.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(), // Arrays and objects as JSON strings
    }
}

/// Convert a JSON value to display text, treating null and blank as absent.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => None,
        other => {
            let text = value_to_string(other);
            if text.trim().is_empty() {
                None
            } else {
                Some(text.trim().to_string())
            }
        }
    }
}

/// Whether a value counts as present for alias resolution.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(obj) => !obj.is_empty(),
        _ => true,
    }
}
