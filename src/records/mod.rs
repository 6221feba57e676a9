//! Typed, read-only snapshots of record-store rows.
//!
//! Rows are resolved through the alias tables in [`aliases`]; missing
//! fields stay `None` and are substituted at display time.

pub mod aliases;
pub mod inspection;
pub mod quality;
pub mod timestamp;

pub use inspection::*;
pub use quality::*;
pub use timestamp::*;

use serde_json::{Map, Value};

use crate::error::ReportError;
use crate::extraction::FieldAliases;
use crate::logging::structured::LogContext;

/// A record type that can be built from one record-store row.
pub trait FromRow: Sized {
    /// Table the rows come from, for logging.
    const TABLE: &'static str;

    fn from_row(row: &Value) -> Result<Self, ReportError>;

    fn id(&self) -> &str;
}

/// Build records from rows, skipping rows that are not JSON objects.
pub fn parse_rows<T: FromRow>(rows: &[Value], ctx: &LogContext) -> Vec<T> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (index, row) in rows.iter().enumerate() {
        match T::from_row(row) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                log::warn!(
                    "{} ROW_SKIPPED table={} index={} error={}",
                    ctx,
                    T::TABLE,
                    index,
                    e
                );
            }
        }
    }

    log::debug!(
        "{} ROWS_PARSED table={} records={} skipped={}",
        ctx,
        T::TABLE,
        records.len(),
        skipped
    );

    records
}

pub(crate) fn require_object(row: &Value) -> Result<&Map<String, Value>, ReportError> {
    row.as_object().ok_or(ReportError::NotAnObject)
}

pub(crate) fn record_id(row: &Value) -> String {
    aliases::ID.text(row).unwrap_or_else(|| "unknown".to_string())
}

pub(crate) fn timestamp(row: &Value) -> Option<Timestamp> {
    aliases::CREATED_AT.text(row).map(|raw| Timestamp::parse(&raw))
}

/// Nested collection stored as an array, a JSON-encoded string or a keyed
/// object. Keyed objects become `(Some(key), value)` entries.
pub(crate) fn collection(row: &Value, field: &FieldAliases) -> Vec<(Option<String>, Value)> {
    let Some(value) = field.resolve(row) else {
        return Vec::new();
    };

    let decoded;
    let value = match value {
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(v) => {
                decoded = v;
                &decoded
            }
            Err(_) => return Vec::new(),
        },
        other => other,
    };

    match value {
        Value::Array(arr) => arr.iter().map(|v| (None, v.clone())).collect(),
        Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| (Some(k.clone()), v.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_shapes() {
        let from_array = json!({"items": [{"name": "Tyres"}]});
        assert_eq!(collection(&from_array, &aliases::CHECKLIST).len(), 1);

        let from_string = json!({"items": "[{\"name\": \"Tyres\"}, {\"name\": \"Brakes\"}]"});
        assert_eq!(collection(&from_string, &aliases::CHECKLIST).len(), 2);

        let from_object = json!({"checklist": {"Tyres": {"status": "pass"}}});
        let entries = collection(&from_object, &aliases::CHECKLIST);
        assert_eq!(entries[0].0.as_deref(), Some("Tyres"));

        let broken = json!({"items": "not json"});
        assert!(collection(&broken, &aliases::CHECKLIST).is_empty());
    }

    #[test]
    fn test_parse_rows_skips_non_objects() {
        let ctx = LogContext::action("test");
        let rows = vec![json!({"id": "a"}), json!("garbage"), json!({"id": "b"})];
        let records: Vec<InspectionRecord> = parse_rows(&rows, &ctx);
        let ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_id_is_unknown() {
        assert_eq!(record_id(&json!({})), "unknown");
        assert_eq!(record_id(&json!({"id": 17})), "17");
    }
}
