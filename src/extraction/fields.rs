//! Alias-driven field resolution.
//!
//! A canonical field is declared once with the ordered list of JSON paths
//! it may appear under. The first candidate holding a present value wins.

use serde_json::Value;

use super::json_path::{is_present, resolve_json_path, value_to_text};

/// A canonical field and the JSON paths it may be stored under.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub field: &'static str,
    pub candidates: &'static [&'static str],
}

impl FieldAliases {
    pub const fn new(field: &'static str, candidates: &'static [&'static str]) -> Self {
        Self { field, candidates }
    }

    /// First present raw value among the candidates.
    pub fn resolve<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        self.candidates
            .iter()
            .filter_map(|path| resolve_json_path(row, path))
            .find(|value| is_present(value))
    }

    /// First candidate that yields non-empty display text.
    pub fn text(&self, row: &Value) -> Option<String> {
        self.candidates
            .iter()
            .filter_map(|path| resolve_json_path(row, path))
            .find_map(value_to_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SEAL: FieldAliases = FieldAliases::new("seal_number", &["seal_number", "sealNo", "seal"]);

    #[test]
    fn test_first_candidate_wins() {
        let row = json!({"seal": "S-9", "sealNo": "S-2"});
        assert_eq!(SEAL.text(&row), Some("S-2".to_string()));
    }

    #[test]
    fn test_blank_candidate_is_skipped() {
        let row = json!({"seal_number": "", "sealNo": null, "seal": 4411});
        assert_eq!(SEAL.text(&row), Some("4411".to_string()));
        assert_eq!(SEAL.resolve(&row), Some(&json!(4411)));
    }

    #[test]
    fn test_absent_everywhere() {
        let row = json!({"other": "x"});
        assert_eq!(SEAL.text(&row), None);
        assert_eq!(SEAL.resolve(&row), None);
    }

    #[test]
    fn test_nested_candidate() {
        const COMPANY: FieldAliases = FieldAliases::new("company_name", &["company_name", "company.name"]);
        let row = json!({"company": {"name": "Acme"}});
        assert_eq!(COMPANY.text(&row), Some("Acme".to_string()));
    }
}
