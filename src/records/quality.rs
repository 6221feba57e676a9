//! Fuel quality reports.

use serde_json::Value;

use crate::error::ReportError;
use crate::extraction::value_to_text;

use super::aliases;
use super::{collection, record_id, require_object, timestamp, FromRow, Timestamp};

/// Known quality parameters in display order: (canonical key, label).
pub const KNOWN_PARAMS: &[(&str, &str)] = &[
    ("density", "Density"),
    ("temperature", "Temperature"),
    ("water_status", "Water Status"),
    ("differential_compartment_level", "Differential Compartment Level"),
    ("additive", "Additive"),
    ("color", "Color"),
];

/// One physical fuel-tank subdivision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compartment {
    pub id: String,
    pub litres: Option<String>,
    pub certificate_level: Option<String>,
    pub product_level: Option<String>,
    pub seal_number: Option<String>,
}

impl Compartment {
    /// `position` is 1-based and numbers compartments that carry no id.
    pub fn from_entry(position: usize, entry: &Value) -> Self {
        Self {
            id: aliases::COMPARTMENT_ID
                .text(entry)
                .unwrap_or_else(|| position.to_string()),
            litres: aliases::LITRES.text(entry),
            certificate_level: aliases::CERTIFICATE_LEVEL.text(entry),
            product_level: aliases::PRODUCT_LEVEL.text(entry),
            seal_number: aliases::SEAL_NUMBER.text(entry),
        }
    }
}

/// One canonical quality parameter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityParam {
    pub key: String,
    pub label: String,
    pub value: Option<String>,
}

impl QualityParam {
    pub fn new(name: &str, value: Option<String>) -> Self {
        let key = canonical_param_key(name);
        Self {
            label: param_label(&key),
            key,
            value,
        }
    }
}

/// Quality parameters as stored: an ordered list of `{name, value}` pairs
/// or an unordered mapping. Both render identically through [`rows`].
///
/// [`rows`]: QualityParams::rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityParams {
    List(Vec<(String, Option<String>)>),
    Map(Vec<(String, Option<String>)>),
}

impl Default for QualityParams {
    fn default() -> Self {
        QualityParams::List(Vec::new())
    }
}

impl QualityParams {
    fn from_row(row: &Value) -> Self {
        let entries = collection(row, &aliases::QUALITY_PARAMS);
        let keyed = matches!(entries.first(), Some((Some(_), _)));

        if keyed {
            QualityParams::Map(
                entries
                    .into_iter()
                    .filter_map(|(key, value)| key.map(|k| (k, value_to_text(&value))))
                    .collect(),
            )
        } else {
            QualityParams::List(
                entries
                    .iter()
                    .filter_map(|(_, entry)| {
                        let name = aliases::PARAM_NAME.text(entry)?;
                        Some((name, aliases::PARAM_VALUE.text(entry)))
                    })
                    .collect(),
            )
        }
    }

    /// Canonical display rows. Lists keep their order; maps put the known
    /// parameters first in their fixed order, then the rest alphabetically.
    pub fn rows(&self) -> Vec<QualityParam> {
        match self {
            QualityParams::List(pairs) => pairs
                .iter()
                .map(|(name, value)| QualityParam::new(name, value.clone()))
                .collect(),
            QualityParams::Map(pairs) => {
                let mut rows: Vec<QualityParam> = pairs
                    .iter()
                    .map(|(name, value)| QualityParam::new(name, value.clone()))
                    .collect();
                rows.sort_by(|a, b| {
                    known_rank(&a.key)
                        .cmp(&known_rank(&b.key))
                        .then_with(|| a.key.cmp(&b.key))
                });
                rows
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            QualityParams::List(pairs) | QualityParams::Map(pairs) => pairs.is_empty(),
        }
    }
}

fn known_rank(key: &str) -> usize {
    KNOWN_PARAMS
        .iter()
        .position(|(known, _)| *known == key)
        .unwrap_or(KNOWN_PARAMS.len())
}

/// `waterStatus`, `Water Status` and `water-status` all become `water_status`.
pub fn canonical_param_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for ch in name.trim().chars() {
        if ch.is_uppercase() && prev_lower {
            key.push('_');
        }
        if ch == ' ' || ch == '-' {
            if !key.ends_with('_') {
                key.push('_');
            }
            prev_lower = false;
            continue;
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        key.extend(ch.to_lowercase());
    }

    if key == "colour" {
        key = "color".to_string();
    }
    key
}

fn param_label(key: &str) -> String {
    if let Some((_, label)) = KNOWN_PARAMS.iter().find(|(known, _)| *known == key) {
        return label.to_string();
    }

    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read-only snapshot of one quality report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReportRecord {
    pub id: String,
    pub product: Option<String>,
    pub company_name: Option<String>,
    pub truck_number: Option<String>,
    pub inspector_name: Option<String>,
    pub depot: Option<String>,
    pub sealer_name: Option<String>,
    pub created_at: Option<Timestamp>,
    pub compartments: Vec<Compartment>,
    pub quality_params: QualityParams,
    pub inspector_signature: Option<String>,
    pub sealer_signature: Option<String>,
}

impl QualityReportRecord {
    /// Sum of compartment litres that parse as numbers.
    pub fn total_litres(&self) -> Option<f64> {
        let values: Vec<f64> = self
            .compartments
            .iter()
            .filter_map(|c| c.litres.as_deref())
            .filter_map(|l| l.replace(',', "").trim().parse::<f64>().ok())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum())
        }
    }
}

impl FromRow for QualityReportRecord {
    const TABLE: &'static str = "quality_reports";

    fn from_row(row: &Value) -> Result<Self, ReportError> {
        require_object(row)?;

        let compartments = collection(row, &aliases::COMPARTMENTS)
            .iter()
            .enumerate()
            .map(|(index, (_, entry))| Compartment::from_entry(index + 1, entry))
            .collect();

        Ok(Self {
            id: record_id(row),
            product: aliases::PRODUCT.text(row),
            company_name: aliases::COMPANY_NAME.text(row),
            truck_number: aliases::TRUCK_NUMBER.text(row),
            inspector_name: aliases::INSPECTOR_NAME.text(row),
            depot: aliases::DEPOT.text(row),
            sealer_name: aliases::SEALER_NAME.text(row),
            created_at: timestamp(row),
            compartments,
            quality_params: QualityParams::from_row(row),
            inspector_signature: aliases::INSPECTOR_SIGNATURE.text(row),
            sealer_signature: aliases::SEALER_SIGNATURE.text(row),
        })
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compartment_aliases() {
        let row = json!({
            "id": "q-1",
            "compartments": [
                {"id": 1, "litres": 5000, "certificate_level": "1200", "product_level": "1198", "seal_number": "A1"},
                {"compartment_no": "2", "qty": "4,000", "cert_level": 900, "sealNo": "A2"},
                {"quantity": 3000, "seal": "A3"}
            ]
        });

        let record = QualityReportRecord::from_row(&row).unwrap();
        assert_eq!(record.compartments.len(), 3);
        assert_eq!(record.compartments[0].seal_number.as_deref(), Some("A1"));
        assert_eq!(record.compartments[1].id, "2");
        assert_eq!(record.compartments[1].litres.as_deref(), Some("4,000"));
        assert_eq!(record.compartments[1].certificate_level.as_deref(), Some("900"));
        assert_eq!(record.compartments[1].seal_number.as_deref(), Some("A2"));
        assert_eq!(record.compartments[2].id, "3");
        assert_eq!(record.compartments[2].seal_number.as_deref(), Some("A3"));
        assert_eq!(record.total_litres(), Some(12000.0));
    }

    #[test]
    fn test_params_list_and_map_agree() {
        let as_list = QualityReportRecord::from_row(&json!({
            "quality_params": [{"name": "density", "value": "750"}]
        }))
        .unwrap();
        let as_map = QualityReportRecord::from_row(&json!({
            "quality_params": {"density": "750"}
        }))
        .unwrap();

        assert!(matches!(as_list.quality_params, QualityParams::List(_)));
        assert!(matches!(as_map.quality_params, QualityParams::Map(_)));
        assert_eq!(as_list.quality_params.rows(), as_map.quality_params.rows());
        assert_eq!(as_map.quality_params.rows()[0].label, "Density");
    }

    #[test]
    fn test_map_params_known_order_first() {
        let record = QualityReportRecord::from_row(&json!({
            "quality_params": {
                "color": "clear",
                "appearance": "bright",
                "density": 0.835,
                "waterStatus": "nil",
                "temperature": 24
            }
        }))
        .unwrap();

        let labels: Vec<String> = record
            .quality_params
            .rows()
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Density", "Temperature", "Water Status", "Color", "Appearance"]
        );
    }

    #[test]
    fn test_params_as_json_string() {
        let record = QualityReportRecord::from_row(&json!({
            "quality_params": "{\"additive\": \"yes\"}"
        }))
        .unwrap();
        let rows = record.quality_params.rows();
        assert_eq!(rows[0].label, "Additive");
        assert_eq!(rows[0].value.as_deref(), Some("yes"));
    }

    #[test]
    fn test_canonical_param_key() {
        assert_eq!(canonical_param_key("waterStatus"), "water_status");
        assert_eq!(canonical_param_key("Water Status"), "water_status");
        assert_eq!(canonical_param_key("water-status"), "water_status");
        assert_eq!(canonical_param_key("Colour"), "color");
        assert_eq!(
            canonical_param_key("differential_compartment_level"),
            "differential_compartment_level"
        );
        assert_eq!(param_label("flash_point"), "Flash Point");
    }

    #[test]
    fn test_empty_row_degrades() {
        let record = QualityReportRecord::from_row(&json!({})).unwrap();
        assert!(record.compartments.is_empty());
        assert!(record.quality_params.is_empty());
        assert_eq!(record.total_litres(), None);
    }
}
