//! Truck inspection records.

use std::fmt;

use serde_json::Value;

use crate::error::ReportError;

use super::aliases;
use super::{collection, record_id, require_object, timestamp, FromRow, Timestamp};

/// Workflow status of an inspection. Free text is tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectionStatus {
    Completed,
    InProgress,
    Draft,
    Other(String),
}

impl InspectionStatus {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "completed" => InspectionStatus::Completed,
            "in_progress" => InspectionStatus::InProgress,
            "draft" => InspectionStatus::Draft,
            _ => InspectionStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            InspectionStatus::Completed => "Completed",
            InspectionStatus::InProgress => "In Progress",
            InspectionStatus::Draft => "Draft",
            InspectionStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Pass,
    Fail,
    NotApplicable,
}

impl ItemStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("pass") => ItemStatus::Pass,
            Some("fail") => ItemStatus::Fail,
            _ => ItemStatus::NotApplicable,
        }
    }
}

/// One inspected attribute of a truck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: ItemStatus,
    pub severity: Option<String>,
    pub note: Option<String>,
    pub image: Option<String>,
}

impl ChecklistItem {
    /// Build an item; `key` is the map key when the checklist is stored
    /// as an object keyed by item name.
    pub fn from_entry(key: Option<&str>, entry: &Value) -> Self {
        // {"Tyres": "pass"} style entries carry only the status.
        if let Some(status) = entry.as_str() {
            return Self {
                name: key.map(str::to_string),
                description: None,
                status: ItemStatus::parse(Some(status)),
                severity: None,
                note: None,
                image: None,
            };
        }

        Self {
            name: aliases::ITEM_NAME
                .text(entry)
                .or_else(|| key.map(str::to_string)),
            description: aliases::ITEM_DESCRIPTION.text(entry),
            status: ItemStatus::parse(aliases::ITEM_STATUS.text(entry).as_deref()),
            severity: aliases::ITEM_SEVERITY.text(entry),
            note: aliases::ITEM_NOTE.text(entry),
            image: aliases::ITEM_IMAGE.text(entry),
        }
    }
}

/// Read-only snapshot of one inspection row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionRecord {
    pub id: String,
    pub truck_number: Option<String>,
    pub driver_name: Option<String>,
    pub inspector_name: Option<String>,
    pub depot: Option<String>,
    pub transporter: Option<String>,
    pub status: Option<String>,
    pub outcome: Option<String>,
    pub created_at: Option<Timestamp>,
    pub items: Vec<ChecklistItem>,
    pub driver_signature: Option<String>,
    pub inspector_signature: Option<String>,
}

impl InspectionRecord {
    pub fn status_kind(&self) -> Option<InspectionStatus> {
        self.status.as_deref().map(InspectionStatus::parse)
    }

    pub fn failed_items(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == ItemStatus::Fail)
            .count()
    }
}

impl FromRow for InspectionRecord {
    const TABLE: &'static str = "inspections";

    fn from_row(row: &Value) -> Result<Self, ReportError> {
        require_object(row)?;

        let items = collection(row, &aliases::CHECKLIST)
            .iter()
            .map(|(key, entry)| ChecklistItem::from_entry(key.as_deref(), entry))
            .collect();

        Ok(Self {
            id: record_id(row),
            truck_number: aliases::TRUCK_NUMBER.text(row),
            driver_name: aliases::DRIVER_NAME.text(row),
            inspector_name: aliases::INSPECTOR_NAME.text(row),
            depot: aliases::DEPOT.text(row),
            transporter: aliases::TRANSPORTER.text(row),
            status: aliases::STATUS.text(row),
            outcome: aliases::OUTCOME.text(row),
            created_at: timestamp(row),
            items,
            driver_signature: aliases::DRIVER_SIGNATURE.text(row),
            inspector_signature: aliases::INSPECTOR_SIGNATURE.text(row),
        })
    }

    fn id(&self) -> &str {
        &self.id
    }
}
