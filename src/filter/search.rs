//! Search and picker matching.

use std::collections::BTreeSet;

use crate::records::{InspectionRecord, QualityReportRecord};

use super::criteria::{FilterCriteria, FilterField};

/// A picker field as seen on one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet<'a> {
    /// The record type has no such field; the criterion is ignored.
    Unsupported,
    Value(Option<&'a str>),
}

/// Records that can be narrowed by [`filter`].
pub trait Filterable {
    /// Fields matched by free-text search, in display order.
    fn search_fields(&self) -> Vec<Option<&str>>;

    fn facet(&self, field: FilterField) -> Facet<'_>;
}

impl Filterable for InspectionRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.truck_number.as_deref(),
            self.driver_name.as_deref(),
            self.inspector_name.as_deref(),
            self.transporter.as_deref(),
        ]
    }

    fn facet(&self, field: FilterField) -> Facet<'_> {
        match field {
            FilterField::Status => Facet::Value(self.status.as_deref()),
            FilterField::Depot => Facet::Value(self.depot.as_deref()),
            FilterField::Product => Facet::Unsupported,
        }
    }
}

impl Filterable for QualityReportRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.product.as_deref(),
            self.company_name.as_deref(),
            self.inspector_name.as_deref(),
            self.truck_number.as_deref(),
        ]
    }

    fn facet(&self, field: FilterField) -> Facet<'_> {
        match field {
            FilterField::Status => Facet::Unsupported,
            FilterField::Depot => Facet::Value(self.depot.as_deref()),
            FilterField::Product => Facet::Value(self.product.as_deref()),
        }
    }
}

/// Case-insensitive substring match over the record's search fields.
/// Missing fields count as empty and never match a non-empty term.
pub fn matches_search<T: Filterable + ?Sized>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.unwrap_or("").to_lowercase().contains(&needle))
}

fn matches_facet<T: Filterable + ?Sized>(record: &T, field: FilterField, wanted: &str) -> bool {
    if wanted.is_empty() {
        return true;
    }
    match record.facet(field) {
        Facet::Unsupported => true,
        Facet::Value(None) => false,
        // Status compares case-insensitively; depot and product are exact.
        Facet::Value(Some(actual)) if field == FilterField::Status => {
            actual.to_lowercase() == wanted.to_lowercase()
        }
        Facet::Value(Some(actual)) => actual == wanted,
    }
}

/// Whether a record satisfies every active criterion.
pub fn matches<T: Filterable + ?Sized>(record: &T, criteria: &FilterCriteria) -> bool {
    matches_search(record, &criteria.search_text)
        && matches_facet(record, FilterField::Status, &criteria.status)
        && matches_facet(record, FilterField::Depot, &criteria.depot)
        && matches_facet(record, FilterField::Product, &criteria.product)
}

/// Filter records, preserving input order.
pub fn filter<'a, T: Filterable>(records: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches(*record, criteria))
        .collect()
}

/// Distinct non-empty values of a picker field, sorted.
pub fn distinct_values<T: Filterable>(records: &[T], field: FilterField) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| match record.facet(field) {
            Facet::Value(Some(value)) if !value.trim().is_empty() => Some(value.to_string()),
            _ => None,
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
