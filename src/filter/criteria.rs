//! Filter criteria.

use serde::{Deserialize, Serialize};

/// Exact-match picker fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Status,
    Depot,
    Product,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Status => "status",
            FilterField::Depot => "depot",
            FilterField::Product => "product",
        }
    }
}

/// Active criteria. An empty string places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_text: String,
    pub status: String,
    pub depot: String,
    pub product: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn depot(mut self, depot: impl Into<String>) -> Self {
        self.depot = depot.into();
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.status.is_empty()
            && self.depot.is_empty()
            && self.product.is_empty()
    }

    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Status => &self.status,
            FilterField::Depot => &self.depot,
            FilterField::Product => &self.product,
        }
    }
}
