//! Application state owned by the console controller.

use serde::{Deserialize, Serialize};

use super::services::Session;
use crate::filter::FilterCriteria;
use crate::records::{InspectionRecord, QualityReportRecord};
use crate::storage::models::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Dashboard,
    Inspections,
    QualityReports,
    Users,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    /// The action went through but a follow-up step did not.
    Warning,
    Error,
}

/// Inline message shown above the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == MessageLevel::Error
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_inspections: usize,
    pub completed_inspections: usize,
    pub total_quality_reports: usize,
    /// Newest first.
    pub recent_inspections: Vec<InspectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub page: Page,
    pub session: Option<Session>,
    pub dashboard: Option<DashboardStats>,
    pub inspections: Vec<InspectionRecord>,
    pub quality_reports: Vec<QualityReportRecord>,
    pub users: Vec<UserProfile>,
    pub inspection_criteria: FilterCriteria,
    pub quality_criteria: FilterCriteria,
    pub message: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Login,
            session: None,
            dashboard: None,
            inspections: Vec::new(),
            quality_reports: Vec::new(),
            users: Vec::new(),
            inspection_criteria: FilterCriteria::default(),
            quality_criteria: FilterCriteria::default(),
            message: None,
        }
    }
}
