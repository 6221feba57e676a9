//! Configuration.
//!
//! Defaults, then an optional YAML file, then environment overrides.
//! Every field has a default so partial files are fine.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const ENV_ORG_NAME: &str = "FLEETCHECK_ORG_NAME";
pub const ENV_RED_THEME_COMPANY: &str = "FLEETCHECK_RED_THEME_COMPANY";
pub const ENV_LIST_LIMIT: &str = "FLEETCHECK_LIST_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub organization_name: String,
    pub organization_tagline: String,
    /// Quality reports for this company use the red letterhead.
    pub red_theme_company: String,
    /// Shown for absent metadata values.
    pub metadata_placeholder: String,
    /// Shown for absent table cells.
    pub cell_placeholder: String,
    /// chrono format for timestamps in documents.
    pub date_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            organization_name: "FleetCheck Safety & Quality".to_string(),
            organization_tagline: "Truck Inspection and Fuel Quality Assurance".to_string(),
            red_theme_company: "Hashi Energy".to_string(),
            metadata_placeholder: "N/A".to_string(),
            cell_placeholder: "-".to_string(),
            date_format: "%d %b %Y, %H:%M".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Row limit for list views.
    pub list_limit: usize,
    /// Recent inspections shown on the dashboard.
    pub dashboard_recent: usize,
    pub min_password_len: usize,
    /// The only role allowed past sign-in.
    pub required_role: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            list_limit: 100,
            dashboard_recent: 5,
            min_password_len: 6,
            required_role: "manager".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub console: ConsoleConfig,
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from an optional YAML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
                let parsed = Self::from_yaml_str(&raw)
                    .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
                log::info!("CONFIG_LOADED path={}", path.display());
                parsed
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// [`Config::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_ORG_NAME).filter(|v| !v.trim().is_empty()) {
            self.report.organization_name = name;
        }
        if let Some(company) = lookup(ENV_RED_THEME_COMPANY) {
            self.report.red_theme_company = company;
        }
        if let Some(limit) = lookup(ENV_LIST_LIMIT) {
            match limit.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.console.list_limit = n,
                _ => log::warn!("CONFIG_OVERRIDE_IGNORED key={} value={:?}", ENV_LIST_LIMIT, limit),
            }
        }
    }
}
