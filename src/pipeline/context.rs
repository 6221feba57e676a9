//! Render context.
//!
//! Carries the render id for log correlation, the generation timestamp
//! stamped into documents and the report configuration.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::config::ReportConfig;
use crate::logging::structured::LogContext;

/// Context for one render (or one batch of renders).
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub render_id: String,
    pub generated_at: NaiveDateTime,
    pub config: ReportConfig,
}

impl RenderContext {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            render_id: format!("rnd-{}", &Uuid::new_v4().simple().to_string()[..8]),
            generated_at: Local::now().naive_local(),
            config,
        }
    }

    /// Pin the generation timestamp (stable output in tests and exports).
    pub fn with_generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::render(&self.render_id)
    }

    pub fn record_context(&self, record_id: &str) -> LogContext {
        self.log_context().with_record(record_id)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}
