//! FleetCheck Core - record filtering and printable report rendering
//!
//! This crate backs the admin console of a truck-inspection and
//! fuel-quality system. The implementation prioritizes:
//!
//! 1. **Tolerance** - loosely shaped rows resolve through alias tables;
//!    missing fields degrade to placeholders, never errors
//! 2. **Safety** - every user-supplied value is escaped, unsafe image
//!    sources are dropped
//! 3. **Logging** - every decision point logged with render/action context
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `records` - Typed inspection and quality-report snapshots
//! - `extraction` - Alias-driven field resolution from JSON rows
//! - `filter` - In-memory search and picker filtering
//! - `render` - Standalone HTML report documents
//! - `theme` - Outcome and company theming decisions
//! - `security` - Escaping, clamping and unsafe-input detection
//! - `pipeline` - Render context and batch rendering
//! - `console` - Admin console controller over external collaborators
//! - `storage` - Record-store tables, models and query builders
//! - `validation` - Form validation
//! - `config` - YAML and environment configuration
//! - `logging` - Structured logging with render/action context

pub mod config;
pub mod console;
pub mod error;
pub mod extraction;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod records;
pub mod render;
pub mod security;
pub mod storage;
pub mod theme;
pub mod validation;

pub use config::Config;
pub use error::{ConsoleError, RemoteError, ReportError, ValidationError};
pub use filter::{distinct_values, filter, FilterCriteria, FilterField};
pub use pipeline::batch::{render_batch, render_json, BatchResult};
pub use pipeline::context::RenderContext;
pub use records::{InspectionRecord, QualityReportRecord};
pub use render::{render, Document, ReportKind};

/// Initialize the process-wide logger at `info`. Safe to call more than
/// once; `RUST_LOG` overrides the level.
pub fn init_logger() {
    init_logger_with_level(log::LevelFilter::Info);
}

pub fn init_logger_with_level(level: log::LevelFilter) {
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
