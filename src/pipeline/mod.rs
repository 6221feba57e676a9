//! Render pipeline.
//!
//! Coordinates raw record rows into finished documents:
//! - JSON parsing
//! - Report kind validation
//! - Record resolution and rendering
//! - Per-row outcome reporting for bulk exports

pub mod batch;
pub mod context;

pub use batch::*;
pub use context::*;
