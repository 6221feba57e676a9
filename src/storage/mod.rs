//! Storage module.
//!
//! Table names, row models and query builders for the external record
//! store. Execution belongs to whichever [`RecordStore`] is plugged into
//! the console.
//!
//! [`RecordStore`]: crate::console::RecordStore

pub mod models;
pub mod queries;

pub use models::*;
pub use queries::*;
