//! Structured logging with render context.
//!
//! Every log line carries the render id (and record id where known) so a
//! single report can be followed from JSON row to finished document.

pub mod structured;

pub use structured::*;
