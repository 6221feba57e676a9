//! Field extraction from loosely shaped record rows.
//!
//! Rows come from the record store as JSON with drifting key names. Each
//! canonical field is resolved through an ordered alias list.

pub mod fields;
pub mod json_path;

pub use fields::*;
pub use json_path::*;
