//! Security module.
//!
//! Escaping of user-supplied text for the generated documents and
//! detection of markup/script injection attempts in record fields.

pub mod sanitizer;

pub use sanitizer::*;
