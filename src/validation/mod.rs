//! Input validation module.
//!
//! Checks run on console forms before any call reaches an external
//! collaborator.

pub mod input;

pub use input::*;
