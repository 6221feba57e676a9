//! Report theming.
//!
//! - Inspection reports are colored by their overall outcome
//! - Quality reports are colored by the issuing company

pub mod company;
pub mod decision;

pub use company::*;
pub use decision::*;
