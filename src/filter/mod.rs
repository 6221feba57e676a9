//! In-memory record filtering.
//!
//! Pure, order-preserving narrowing of a record collection by free-text
//! search and exact-match pickers. Re-run on every criteria change.

pub mod criteria;
pub mod search;

pub use criteria::*;
pub use search::*;
