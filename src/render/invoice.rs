//! Quality report invoice numbers.
//!
//! Drawn fresh on every render and never persisted; two renders of the
//! same report carry different numbers.

use rand::Rng;

pub const INVOICE_MIN: u32 = 1;
pub const INVOICE_MAX: u32 = 99_999;

/// Uniform draw in 1..=99999, zero-padded to five digits.
pub fn invoice_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:05}", rng.gen_range(INVOICE_MIN..=INVOICE_MAX))
}
