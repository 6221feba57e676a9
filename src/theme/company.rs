//! Company theming for quality reports.
//!
//! One configured company prints on the red letterhead; everyone else on
//! green.

use super::decision::{Palette, GREEN, RED};

/// Whether `company` is the configured red-theme company.
///
/// Comparison ignores case and surrounding whitespace.
pub fn is_red_theme_company(company: Option<&str>, red_company: &str) -> bool {
    let wanted = red_company.trim();
    if wanted.is_empty() {
        return false;
    }
    company
        .map(|c| c.trim().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

pub fn company_palette(company: Option<&str>, red_company: &str) -> Palette {
    if is_red_theme_company(company, red_company) {
        RED
    } else {
        GREEN
    }
}
