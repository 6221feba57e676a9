//! Outcome theming for inspection reports.

use crate::logging::structured::LogContext;

/// Colors applied to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub soft: &'static str,
}

pub const GREEN: Palette = Palette { primary: "#15803d", soft: "#dcfce7" };
pub const RED: Palette = Palette { primary: "#dc2626", soft: "#fee2e2" };
pub const DARK_RED: Palette = Palette { primary: "#7f1d1d", soft: "#fecaca" };
pub const AMBER: Palette = Palette { primary: "#d97706", soft: "#fef3c7" };
pub const GREY: Palette = Palette { primary: "#6b7280", soft: "#f3f4f6" };

/// Overall verdict of an inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Grounded,
    Monitor,
    Unknown(Option<String>),
}

impl Outcome {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Outcome::Unknown(None);
        };
        match raw.to_uppercase().as_str() {
            "PASS" => Outcome::Pass,
            "FAIL" => Outcome::Fail,
            "GROUNDED" => Outcome::Grounded,
            "MONITOR" => Outcome::Monitor,
            _ => Outcome::Unknown(Some(raw.to_string())),
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Outcome::Pass => GREEN,
            Outcome::Fail => RED,
            Outcome::Grounded => DARK_RED,
            Outcome::Monitor => AMBER,
            Outcome::Unknown(_) => GREY,
        }
    }

    /// Human status phrase stamped on the report.
    pub fn phrase(&self) -> &str {
        match self {
            Outcome::Pass => "OPERATIONAL",
            Outcome::Fail => "SAFETY ISSUE",
            Outcome::Grounded => "UNSAFE - GROUNDED",
            Outcome::Monitor => "SAFE TO DRIVE (MONITOR)",
            Outcome::Unknown(Some(raw)) => raw,
            Outcome::Unknown(None) => "UNKNOWN",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Grounded => "GROUNDED",
            Outcome::Monitor => "MONITOR",
            Outcome::Unknown(_) => "UNKNOWN",
        }
    }
}

/// Resolve the theme for an inspection outcome.
pub fn outcome_theme(raw: Option<&str>, ctx: &LogContext) -> Outcome {
    let outcome = Outcome::parse(raw);

    if let Outcome::Unknown(Some(raw)) = &outcome {
        log::debug!("{} THEME_FALLBACK outcome={:?} palette=grey", ctx, raw);
    } else {
        log::debug!("{} THEME_DECISION outcome={}", ctx, outcome.as_str());
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_outcomes() {
        assert_eq!(Outcome::parse(Some("pass")), Outcome::Pass);
        assert_eq!(Outcome::parse(Some(" FAIL ")), Outcome::Fail);
        assert_eq!(Outcome::parse(Some("Grounded")).palette(), DARK_RED);
        assert_eq!(Outcome::parse(Some("monitor")).phrase(), "SAFE TO DRIVE (MONITOR)");
        assert_eq!(Outcome::Pass.phrase(), "OPERATIONAL");
        assert_eq!(Outcome::Fail.phrase(), "SAFETY ISSUE");
        assert_eq!(Outcome::Grounded.phrase(), "UNSAFE - GROUNDED");
    }

    #[test]
    fn test_unknown_outcomes() {
        let ctx = LogContext::render("test-render");
        let raw = outcome_theme(Some("Pending review"), &ctx);
        assert_eq!(raw.phrase(), "Pending review");
        assert_eq!(raw.palette(), GREY);

        let missing = outcome_theme(None, &ctx);
        assert_eq!(missing.phrase(), "UNKNOWN");
        assert_eq!(Outcome::parse(Some("  ")), Outcome::Unknown(None));
    }
}
