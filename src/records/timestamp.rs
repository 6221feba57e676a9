//! Creation timestamps as stored by the record store.
//!
//! Accepted shapes: RFC 3339, `YYYY-MM-DD HH:MM:SS[.fff]`,
//! `YYYY-MM-DDTHH:MM:SS[.fff]` and a bare `YYYY-MM-DD`. Anything else is
//! kept raw and displayed verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time as written, in the offset it was stored with.
    Parsed(NaiveDateTime),
    Raw(String),
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Timestamp::Parsed(dt.naive_local());
        }

        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Timestamp::Parsed(dt);
            }
        }

        if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Timestamp::Parsed(dt);
        }

        Timestamp::Raw(raw.to_string())
    }

    /// Display form using a chrono format string; raw values pass through.
    pub fn display(&self, fmt: &str) -> String {
        match self {
            Timestamp::Parsed(dt) => dt.format(fmt).to_string(),
            Timestamp::Raw(raw) => raw.clone(),
        }
    }

    /// `YYYY-MM-DD`, for file names.
    pub fn date_stamp(&self) -> Option<String> {
        match self {
            Timestamp::Parsed(dt) => Some(dt.format("%Y-%m-%d").to_string()),
            Timestamp::Raw(_) => None,
        }
    }
}
