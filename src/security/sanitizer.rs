//! Output escaping and injection detection for report fields.
//!
//! Every record field reaches the document through [`escape_html`].
//! Detection does not change the output; it only logs, so operators can
//! spot rows carrying markup.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::logging::structured::LogContext;

/// Fields longer than this are truncated in the document.
pub const MAX_FIELD_CHARS: usize = 2_000;

lazy_static! {
    /// Markup/script injection patterns
    static ref XSS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)<script[^>]*>").unwrap(),
        Regex::new(r"(?i)javascript:").unwrap(),
        Regex::new(r"(?i)on\w+\s*=").unwrap(),
        Regex::new(r"(?i)<iframe[^>]*>").unwrap(),
        Regex::new(r"(?i)<object[^>]*>").unwrap(),
        Regex::new(r"(?i)<embed[^>]*>").unwrap(),
        Regex::new(r"(?i)<style[^>]*>").unwrap(),
    ];

    /// URL schemes that must never reach an `src` attribute
    static ref UNSAFE_SCHEME: Regex =
        Regex::new(r"(?i)^\s*(javascript|vbscript|data:text/html|file):").unwrap();
}

/// Escape text for an HTML text node or a double/single-quoted attribute.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Truncate overlong field text on a char boundary.
pub fn clamp_field(input: &str) -> Cow<'_, str> {
    match input.char_indices().nth(MAX_FIELD_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &input[..cut])),
        None => Cow::Borrowed(input),
    }
}

/// Count of injection patterns found in a field.
pub fn injection_detections(input: &str) -> usize {
    XSS_PATTERNS.iter().filter(|p| p.is_match(input)).count()
}

/// Whether a URL uses a scheme that can execute script.
pub fn is_unsafe_url(url: &str) -> bool {
    UNSAFE_SCHEME.is_match(url)
}

/// Running tally of detections for one document.
#[derive(Debug, Default)]
pub struct SanitizationReport {
    pub fields_scanned: usize,
    pub injection_detections: usize,
    pub truncated_fields: usize,
    pub rejected_urls: usize,
}

impl SanitizationReport {
    pub fn has_detections(&self) -> bool {
        self.injection_detections + self.truncated_fields + self.rejected_urls > 0
    }

    /// Scan one field, logging each hit at debug level.
    pub fn scan(&mut self, field: &str, value: &str, ctx: &LogContext) {
        self.fields_scanned += 1;

        let hits = injection_detections(value);
        if hits > 0 {
            log::debug!("{} PATTERN_DETECTED type=xss field={} hits={}", ctx, field, hits);
            self.injection_detections += hits;
        }

        if value.chars().count() > MAX_FIELD_CHARS {
            log::debug!(
                "{} SIZE_LIMIT_EXCEEDED field={} limit={}",
                ctx,
                field,
                MAX_FIELD_CHARS
            );
            self.truncated_fields += 1;
        }
    }

    pub fn reject_url(&mut self, field: &str, ctx: &LogContext) {
        log::debug!("{} URL_REJECTED field={}", ctx, field);
        self.rejected_urls += 1;
    }

    /// Emit the per-document summary.
    pub fn log_summary(&self, ctx: &LogContext) {
        if self.has_detections() {
            log::warn!(
                "{} SECURITY_DETECTIONS xss={} truncated={} rejected_urls={} scanned={}",
                ctx,
                self.injection_detections,
                self.truncated_fields,
                self.rejected_urls,
                self.fields_scanned
            );
        } else {
            log::debug!("{} SANITIZE_COMPLETE scanned={} detections=0", ctx, self.fields_scanned);
        }
    }
}
