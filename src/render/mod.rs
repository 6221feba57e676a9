//! Printable report rendering.
//!
//! Turns one record into a standalone HTML document with inline CSS,
//! embedded images and print/close controls. Missing fields degrade to
//! placeholders; only an unknown report kind is an error.

pub mod images;
pub mod inspection;
pub mod invoice;
pub(crate) mod layout;
pub mod markup;
pub mod quality;
pub mod styles;

pub use images::*;
pub use inspection::*;
pub use invoice::*;
pub use markup::Markup;
pub use quality::*;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::ReportError;
use crate::pipeline::context::RenderContext;
use crate::records::{FromRow, InspectionRecord, QualityReportRecord};

/// The two document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Inspection,
    Quality,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Inspection => "inspection",
            ReportKind::Quality => "quality",
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inspection" => Ok(ReportKind::Inspection),
            "quality" => Ok(ReportKind::Quality),
            _ => Err(ReportError::InvalidReportKind(s.to_string())),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered, self-contained report.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: ReportKind,
    pub record_id: String,
    pub title: String,
    /// Suggested download name.
    pub file_name: String,
    /// Present on quality reports only; regenerated on every render.
    pub invoice_number: Option<String>,
    pub html: String,
}

impl Document {
    /// SHA-256 of the HTML, hex encoded.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.html.as_bytes()))
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Render a record-store row as the given report kind.
///
/// Fails with [`ReportError::InvalidReportKind`] before touching the row
/// when `kind` is not `"inspection"` or `"quality"`.
pub fn render(kind: &str, row: &Value, ctx: &RenderContext) -> Result<Document, ReportError> {
    let log_ctx = ctx.log_context();
    let kind: ReportKind = kind.parse().map_err(|e| {
        log::warn!("{} RENDER_REJECTED error={}", log_ctx, e);
        e
    })?;

    let document = match kind {
        ReportKind::Inspection => render_inspection(&InspectionRecord::from_row(row)?, ctx),
        ReportKind::Quality => {
            let invoice = invoice_number(&mut rand::thread_rng());
            render_quality(&QualityReportRecord::from_row(row)?, ctx, &invoice)
        }
    };

    log::info!(
        "{} REPORT_RENDERED kind={} bytes={} file={} digest={}",
        ctx.record_context(&document.record_id),
        document.kind,
        document.len(),
        document.file_name,
        &document.digest()[..12]
    );

    Ok(document)
}

/// Lowercase file-name slug: alphanumerics kept, runs of anything else
/// collapsed to a single dash.
pub fn file_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "record".to_string()
    } else {
        slug
    }
}
