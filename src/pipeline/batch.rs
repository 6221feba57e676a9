//! Rendering from raw JSON, one row or many.

use serde_json::Value;

use crate::error::ReportError;
use crate::records::record_id;
use crate::render::{render, Document, ReportKind};

use super::context::RenderContext;

/// Outcome of rendering one row of a batch.
#[derive(Debug)]
pub struct RowResult {
    pub index: usize,
    pub record_id: String,
    pub outcome: Result<Document, ReportError>,
}

/// Outcome of rendering a batch.
#[derive(Debug)]
pub struct BatchResult {
    pub received_count: usize,
    pub rendered_count: usize,
    pub failed_count: usize,
    pub rows: Vec<RowResult>,
}

impl BatchResult {
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.rows.iter().filter_map(|row| row.outcome.as_ref().ok())
    }
}

/// Render one record given as JSON text.
pub fn render_json(kind: &str, json: &str, ctx: &RenderContext) -> Result<Document, ReportError> {
    // Reject the kind before parsing so a bad kind never depends on the payload.
    kind.parse::<ReportKind>()?;

    let row: Value = serde_json::from_str(json).map_err(|e| {
        log::warn!("{} RECORD_PARSE_FAILED error={}", ctx.log_context(), e);
        e
    })?;
    render(kind, &row, ctx)
}

/// Render many rows; a failing row is reported and the batch continues.
///
/// An invalid kind fails the whole batch up front.
pub fn render_batch(kind: &str, rows: &[Value], ctx: &RenderContext) -> Result<BatchResult, ReportError> {
    kind.parse::<ReportKind>()?;

    let mut results = Vec::with_capacity(rows.len());
    let mut rendered = 0;
    let mut failed = 0;

    for (index, row) in rows.iter().enumerate() {
        let record_id = record_id(row);

        let outcome = render(kind, row, ctx);
        match &outcome {
            Ok(_) => rendered += 1,
            Err(e) => {
                failed += 1;
                log::warn!(
                    "{} ROW_RENDER_FAILED index={} error={}",
                    ctx.record_context(&record_id),
                    index,
                    e
                );
            }
        }

        results.push(RowResult {
            index,
            record_id,
            outcome,
        });
    }

    log::info!(
        "{} BATCH_COMPLETE kind={} received={} rendered={} failed={}",
        ctx.log_context(),
        kind,
        rows.len(),
        rendered,
        failed
    );

    Ok(BatchResult {
        received_count: rows.len(),
        rendered_count: rendered,
        failed_count: failed,
        rows: results,
    })
}
