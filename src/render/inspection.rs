//! Inspection report template.

use crate::pipeline::context::RenderContext;
use crate::records::{ChecklistItem, InspectionRecord, ItemStatus};
use crate::theme::outcome_theme;

use super::layout::{
    document_shell, empty_row, footer, generated_stamp, grid_head, key_values, letterhead,
    signatures, FieldScanner, SignatureSlot,
};
use super::markup::Markup;
use super::{file_slug, Document, ReportKind};

pub const INSPECTION_TITLE: &str = "Truck Inspection Report";

const CHECKLIST_HEADINGS: &[&str] = &["#", "Item", "Description", "Result", "Severity / Note"];

/// Render one inspection into a standalone document.
pub fn render_inspection(record: &InspectionRecord, ctx: &RenderContext) -> Document {
    let log_ctx = ctx.record_context(&record.id);
    let cfg = &ctx.config;
    let meta_ph = cfg.metadata_placeholder.as_str();
    let cell_ph = cfg.cell_placeholder.as_str();
    let mut scan = FieldScanner::new(&log_ctx);

    let outcome = outcome_theme(record.outcome.as_deref(), &log_ctx);
    let created = record.created_at.as_ref().map(|ts| ts.display(&cfg.date_format));
    let status = record.status_kind().map(|s| s.label().to_string());

    let mut body = Markup::new();
    letterhead(&mut body, &cfg.organization_name, &cfg.organization_tagline, INSPECTION_TITLE);

    body.open("div", &[("class", "banner")])
        .text(outcome.phrase())
        .open("small", &[])
        .text("Overall result: ")
        .text(outcome.as_str())
        .close("small")
        .close("div");

    body.element("h2", &[], "Inspection Details");
    key_values(
        &mut body,
        &[
            ("Truck Number", scan.field("truck_number", record.truck_number.as_deref())),
            ("Driver", scan.field("driver_name", record.driver_name.as_deref())),
            ("Inspector", scan.field("inspector_name", record.inspector_name.as_deref())),
            ("Depot", scan.field("depot", record.depot.as_deref())),
            ("Transporter", scan.field("transporter", record.transporter.as_deref())),
            ("Status", scan.field("status", status.as_deref())),
            ("Date", created.as_deref()),
            ("Inspection ID", Some(record.id.as_str())),
        ],
        meta_ph,
    );

    body.element("h2", &[], "Checklist");
    body.open("table", &[("class", "grid")]);
    grid_head(&mut body, CHECKLIST_HEADINGS);
    body.open("tbody", &[]);
    if record.items.is_empty() {
        empty_row(&mut body, CHECKLIST_HEADINGS.len(), "No items recorded");
    }
    for (index, item) in record.items.iter().enumerate() {
        checklist_row(&mut body, index + 1, item, cell_ph, &mut scan);
    }
    body.close("tbody").close("table");
    body.element("p", &[("class", "summary")], &checklist_summary(record));

    body.element("h2", &[], "Signatures");
    let driver_sig = scan.image("driver_signature", record.driver_signature.as_deref());
    let inspector_sig = scan.image("inspector_signature", record.inspector_signature.as_deref());
    signatures(
        &mut body,
        &[
            SignatureSlot {
                role: "Driver",
                name: record.driver_name.as_deref(),
                image: driver_sig,
            },
            SignatureSlot {
                role: "Inspector",
                name: record.inspector_name.as_deref(),
                image: inspector_sig,
            },
        ],
        meta_ph,
    );

    footer(
        &mut body,
        record.inspector_name.as_deref(),
        meta_ph,
        &generated_stamp(&ctx.generated_at, &cfg.date_format),
    );

    scan.report.log_summary(&log_ctx);

    let title = match record.truck_number.as_deref() {
        Some(truck) => format!("{} - {}", INSPECTION_TITLE, truck),
        None => INSPECTION_TITLE.to_string(),
    };
    let html = document_shell(&title, outcome.palette(), body);

    // inspection-[truck]-[date]-<id>.html; the id keeps same-day names apart
    let mut name_parts = vec!["inspection".to_string()];
    if let Some(truck) = record.truck_number.as_deref() {
        name_parts.push(file_slug(truck));
    }
    if let Some(date) = record.created_at.as_ref().and_then(|ts| ts.date_stamp()) {
        name_parts.push(date);
    }
    name_parts.push(file_slug(&record.id));

    Document {
        kind: ReportKind::Inspection,
        record_id: record.id.clone(),
        title,
        file_name: format!("{}.html", name_parts.join("-")),
        invoice_number: None,
        html,
    }
}

fn checklist_row(
    m: &mut Markup,
    position: usize,
    item: &ChecklistItem,
    placeholder: &str,
    scan: &mut FieldScanner<'_>,
) {
    let (badge_class, badge_text) = match item.status {
        ItemStatus::Pass => ("badge pass", "\u{2714} PASS"),
        ItemStatus::Fail => ("badge fail", "\u{2718} FAIL"),
        ItemStatus::NotApplicable => ("badge na", "N/A"),
    };

    m.open("tr", &[])
        .element("td", &[], &position.to_string())
        .open("td", &[])
        .text_or(scan.field("item_name", item.name.as_deref()), placeholder)
        .close("td")
        .open("td", &[])
        .text_or(scan.field("item_description", item.description.as_deref()), placeholder)
        .close("td")
        .open("td", &[])
        .element("span", &[("class", badge_class)], badge_text)
        .close("td")
        .open("td", &[]);

    let severity = scan.field("item_severity", item.severity.as_deref());
    let note = scan.field("item_note", item.note.as_deref());
    match (severity, note) {
        (None, None) => {
            m.text(placeholder);
        }
        (severity, note) => {
            if let Some(severity) = severity {
                m.element("span", &[("class", "severity")], severity);
            }
            if let (Some(_), Some(_)) = (severity, note) {
                m.raw(" &mdash; ");
            }
            if let Some(note) = note {
                m.text(note);
            }
        }
    }

    if let Some(src) = scan.image("item_image", item.image.as_deref()) {
        let alt = format!("{} photo", item.name.as_deref().unwrap_or("Item"));
        m.void("img", &[("class", "item-photo"), ("src", src.as_str()), ("alt", alt.as_str())]);
    }

    m.close("td").close("tr");
}

fn checklist_summary(record: &InspectionRecord) -> String {
    let passed = record
        .items
        .iter()
        .filter(|item| item.status == ItemStatus::Pass)
        .count();
    let failed = record.failed_items();
    let other = record.items.len() - passed - failed;
    format!(
        "{} items checked: {} passed, {} failed, {} not applicable",
        record.items.len(),
        passed,
        failed,
        other
    )
}
