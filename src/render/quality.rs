//! Quality report template.

use crate::pipeline::context::RenderContext;
use crate::records::{Compartment, QualityReportRecord};
use crate::theme::company_palette;

use super::layout::{
    document_shell, empty_row, footer, generated_stamp, grid_head, key_values, letterhead,
    signatures, FieldScanner, SignatureSlot,
};
use super::markup::Markup;
use super::{file_slug, Document, ReportKind};

pub const QUALITY_TITLE: &str = "Fuel Quality Report";

const COMPARTMENT_HEADINGS: &[&str] = &[
    "Compartment",
    "Litres",
    "Certificate Level",
    "Product Level",
    "Seal Number",
];

/// Render one quality report. `invoice` is drawn by the caller for every
/// render and is not stored anywhere.
pub fn render_quality(record: &QualityReportRecord, ctx: &RenderContext, invoice: &str) -> Document {
    let log_ctx = ctx.record_context(&record.id);
    let cfg = &ctx.config;
    let meta_ph = cfg.metadata_placeholder.as_str();
    let cell_ph = cfg.cell_placeholder.as_str();
    let mut scan = FieldScanner::new(&log_ctx);

    let palette = company_palette(record.company_name.as_deref(), &cfg.red_theme_company);
    let created = record.created_at.as_ref().map(|ts| ts.display(&cfg.date_format));

    log::debug!(
        "{} THEME_DECISION company={:?} palette={}",
        log_ctx,
        record.company_name,
        palette.primary
    );

    let mut body = Markup::new();
    letterhead(&mut body, &cfg.organization_name, &cfg.organization_tagline, QUALITY_TITLE);

    body.open("div", &[("class", "banner")])
        .text("Invoice No. ")
        .text(invoice)
        .open("small", &[])
        .text_or(scan.field("company_name", record.company_name.as_deref()), meta_ph)
        .close("small")
        .close("div");

    body.element("h2", &[], "Report Details");
    key_values(
        &mut body,
        &[
            ("Company", record.company_name.as_deref()),
            ("Product", scan.field("product", record.product.as_deref())),
            ("Truck Number", scan.field("truck_number", record.truck_number.as_deref())),
            ("Depot", scan.field("depot", record.depot.as_deref())),
            ("Inspector", scan.field("inspector_name", record.inspector_name.as_deref())),
            ("Sealer", scan.field("sealer_name", record.sealer_name.as_deref())),
            ("Date", created.as_deref()),
            ("Invoice No.", Some(invoice)),
        ],
        meta_ph,
    );

    body.element("h2", &[], "Compartments");
    body.open("table", &[("class", "grid")]);
    grid_head(&mut body, COMPARTMENT_HEADINGS);
    body.open("tbody", &[]);
    if record.compartments.is_empty() {
        empty_row(&mut body, COMPARTMENT_HEADINGS.len(), "No compartments recorded");
    }
    for compartment in &record.compartments {
        compartment_row(&mut body, compartment, cell_ph, &mut scan);
    }
    if let Some(total) = record.total_litres() {
        body.open("tr", &[("class", "total")])
            .element("td", &[], "Total")
            .element("td", &[], &format_litres(total))
            .element("td", &[("colspan", "3")], "")
            .close("tr");
    }
    body.close("tbody").close("table");

    body.element("h2", &[], "Quality Parameters");
    let params = record.quality_params.rows();
    if params.is_empty() {
        body.element("p", &[("class", "summary")], "No quality parameters recorded");
    } else {
        let values: Vec<(String, Option<&str>)> = params
            .iter()
            .map(|p| (p.label.clone(), scan.field(&p.key, p.value.as_deref())))
            .collect();
        let rows: Vec<(&str, Option<&str>)> = values
            .iter()
            .map(|(label, value)| (label.as_str(), *value))
            .collect();
        key_values(&mut body, &rows, meta_ph);
    }

    body.element("h2", &[], "Signatures");
    let inspector_sig = scan.image("inspector_signature", record.inspector_signature.as_deref());
    let sealer_sig = scan.image("sealer_signature", record.sealer_signature.as_deref());
    signatures(
        &mut body,
        &[
            SignatureSlot {
                role: "Inspector",
                name: record.inspector_name.as_deref(),
                image: inspector_sig,
            },
            SignatureSlot {
                role: "Sealer",
                name: record.sealer_name.as_deref(),
                image: sealer_sig,
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

    let title = format!("{} - Invoice {}", QUALITY_TITLE, invoice);
    let html = document_shell(&title, palette, body);

    let subject = record
        .truck_number
        .as_deref()
        .or(record.product.as_deref())
        .unwrap_or(&record.id);

    Document {
        kind: ReportKind::Quality,
        record_id: record.id.clone(),
        title,
        file_name: format!("quality-{}-{}.html", file_slug(subject), invoice),
        invoice_number: Some(invoice.to_string()),
        html,
    }
}

fn compartment_row(
    m: &mut Markup,
    compartment: &Compartment,
    placeholder: &str,
    scan: &mut FieldScanner<'_>,
) {
    let cells = [
        Some(compartment.id.as_str()),
        compartment.litres.as_deref(),
        compartment.certificate_level.as_deref(),
        compartment.product_level.as_deref(),
        compartment.seal_number.as_deref(),
    ];

    m.open("tr", &[]);
    for (heading, cell) in COMPARTMENT_HEADINGS.iter().zip(cells) {
        m.open("td", &[])
            .text_or(scan.field(heading, cell), placeholder)
            .close("td");
    }
    m.close("tr");
}

fn format_litres(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{:.0}", total)
    } else {
        format!("{:.2}", total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::FromRow;
    use serde_json::json;

    fn record(row: serde_json::Value) -> QualityReportRecord {
        QualityReportRecord::from_row(&row).unwrap()
    }

    #[test]
    fn test_full_quality_report() {
        let ctx = RenderContext::default();
        let doc = render_quality(
            &record(json!({
                "id": "q-1",
                "product": "Diesel",
                "company_name": "Acme Fuels",
                "truck_number": "KBZ 441Q",
                "inspector_name": "Achieng",
                "sealer_name": "Kamau",
                "compartments": [
                    {"id": 1, "litres": 5000, "certificate_level": "1200", "seal_number": "S1"},
                    {"compartment": 2, "qty": 4500, "sealNo": "S2"}
                ],
                "quality_params": {"density": "0.835", "temperature": 24},
                "sealer_signature": "https://cdn.example.com/s.png"
            })),
            &ctx,
            "00042",
        );

        assert_eq!(doc.kind, ReportKind::Quality);
        assert_eq!(doc.invoice_number.as_deref(), Some("00042"));
        assert_eq!(doc.file_name, "quality-kbz-441q-00042.html");
        assert!(doc.html.contains("Invoice No. 00042"));
        assert!(doc.html.contains("--primary: #15803d"));
        assert!(doc.html.contains("<td>S2</td>"));
        assert!(doc.html.contains("<td>Total</td><td>9500</td>"));
        assert!(doc.html.contains(r#"<td class="key">Density</td><td class="value">0.835</td>"#));
        assert!(doc.html.contains(r#"src="https://cdn.example.com/s.png""#));
        assert!(doc.html.contains(r#"<div class="sig-line"></div><div class="sig-label">Inspector: Achieng</div>"#));
    }

    #[test]
    fn test_red_theme_company() {
        let ctx = RenderContext::default();
        let red = ctx.config.red_theme_company.clone();
        let doc = render_quality(&record(json!({"company_name": red})), &ctx, "00001");
        assert!(doc.html.contains("--primary: #dc2626"));
    }

    #[test]
    fn test_empty_report_uses_placeholders() {
        let doc = render_quality(&record(json!({})), &RenderContext::default(), "12345");
        assert!(doc.html.contains("No compartments recorded"));
        assert!(doc.html.contains("No quality parameters recorded"));
        assert!(doc.html.contains(r#"<td class="key">Sealer</td><td class="value">N/A</td>"#));
        assert!(doc.html.contains("Sealer: N/A"));
        assert_eq!(doc.file_name, "quality-unknown-12345.html");
    }

    #[test]
    fn test_missing_compartment_cells_use_cell_placeholder() {
        let doc = render_quality(
            &record(json!({"compartments": [{"id": "C1"}]})),
            &RenderContext::default(),
            "00007",
        );
        assert!(doc.html.contains("<tr><td>C1</td><td>-</td><td>-</td><td>-</td><td>-</td></tr>"));
    }

    #[test]
    fn test_format_litres() {
        assert_eq!(format_litres(9500.0), "9500");
        assert_eq!(format_litres(12.5), "12.50");
    }
}
