//! End-to-end rendering from record-store rows.

use chrono::NaiveDate;
use fleetcheck_core::records::FromRow;
use fleetcheck_core::render::render_quality;
use fleetcheck_core::{
    render, render_batch, render_json, Config, QualityReportRecord, RenderContext, ReportError, ReportKind,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn ctx() -> RenderContext {
    let at = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap();
    RenderContext::new(Config::default().report).with_generated_at(at)
}

#[test]
fn test_full_inspection_report() {
    let row = json!({
        "id": "insp-77",
        "truck_number": "KCA 901Z",
        "driver_name": "Otieno",
        "inspector_name": "Mwangi",
        "depot": "Eldoret",
        "status": "completed",
        "overall_status": "FAIL",
        "created_at": "2024-03-04T09:15:00Z",
        "items": [
            {"name": "Brakes", "description": "Pedal travel", "status": "pass"},
            {"title": "Tyres", "status": "fail", "severity": "High", "note": "Tread below 2mm"}
        ],
        "inspector_signature": "iVBORw0KGgo="
    });

    let doc = render("inspection", &row, &ctx()).unwrap();
    assert_eq!(doc.kind, ReportKind::Inspection);
    assert_eq!(doc.file_name, "inspection-kca-901z-2024-03-04-insp-77.html");
    assert!(doc.html.starts_with("<!DOCTYPE html>"));
    assert!(doc.html.contains("SAFETY ISSUE"));
    assert!(doc.html.contains("Tread below 2mm"));
    assert!(doc.html.contains("data:image/png;base64,iVBORw0KGgo="));
    assert!(doc.html.contains("window.print()"));
    assert!(doc.html.contains("window.close()"));
    assert!(doc.html.contains("<strong>Mwangi</strong>"));
}

#[test]
fn test_missing_driver_signature_renders_ruled_line() {
    let doc = render("inspection", &json!({"id": "1", "driver_name": "Otieno"}), &ctx()).unwrap();
    assert!(doc.html.contains(r#"<div class="sig-line"></div><div class="sig-label">Driver: Otieno</div>"#));
}

#[test]
fn test_empty_tables_render_placeholder_rows() {
    let inspection = render("inspection", &json!({"id": "1"}), &ctx()).unwrap();
    assert!(inspection.html.contains("No items recorded"));

    let quality = render("quality", &json!({"id": "2"}), &ctx()).unwrap();
    assert!(quality.html.contains("No compartments recorded"));
    assert!(quality.invoice_number.is_some());
}

#[test]
fn test_quality_params_list_and_map_render_alike() {
    let list = json!({
        "id": "q-1",
        "quality_params": [
            {"name": "density", "value": "0.835"},
            {"name": "color", "value": "Clear"}
        ]
    });
    let map = json!({
        "id": "q-1",
        "quality_params": {"color": "Clear", "density": "0.835"}
    });

    let ctx = ctx();
    let list_doc = render_quality(&QualityReportRecord::from_row(&list).unwrap(), &ctx, "00042");
    let map_doc = render_quality(&QualityReportRecord::from_row(&map).unwrap(), &ctx, "00042");
    assert_eq!(list_doc.html, map_doc.html);

    let density = list_doc.html.find("Density").unwrap();
    let color = list_doc.html.find("Color").unwrap();
    assert!(density < color);
}

#[test]
fn test_red_theme_company_is_case_insensitive() {
    let red = render("quality", &json!({"id": "1", "company_name": "  hashi ENERGY "}), &ctx()).unwrap();
    let green = render("quality", &json!({"id": "2", "company_name": "Rubis"}), &ctx()).unwrap();
    assert!(red.html.contains("--primary: #dc2626;"));
    assert!(green.html.contains("--primary: #15803d;"));
}

#[test]
fn test_unsafe_image_is_dropped() {
    let row = json!({"id": "1", "driver_signature": "javascript:alert(1)"});
    let doc = render("inspection", &row, &ctx()).unwrap();
    assert!(!doc.html.contains("javascript:"));
    assert!(doc.html.contains("sig-line"));
}

#[test]
fn test_unknown_kind_is_rejected_everywhere() {
    assert!(matches!(
        render("receipt", &json!({"id": "1"}), &ctx()),
        Err(ReportError::InvalidReportKind(_))
    ));
    assert!(matches!(
        render_json("receipt", "not even json", &ctx()),
        Err(ReportError::InvalidReportKind(_))
    ));
    assert!(matches!(
        render_batch("receipt", &[], &ctx()),
        Err(ReportError::InvalidReportKind(_))
    ));
}

#[test]
fn test_batch_continues_past_bad_rows() {
    let rows = vec![json!({"id": "a"}), json!(42), json!({"id": "b"})];
    let batch = render_batch("inspection", &rows, &ctx()).unwrap();
    assert_eq!(batch.received_count, 3);
    assert_eq!(batch.rendered_count, 2);
    assert_eq!(batch.failed_count, 1);
    assert_eq!(batch.documents().count(), 2);
}

#[test]
fn test_same_day_inspections_get_distinct_file_names() {
    let rows = vec![
        json!({"id": "insp-1", "truck_number": "KCA 901Z", "created_at": "2024-03-04T06:00:00Z"}),
        json!({"id": "insp-2", "truck_number": "KCA 901Z", "created_at": "2024-03-04T18:30:00Z"}),
    ];
    let batch = render_batch("inspection", &rows, &ctx()).unwrap();
    let names: Vec<&str> = batch.documents().map(|d| d.file_name.as_str()).collect();
    assert_eq!(names.len(), 2);
    assert_ne!(names[0], names[1]);
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("\\PC{0,24}")
}

proptest! {
    /// Property: any combination of present and absent fields renders
    #[test]
    fn prop_render_never_fails_on_objects(
        truck in optional_text(),
        driver in optional_text(),
        status in optional_text(),
        company in optional_text(),
        quality in any::<bool>(),
    ) {
        let mut row = Map::new();
        for (key, value) in [
            ("truck_number", truck),
            ("driver_name", driver),
            ("status", status),
            ("company_name", company),
        ] {
            if let Some(value) = value {
                row.insert(key.to_string(), Value::String(value));
            }
        }
        let kind = if quality { "quality" } else { "inspection" };
        let doc = render(kind, &Value::Object(row), &ctx());
        prop_assert!(doc.is_ok());
    }

    /// Property: user-supplied markup is always escaped
    #[test]
    fn prop_markup_is_escaped(tag in "[a-z]{1,6}", field in prop::sample::select(vec![
        "truck_number", "driver_name", "inspector_name", "depot", "transporter",
    ])) {
        let injected = format!("<zq{} onload=x>", tag);
        let doc = render("inspection", &json!({"id": "1", field: injected}), &ctx()).unwrap();
        prop_assert!(!doc.html.contains(&injected));
        let escaped = format!("&lt;zq{}", tag);
        prop_assert!(doc.html.contains(&escaped));
    }
}
