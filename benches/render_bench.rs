use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fleetcheck_core::records::FromRow;
use fleetcheck_core::{filter, render, FilterCriteria, InspectionRecord, RenderContext};
use serde_json::{json, Value};

fn inspection_row(i: usize) -> Value {
    json!({
        "id": format!("insp-{}", i),
        "truck_number": format!("KAA {:03}A", i),
        "driver_name": format!("Driver {}", i),
        "inspector_name": "Wafula",
        "depot": if i % 3 == 0 { "Nairobi" } else { "Mombasa" },
        "status": if i % 2 == 0 { "completed" } else { "draft" },
        "overall_status": "PASS",
        "created_at": "2024-03-04T09:15:00Z",
        "items": (0..25).map(|n| json!({
            "name": format!("Check {}", n),
            "description": "Visual inspection",
            "status": if n % 7 == 0 { "fail" } else { "pass" },
            "note": "Within tolerance",
        })).collect::<Vec<_>>(),
    })
}

fn bench_filter(c: &mut Criterion) {
    let records: Vec<InspectionRecord> = (0..1_000)
        .filter_map(|i| InspectionRecord::from_row(&inspection_row(i)).ok())
        .collect();
    let criteria = FilterCriteria::new().search("driver 9").status("Completed").depot("Nairobi");

    c.bench_function("filter.inspections.1000", |b| {
        b.iter(|| filter(black_box(&records), black_box(&criteria)).len());
    });
}

fn bench_render(c: &mut Criterion) {
    let ctx = RenderContext::default();
    let row = inspection_row(7);

    c.bench_function("render.inspection.25_items", |b| {
        b.iter(|| render("inspection", black_box(&row), &ctx).map(|doc| doc.len()));
    });
}

criterion_group!(benches, bench_filter, bench_render);
criterion_main!(benches);
