//! Inline stylesheet shared by both report types.

use crate::theme::Palette;

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: #e5e7eb; font-family: "Segoe UI", Arial, sans-serif; color: #111827; font-size: 13px; }
.page { max-width: 820px; margin: 24px auto; background: #fff; padding: 32px 40px; border-top: 8px solid var(--primary); box-shadow: 0 2px 12px rgba(0,0,0,.12); }
.letterhead { text-align: center; border-bottom: 2px solid var(--primary); padding-bottom: 12px; margin-bottom: 16px; }
.org { font-size: 22px; font-weight: 700; color: var(--primary); letter-spacing: .04em; text-transform: uppercase; }
.tagline { font-size: 12px; color: #4b5563; margin-top: 2px; }
.report-title { font-size: 17px; margin: 10px 0 0; letter-spacing: .08em; text-transform: uppercase; }
.banner { margin: 0 0 18px; padding: 10px 14px; text-align: center; font-weight: 700; font-size: 15px; letter-spacing: .06em; color: #fff; background: var(--primary); border-radius: 4px; }
.banner small { display: block; font-weight: 400; font-size: 11px; opacity: .9; }
h2 { font-size: 13px; text-transform: uppercase; letter-spacing: .06em; color: var(--primary); border-bottom: 1px solid #d1d5db; padding-bottom: 4px; margin: 22px 0 8px; }
table { width: 100%; border-collapse: collapse; }
table.kv td { padding: 5px 8px; border-bottom: 1px solid #f3f4f6; vertical-align: top; }
table.kv td.key { width: 38%; color: #4b5563; font-weight: 600; }
table.grid th { background: var(--soft); color: #111827; text-align: left; padding: 7px 8px; font-size: 12px; border: 1px solid #d1d5db; }
table.grid td { padding: 6px 8px; border: 1px solid #e5e7eb; vertical-align: top; }
table.grid tr.total td { font-weight: 700; background: #f9fafb; }
td.empty { text-align: center; color: #6b7280; font-style: italic; }
.badge { display: inline-block; padding: 2px 8px; border-radius: 10px; font-size: 11px; font-weight: 700; }
.badge.pass { background: #dcfce7; color: #166534; }
.badge.fail { background: #fee2e2; color: #991b1b; }
.badge.na { background: #f3f4f6; color: #4b5563; }
.severity { font-weight: 700; text-transform: uppercase; font-size: 11px; }
.item-photo { display: block; max-width: 160px; max-height: 120px; margin-top: 6px; border: 1px solid #d1d5db; }
.summary { color: #374151; margin: 6px 0 0; }
.signatures { display: flex; gap: 40px; margin-top: 28px; }
.signature { flex: 1; text-align: center; }
.signature img { max-width: 220px; max-height: 90px; display: block; margin: 0 auto 4px; }
.sig-line { height: 60px; border-bottom: 1px solid #111827; margin-bottom: 4px; }
.sig-label { font-size: 12px; color: #374151; }
footer { margin-top: 28px; padding-top: 10px; border-top: 1px solid #d1d5db; font-size: 11px; color: #6b7280; text-align: center; }
.toolbar { position: sticky; top: 0; display: flex; justify-content: center; gap: 12px; padding: 10px; background: #111827; }
.btn { border: 0; border-radius: 4px; padding: 8px 18px; font-size: 13px; font-weight: 600; cursor: pointer; }
.btn-print { background: var(--primary); color: #fff; }
.btn-close { background: #f3f4f6; color: #111827; }
@media print {
  body { background: #fff; }
  .no-print { display: none !important; }
  .page { margin: 0; box-shadow: none; max-width: none; }
  @page { size: A4; margin: 12mm; }
}
"#;

/// Stylesheet with the report palette bound to CSS variables.
pub fn stylesheet(palette: Palette) -> String {
    format!(
        ":root {{ --primary: {}; --soft: {}; }}{}",
        palette.primary, palette.soft, BASE_CSS
    )
}
