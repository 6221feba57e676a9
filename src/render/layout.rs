//! Building blocks shared by both report templates.

use chrono::NaiveDateTime;

use crate::logging::structured::LogContext;
use crate::security::sanitizer::SanitizationReport;
use crate::theme::Palette;

use super::images::{normalize_image_src, ImageSrc};
use super::markup::Markup;
use super::styles::stylesheet;

/// Collects scan results while a template pulls fields from a record.
pub(crate) struct FieldScanner<'a> {
    pub ctx: &'a LogContext,
    pub report: SanitizationReport,
}

impl<'a> FieldScanner<'a> {
    pub fn new(ctx: &'a LogContext) -> Self {
        Self {
            ctx,
            report: SanitizationReport::default(),
        }
    }

    /// Scan a field on its way into the document.
    pub fn field<'v>(&mut self, name: &str, value: Option<&'v str>) -> Option<&'v str> {
        if let Some(v) = value {
            self.report.scan(name, v, self.ctx);
        }
        value
    }

    pub fn image(&mut self, name: &str, raw: Option<&str>) -> Option<String> {
        match normalize_image_src(raw) {
            ImageSrc::Ready(src) => Some(src),
            ImageSrc::Missing => None,
            ImageSrc::Rejected(reason) => {
                log::debug!("{} IMAGE_REJECTED field={} reason={}", self.ctx, name, reason);
                self.report.reject_url(name, self.ctx);
                None
            }
        }
    }
}

/// Print and close controls, hidden in print media.
pub(crate) fn toolbar(m: &mut Markup) {
    m.open("div", &[("class", "toolbar no-print")])
        .element(
            "button",
            &[("type", "button"), ("class", "btn btn-print"), ("onclick", "window.print()")],
            "Download PDF",
        )
        .element(
            "button",
            &[("type", "button"), ("class", "btn btn-close"), ("onclick", "window.close()")],
            "Close",
        )
        .close("div");
}

pub(crate) fn letterhead(m: &mut Markup, organization: &str, tagline: &str, title: &str) {
    m.open("header", &[("class", "letterhead")])
        .element("div", &[("class", "org")], organization)
        .element("div", &[("class", "tagline")], tagline)
        .element("h1", &[("class", "report-title")], title)
        .close("header");
}

/// Key-value block; absent values show the placeholder.
pub(crate) fn key_values(m: &mut Markup, rows: &[(&str, Option<&str>)], placeholder: &str) {
    m.open("table", &[("class", "kv")]).open("tbody", &[]);
    for (label, value) in rows {
        m.open("tr", &[])
            .element("td", &[("class", "key")], label)
            .open("td", &[("class", "value")])
            .text_or(*value, placeholder)
            .close("td")
            .close("tr");
    }
    m.close("tbody").close("table");
}

/// Header row for a grid table.
pub(crate) fn grid_head(m: &mut Markup, headings: &[&str]) {
    m.open("thead", &[]).open("tr", &[]);
    for heading in headings {
        m.element("th", &[], heading);
    }
    m.close("tr").close("thead");
}

pub(crate) fn empty_row(m: &mut Markup, columns: usize, message: &str) {
    let span = columns.to_string();
    m.open("tr", &[])
        .element("td", &[("class", "empty"), ("colspan", span.as_str())], message)
        .close("tr");
}

/// One signature slot.
pub(crate) struct SignatureSlot<'a> {
    pub role: &'a str,
    pub name: Option<&'a str>,
    pub image: Option<String>,
}

/// Signature area; a missing image leaves a blank ruled line.
pub(crate) fn signatures(m: &mut Markup, slots: &[SignatureSlot<'_>], placeholder: &str) {
    m.open("section", &[("class", "signatures")]);
    for slot in slots {
        m.open("div", &[("class", "signature")]);
        match &slot.image {
            Some(src) => {
                let alt = format!("{} signature", slot.role);
                m.void("img", &[("src", src.as_str()), ("alt", alt.as_str())]);
            }
            None => {
                m.element("div", &[("class", "sig-line")], "");
            }
        }
        m.open("div", &[("class", "sig-label")])
            .text(slot.role)
            .raw(": ")
            .text_or(slot.name, placeholder)
            .close("div")
            .close("div");
    }
    m.close("section");
}

pub(crate) fn footer(m: &mut Markup, inspector: Option<&str>, placeholder: &str, generated: &str) {
    m.open("footer", &[])
        .raw("Report generated and validated by ")
        .open("strong", &[])
        .text_or(inspector, placeholder)
        .close("strong")
        .raw(" &middot; Generated ")
        .text(generated)
        .close("footer");
}

pub(crate) fn generated_stamp(at: &NaiveDateTime, fmt: &str) -> String {
    at.format(fmt).to_string()
}

/// Wrap a page body into a standalone document.
pub(crate) fn document_shell(title: &str, palette: Palette, body: Markup) -> String {
    let mut m = Markup::new();
    m.raw("<!DOCTYPE html>\n")
        .open("html", &[("lang", "en")])
        .open("head", &[])
        .void("meta", &[("charset", "UTF-8")])
        .void(
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1.0")],
        )
        .element("title", &[], title)
        .open("style", &[])
        .raw(&stylesheet(palette))
        .close("style")
        .close("head")
        .open("body", &[]);
    toolbar(&mut m);
    m.open("div", &[("class", "page")])
        .append(body)
        .close("div")
        .close("body")
        .close("html");
    m.into_string()
}
