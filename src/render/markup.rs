//! Typed markup builder.
//!
//! Tag and attribute names come from the templates and are trusted.
//! Text and attribute values are always escaped; `raw` exists only for
//! fragments produced by this builder or static template text.

use crate::security::sanitizer::{clamp_field, escape_html};

#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.push_attrs(attrs);
        self.buf.push('>');
        self
    }

    /// Element without a closing tag (`img`, `br`, `meta`).
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs)
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Escaped text; overlong values are truncated.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_html(&clamp_field(text)));
        self
    }

    /// Escaped text, or the placeholder when absent.
    pub fn text_or(&mut self, text: Option<&str>, placeholder: &str) -> &mut Self {
        self.text(text.unwrap_or(placeholder))
    }

    /// `<tag attrs>text</tag>`
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    pub fn append(&mut self, other: Markup) -> &mut Self {
        self.buf.push_str(&other.buf);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn push_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_html(value));
            self.buf.push('"');
        }
    }
}
