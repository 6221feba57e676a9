//! Image source normalization.
//!
//! Signatures and checklist photos arrive either as a bare base64 payload
//! or as an already usable URL.

use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;

use crate::security::sanitizer::is_unsafe_url;

lazy_static! {
    static ref BASE64_BODY: Regex = Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").unwrap();
}

/// Result of normalizing one image field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSrc {
    /// Ready for an `src` attribute.
    Ready(String),
    Missing,
    /// Present but unusable; the blank fallback is rendered.
    Rejected(&'static str),
}

impl ImageSrc {
    pub fn ready(&self) -> Option<&str> {
        match self {
            ImageSrc::Ready(src) => Some(src),
            _ => None,
        }
    }
}

/// Normalize an image field.
///
/// - `data:` and `http(s)://` URLs pass through unchanged
/// - a bare base64 payload becomes a PNG data URL
/// - script-capable schemes and undecodable payloads are rejected
pub fn normalize_image_src(raw: Option<&str>) -> ImageSrc {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return ImageSrc::Missing;
    };

    if is_unsafe_url(trimmed) {
        return ImageSrc::Rejected("unsafe_scheme");
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("data:") || lower.starts_with("http://") || lower.starts_with("https://") {
        return ImageSrc::Ready(trimmed.to_string());
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if !BASE64_BODY.is_match(&compact) {
        return ImageSrc::Rejected("not_base64");
    }

    let decodes = general_purpose::STANDARD.decode(&compact).is_ok()
        || general_purpose::STANDARD_NO_PAD.decode(&compact).is_ok();
    if !decodes {
        return ImageSrc::Rejected("bad_base64");
    }

    ImageSrc::Ready(format!("data:image/png;base64,{}", compact))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE_B64: &str = "iVBORw0KGgo=";

    #[test]
    fn test_bare_base64_is_prefixed() {
        assert_eq!(
            normalize_image_src(Some(PNG_SIGNATURE_B64)),
            ImageSrc::Ready(format!("data:image/png;base64,{}", PNG_SIGNATURE_B64))
        );
        // Line-wrapped payloads are compacted.
        assert_eq!(
            normalize_image_src(Some("iVBORw0K\nGgo=")).ready(),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[test]
    fn test_urls_pass_through() {
        let data = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(normalize_image_src(Some(data)).ready(), Some(data));
        let http = "https://storage.example.com/signatures/a.png";
        assert_eq!(normalize_image_src(Some(http)).ready(), Some(http));
    }

    #[test]
    fn test_missing_and_rejected() {
        assert_eq!(normalize_image_src(None), ImageSrc::Missing);
        assert_eq!(normalize_image_src(Some("   ")), ImageSrc::Missing);
        assert_eq!(
            normalize_image_src(Some("javascript:alert(1)")),
            ImageSrc::Rejected("unsafe_scheme")
        );
        assert_eq!(
            normalize_image_src(Some("not an image")),
            ImageSrc::Rejected("not_base64")
        );
        assert_eq!(normalize_image_src(Some("abcde")), ImageSrc::Rejected("bad_base64"));
    }
}
