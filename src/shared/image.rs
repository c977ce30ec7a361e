//! Image URL cleanup for the wiki content host.
//!
//! `static.wikia.nocookie.net` appends `/revision/latest?cb=...` style
//! suffixes after the real file extension; several of those transformed
//! assets 404 while the bare file resolves.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

/// Host whose revision URLs get truncated.
pub const WIKIA_HOST: &str = "static.wikia.nocookie.net";

lazy_static! {
    static ref IMAGE_EXTENSION: Regex =
        Regex::new(r"(?i)\.(png|jpe?g|gif|webp)").expect("static regex");
}

fn is_wikia_host(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|h| h.eq_ignore_ascii_case(WIKIA_HOST))
            .unwrap_or(false),
        // Protocol-relative or otherwise unparsable; fall back to a plain match.
        Err(_) => url.contains(WIKIA_HOST),
    }
}

/// Strip revision/size suffixes from a wiki image URL.
///
/// Truncates right after the first image extension when the URL is on the
/// wiki host and contains a `/revision/` segment. Anything else is returned
/// unchanged.
pub fn clean_image_url(url: &str) -> String {
    if !url.contains("/revision/") || !is_wikia_host(url) {
        return url.to_string();
    }

    match IMAGE_EXTENSION.find(url) {
        Some(m) => url[..m.end()].to_string(),
        None => url.to_string(),
    }
}

/// Sanitize an optional image URL, falling back to `placeholder`.
pub fn resolve_image(image: Option<&str>, placeholder: &str) -> String {
    match image.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => {
            let cleaned = clean_image_url(url);
            if cleaned.is_empty() {
                placeholder.to_string()
            } else {
                cleaned
            }
        }
        None => placeholder.to_string(),
    }
}
