// src/utils/url.rs

//! Wiki page URL construction.

use url::form_urlencoded;

/// Build the wiki page URL for an officer name.
///
/// Page names are appended to the base URL query-escaped, which is how the
/// wiki links its own pages.
pub fn page_url(base: &str, name: &str) -> String {
    let escaped: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{base}{escaped}")
}
