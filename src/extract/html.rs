// src/extract/html.rs
// =============================================================================
// This module pulls link targets out of HTML and turns them into normalized
// absolute URLs.
//
// Two steps, kept separate so the crawler can filter in between:
// 1. extract_hrefs: every <a href="..."> value on the page, raw
// 2. normalize_link: skip junk targets, resolve against the page URL,
//    strip the fragment
//
// We use the `scraper` crate for the DOM and CSS selectors, and the `url`
// crate for resolving relative links the way a browser does.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Returns the raw href value of every <a> element that has one
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no target</a>"
//   result = ["/docs"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Constant selector, known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

// Checks whether a raw href can never produce a useful link
//
// We skip:
// - empty targets
// - same-page anchors (#section)
// - javascript: links
// - mailto: links
pub fn is_skippable_href(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    href.is_empty()
        || href.starts_with('#')
        || lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
}

// Resolves a raw href against the page it was found on and normalizes it
//
// Parameters:
//   base: the final URL of the page (after redirects)
//   href: the href value as written in the HTML
//
// Returns: Some(url) with the fragment removed, or None if the href is junk,
// unparseable, or points at something other than http/https
//
// Examples:
//   base = "https://example.com/page/"
//   href = "../about#team"   -> Some("https://example.com/about")
//   href = "?page=2"         -> Some("https://example.com/page/?page=2")
//   href = "mailto:a@b.com"  -> None
pub fn normalize_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if is_skippable_href(href) {
        return None;
    }

    // join() handles both relative and absolute targets
    let mut url = base.join(href).ok()?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    url.set_fragment(None);

    // A bare "?" carries no query
    if url.query() == Some("") {
        url.set_query(None);
    }

    Some(url)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why resolve against the final URL?
//    - If https://example.com/docs redirects to https://example.com/docs/,
//      then href="intro" means /docs/intro, not /intro
//    - The fetcher reports the post-redirect URL for exactly this reason
//
// 2. What does the url crate normalize for us?
//    - Lowercases the scheme and host, drops default ports (:443 on https)
//    - Resolves "." and ".." path segments
//    - Percent-encodes characters that are not allowed in URLs
//    - Adds "/" as the path of a bare host (https://example.com -> .../)
//
// 3. Why filter_map?
//    - attr() returns Option<&str>; filter_map keeps the Some values only
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/page/").unwrap()
    }

    #[test]
    fn test_extract_hrefs_keeps_raw_values() {
        let html = r##"
            <a href="/a">A</a>
            <a href="https://example.com/b?x=1#frag">B</a>
            <a name="anchor-without-href">C</a>
            <a href="#top">Top</a>
        "##;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/a", "https://example.com/b?x=1#frag", "#top"]);
    }

    #[test]
    fn test_extract_hrefs_from_broken_html() {
        // html5ever recovers from unclosed tags like a browser does
        let html = r#"<div><a href="/one">one</a><p>unclosed <a href="/two">two</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/one", "/two"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let url = normalize_link(&base(), "../about").unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_strip_fragment_keep_query() {
        let url = normalize_link(&base(), "https://example.com/b?x=1#frag").unwrap();
        assert_eq!(url.as_str(), "https://example.com/b?x=1");
    }

    #[test]
    fn test_empty_query_is_dropped() {
        let url = normalize_link(&base(), "/search?").unwrap();
        assert_eq!(url.as_str(), "https://example.com/search");
    }

    #[test]
    fn test_skip_special_targets() {
        for href in ["", "   ", "#section", "javascript:void(0)", "JavaScript:go()", "mailto:a@b.com"] {
            assert_eq!(normalize_link(&base(), href), None, "href {:?} should be skipped", href);
        }
    }

    #[test]
    fn test_skip_non_http_schemes() {
        assert_eq!(normalize_link(&base(), "tel:+123456"), None);
        assert_eq!(normalize_link(&base(), "ftp://files.example.com/x"), None);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let url = normalize_link(&base(), "  /docs  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs");
    }
}
