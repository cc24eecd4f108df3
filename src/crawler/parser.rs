//! HTML parsing: content-region selection and link extraction
//!
//! Both operations work on the same parsed document. Link extraction
//! deliberately scans the *full* document rather than the selected content
//! region: navigation links that never reach the Markdown output still
//! widen the crawl, which is what makes a sidebar-navigated docs site
//! reachable from a handful of seeds.

use crate::config::SiteConfig;
use crate::url::{in_scope, normalize_url};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Selects the main content region of a page
///
/// The selectors are tried in order and the first match wins; the default
/// configuration tries `article`, then `main`, then `body` (Docusaurus and
/// GitBook both wrap page content in one of the first two). Returns the
/// region's outer HTML, or `None` when no selector matches.
///
/// Selector strings were validated at config load; an entry that fails to
/// parse here is skipped.
pub fn select_content(document: &Html, selectors: &[String]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            return Some(element.html());
        }
    }
    None
}

/// Extracts in-scope outbound links from a page
///
/// Every `a[href]` anchor in the document is resolved against the page URL
/// (relative references included), normalized to canonical form, and kept
/// only when it stays on the configured host with a secure scheme. The
/// result is deduplicated in first-seen order.
pub fn extract_links(document: &Html, page_url: &Url, site: &SiteConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    if let Ok(anchor) = Selector::parse("a[href]") {
        for element in document.select(&anchor) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let href = href.trim();
            if href.is_empty() {
                continue;
            }

            let Ok(resolved) = page_url.join(href) else {
                continue;
            };

            let canonical = normalize_url(resolved.as_str());
            if !in_scope(&canonical, site) {
                continue;
            }

            if seen.insert(canonical.clone()) {
                links.push(canonical);
            }
        }
    }

    links
}
