use url::Url;

/// Normalizes a URL into its canonical form
///
/// The canonical form is the deduplication key for the whole crawl: two
/// URLs that differ only in fragment, query string, or a trailing slash
/// collapse to the same string.
///
/// # Normalization Steps
///
/// 1. Parse the URL
/// 2. Drop the query string and fragment
/// 3. Strip one trailing slash from the path (the root path becomes empty)
/// 4. Keep scheme, host, any non-default port, and the remaining path
///    verbatim
///
/// Malformed input is returned unchanged; the function is best-effort and
/// never fails. Downstream scope filtering rejects anything unparseable.
///
/// # Examples
///
/// ```
/// use zama_kb::url::normalize_url;
///
/// let url = normalize_url("https://docs.zama.org/protocol/guides/?x=1#y");
/// assert_eq!(url, "https://docs.zama.org/protocol/guides");
/// ```
pub fn normalize_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        return raw.to_string();
    };

    let mut path = url.path().to_string();
    if path.ends_with('/') {
        path.pop();
    }

    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, path),
        None => format!("{}://{}{}", url.scheme(), host, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_query_and_fragment() {
        assert_eq!(
            normalize_url("https://docs.zama.org/protocol/guides/?x=1#y"),
            "https://docs.zama.org/protocol/guides"
        );
    }

    #[test]
    fn test_strips_trailing_slash() {
        assert_eq!(
            normalize_url("https://docs.zama.org/protocol/guides/"),
            "https://docs.zama.org/protocol/guides"
        );
    }

    #[test]
    fn test_equivalence_class_collapses() {
        let canonical = normalize_url("https://docs.zama.org/protocol/guides");
        assert_eq!(
            normalize_url("https://docs.zama.org/protocol/guides/"),
            canonical
        );
        assert_eq!(
            normalize_url("https://docs.zama.org/protocol/guides?x=1"),
            canonical
        );
        assert_eq!(
            normalize_url("https://docs.zama.org/protocol/guides#section"),
            canonical
        );
    }

    #[test]
    fn test_root_has_no_trailing_slash() {
        assert_eq!(
            normalize_url("https://docs.zama.org/"),
            "https://docs.zama.org"
        );
        assert_eq!(
            normalize_url("https://docs.zama.org"),
            "https://docs.zama.org"
        );
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "https://docs.zama.org/protocol/guides/?x=1#y",
            "https://docs.zama.org/",
            "http://127.0.0.1:8080/page/",
            "not a url at all",
        ];
        for input in inputs {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_preserves_port() {
        assert_eq!(
            normalize_url("http://127.0.0.1:8080/page/"),
            "http://127.0.0.1:8080/page"
        );
    }

    #[test]
    fn test_preserves_path_case_and_encoding() {
        assert_eq!(
            normalize_url("https://docs.zama.org/Protocol/FHE%20intro"),
            "https://docs.zama.org/Protocol/FHE%20intro"
        );
    }

    #[test]
    fn test_malformed_input_passes_through() {
        assert_eq!(normalize_url("not a url"), "not a url");
    }
}
