use crate::config::SiteConfig;
use url::Url;

/// Checks whether a URL belongs to the crawl scope
///
/// A URL is in scope when it parses, its host equals the configured site
/// host exactly, and its scheme is `https`. Plain `http` is accepted only
/// when the config's `allow-http` flag is set, which exists so the test
/// suite can crawl local mock servers; production runs leave it off.
///
/// # Arguments
///
/// * `url` - The URL to check (typically already canonical)
/// * `site` - The target-site configuration
pub fn in_scope(url: &str, site: &SiteConfig) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    if parsed.host_str() != Some(site.host.as_str()) {
        return false;
    }

    match parsed.scheme() {
        "https" => true,
        "http" => site.allow_http,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zama_site() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn test_same_host_https_in_scope() {
        assert!(in_scope("https://docs.zama.org/protocol/guides", &zama_site()));
    }

    #[test]
    fn test_other_host_rejected() {
        assert!(!in_scope("https://other.example/b", &zama_site()));
        assert!(!in_scope("https://zama.org/protocol", &zama_site()));
    }

    #[test]
    fn test_subdomain_is_a_different_host() {
        assert!(!in_scope("https://www.docs.zama.org/page", &zama_site()));
    }

    #[test]
    fn test_http_rejected_by_default() {
        assert!(!in_scope("http://docs.zama.org/page", &zama_site()));
    }

    #[test]
    fn test_http_accepted_when_allowed() {
        let site = SiteConfig {
            host: "127.0.0.1".to_string(),
            allow_http: true,
            ..SiteConfig::default()
        };
        assert!(in_scope("http://127.0.0.1:8080/page", &site));
    }

    #[test]
    fn test_non_web_schemes_rejected() {
        let mut site = zama_site();
        site.allow_http = true;
        assert!(!in_scope("ftp://docs.zama.org/file", &site));
        assert!(!in_scope("mailto:hello@zama.ai", &site));
    }

    #[test]
    fn test_malformed_url_rejected() {
        assert!(!in_scope("not a url", &zama_site()));
    }
}
