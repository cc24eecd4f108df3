use serde::Deserialize;

/// Main configuration structure for Zama-KB
///
/// Every section has a `Default` carrying the stock Zama setup, so the tool
/// runs with no config file at all; a TOML file only needs to name the
/// fields it overrides.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub site: SiteConfig,
    pub output: OutputConfig,
    pub repo: RepoConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum link-hop depth from the seed URLs (inclusive)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of concurrent page fetches per depth batch
    #[serde(rename = "max-workers")]
    pub max_workers: usize,

    /// Politeness delay applied before every request (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// CSS selectors tried in order to locate the main content region
    #[serde(rename = "content-selectors")]
    pub content_selectors: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_workers: 5,
            request_delay_ms: 100,
            request_timeout_secs: 10,
            content_selectors: vec![
                "article".to_string(),
                "main".to_string(),
                "body".to_string(),
            ],
        }
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Host that discovered links must match to stay in scope
    pub host: String,

    /// Seed URLs the crawl starts from
    pub seeds: Vec<String>,

    /// Also accept plain-HTTP links (used when testing against local mock
    /// servers; production crawls stay HTTPS-only)
    #[serde(rename = "allow-http")]
    pub allow_http: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "docs.zama.org".to_string(),
            seeds: vec![
                "https://docs.zama.org/homepage".to_string(),
                "https://docs.zama.org/protocol/relayer-sdk-guides".to_string(),
                "https://docs.zama.org/protocol/solidity-guides".to_string(),
                "https://docs.zama.org/protocol/examples".to_string(),
                "https://docs.zama.org/protocol/protocol/overview".to_string(),
            ],
            allow_http: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Base directory the Markdown mirror and metadata are written under
    #[serde(rename = "base-dir")]
    pub base_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: "docs_context".to_string(),
        }
    }
}

/// Companion repository configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Upstream repository cloned/pulled before the crawl
    pub url: String,

    /// Local checkout directory
    pub dir: String,

    /// Entries guaranteed to be present in .gitignore
    pub gitignore: Vec<String>,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            url: "https://github.com/zama-ai/fhevm.git".to_string(),
            dir: "docs_context/repo".to_string(),
            gitignore: vec!["docs_context/".to_string(), "zama-kb".to_string()],
        }
    }
}
