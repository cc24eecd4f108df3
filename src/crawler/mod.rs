//! Crawler module: fetching, parsing, frontier scheduling, coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{run_crawl, CrawlReport, PageFailure, PageOutcome};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use parser::{extract_links, select_content};
pub use scheduler::Frontier;

use crate::config::Config;

/// Runs a complete crawl with the given configuration
///
/// Entry point for the breadth-first mirror: seeds the frontier, walks the
/// depth levels, and returns the report the sync recorder consumes.
pub async fn crawl(config: Config) -> crate::Result<CrawlReport> {
    run_crawl(config).await
}
