//! Crawl coordination: the depth loop
//!
//! One batch per depth level. Worker tasks fetch and convert pages
//! concurrently (bounded by a semaphore) and hand their outcomes back; the
//! coordinator is the only place the crawled record and the next frontier
//! are mutated, so no shared state needs locking. A depth's batch fully
//! drains before the next depth starts.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::parser::{extract_links, select_content};
use crate::crawler::scheduler::Frontier;
use crate::output;
use reqwest::Client;
use scraper::Html;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Why a page contributed nothing to the crawl
///
/// These are contained outcomes, not errors: one bad page never aborts the
/// run. Filesystem problems are the exception and surface as
/// [`KbError::Io`](crate::KbError) instead.
#[derive(Debug, Error)]
pub enum PageFailure {
    #[error("HTTP status {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("no content region found")]
    NoContent,

    #[error("markdown conversion failed: {0}")]
    Convert(String),
}

/// Outcome of processing one page
#[derive(Debug)]
pub enum PageOutcome {
    /// Page saved; `links` feed the next frontier
    Saved { url: String, links: Vec<String> },

    /// Page skipped; contributes no links and is not recorded as crawled
    Failed { url: String, reason: PageFailure },
}

/// Summary of a finished crawl
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Canonical URLs of saved pages, in completion order
    pub crawled: Vec<String>,

    /// Total fetches dispatched
    pub attempted: usize,

    /// Pages that failed (fetch, extraction, or conversion)
    pub failed: usize,
}

/// Runs the breadth-first crawl described by `config`
///
/// Depth advances from 0 to `max-depth` inclusive; the loop exits early
/// when a depth has no unvisited URLs. Per-page failures are logged and
/// absorbed; filesystem errors are fatal and abort the crawl.
pub async fn run_crawl(config: Config) -> crate::Result<CrawlReport> {
    let client = build_http_client(&config.crawler)?;
    let config = Arc::new(config);

    let mut frontier = Frontier::seeded(&config.site.seeds);
    let mut report = CrawlReport::default();

    for depth in 0..=config.crawler.max_depth {
        let batch = frontier.take_batch();
        if batch.is_empty() {
            tracing::info!(depth, "no unvisited URLs, stopping early");
            break;
        }
        tracing::info!(depth, batch = batch.len(), "crawling depth level");

        let semaphore = Arc::new(Semaphore::new(config.crawler.max_workers));
        let mut tasks: JoinSet<crate::Result<PageOutcome>> = JoinSet::new();

        for url in batch {
            report.attempted += 1;
            let client = client.clone();
            let config = Arc::clone(&config);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                // The semaphore is never closed; the permit held for the
                // task's lifetime bounds the worker pool.
                let _permit = semaphore.acquire_owned().await.ok();
                process_page(&client, &config, url).await
            });
        }

        // Barrier: drain the whole batch before advancing the depth.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(PageOutcome::Saved { url, links })) => {
                    frontier.absorb(links);
                    report.crawled.push(url);
                }
                Ok(Ok(PageOutcome::Failed { url, reason })) => {
                    tracing::warn!(%url, %reason, "page skipped");
                    report.failed += 1;
                }
                Ok(Err(e)) => return Err(e),
                Err(e) => tracing::error!("crawl task panicked: {e}"),
            }
        }
    }

    tracing::info!(
        crawled = report.crawled.len(),
        failed = report.failed,
        "crawl finished"
    );
    Ok(report)
}

/// Fetches, converts, and saves a single page
///
/// Returns `Ok(PageOutcome)` for every contained failure mode; `Err` is
/// reserved for fatal filesystem errors.
async fn process_page(client: &Client, config: &Config, url: String) -> crate::Result<PageOutcome> {
    let delay = Duration::from_millis(config.crawler.request_delay_ms);

    let body = match fetch_page(client, &url, delay).await {
        FetchResult::Success { body } => body,
        FetchResult::HttpError { status } => {
            return Ok(PageOutcome::Failed {
                url,
                reason: PageFailure::Http(status),
            })
        }
        FetchResult::NetworkError { error } => {
            return Ok(PageOutcome::Failed {
                url,
                reason: PageFailure::Network(error),
            })
        }
    };

    let Ok(page_url) = Url::parse(&url) else {
        return Ok(PageOutcome::Failed {
            url,
            reason: PageFailure::Network("unparseable page URL".to_string()),
        });
    };

    // The parsed document is not Send; keep it scoped so it drops before
    // the next await point.
    let (content, links) = {
        let document = Html::parse_document(&body);
        (
            select_content(&document, &config.crawler.content_selectors),
            extract_links(&document, &page_url, &config.site),
        )
    };

    let Some(content_html) = content else {
        return Ok(PageOutcome::Failed {
            url,
            reason: PageFailure::NoContent,
        });
    };

    let markdown = match output::convert_to_markdown(&content_html) {
        Ok(markdown) => markdown,
        Err(e) => {
            return Ok(PageOutcome::Failed {
                url,
                reason: PageFailure::Convert(e.to_string()),
            })
        }
    };

    let path = output::page_path(Path::new(&config.output.base_dir), &url)?;
    output::write_page(&path, &url, &markdown)?;
    tracing::info!(%url, path = %path.display(), "saved page");

    Ok(PageOutcome::Saved { url, links })
}
