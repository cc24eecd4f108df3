//! Sync metadata recording
//!
//! After a crawl the tool writes a single JSON summary next to the mirror:
//! when the sync ran, which repository backs it, and which pages were
//! saved. This file is the only durable record of what succeeded.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the metadata record inside the output base directory
pub const METADATA_FILE: &str = "last_sync.json";

/// Timestamp format used in the metadata record
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level sync metadata record
#[derive(Debug, Serialize, Deserialize)]
pub struct SyncMetadata {
    /// When this sync finished, formatted `YYYY-MM-DD HH:MM:SS`
    pub last_sync: String,
    pub sources: SourcesMetadata,
}

/// Upstream sources covered by the sync
#[derive(Debug, Serialize, Deserialize)]
pub struct SourcesMetadata {
    /// Companion repository URL
    pub repo: String,

    /// Number of pages successfully crawled and saved
    pub crawled_urls_count: usize,

    /// Canonical URLs of the saved pages, in completion order
    pub crawled_urls: Vec<String>,
}

/// Writes the sync metadata file and returns its path
///
/// # Arguments
///
/// * `base_dir` - Output base directory (must already exist)
/// * `repo_url` - The companion repository URL
/// * `crawled` - Canonical URLs of successfully saved pages
pub fn write_sync_metadata(
    base_dir: &Path,
    repo_url: &str,
    crawled: &[String],
) -> crate::Result<PathBuf> {
    let metadata = SyncMetadata {
        last_sync: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        sources: SourcesMetadata {
            repo: repo_url.to_string(),
            crawled_urls_count: crawled.len(),
            crawled_urls: crawled.to_vec(),
        },
    };

    let path = base_dir.join(METADATA_FILE);
    std::fs::write(&path, serde_json::to_string_pretty(&metadata)?)?;
    Ok(path)
}
