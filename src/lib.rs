//! Zama-KB: a local knowledge base builder for the Zama docs
//!
//! This crate implements a small breadth-first crawler that mirrors a
//! documentation site into a tree of Markdown files, keeps a checkout of the
//! companion GitHub repository next to it, and records sync metadata.

pub mod config;
pub mod crawler;
pub mod output;
pub mod repo;
pub mod url;

use thiserror::Error;

/// Main error type for Zama-KB operations
///
/// Per-page fetch and extraction failures are deliberately NOT represented
/// here; they are contained in [`crawler::PageFailure`] so a bad page never
/// aborts the crawl. This enum covers the fatal paths only.
#[derive(Debug, Error)]
pub enum KbError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Zama-KB operations
pub type Result<T> = std::result::Result<T, KbError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{crawl, CrawlReport, PageFailure, PageOutcome};
pub use crate::url::{in_scope, normalize_url};
