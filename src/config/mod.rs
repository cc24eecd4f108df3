//! Configuration module for Zama-KB
//!
//! The defaults baked into the types reproduce the stock Zama setup, so the
//! tool runs without any configuration file; an optional TOML file overrides
//! individual fields (tests use this to inject small depths and worker
//! counts).

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, RepoConfig, SiteConfig};
pub use validation::validate;
