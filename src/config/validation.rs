use crate::config::types::Config;
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates a configuration
///
/// Checks, in order:
/// 1. The site host is non-empty
/// 2. There is at least one seed URL and every seed parses as a URL
/// 3. The worker count is at least 1
/// 4. The content-selector list is non-empty and every entry parses as a
///    CSS selector
/// 5. The output base directory is non-empty
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.site.host.trim().is_empty() {
        return Err(ConfigError::Validation(
            "site host must not be empty".to_string(),
        ));
    }

    if config.site.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }
    for seed in &config.site.seeds {
        Url::parse(seed).map_err(|e| ConfigError::InvalidUrl(format!("{seed}: {e}")))?;
    }

    if config.crawler.max_workers == 0 {
        return Err(ConfigError::Validation(
            "max-workers must be at least 1".to_string(),
        ));
    }

    if config.crawler.content_selectors.is_empty() {
        return Err(ConfigError::Validation(
            "content-selectors must not be empty".to_string(),
        ));
    }
    for selector in &config.crawler.content_selectors {
        if Selector::parse(selector).is_err() {
            return Err(ConfigError::Validation(format!(
                "invalid content selector: {selector}"
            )));
        }
    }

    if config.output.base_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output base-dir must not be empty".to_string(),
        ));
    }

    Ok(())
}
