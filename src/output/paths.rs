use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// Placeholder file name for the site root (its URL path is empty)
const HOME_PAGE_NAME: &str = "homepage";

/// Document extension stripped from URL paths before mapping
const DOC_EXTENSION: &str = ".html";

/// Maps a canonical URL to its local Markdown path under `base_dir`
///
/// Pure mapping, no filesystem access:
/// - leading/trailing slashes are stripped from the URL path
/// - an empty path (the site root) becomes the fixed placeholder name
/// - a trailing `.html` is stripped
/// - the `.md` extension is appended
///
/// Distinct canonical URLs map to distinct paths as long as the site does
/// not serve both `/x` and `/x.html` as different pages.
pub fn map_path(base_dir: &Path, url: &str) -> PathBuf {
    let path = Url::parse(url)
        .map(|u| u.path().trim_matches('/').to_string())
        .unwrap_or_default();

    let path = if path.is_empty() {
        HOME_PAGE_NAME.to_string()
    } else {
        path
    };

    let path = path.strip_suffix(DOC_EXTENSION).unwrap_or(&path);

    base_dir.join(format!("{path}.md"))
}

/// Maps a canonical URL to its local path and ensures the parent directory
/// exists
///
/// Directory creation is idempotent; a creation failure is a fatal I/O
/// error for the caller.
pub fn page_path(base_dir: &Path, url: &str) -> io::Result<PathBuf> {
    let path = map_path(base_dir, url);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(path)
}
