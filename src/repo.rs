//! Companion repository sync and ignore-list maintenance
//!
//! Glue around the crawl: a `git` checkout of the upstream repository is
//! kept next to the mirror, and the workspace `.gitignore` is guaranteed to
//! exclude the mirror and the tool itself. Sync failures are reported to
//! the caller, who logs them and proceeds; the crawl never depends on the
//! repository step succeeding.

use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

/// Ensures the ignore file contains every given entry
///
/// Creates the file when absent; otherwise appends only the entries not
/// already present (matched per line, never duplicated).
pub fn ensure_gitignore(path: &Path, entries: &[String]) -> io::Result<()> {
    if !path.exists() {
        std::fs::write(path, format!("{}\n", entries.join("\n")))?;
        tracing::info!(path = %path.display(), "created ignore file");
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    let missing: Vec<&String> = entries
        .iter()
        .filter(|entry| !content.lines().any(|line| line.trim() == entry.as_str()))
        .collect();

    if !missing.is_empty() {
        let mut file = std::fs::OpenOptions::new().append(true).open(path)?;
        for entry in &missing {
            writeln!(file, "{entry}")?;
            tracing::info!(entry = %entry, "added ignore entry");
        }
    }

    Ok(())
}

/// Clones or updates the companion repository
///
/// `git pull` when the checkout directory already exists, `git clone`
/// otherwise. A non-zero git exit or a spawn failure is returned as an
/// error for the caller to log.
pub fn sync_repo(repo_url: &str, dir: &Path) -> io::Result<()> {
    let status = if dir.exists() {
        tracing::info!(dir = %dir.display(), "updating repository");
        Command::new("git").arg("-C").arg(dir).arg("pull").status()?
    } else {
        tracing::info!(repo = repo_url, dir = %dir.display(), "cloning repository");
        Command::new("git")
            .arg("clone")
            .arg(repo_url)
            .arg(dir)
            .status()?
    };

    if !status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("git exited with {status}"),
        ));
    }
    Ok(())
}
