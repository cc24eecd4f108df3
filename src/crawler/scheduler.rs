//! Frontier bookkeeping for the breadth-first crawl
//!
//! The frontier holds the canonical URLs scheduled for the current depth;
//! the visited set guarantees at-most-once dispatch for the lifetime of a
//! run. Both live on the coordinator only; worker tasks never touch them.

use crate::url::normalize_url;
use std::collections::HashSet;

/// Depth-batched frontier with a monotonically growing visited set
#[derive(Debug, Default)]
pub struct Frontier {
    /// Canonical URLs already handed out for fetching
    visited: HashSet<String>,

    /// Canonical URLs scheduled for the current depth
    pending: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with the given URLs (canonicalized)
    pub fn seeded(seeds: &[String]) -> Self {
        Self {
            visited: HashSet::new(),
            pending: seeds.iter().map(|s| normalize_url(s)).collect(),
        }
    }

    /// Takes the batch for the current depth
    ///
    /// Returns the pending URLs that were not yet visited, marking all of
    /// them visited before they are handed out, so a URL rediscovered while
    /// its batch is still in flight can never be dispatched twice. The
    /// pending set is left empty for [`absorb`](Self::absorb) to refill.
    ///
    /// The batch is sorted so dispatch order is deterministic (completion
    /// order is not).
    pub fn take_batch(&mut self) -> Vec<String> {
        let mut batch: Vec<String> = self
            .pending
            .drain()
            .filter(|url| !self.visited.contains(url))
            .collect();
        batch.sort();

        self.visited.extend(batch.iter().cloned());
        batch
    }

    /// Unions discovered links into the next depth's frontier
    ///
    /// Duplicates collapse here; already-visited URLs are filtered out at
    /// the next [`take_batch`](Self::take_batch).
    pub fn absorb(&mut self, links: impl IntoIterator<Item = String>) {
        self.pending.extend(links);
    }

    /// Number of URLs dispatched so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting for the next batch
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
