//! URL handling for Zama-KB
//!
//! Normalization produces the canonical string form used as the
//! deduplication key everywhere (visited set, frontier, crawled record,
//! path mapping); the matcher decides which discovered links stay in scope.

mod matcher;
mod normalize;

pub use matcher::in_scope;
pub use normalize::normalize_url;
