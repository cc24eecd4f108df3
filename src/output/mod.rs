//! Output layer: local path mapping, Markdown rendering, sync metadata

mod markdown;
mod metadata;
mod paths;

pub use markdown::{convert_to_markdown, write_page};
pub use metadata::{write_sync_metadata, SourcesMetadata, SyncMetadata, METADATA_FILE};
pub use paths::{map_path, page_path};
