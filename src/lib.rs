pub mod client;
pub mod commands;
pub mod download;
pub mod error;
pub mod headers;
pub mod iterator;
pub mod parsing;
pub mod resolver;
pub mod sanitize;
pub mod types;

pub use client::SoundCloudClient;
pub use download::Downloader;
pub use error::BackupError;
pub use iterator::{AsyncPaginatedIterator, LikesIterator};
pub use parsing::LikesParser;
pub use resolver::{default_resolvers, Resolver, ServiceResolver};
pub use sanitize::sanitize;
pub use types::{BackupSummary, DownloadOutcome, LikesPage, ResolveOutcome, Track};

#[cfg(feature = "mock")]
pub use resolver::MockResolver;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, BackupError>;
