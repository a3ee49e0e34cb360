//! Data types for SoundCloud track metadata and download outcomes.
//!
//! This module contains the core data structures used throughout the crate:
//! liked-track records as scraped from the likes listing, pagination state,
//! and the outcome types produced by the resolvers and the download engine.

use serde::{Deserialize, Serialize};

// ================================================================================================
// TRACK METADATA
// ================================================================================================

/// Represents a liked track scraped from a user's likes listing.
///
/// A track has no identity beyond its fields; the listing may repeat an
/// entry, and the only duplicate guard downstream is the existence check on
/// the destination file.
///
/// # Examples
///
/// ```rust
/// use soundcloud_backup::Track;
///
/// let track = Track {
///     title: "My Song".to_string(),
///     artist: "DJ Test".to_string(),
///     url: "https://soundcloud.com/dj-test/my-song".to_string(),
/// };
///
/// println!("{} by {}", track.title, track.artist);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// The track title
    pub title: String,
    /// The artist (uploader) name
    pub artist: String,
    /// Public permalink URL of the track
    pub url: String,
}

/// Represents one page of a user's likes listing.
///
/// This structure is returned by
/// [`SoundCloudClient::get_likes_page`](crate::SoundCloudClient::get_likes_page)
/// and carries the pagination state the likes iterator advances on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikesPage {
    /// The tracks on this page
    pub tracks: Vec<Track>,
    /// Current page number (1-indexed)
    pub page_number: u32,
    /// Whether a further page is linked from this one
    pub has_next_page: bool,
}

// ================================================================================================
// RESOLVER AND ENGINE OUTCOMES
// ================================================================================================

/// Outcome of a single resolver attempt against one conversion service.
///
/// Resolvers report failure as a value rather than an error so the download
/// engine can inspect it and move on to the next service in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The audio file was written to the destination path.
    Success,
    /// The service responded, but no usable download link could be extracted.
    NotFound,
    /// A network, HTTP, or write failure occurred during the attempt.
    TransientError(String),
}

/// Terminal outcome of one track passed through the download engine.
///
/// # Examples
///
/// ```rust
/// use soundcloud_backup::DownloadOutcome;
///
/// let outcome = DownloadOutcome::Downloaded {
///     resolver: "scdownloader".to_string(),
/// };
///
/// match outcome {
///     DownloadOutcome::Skipped => println!("already on disk"),
///     DownloadOutcome::Downloaded { resolver } => println!("fetched via {resolver}"),
///     DownloadOutcome::Exhausted => println!("every service failed"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The destination file already existed; no network requests were made.
    Skipped,
    /// One of the resolvers produced the file.
    Downloaded {
        /// Name of the resolver that succeeded
        resolver: String,
    },
    /// Every resolver was tried and failed; no file was created.
    Exhausted,
}

/// Counters accumulated over a whole backup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupSummary {
    /// Tracks downloaded during this run
    pub downloaded: usize,
    /// Tracks skipped because the destination file already existed
    pub skipped: usize,
    /// Tracks for which every resolver failed, or which hit an I/O error
    pub failed: usize,
}

impl BackupSummary {
    /// Total number of tracks processed.
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}
