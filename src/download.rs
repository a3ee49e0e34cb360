//! The fallback download engine.

use crate::resolver::default_resolvers;
use crate::sanitize::sanitize;
use crate::{
    BackupSummary, DownloadOutcome, ResolveOutcome, Resolver, Result, SoundCloudClient, Track,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback name for a path component whose raw value sanitizes to nothing.
const EMPTY_COMPONENT_FALLBACK: &str = "unknown";

/// Downloads tracks by trying each configured resolver in priority order.
///
/// For every track the engine derives a destination path of the form
/// `{root}/{artist}/{title}.mp3` (both components sanitized), skips the
/// track if that file already exists, and otherwise tries each resolver in
/// order until one succeeds or all are exhausted. Tracks are processed one
/// at a time; the engine holds no state across tracks beyond the resolver
/// list and the destination root.
///
/// Duplicate avoidance is a plain existence check on the destination path.
/// A partial file left behind by an interrupted transfer is
/// indistinguishable from a complete one and will be skipped on a re-run.
///
/// # Examples
///
/// ```rust,no_run
/// use soundcloud_backup::{Downloader, SoundCloudClient, Track};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let client = SoundCloudClient::new(Arc::new(http_client::native::NativeClient::new()));
/// let downloader = Downloader::with_default_resolvers("downloads", &client);
///
/// let track = Track {
///     title: "My Song".to_string(),
///     artist: "DJ Test".to_string(),
///     url: "https://soundcloud.com/dj-test/my-song".to_string(),
/// };
/// downloader.download_track(&track).await?;
/// # Ok::<(), soundcloud_backup::BackupError>(())
/// # });
/// ```
pub struct Downloader {
    root: PathBuf,
    resolvers: Vec<Box<dyn Resolver>>,
}

impl Downloader {
    /// Create an engine writing under `root` with an explicit resolver list.
    ///
    /// The list order is the priority order.
    pub fn new(root: impl Into<PathBuf>, resolvers: Vec<Box<dyn Resolver>>) -> Self {
        Self {
            root: root.into(),
            resolvers,
        }
    }

    /// Create an engine using the default conversion services.
    ///
    /// The resolvers share the given client's HTTP session.
    pub fn with_default_resolvers(root: impl Into<PathBuf>, client: &SoundCloudClient) -> Self {
        Self::new(root, default_resolvers(client))
    }

    /// Compute the destination path for a track.
    ///
    /// The path is `{root}/{artist}/{title}.mp3` with both components
    /// sanitized; a component that sanitizes to nothing falls back to
    /// `unknown`, so no track ever maps to the bare root or an empty file
    /// name. Distinct tracks whose components collide after sanitization
    /// map to the same path.
    pub fn destination_for(&self, track: &Track) -> PathBuf {
        self.root
            .join(path_component(&track.artist))
            .join(format!("{}.mp3", path_component(&track.title)))
    }

    /// Download one track, trying each resolver in priority order.
    ///
    /// Every outcome is terminal and logged: the track is skipped if its
    /// destination already exists (zero network requests), downloaded by the
    /// first resolver that succeeds, or reported as exhausted once every
    /// resolver has failed. Resolver failures never surface as errors; the
    /// only `Err` from this method is an infrastructural one, raised when
    /// the artist directory cannot be created.
    pub async fn download_track(&self, track: &Track) -> Result<DownloadOutcome> {
        let artist_dir = self.root.join(path_component(&track.artist));
        fs::create_dir_all(&artist_dir)?;

        let destination = self.destination_for(track);
        if destination.exists() {
            log::info!("Track already exists: {}", destination.display());
            return Ok(DownloadOutcome::Skipped);
        }

        for resolver in &self.resolvers {
            match resolver.resolve(&track.url, &destination).await {
                ResolveOutcome::Success => {
                    log::info!("Successfully downloaded: {}", destination.display());
                    return Ok(DownloadOutcome::Downloaded {
                        resolver: resolver.name(),
                    });
                }
                ResolveOutcome::NotFound => {
                    log::debug!("{}: no usable link for '{}'", resolver.name(), track.title);
                }
                ResolveOutcome::TransientError(reason) => {
                    log::warn!("{}: failed for '{}': {reason}", resolver.name(), track.title);
                }
            }
        }

        log::error!("Failed to download track: {}", track.title);
        Ok(DownloadOutcome::Exhausted)
    }

    /// Download a whole collection sequentially.
    ///
    /// Per-track infrastructure errors are logged and absorbed into the
    /// summary so one bad track cannot abort the run.
    pub async fn download_all(&self, tracks: &[Track]) -> BackupSummary {
        let mut summary = BackupSummary::default();

        for track in tracks {
            match self.download_track(track).await {
                Ok(DownloadOutcome::Downloaded { .. }) => summary.downloaded += 1,
                Ok(DownloadOutcome::Skipped) => summary.skipped += 1,
                Ok(DownloadOutcome::Exhausted) => summary.failed += 1,
                Err(e) => {
                    log::error!("Error downloading track '{}': {e}", track.title);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// The destination root this engine writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn path_component(raw: &str) -> String {
    let component = sanitize(raw);
    if component.is_empty() {
        EMPTY_COMPONENT_FALLBACK.to_string()
    } else {
        component
    }
}
