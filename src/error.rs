use thiserror::Error;

/// Error types for SoundCloud backup operations.
///
/// This enum covers the errors that can occur while collecting a user's
/// liked tracks and downloading their audio, including network issues,
/// parsing failures, and filesystem problems.
///
/// Resolver-level failures (a conversion service that cannot produce a
/// download link, a non-success HTTP status from a service) are deliberately
/// NOT errors: they are reported as [`ResolveOutcome`](crate::ResolveOutcome)
/// values so the download engine can move on to the next service. Only
/// conditions that make the current operation meaningless surface here.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use soundcloud_backup::{BackupError, SoundCloudClient};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let client = SoundCloudClient::new(Arc::new(http_client::native::NativeClient::new()));
///
/// match client.get_likes_page("some-user", 1).await {
///     Ok(page) => println!("Found {} liked tracks", page.tracks.len()),
///     Err(BackupError::Http(msg)) => eprintln!("Network error: {msg}"),
///     Err(BackupError::Parse(msg)) => eprintln!("Unexpected page structure: {msg}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # });
/// ```
#[derive(Error, Debug)]
pub enum BackupError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors, and other
    /// low-level networking issues.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a scraped page or URL.
    ///
    /// This can happen when SoundCloud changes their HTML structure or when
    /// a conversion service hands back a link that is not a usable URL.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// File system I/O errors.
    ///
    /// This can occur when creating the artist directory or writing the
    /// destination audio file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
