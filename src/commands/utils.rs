use crate::{AsyncPaginatedIterator, SoundCloudClient, Track};
use std::env;

/// Resolve the SoundCloud username from the CLI flag or the environment.
///
/// A `.env` file, if present, has already been loaded by the entry point, so
/// `SOUNDCLOUD_USERNAME` may come from either place.
pub fn resolve_username(flag: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(username) = flag {
        return Ok(username.to_string());
    }

    env::var("SOUNDCLOUD_USERNAME").map_err(|_| {
        "Username must be provided via --username or the SOUNDCLOUD_USERNAME environment variable"
            .into()
    })
}

/// Collect up to `limit` liked tracks for a user (0 means no limit).
pub async fn collect_likes(
    client: &SoundCloudClient,
    username: &str,
    limit: usize,
) -> crate::Result<Vec<Track>> {
    let mut likes = client.likes(username);

    if limit > 0 {
        likes.take(limit).await
    } else {
        likes.collect_all().await
    }
}
