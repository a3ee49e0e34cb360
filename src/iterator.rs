use crate::{LikesPage, Result, SoundCloudClient, Track};
use async_trait::async_trait;

/// Async iterator trait for paginated SoundCloud data.
///
/// This trait provides a common interface for iterating over paginated data,
/// fetching new pages lazily as items are consumed.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait AsyncPaginatedIterator<T> {
    /// Fetch the next item from the iterator.
    ///
    /// This method automatically handles pagination, fetching new pages as
    /// needed. Returns `None` when there are no more items available.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(item))` - Next item in the sequence
    /// - `Ok(None)` - No more items available
    /// - `Err(...)` - Network or parsing error occurred
    async fn next(&mut self) -> Result<Option<T>>;

    /// Collect all remaining items into a Vec.
    ///
    /// **Warning**: This method will fetch ALL remaining pages, which could
    /// be many hundreds of items for an avid listener. Use
    /// [`take`](Self::take) for safer bounded collection.
    async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Take up to n items from the iterator.
    ///
    /// # Arguments
    ///
    /// * `n` - Maximum number of items to collect
    async fn take(&mut self, n: usize) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for _ in 0..n {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Get the current page number (0-indexed).
    ///
    /// Returns the page number of the most recently fetched page.
    fn current_page(&self) -> u32;

    /// Get the total number of pages, if known.
    fn total_pages(&self) -> Option<u32> {
        None // Default implementation returns None
    }
}

/// Iterator over a user's liked tracks.
///
/// This iterator walks the likes listing page by page, following the
/// listing's next-page link until no further page exists, and yields one
/// [`Track`] at a time. Tracks are yielded in listing order (most recently
/// liked first).
pub struct LikesIterator {
    client: SoundCloudClient,
    username: String,
    current_page: u32,
    has_more: bool,
    buffer: Vec<Track>,
    tracks_yielded: u32,
}

#[async_trait(?Send)]
impl AsyncPaginatedIterator<Track> for LikesIterator {
    async fn next(&mut self) -> Result<Option<Track>> {
        // A listing page can parse to zero usable rows; keep fetching until
        // we have a track or run out of pages
        while self.buffer.is_empty() {
            match self.next_page().await? {
                Some(page) => {
                    self.buffer = page.tracks;
                    self.buffer.reverse(); // Reverse so we can pop from end efficiently
                }
                None => return Ok(None),
            }
        }

        if let Some(track) = self.buffer.pop() {
            self.tracks_yielded += 1;
            Ok(Some(track))
        } else {
            Ok(None)
        }
    }

    fn current_page(&self) -> u32 {
        self.current_page.saturating_sub(1)
    }
}

impl LikesIterator {
    /// Create a new likes iterator.
    ///
    /// This is typically called via [`SoundCloudClient::likes`].
    pub fn new(client: SoundCloudClient, username: String) -> Self {
        Self {
            client,
            username,
            current_page: 1,
            has_more: true,
            buffer: Vec::new(),
            tracks_yielded: 0,
        }
    }

    /// Fetch the next page of the likes listing.
    pub async fn next_page(&mut self) -> Result<Option<LikesPage>> {
        if !self.has_more {
            return Ok(None);
        }

        log::debug!(
            "Fetching likes page {} for {} ({} tracks yielded so far)",
            self.current_page,
            self.username,
            self.tracks_yielded
        );

        let page = self
            .client
            .get_likes_page(&self.username, self.current_page)
            .await?;

        self.has_more = page.has_next_page;
        self.current_page += 1;

        Ok(Some(page))
    }
}
