//! HTML parsing utilities for scraped pages.
//!
//! This module contains the HTML extraction logic for the likes listing and
//! for the conversion services' response pages. The functions here are pure:
//! they take parsed documents and return structured data, so they can be
//! exercised in tests against saved fixture pages without a network.

use crate::{BackupError, LikesPage, Result, Track};
use scraper::{ElementRef, Html, Selector};

/// Parser for SoundCloud likes listing pages.
///
/// Stateless and focused purely on HTML extraction.
#[derive(Debug, Clone)]
pub struct LikesParser;

impl LikesParser {
    /// Create a new parser instance.
    pub fn new() -> Self {
        Self
    }

    /// Parse a likes listing page into a [`LikesPage`] structure.
    pub fn parse_likes_page(
        &self,
        document: &Html,
        page_number: u32,
        base_url: &str,
    ) -> Result<LikesPage> {
        let tracks = self.extract_tracks_from_document(document, base_url)?;
        let has_next_page = self.has_next_link(document);

        Ok(LikesPage {
            tracks,
            page_number,
            has_next_page,
        })
    }

    /// Extract liked tracks from a listing document.
    ///
    /// Malformed rows (missing title link or artist) are logged and skipped
    /// individually; extraction continues with the remaining rows.
    pub fn extract_tracks_from_document(
        &self,
        document: &Html,
        base_url: &str,
    ) -> Result<Vec<Track>> {
        let mut tracks = Vec::new();

        let row_selector = Selector::parse("div.trackItem").unwrap();
        let rows: Vec<_> = document.select(&row_selector).collect();
        log::debug!("Found {} track rows", rows.len());

        for row in rows {
            match self.parse_track_row(&row, base_url) {
                Ok(track) => tracks.push(track),
                Err(e) => log::warn!("Skipping malformed track row: {e}"),
            }
        }

        if tracks.is_empty() {
            log::debug!("No tracks found in likes listing");
        }

        Ok(tracks)
    }

    /// Parse a single row from the likes listing.
    fn parse_track_row(&self, row: &ElementRef, base_url: &str) -> Result<Track> {
        let title_selector = Selector::parse("a.trackItem__trackTitle").unwrap();
        let title_link = row
            .select(&title_selector)
            .next()
            .ok_or(BackupError::Parse("Missing track title".to_string()))?;

        let title = title_link.text().collect::<String>().trim().to_string();
        let href = title_link
            .value()
            .attr("href")
            .ok_or(BackupError::Parse("Track title carries no link".to_string()))?;

        // Listing pages link tracks relative to the site root
        let url = if href.starts_with('/') {
            format!("{base_url}{href}")
        } else {
            href.to_string()
        };

        let artist_selector = Selector::parse("a.trackItem__username").unwrap();
        let artist = row
            .select(&artist_selector)
            .next()
            .ok_or(BackupError::Parse("Missing artist name".to_string()))?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        Ok(Track { title, artist, url })
    }

    /// Check whether the listing links a further page.
    fn has_next_link(&self, document: &Html) -> bool {
        let next_selector = Selector::parse("a[rel=\"next\"]").unwrap();
        document.select(&next_selector).next().is_some()
    }
}

impl Default for LikesParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Locate a download-action element in a conversion service's response and
/// extract its target link.
///
/// The selector differs per service; everything else about the lookup is
/// shared. Returns `None` when the element is absent or carries no usable
/// `href`, which resolvers report as
/// [`ResolveOutcome::NotFound`](crate::ResolveOutcome::NotFound).
pub fn extract_download_link(document: &Html, selector: &str) -> Option<String> {
    let link_selector = Selector::parse(selector).ok()?;

    document
        .select(&link_selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}
