//! Service resolvers for the external conversion services.
//!
//! Each resolver wraps one third-party website that, given a track's public
//! URL, claims to produce a direct link to its audio file. All of the
//! configured services share the same resolution shape; they differ only in
//! the conversion endpoint and the CSS selector of the download element.

use crate::{parsing, BackupError, ResolveOutcome, Result, SoundCloudClient};
use async_trait::async_trait;
use http_client::Response;
use http_types::Url;
use scraper::Html;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Size of the chunks streamed from a download response to disk.
const DOWNLOAD_CHUNK_SIZE: usize = 8192;

/// Capability interface for one download resolution attempt.
///
/// The download engine holds an ordered list of resolvers and tries them in
/// sequence. A resolver never returns an error: any failure inside an
/// attempt is caught at this boundary, logged with the resolver's identity,
/// and reported as a [`ResolveOutcome`] value the engine can inspect.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockResolver`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait Resolver {
    /// Identity of this resolver, used in logs and outcomes.
    fn name(&self) -> String;

    /// Attempt to resolve and download one audio file through this service.
    ///
    /// On [`ResolveOutcome::Success`] the file has been written to
    /// `destination`. A failed transfer may leave a partial file behind.
    async fn resolve(&self, track_url: &str, destination: &Path) -> ResolveOutcome;
}

/// A resolver for one external conversion service.
///
/// The resolution algorithm is shared: request the service's conversion page
/// with the track URL as a query parameter, locate the download element by
/// the service's selector, then fetch the extracted link and stream it to
/// disk. No retries are performed within a single attempt.
pub struct ServiceResolver {
    name: String,
    endpoint: String,
    link_selector: String,
    client: SoundCloudClient,
}

impl ServiceResolver {
    /// Create a resolver for a conversion service.
    ///
    /// # Arguments
    ///
    /// * `name` - Identity used in logs
    /// * `endpoint` - The service's conversion endpoint URL
    /// * `link_selector` - CSS selector of the service's download element
    /// * `client` - Client whose HTTP session the resolver shares
    pub fn new(name: &str, endpoint: &str, link_selector: &str, client: SoundCloudClient) -> Self {
        Self {
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            link_selector: link_selector.to_string(),
            client,
        }
    }

    async fn try_resolve(&self, track_url: &str, destination: &Path) -> Result<ResolveOutcome> {
        let url = format!("{}?url={}", self.endpoint, urlencoding::encode(track_url));

        log::debug!("{}: requesting conversion page", self.name);
        let mut response = self.client.get(&url).await?;
        if !response.status().is_success() {
            return Ok(ResolveOutcome::TransientError(format!(
                "conversion page returned {}",
                response.status()
            )));
        }

        let html = response
            .body_string()
            .await
            .map_err(|e| BackupError::Http(e.to_string()))?;
        let document = Html::parse_document(&html);

        let Some(href) = parsing::extract_download_link(&document, &self.link_selector) else {
            log::debug!("{}: no download link in response", self.name);
            return Ok(ResolveOutcome::NotFound);
        };
        let direct_url = self.absolute_link(&href)?;

        log::debug!("{}: downloading audio from extracted link", self.name);
        let mut download = self.client.get_download(&direct_url).await?;
        if !download.status().is_success() {
            return Ok(ResolveOutcome::TransientError(format!(
                "download returned {}",
                download.status()
            )));
        }

        stream_to_file(&mut download, destination).await?;
        Ok(ResolveOutcome::Success)
    }

    /// Resolve a possibly relative extracted link against the service base.
    fn absolute_link(&self, href: &str) -> Result<String> {
        if href.starts_with("http://") || href.starts_with("https://") {
            return Ok(href.to_string());
        }

        let base = self
            .endpoint
            .parse::<Url>()
            .map_err(|e| BackupError::Parse(format!("Invalid endpoint '{}': {e}", self.endpoint)))?;
        let joined = base
            .join(href)
            .map_err(|e| BackupError::Parse(format!("Unresolvable download link '{href}': {e}")))?;

        Ok(joined.to_string())
    }
}

#[async_trait(?Send)]
impl Resolver for ServiceResolver {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn resolve(&self, track_url: &str, destination: &Path) -> ResolveOutcome {
        match self.try_resolve(track_url, destination).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("{}: resolver error: {e}", self.name);
                ResolveOutcome::TransientError(e.to_string())
            }
        }
    }
}

/// Stream a response body to disk in fixed-size chunks.
///
/// A mid-stream failure leaves whatever was already written on disk; the
/// caller treats the attempt as failed and the partial file remains.
async fn stream_to_file(response: &mut Response, destination: &Path) -> Result<()> {
    use futures::AsyncReadExt;

    let mut body = response.take_body();
    let mut file = File::create(destination)?;
    let mut chunk = [0u8; DOWNLOAD_CHUNK_SIZE];

    loop {
        let read = body.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        file.write_all(&chunk[..read])?;
    }

    file.flush()?;
    Ok(())
}

/// The fixed list of conversion services, in priority order.
///
/// The order is a priority ranking: the engine tries each service in turn
/// and stops at the first success. Every resolver shares the given client's
/// HTTP session.
pub fn default_resolvers(client: &SoundCloudClient) -> Vec<Box<dyn Resolver>> {
    vec![
        Box::new(ServiceResolver::new(
            "scdownloader",
            "https://scdownloader.io/download",
            "a.download-btn",
            client.clone(),
        )),
        Box::new(ServiceResolver::new(
            "soundcloudmp3",
            "https://soundcloudmp3.org/download",
            "a.download-button",
            client.clone(),
        )),
        Box::new(ServiceResolver::new(
            "downloadsound",
            "https://downloadsound.cloud/download",
            "a.download-link",
            client.clone(),
        )),
    ]
}
