use crate::{headers, BackupError, LikesIterator, LikesPage, LikesParser, Result};
use http_client::{HttpClient, Request, Response};
use http_types::{Method, Url};
use scraper::Html;
use std::sync::Arc;

/// Client for fetching public SoundCloud pages over a shared HTTP session.
///
/// The client holds the single HTTP session reused for every request this
/// tool makes: likes listing pages as well as the resolvers' conversion and
/// download requests all go through clones of it, so connection pooling is
/// shared. No authentication is performed; only public pages are read.
///
/// # Examples
///
/// ```rust,no_run
/// use soundcloud_backup::{AsyncPaginatedIterator, SoundCloudClient};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let client = SoundCloudClient::new(Arc::new(http_client::native::NativeClient::new()));
///
/// let mut likes = client.likes("some-user");
/// while let Some(track) = likes.next().await? {
///     println!("{} - {}", track.artist, track.title);
/// }
/// # Ok::<(), soundcloud_backup::BackupError>(())
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct SoundCloudClient {
    client: Arc<dyn HttpClient>,
    base_url: String,
    parser: LikesParser,
}

impl SoundCloudClient {
    /// Create a new [`SoundCloudClient`] with the default SoundCloud URL.
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(client, "https://soundcloud.com".to_string())
    }

    /// Create a new [`SoundCloudClient`] with a custom base URL.
    ///
    /// This is useful for testing against a local server.
    pub fn with_base_url(client: Arc<dyn HttpClient>, base_url: String) -> Self {
        Self {
            client,
            base_url,
            parser: LikesParser::new(),
        }
    }

    /// Fetch one page of a user's likes listing.
    ///
    /// Malformed entries in the listing are skipped individually; see
    /// [`LikesParser::extract_tracks_from_document`].
    pub async fn get_likes_page(&self, username: &str, page: u32) -> Result<LikesPage> {
        let url = if page <= 1 {
            format!("{}/{}/likes", self.base_url, username)
        } else {
            format!("{}/{}/likes?page={}", self.base_url, username, page)
        };

        log::debug!("Fetching likes page {page} for user: {username}");
        let mut response = self.get(&url).await?;
        let content = response
            .body_string()
            .await
            .map_err(|e| BackupError::Http(e.to_string()))?;

        log::debug!(
            "Likes response: {} status, {} chars",
            response.status(),
            content.len()
        );

        let document = Html::parse_document(&content);
        self.parser.parse_likes_page(&document, page, &self.base_url)
    }

    /// Create an iterator over all of a user's liked tracks.
    ///
    /// The iterator fetches listing pages lazily until no further page is
    /// linked.
    pub fn likes(&self, username: &str) -> LikesIterator {
        LikesIterator::new(self.clone(), username.to_string())
    }

    /// Make an HTTP GET request for an HTML page, following redirects.
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.get_with_redirects(url, true, 0).await
    }

    /// Make an HTTP GET request for a file download, following redirects.
    pub async fn get_download(&self, url: &str) -> Result<Response> {
        self.get_with_redirects(url, false, 0).await
    }

    async fn get_with_redirects(
        &self,
        url: &str,
        html: bool,
        redirect_count: u32,
    ) -> Result<Response> {
        if redirect_count > 5 {
            return Err(BackupError::Http("Too many redirects".to_string()));
        }

        let parsed = url
            .parse::<Url>()
            .map_err(|e| BackupError::Parse(format!("Invalid URL '{url}': {e}")))?;

        let mut request = Request::new(Method::Get, parsed.clone());
        if html {
            headers::add_page_headers(&mut request);
        } else {
            headers::add_download_headers(&mut request);
        }

        let response = self
            .client
            .send(request)
            .await
            .map_err(|e| BackupError::Http(e.to_string()))?;

        // Handle redirects manually; the curl backend does not follow them
        if response.status() == 301 || response.status() == 302 {
            if let Some(location) = response.header("location") {
                if let Some(redirect_url) = location.get(0) {
                    let next = parsed.join(redirect_url.as_str()).map_err(|e| {
                        BackupError::Parse(format!(
                            "Unresolvable redirect '{}': {e}",
                            redirect_url.as_str()
                        ))
                    })?;

                    log::debug!("Following redirect from {url} to {next}");
                    return Box::pin(self.get_with_redirects(
                        next.as_str(),
                        html,
                        redirect_count + 1,
                    ))
                    .await;
                }
            }
        }

        Ok(response)
    }
}
