//! HTTP client for remote ads.txt files

use std::time::Duration;

use adstxt::AdsTxtRecord;
use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::{Error, Result};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default maximum retries (0 = no retries)
const DEFAULT_MAX_RETRIES: u32 = 0;

/// Default initial backoff in milliseconds
const DEFAULT_INITIAL_BACKOFF_MS: u64 = 100;

/// Backoff cap in milliseconds
const MAX_BACKOFF_MS: u64 = 10_000;

/// HTTP client for fetching ads.txt files
///
/// # Examples
///
/// ```rust,no_run
/// use adstxt_client::AdsTxtClient;
///
/// # async fn example() -> Result<(), adstxt_client::Error> {
/// let client = AdsTxtClient::new()?
///     .with_user_agent("adstxt-crawler/0.1")
///     .with_max_retries(2);
///
/// let record = client.fetch("https://example.com/ads.txt").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AdsTxtClient {
    client: Client,
    max_retries: u32,
    initial_backoff_ms: u64,
    user_agent: Option<String>,
}

impl AdsTxtClient {
    /// Create a client with the default 30 second timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client))
    }

    /// Create a client around a custom reqwest client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff_ms: DEFAULT_INITIAL_BACKOFF_MS,
            user_agent: None,
        }
    }

    /// Set the maximum number of retries for failed requests
    ///
    /// Default is 0 (no retries). Only connection-level errors and 5xx/429
    /// responses are retried, never parsing or decoding failures.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial backoff in milliseconds
    ///
    /// Default is 100 ms. The backoff doubles per retry, capped at 10 s.
    pub fn with_initial_backoff_ms(mut self, initial_backoff_ms: u64) -> Self {
        self.initial_backoff_ms = initial_backoff_ms;
        self
    }

    /// Set a custom User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the well-known ads.txt URL for a publisher domain
    ///
    /// # Examples
    ///
    /// ```
    /// use adstxt_client::AdsTxtClient;
    ///
    /// let url = AdsTxtClient::well_known_url("example.com")?;
    /// assert_eq!(url.as_str(), "https://example.com/ads.txt");
    /// # Ok::<(), adstxt_client::Error>(())
    /// ```
    pub fn well_known_url(domain: &str) -> Result<Url> {
        Ok(Url::parse(&format!("https://{domain}/ads.txt"))?)
    }

    /// Fetch a URL and return the decoded response body
    ///
    /// Fails on transport errors, non-success statuses, and bodies that are
    /// not valid UTF-8.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.execute_with_retry(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    /// Fetch a URL and parse the body as an ads.txt record
    pub async fn fetch(&self, url: &str) -> Result<AdsTxtRecord> {
        let text = self.fetch_text(url).await?;
        Ok(AdsTxtRecord::parse(&text))
    }

    /// Fetch the well-known ads.txt location for a publisher domain
    ///
    /// Requests `https://{domain}/ads.txt`.
    pub async fn fetch_domain(&self, domain: &str) -> Result<AdsTxtRecord> {
        let url = Self::well_known_url(domain)?;
        self.fetch(url.as_str()).await
    }

    /// Execute a GET request with retry logic
    async fn execute_with_retry(&self, url: &str) -> Result<Response> {
        let mut attempt = 0;

        loop {
            debug!("GET {} (attempt {})", url, attempt + 1);

            let mut request = self.client.get(url);
            if let Some(ref user_agent) = self.user_agent {
                request = request.header("User-Agent", user_agent);
            }

            match request.send().await {
                Ok(response) => {
                    trace!("Response status: {}", response.status());

                    let status = response.status();
                    let retryable_status =
                        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS;
                    if !retryable_status || attempt >= self.max_retries {
                        return Ok(response);
                    }
                    warn!(
                        "Request returned {} (attempt {}): will retry",
                        status,
                        attempt + 1
                    );
                }
                Err(e) => {
                    let retryable = e.is_connect() || e.is_timeout() || e.is_request();
                    if !retryable || attempt >= self.max_retries {
                        debug!("Request failed (attempt {}): {}, not retrying", attempt + 1, e);
                        return Err(Error::Http(e));
                    }
                    warn!("Request failed (attempt {}): {}, will retry", attempt + 1, e);
                }
            }

            let backoff = self.backoff(attempt);
            debug!("Retry attempt {} after {:?} backoff", attempt + 2, backoff);
            sleep(backoff).await;
            attempt += 1;
        }
    }

    /// Exponential backoff without jitter, capped at [`MAX_BACKOFF_MS`]
    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.min(16);
        let millis = self.initial_backoff_ms.saturating_mul(factor);
        Duration::from_millis(millis.min(MAX_BACKOFF_MS))
    }
}
