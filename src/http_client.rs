//! HTTP client for URL sources.
//!
//! One GET per page: no retries, no pagination. Compression and TLS are
//! negotiated by reqwest.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{Result, ScrapeError};

/// Default `User-Agent` sent with page requests.
pub const DEFAULT_USER_AGENT: &str = concat!("tablescrape/", env!("CARGO_PKG_VERSION"));

/// Fetches page markup.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Client with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Client using the timeout, redirect limit and user agent of `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .use_rustls_tls()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL and return its body as text.
    ///
    /// A non-success status is an error; the body is not inspected.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("Fetching page");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        info!(
            status = %status,
            version = ?response.version(),
            content_encoding = ?response.headers().get("content-encoding"),
            "Response received"
        );

        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
