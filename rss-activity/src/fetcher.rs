use crate::types::{ActivityError, FetchConfig, Result};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

/// Downloads feed documents over HTTP. One attempt per call; no caching.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let redirect = if config.follow_redirects {
            Policy::limited(config.max_redirects)
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(redirect)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn fetch_feed(&self, url: &Url) -> Result<Vec<u8>> {
        let start_time = Instant::now();
        debug!("Fetching feed: {}", url);

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(ActivityError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let max_bytes = self.config.max_feed_size_mb.saturating_mul(1024 * 1024);
        if let Some(content_length) = response.content_length() {
            if content_length as usize > max_bytes {
                return Err(ActivityError::FeedTooLarge {
                    size_mb: content_length as usize / (1024 * 1024),
                });
            }
        }

        let body = response.bytes()?;
        // Chunked responses carry no Content-Length.
        if body.len() > max_bytes {
            return Err(ActivityError::FeedTooLarge {
                size_mb: body.len() / (1024 * 1024),
            });
        }

        info!(
            "Fetched feed: {} ({} bytes in {}ms)",
            url,
            body.len(),
            start_time.elapsed().as_millis()
        );
        Ok(body.to_vec())
    }
}
