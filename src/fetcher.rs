use reqwest::{ Client, StatusCode };
use std::time::Duration;
use url::Url;

use crate::error::SearchError;

/// Performs the single GET behind every search.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a new `Fetcher` with the given transport settings.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Deadline for the whole request, `None` for no deadline.
    /// * `ssl_verify` - Whether to reject invalid TLS certificates.
    /// * `proxy` - Optional proxy URL applied to all schemes.
    pub fn new(
        timeout: Option<Duration>,
        ssl_verify: bool,
        proxy: Option<&str>
    ) -> Result<Self, SearchError> {
        let client_builder = Client::builder().danger_accept_invalid_certs(!ssl_verify);

        let client_builder = if let Some(timeout) = timeout {
            client_builder.timeout(timeout)
        } else {
            client_builder
        };

        let client_builder = if let Some(proxy_url) = proxy {
            client_builder.proxy(reqwest::Proxy::all(proxy_url)?)
        } else {
            client_builder
        };

        let client = client_builder.build()?;

        Ok(Fetcher { client })
    }

    /// Fetches the body at `url`, decoded with the charset of its `Content-Type`.
    ///
    /// Anything but `200 OK` is returned as [`SearchError::Status`] and the body is
    /// left unread.
    pub async fn fetch(&self, url: Url) -> Result<String, SearchError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SearchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
