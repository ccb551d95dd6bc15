use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::fetcher::Fetcher;
use crate::model::SearchResult;
use crate::parser::parse_results;
use crate::selectors::{ CompiledSelectors, ResultSelectors };

/// A search provider that can be queried for result records.
#[async_trait]
pub trait SearchClient: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns every result on the first page.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.search_limited(query, 0).await
    }

    /// Returns the first `limit` results, or all of them when `limit <= 0`.
    async fn search_limited(
        &self,
        query: &str,
        limit: i64
    ) -> Result<Vec<SearchResult>, SearchError>;
}

/// Scrapes DuckDuckGo's HTML-only results page.
///
/// The client holds configuration only; calls share nothing but the connection
/// pool, so a single instance can serve concurrent searches.
#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    base_url: Url,
    fetcher: Fetcher,
    selectors: CompiledSelectors,
}

impl DuckDuckGoClient {
    /// Client with the default endpoint, selectors and no timeout.
    pub fn new() -> Result<Self, SearchError> {
        DuckDuckGoClientBuilder::new().build()
    }

    pub fn builder() -> DuckDuckGoClientBuilder {
        DuckDuckGoClientBuilder::new()
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, SearchError> {
        DuckDuckGoClientBuilder::from(config).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL requested for `query`: the base endpoint with a single `q` parameter.
    pub fn query_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

#[async_trait]
impl SearchClient for DuckDuckGoClient {
    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    async fn search_limited(
        &self,
        query: &str,
        limit: i64
    ) -> Result<Vec<SearchResult>, SearchError> {
        log::info!("Searching {} for {:?} (limit {})", self.name(), query, limit);
        let body = self.fetcher.fetch(self.query_url(query)).await?;
        Ok(parse_results(&body, &self.selectors, limit))
    }
}

/// Builder for [`DuckDuckGoClient`].
#[derive(Debug, Clone, Default)]
pub struct DuckDuckGoClientBuilder {
    config: ClientConfig,
}

impl DuckDuckGoClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Request deadline in seconds.
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.config.timeout_secs = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    pub fn ssl_verify(mut self, ssl_verify: bool) -> Self {
        self.config.ssl_verify = ssl_verify;
        self
    }

    pub fn selectors(mut self, selectors: ResultSelectors) -> Self {
        self.config.selectors = selectors;
        self
    }

    /// Validates the configuration and builds the client.
    pub fn build(self) -> Result<DuckDuckGoClient, SearchError> {
        let ClientConfig { base_url, timeout_secs, proxy, ssl_verify, selectors } = self.config;

        let base_url = Url::parse(&base_url)?;
        let selectors = selectors.compile()?;
        let fetcher = Fetcher::new(
            timeout_secs.map(Duration::from_secs),
            ssl_verify,
            proxy.as_deref()
        )?;

        Ok(DuckDuckGoClient {
            base_url,
            fetcher,
            selectors,
        })
    }
}

impl From<ClientConfig> for DuckDuckGoClientBuilder {
    fn from(config: ClientConfig) -> Self {
        DuckDuckGoClientBuilder { config }
    }
}
