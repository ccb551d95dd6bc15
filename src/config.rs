use serde::{ Deserialize, Serialize };

use crate::selectors::ResultSelectors;

/// HTML-only results page.
pub const DEFAULT_BASE_URL: &str = "https://duckduckgo.com/html/";

/// Everything a [`DuckDuckGoClient`](crate::DuckDuckGoClient) is built from.
///
/// Missing keys fall back to the defaults, so a config file only needs to name
/// what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Endpoint the `q` parameter is appended to
    pub base_url: String,
    /// Request deadline in seconds
    pub timeout_secs: Option<u64>,
    pub proxy: Option<String>,
    pub ssl_verify: bool,
    pub selectors: ResultSelectors,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            proxy: None,
            ssl_verify: true,
            selectors: ResultSelectors::default(),
        }
    }
}
