//! Scrapes DuckDuckGo's HTML results page into typed records.
//!
//! ```no_run
//! use ddgrs::{ DuckDuckGoClient, SearchClient };
//!
//! # async fn run() -> Result<(), ddgrs::SearchError> {
//! let client = DuckDuckGoClient::builder().timeout(10).build()?;
//! for result in client.search_limited("come se fosse antani", 3).await? {
//!     println!("{} - {}", result.title, result.formatted_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A page that matches no entries yields an empty list, not an error. An empty
//! answer and a changed page layout look the same here; the parser logs a
//! warning through `log` in that case.

mod client;
mod config;
mod error;
mod fetcher;
pub mod markup;
mod model;
mod parser;
pub mod selectors;
pub mod text;

pub use client::{ DuckDuckGoClient, DuckDuckGoClientBuilder, SearchClient };
pub use config::{ ClientConfig, DEFAULT_BASE_URL };
pub use error::SearchError;
pub use fetcher::Fetcher;
pub use model::{ Icon, SearchResult };
pub use parser::parse_results;
pub use selectors::{ CompiledSelectors, ResultSelectors };

/// Searches with a default client. `limit <= 0` returns every result.
pub async fn search(term: &str, limit: i64) -> Result<Vec<SearchResult>, SearchError> {
    DuckDuckGoClient::new()?.search_limited(term, limit).await
}

/// Same as [`search`] but keeps only the displayed URL of each result.
pub async fn search_url(term: &str, limit: i64) -> Result<Vec<String>, SearchError> {
    let results = search(term, limit).await?;

    Ok(
        results
            .into_iter()
            .map(|r| r.formatted_url)
            .collect()
    )
}
