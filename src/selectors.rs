//! # Selectors Module
//!
//! The structural contract with the provider's results page. Selector strings are
//! plain data so a layout change means new configuration, not new code.

use scraper::Selector;
use serde::{ Deserialize, Serialize };

use crate::error::SearchError;

/// Every web result inside the results container.
pub const ENTRY_SELECTOR: &str = ".results .web-result";
/// Displayed URL under the title.
pub const URL_SELECTOR: &str = ".result__url";
/// Title link.
pub const TITLE_SELECTOR: &str = ".result__a";
pub const SNIPPET_SELECTOR: &str = ".result__snippet";
/// Favicon `<img>` carrying `src`, `width` and `height`.
pub const ICON_SELECTOR: &str = ".result__icon__img";

/// CSS selectors used to locate candidates and their sub-fields.
///
/// `entry` is matched against the whole document. The others are matched inside
/// each entry and only the first hit is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultSelectors {
    pub entry: String,
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub icon: String,
}

impl Default for ResultSelectors {
    fn default() -> Self {
        ResultSelectors {
            entry: ENTRY_SELECTOR.to_string(),
            url: URL_SELECTOR.to_string(),
            title: TITLE_SELECTOR.to_string(),
            snippet: SNIPPET_SELECTOR.to_string(),
            icon: ICON_SELECTOR.to_string(),
        }
    }
}

impl ResultSelectors {
    /// Parses every selector, failing on the first one that is not valid CSS.
    pub fn compile(&self) -> Result<CompiledSelectors, SearchError> {
        Ok(CompiledSelectors {
            entry: parse(&self.entry)?,
            url: parse(&self.url)?,
            title: parse(&self.title)?,
            snippet: parse(&self.snippet)?,
            icon: parse(&self.icon)?,
        })
    }
}

/// Parsed form of [`ResultSelectors`], built once per client.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub(crate) entry: Selector,
    pub(crate) url: Selector,
    pub(crate) title: Selector,
    pub(crate) snippet: Selector,
    pub(crate) icon: Selector,
}

impl CompiledSelectors {
    pub fn duckduckgo() -> Result<Self, SearchError> {
        ResultSelectors::default().compile()
    }
}

fn parse(selector: &str) -> Result<Selector, SearchError> {
    Selector::parse(selector).map_err(|e| SearchError::Selector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}
