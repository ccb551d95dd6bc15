use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be sent or the response could not be read
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something other than 200
    #[error("return status code {0}")]
    Status(u16),

    #[error("Invalid selector `{selector}`: {reason}")]
    Selector {
        selector: String,
        reason: String,
    },

    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl SearchError {
    /// Status code carried by a [`SearchError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Status(code) => Some(*code),
            _ => None,
        }
    }

    /// Whether the configured transport timeout expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Transport(err) if err.is_timeout())
    }
}
