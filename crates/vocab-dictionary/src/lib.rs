mod cambridge;
mod extractor;


pub use cambridge::CambridgeDictionary;
pub use extractor::CambridgeExtractor;

use vocab_types::RawEntry;

/// Turns the markup of one word page into a structured entry.
///
/// Implementations own their parsing library; nothing outside this crate
/// sees the document tree.
pub trait PageExtractor: Send + Sync {
    /// Prefix used for sense ids, e.g. `cambridge` in `cambridge-0`
    fn source_name(&self) -> &str;

    fn extract(&self, word: &str, html: &str) -> Result<RawEntry, DictionaryError>;
}

/// Live dictionary lookup: fetch a word page and extract it
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    fn name(&self) -> &str;

    async fn lookup(&self, word: &str) -> Result<RawEntry, DictionaryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Word \"{word}\" not found in dictionary")]
    NotFound { word: String },

    #[error("Dictionary HTTP error: {0}")]
    Http(reqwest::StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Dictionary request timed out")]
    Timeout,

    #[error("Invalid dictionary URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector {0}")]
    Selector(String),
}

impl DictionaryError {
    /// Terminal "word does not exist" outcome, as opposed to an upstream failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::NotFound { .. })
    }

    pub(crate) fn from_request(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DictionaryError::Timeout
        } else {
            DictionaryError::Network(e)
        }
    }
}
