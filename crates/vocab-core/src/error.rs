use vocab_dictionary::DictionaryError;

/// Failures visible to callers of a lookup.
///
/// Translation problems never show up here; they degrade to untranslated text.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Word parameter is required")]
    InvalidWord,

    #[error("Word \"{word}\" not found in dictionary")]
    NotFound { word: String },

    #[error("Dictionary unavailable: {0}")]
    Upstream(#[source] DictionaryError),
}

impl From<DictionaryError> for LookupError {
    fn from(e: DictionaryError) -> Self {
        match e {
            DictionaryError::NotFound { word } => LookupError::NotFound { word },
            other => LookupError::Upstream(other),
        }
    }
}
