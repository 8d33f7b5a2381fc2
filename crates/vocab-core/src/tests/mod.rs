
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use vocab_dictionary::{DictionaryError, DictionarySource};
use vocab_translator::{
    LanguageCode, ProviderMetadata, RateLimiter, TRANSLATE_CHANNEL, TranslateError, Translation,
    Translator,
};
use vocab_types::{Pronunciation, PronunciationEntry, RawEntry, RawSense};

use crate::{Enricher, LookupKey, StoreError, StoredWord, WordStore};

/// Prefixes the input with `vi:`, failing for listed texts
#[derive(Default)]
pub struct EchoTranslator {
    pub calls: AtomicUsize,
    pub failing: Vec<String>,
}

impl EchoTranslator {
    pub fn failing(texts: &[&str]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing: texts.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.iter().any(|t| t == text) {
            return Err(TranslateError::Timeout);
        }

        Ok(Translation {
            text: format!("vi:{text}"),
            from,
            to,
            provider: "echo".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Echo translator gated by a real limiter the way the HTTP client is
pub struct LimitedTranslator {
    pub limiter: RateLimiter,
}

#[async_trait]
impl Translator for LimitedTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if !self.limiter.can_make_call(TRANSLATE_CHANNEL) {
            return Err(TranslateError::RateLimitExceeded);
        }
        self.limiter.record_call(TRANSLATE_CHANNEL);

        Ok(Translation {
            text: format!("vi:{text}"),
            from,
            to,
            provider: "limited".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "limited".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

pub enum Reply {
    Entry(RawEntry),
    NotFound,
    Unavailable,
}

pub struct FakeDictionary {
    reply: Reply,
    pub calls: AtomicUsize,
}

impl FakeDictionary {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DictionarySource for FakeDictionary {
    fn name(&self) -> &str {
        "fake"
    }

    async fn lookup(&self, word: &str) -> Result<RawEntry, DictionaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Entry(entry) => Ok(entry.clone()),
            Reply::NotFound => Err(DictionaryError::NotFound {
                word: word.to_string(),
            }),
            Reply::Unavailable => Err(DictionaryError::Timeout),
        }
    }
}

/// Store whose every operation fails
pub struct BrokenStore;

#[async_trait]
impl WordStore for BrokenStore {
    async fn find(&self, _key: &LookupKey) -> Result<Option<StoredWord>, StoreError> {
        Err(std::io::Error::other("store offline").into())
    }

    async fn save(&self, _doc: StoredWord) -> Result<(), StoreError> {
        Err(std::io::Error::other("store offline").into())
    }

    async fn delete(&self, _key: &LookupKey) -> Result<bool, StoreError> {
        Err(std::io::Error::other("store offline").into())
    }
}

pub fn sense(index: usize, definition: &str, examples: &[&str]) -> RawSense {
    RawSense {
        id: format!("cambridge-{index}"),
        grammar: "verb".to_string(),
        definition: definition.to_string(),
        examples: examples.iter().map(|e| e.to_string()).collect(),
    }
}

pub fn run_entry() -> RawEntry {
    RawEntry {
        pronunciation: Pronunciation {
            uk: PronunciationEntry {
                ipa: "rʌn".to_string(),
                audio_url: "https://dictionary.cambridge.org/media/uk/run.mp3".to_string(),
            },
            us: PronunciationEntry {
                ipa: "rʌn".to_string(),
                audio_url: String::new(),
            },
        },
        part_of_speech: "verb".to_string(),
        level: Some("A1".to_string()),
        senses: vec![
            sense(
                0,
                "to move along, faster than walking",
                &["I can run very fast.", "She ran for the bus."],
            ),
            sense(1, "to control something", &["He runs a restaurant."]),
        ],
    }
}

pub fn enricher(translator: Arc<dyn Translator>) -> Enricher {
    Enricher::new(translator, "en".to_string(), "vi".to_string(), Duration::ZERO)
}
