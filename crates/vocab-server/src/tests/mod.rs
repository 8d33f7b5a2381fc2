
use std::sync::Arc;

use async_trait::async_trait;
use vocab_config::Config;
use vocab_core::{Enricher, LocalCache, LookupService, MemoryStore};
use vocab_dictionary::{DictionaryError, DictionarySource};
use vocab_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use vocab_types::{Pronunciation, RawEntry, RawSense};

use crate::state::AppState;

struct StubTranslator;

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if text == "run" {
            return Ok(Translation {
                text: "chạy".to_string(),
                from,
                to,
                provider: "stub".to_string(),
            });
        }
        Err(TranslateError::RateLimitExceeded)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Knows only "run"; "offline" simulates an unreachable dictionary
struct StubDictionary;

#[async_trait]
impl DictionarySource for StubDictionary {
    fn name(&self) -> &str {
        "stub"
    }

    async fn lookup(&self, word: &str) -> Result<RawEntry, DictionaryError> {
        match word.to_lowercase().as_str() {
            "run" => Ok(RawEntry {
                pronunciation: Pronunciation::default(),
                part_of_speech: "verb".to_string(),
                level: Some("A1".to_string()),
                senses: vec![RawSense {
                    id: "cambridge-0".to_string(),
                    grammar: "verb".to_string(),
                    definition: "to move fast".to_string(),
                    examples: vec!["I run every day.".to_string()],
                }],
            }),
            "offline" => Err(DictionaryError::Timeout),
            _ => Err(DictionaryError::NotFound {
                word: word.to_string(),
            }),
        }
    }
}

pub fn test_state() -> Arc<AppState> {
    let enricher = Enricher::new(
        Arc::new(StubTranslator),
        "en".to_string(),
        "vi".to_string(),
        std::time::Duration::ZERO,
    );
    let lookup = LookupService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(LocalCache::default()),
        Arc::new(StubDictionary),
        enricher,
    );
    AppState::with_service(Config::default(), lookup)
}
