use std::sync::Arc;

use vocab_config::cache::LookupOrder;
use vocab_dictionary::DictionarySource;
use vocab_types::{LookupSource, WordRecord};

use crate::{Enricher, LocalCache, LookupError, LookupKey, StoredWord, WordStore};

#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub record: WordRecord,
    pub source: LookupSource,
}

/// Three-tier word lookup: persistent store, local cache, then a live
/// fetch whose result is written back to both.
///
/// Concurrent misses for the same word are not coalesced; each performs its
/// own fetch and the last write wins.
pub struct LookupService {
    store: Arc<dyn WordStore>,
    cache: Arc<LocalCache>,
    dictionary: Arc<dyn DictionarySource>,
    enricher: Enricher,
    order: LookupOrder,
}

impl LookupService {
    pub fn new(
        store: Arc<dyn WordStore>,
        cache: Arc<LocalCache>,
        dictionary: Arc<dyn DictionarySource>,
        enricher: Enricher,
    ) -> Self {
        Self {
            store,
            cache,
            dictionary,
            enricher,
            order: LookupOrder::default(),
        }
    }

    pub fn with_order(mut self, order: LookupOrder) -> Self {
        self.order = order;
        self
    }

    pub fn cache(&self) -> &Arc<LocalCache> {
        &self.cache
    }

    pub async fn lookup(&self, word: &str) -> Result<LookupOutcome, LookupError> {
        let key = LookupKey::new(word).ok_or(LookupError::InvalidWord)?;
        let word = word.trim();

        let cached = match self.order {
            LookupOrder::StoreFirst => match self.from_store(&key).await {
                Some(outcome) => return Ok(outcome),
                None => self.from_cache(&key),
            },
            LookupOrder::CacheFirst => match self.from_cache(&key) {
                Some(outcome) => return Ok(outcome),
                None => self.from_store(&key).await,
            },
        };

        if let Some(outcome) = cached {
            return Ok(outcome);
        }

        let record = self.crawl(word).await?;
        self.persist_and_cache(key, word, &record).await;

        Ok(LookupOutcome {
            record,
            source: LookupSource::Crawled,
        })
    }

    /// A failing store is treated as a miss so the lookup can still succeed
    async fn from_store(&self, key: &LookupKey) -> Option<LookupOutcome> {
        match self.store.find(key).await {
            Ok(Some(doc)) => {
                tracing::info!("Word found in database: {key}");
                Some(LookupOutcome {
                    record: doc.data,
                    source: LookupSource::Database,
                })
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Word store read failed for {key}: {e}");
                None
            }
        }
    }

    fn from_cache(&self, key: &LookupKey) -> Option<LookupOutcome> {
        self.cache.get(key).map(|record| {
            tracing::info!("Returning cached result for: {key}");
            LookupOutcome {
                record,
                source: LookupSource::Cache,
            }
        })
    }

    async fn crawl(&self, word: &str) -> Result<WordRecord, LookupError> {
        tracing::info!("Crawling new word from {}: {word}", self.dictionary.name());

        let entry = self.dictionary.lookup(word).await.map_err(|e| {
            if e.is_not_found() {
                tracing::info!("{e}");
            } else {
                tracing::error!("Dictionary lookup failed for {word}: {e}");
            }
            LookupError::from(e)
        })?;

        let quick_translation = self.enricher.quick_translation(word).await;
        let meanings = self.enricher.enrich_senses(entry.senses).await;

        Ok(WordRecord {
            word: word.to_string(),
            pronunciation: entry.pronunciation,
            part_of_speech: entry.part_of_speech,
            level: entry.level,
            quick_translation,
            meanings,
        })
    }

    async fn persist_and_cache(&self, key: LookupKey, word: &str, record: &WordRecord) {
        let doc = StoredWord::new(&key, word, record.clone());
        if let Err(e) = self.store.save(doc).await {
            tracing::warn!("Failed to persist {key}, serving from cache only: {e}");
        }

        self.cache.insert(key, record.clone());
    }
}
