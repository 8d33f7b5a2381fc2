use std::sync::Arc;
use std::time::Duration;

use vocab_config::Config;
use vocab_core::{Enricher, JsonFileStore, LocalCache, LookupService, MemoryStore, WordStore};
use vocab_dictionary::CambridgeDictionary;
use vocab_translator::{GoogleTranslator, RateLimiter};

pub struct AppState {
    pub config: Config,
    pub lookup: LookupService,
}

impl AppState {
    /// Wire the lookup pipeline from config
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let limiter = Arc::new(RateLimiter::new(config.translator.max_calls_per_minute));
        let translator = GoogleTranslator::new(
            config.translator.api_url.clone(),
            Duration::from_secs(config.translator.timeout_secs),
            limiter,
        );
        let enricher = Enricher::new(
            Arc::new(translator),
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
            Duration::from_millis(config.translator.delay_ms),
        );

        let dictionary = CambridgeDictionary::new(&config.dictionary)?;

        let store: Arc<dyn WordStore> = match &config.store.data_dir {
            Some(dir) => Arc::new(JsonFileStore::open(dir.clone()).await?),
            None => {
                tracing::warn!("No data directory configured, words are kept in memory only");
                Arc::new(MemoryStore::new())
            }
        };

        let cache = Arc::new(LocalCache::new(Duration::from_secs(config.cache.ttl_secs)));

        let lookup = LookupService::new(store, cache, Arc::new(dictionary), enricher)
            .with_order(config.cache.lookup_order);

        Ok(Self::with_service(config, lookup))
    }

    pub fn with_service(config: Config, lookup: LookupService) -> Arc<Self> {
        Arc::new(Self { config, lookup })
    }
}
