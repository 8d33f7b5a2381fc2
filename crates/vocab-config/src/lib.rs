use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::cache::{CacheConfig, LookupOrder};
use self::dictionary::DictionaryConfig;
use self::server::ServerConfig;
use self::store::StoreConfig;
use self::translator::TranslatorConfig;

pub mod cache;
pub mod dictionary;
pub mod server;
pub mod store;
pub mod translator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub cache: CacheConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from environment variables, keeping current values for unset or
    /// unparsable ones.
    pub fn apply_env(&mut self) {
        override_from("VOCAB_HOST", &mut self.server.host);
        override_from("VOCAB_PORT", &mut self.server.port);

        override_from("DICTIONARY_BASE_URL", &mut self.dictionary.base_url);
        override_from("DICTIONARY_TIMEOUT_SECS", &mut self.dictionary.timeout_secs);

        override_from("TRANSLATE_API_URL", &mut self.translator.api_url);
        override_from("TRANSLATE_FROM_LANG", &mut self.translator.from_lang);
        override_from("TRANSLATE_TO_LANG", &mut self.translator.to_lang);
        override_from("TRANSLATE_TIMEOUT_SECS", &mut self.translator.timeout_secs);
        override_from(
            "TRANSLATE_MAX_CALLS_PER_MINUTE",
            &mut self.translator.max_calls_per_minute,
        );
        override_from("TRANSLATE_DELAY_MS", &mut self.translator.delay_ms);

        override_from("CACHE_TTL_SECS", &mut self.cache.ttl_secs);
        override_from("CACHE_SWEEP_INTERVAL_SECS", &mut self.cache.sweep_interval_secs);
        if let Ok(order) = env::var("LOOKUP_ORDER") {
            match order.as_str() {
                "store_first" => self.cache.lookup_order = LookupOrder::StoreFirst,
                "cache_first" => self.cache.lookup_order = LookupOrder::CacheFirst,
                _ => {}
            }
        }

        if let Ok(dir) = env::var("VOCAB_DATA_DIR") {
            self.store.data_dir = Some(dir.into());
        }
    }
}

fn override_from<T: FromStr>(key: &str, slot: &mut T) {
    if let Some(value) = env::var(key).ok().and_then(|v| v.parse().ok()) {
        *slot = value;
    }
}
