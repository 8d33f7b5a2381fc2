use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use url::Url;
use vocab_config::dictionary::DictionaryConfig;
use vocab_types::RawEntry;

use crate::{CambridgeExtractor, DictionaryError, DictionarySource, PageExtractor};

/// Live Cambridge Dictionary lookups over HTTP
#[derive(Clone)]
pub struct CambridgeDictionary {
    client: reqwest::Client,
    base_url: Url,
    path: String,
    timeout: Duration,
    user_agent: String,
    extractor: Arc<dyn PageExtractor>,
}

impl CambridgeDictionary {
    pub fn new(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let extractor = CambridgeExtractor::new(
            &config.base_url,
            config.max_senses,
            config.max_examples,
        )?;

        Self::with_extractor(config, Arc::new(extractor))
    }

    pub fn with_extractor(
        config: &DictionaryConfig,
        extractor: Arc<dyn PageExtractor>,
    ) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| DictionaryError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            path: config.path.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
            extractor,
        })
    }

    /// Page URL of `word`, which is trimmed and percent-encoded as one path segment
    pub fn page_url(&self, word: &str) -> Result<Url, DictionaryError> {
        let mut url = self.base_url.clone();
        url.set_path(&self.path);
        url.path_segments_mut()
            .map_err(|_| DictionaryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word.trim());
        Ok(url)
    }

    async fn fetch_page(&self, word: &str) -> Result<String, DictionaryError> {
        let url = self.page_url(word)?;
        tracing::info!("Fetching dictionary page: {url}");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(DictionaryError::from_request)?;

        if !response.status().is_success() {
            return Err(DictionaryError::Http(response.status()));
        }

        response.text().await.map_err(DictionaryError::from_request)
    }
}

#[async_trait]
impl DictionarySource for CambridgeDictionary {
    fn name(&self) -> &str {
        self.extractor.source_name()
    }

    async fn lookup(&self, word: &str) -> Result<RawEntry, DictionaryError> {
        let html = self.fetch_page(word).await?;
        self.extractor.extract(word, &html)
    }
}
