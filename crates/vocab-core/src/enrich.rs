use std::sync::Arc;
use std::time::Duration;

use vocab_translator::{LanguageCode, TranslateError, Translator};
use vocab_types::{EnrichedSense, RawSense};

/// Adds translations to extracted senses.
///
/// Only the word itself and each definition are sent for translation;
/// example sentences stay in the source language. Any translation failure
/// falls back to the original text.
pub struct Enricher {
    translator: Arc<dyn Translator>,
    from_lang: LanguageCode,
    to_lang: LanguageCode,
    delay: Duration,
}

impl Enricher {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

    pub fn new(
        translator: Arc<dyn Translator>,
        from_lang: LanguageCode,
        to_lang: LanguageCode,
        delay: Duration,
    ) -> Self {
        Self {
            translator,
            from_lang,
            to_lang,
            delay,
        }
    }

    /// One-element list: the translated word, or `word` itself when the
    /// translation failed or came back unchanged.
    pub async fn quick_translation(&self, word: &str) -> Vec<String> {
        match self.translate(word).await {
            Ok(translated) if translated != word => vec![translated],
            Ok(_) => vec![word.to_string()],
            Err(e) => {
                log_fallback("quick translation", &e);
                vec![word.to_string()]
            }
        }
    }

    /// Translate every definition in order, pausing between attempts to stay
    /// under the translation budget.
    pub async fn enrich_senses(&self, senses: Vec<RawSense>) -> Vec<EnrichedSense> {
        let total = senses.len();
        tracing::info!("Translating {total} definitions");

        let mut enriched = Vec::with_capacity(total);
        for (i, sense) in senses.into_iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let translated = match self.translate(&sense.definition).await {
                Ok(text) => {
                    tracing::debug!("Translated definition {}/{total}", i + 1);
                    text
                }
                Err(e) => {
                    log_fallback("definition translation", &e);
                    sense.definition.clone()
                }
            };

            enriched.push(EnrichedSense::from_raw(sense, translated));
        }

        enriched
    }

    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let translation = self
            .translator
            .translate(text, self.from_lang.clone(), self.to_lang.clone())
            .await?;
        Ok(translation.text)
    }
}

fn log_fallback(what: &str, e: &TranslateError) {
    match e {
        TranslateError::RateLimitExceeded => {
            tracing::warn!("Rate limit exceeded, skipping {what}")
        }
        other => tracing::warn!("{what} failed, keeping original text: {other}"),
    }
}
