use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde_json::Value;

use crate::{LanguageCode, ProviderMetadata, RateLimiter, TranslateError, Translation, Translator};

/// Rate limiter channel shared by every call to the translate endpoint
pub const TRANSLATE_CHANNEL: &str = "google-translate";

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Client for the public `translate_a/single` endpoint.
///
/// Every call is checked against the shared [`RateLimiter`] before it is
/// sent and recorded once the endpoint answers with a success status. The
/// client never retries; callers fall back to the untranslated text.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
    limiter: Arc<RateLimiter>,
}

impl GoogleTranslator {
    pub fn new(api_url: String, timeout: Duration, limiter: Arc<RateLimiter>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            timeout,
            limiter,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if !self.limiter.can_make_call(TRANSLATE_CHANNEL) {
            return Err(TranslateError::RateLimitExceeded);
        }

        let params = [
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(TranslateError::from_request)?;

        if response.status() == 429 {
            tracing::warn!("Translate endpoint throttled the request");
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        self.limiter.record_call(TRANSLATE_CHANNEL);

        let json: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                TranslateError::Timeout
            } else {
                TranslateError::ApiError(format!("Failed to parse response: {}", e))
            }
        })?;

        let translated_text = parse_translation(&json)
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Pull the translated text out of the nested-array response.
///
/// The first element lists one `[translated, original, ...]` array per
/// sentence; sentences are joined back together.
fn parse_translation(json: &Value) -> Option<String> {
    let segments = json.get(0)?.as_array()?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() { None } else { Some(text) }
}
