use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "vi".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_calls_per_minute() -> usize {
    15
}

fn default_delay_ms() -> u64 {
    300
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Budget of the sliding 60 second window
    #[serde(default = "default_max_calls_per_minute")]
    pub max_calls_per_minute: usize,
    /// Pause between successive definition translations of one word
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            timeout_secs: default_timeout_secs(),
            max_calls_per_minute: default_max_calls_per_minute(),
            delay_ms: default_delay_ms(),
        }
    }
}
