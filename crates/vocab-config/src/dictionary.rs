use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://dictionary.cambridge.org".to_string()
}

fn default_path() -> String {
    "/dictionary/english".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_max_senses() -> usize {
    10
}

fn default_max_examples() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Scheme and host, also used to absolutize relative audio URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path prefix of word pages
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_max_senses")]
    pub max_senses: usize,
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_senses: default_max_senses(),
            max_examples: default_max_examples(),
        }
    }
}
