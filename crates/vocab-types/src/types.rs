use std::fmt;

use serde::{Deserialize, Serialize};

/// IPA transcription and audio clip for a single dialect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationEntry {
    pub ipa: String,
    /// Absolute URL, empty when the page carries no audio
    pub audio_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub uk: PronunciationEntry,
    pub us: PronunciationEntry,
}

/// One sense as it appears on the dictionary page, before translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSense {
    pub id: String,
    pub grammar: String,
    pub definition: String,
    /// Source-language example sentences
    pub examples: Vec<String>,
}

/// Everything extracted from a dictionary page for one word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub pronunciation: Pronunciation,
    pub part_of_speech: String,
    pub level: Option<String>,
    pub senses: Vec<RawSense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub original: String,
    #[serde(alias = "vietnamese")]
    pub translated: String,
}

impl Example {
    /// Example sentences are carried through in the source language
    pub fn untranslated(text: String) -> Self {
        Self {
            translated: text.clone(),
            original: text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSense {
    pub id: String,
    pub grammar: String,
    pub definition: String,
    pub vietnamese_definition: String,
    pub examples: Vec<Example>,
}

impl EnrichedSense {
    /// Build an enriched sense whose definition translation is `translated`.
    pub fn from_raw(raw: RawSense, translated: String) -> Self {
        Self {
            id: raw.id,
            grammar: raw.grammar,
            definition: raw.definition,
            vietnamese_definition: translated,
            examples: raw.examples.into_iter().map(Example::untranslated).collect(),
        }
    }
}

/// Final vocabulary record returned to callers and persisted by key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    /// Word as the caller typed it
    pub word: String,
    pub pronunciation: Pronunciation,
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub quick_translation: Vec<String>,
    pub meanings: Vec<EnrichedSense>,
}

/// Cascade tier that produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupSource {
    Database,
    Cache,
    Crawled,
}

impl LookupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupSource::Database => "database",
            LookupSource::Cache => "cache",
            LookupSource::Crawled => "crawled",
        }
    }
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
