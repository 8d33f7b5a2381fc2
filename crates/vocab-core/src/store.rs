use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;
use vocab_types::WordRecord;

use crate::LookupKey;

/// Persisted document for one word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWord {
    /// Normalized lookup key
    pub word: String,
    pub original_word: String,
    pub data: WordRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredWord {
    pub fn new(key: &LookupKey, original_word: &str, data: WordRecord) -> Self {
        let now = Utc::now();
        Self {
            word: key.as_str().to_string(),
            original_word: original_word.to_string(),
            data,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed document store holding finished records
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn find(&self, key: &LookupKey) -> Result<Option<StoredWord>, StoreError>;

    /// Insert or overwrite. An existing document keeps its `created_at`.
    async fn save(&self, doc: StoredWord) -> Result<(), StoreError>;

    /// Returns whether a document was removed
    async fn delete(&self, key: &LookupKey) -> Result<bool, StoreError>;
}

#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<String, StoredWord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn find(&self, key: &LookupKey) -> Result<Option<StoredWord>, StoreError> {
        Ok(self.docs.read().await.get(key.as_str()).cloned())
    }

    async fn save(&self, mut doc: StoredWord) -> Result<(), StoreError> {
        let mut docs = self.docs.write().await;
        if let Some(existing) = docs.get(&doc.word) {
            doc.created_at = existing.created_at;
        }
        docs.insert(doc.word.clone(), doc);
        Ok(())
    }

    async fn delete(&self, key: &LookupKey) -> Result<bool, StoreError> {
        Ok(self.docs.write().await.remove(key.as_str()).is_some())
    }
}

/// One pretty-printed JSON document per key under a data directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create the directory if it does not exist yet
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        tracing::info!("Word store at {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }

    async fn read(&self, path: &Path) -> Result<Option<StoredWord>, StoreError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl WordStore for JsonFileStore {
    async fn find(&self, key: &LookupKey) -> Result<Option<StoredWord>, StoreError> {
        self.read(&self.path_for(key.as_str())).await
    }

    async fn save(&self, mut doc: StoredWord) -> Result<(), StoreError> {
        let path = self.path_for(&doc.word);
        match self.read(&path).await {
            Ok(Some(existing)) => doc.created_at = existing.created_at,
            Ok(None) => {}
            Err(StoreError::Serialization(e)) => {
                tracing::warn!("Replacing unreadable document {}: {e}", path.display());
            }
            Err(e) => return Err(e),
        }

        let bytes = serde_json::to_vec_pretty(&doc)?;
        let dir = self.dir.clone();

        // each write gets its own temp file in the store dir, renamed over the target
        tokio::task::spawn_blocking(move || -> io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(io::Error::other)??;

        Ok(())
    }

    async fn delete(&self, key: &LookupKey) -> Result<bool, StoreError> {
        match tokio::fs::remove_file(self.path_for(key.as_str())).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Filesystem-safe file name: ASCII alphanumerics, `-` and `_` pass through,
/// every other byte becomes `%XX`.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use vocab_types::Pronunciation;

    use super::*;

    fn record(word: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            pronunciation: Pronunciation::default(),
            part_of_speech: "verb".to_string(),
            level: Some("A1".to_string()),
            quick_translation: vec!["chạy".to_string()],
            meanings: vec![],
        }
    }

    fn doc(word: &str) -> StoredWord {
        StoredWord::new(&LookupKey::new(word).unwrap(), word, record(word))
    }

    #[test]
    fn file_stem_escapes_unsafe_bytes() {
        assert_eq!(file_stem("run"), "run");
        assert_eq!(file_stem("look up"), "look%20up");
        assert_eq!(file_stem("../etc"), "%2E%2E%2Fetc");
        assert_eq!(file_stem("café"), "caf%C3%A9");
    }

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryStore::new();
        let key = LookupKey::new("Run").unwrap();

        assert!(store.find(&key).await.unwrap().is_none());
        store.save(doc("Run")).await.unwrap();

        let found = store.find(&key).await.unwrap().unwrap();
        assert_eq!(found.word, "run");
        assert_eq!(found.original_word, "Run");
        assert_eq!(found.data, record("Run"));

        assert!(store.delete(&key).await.unwrap());
        assert!(!store.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let key = LookupKey::new("run").unwrap();

        {
            let store = JsonFileStore::open(dir.path()).await.unwrap();
            store.save(doc("run")).await.unwrap();
        }

        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let found = store.find(&key).await.unwrap().unwrap();
        assert_eq!(found.data, record("run"));

        let raw = std::fs::read_to_string(dir.path().join("run.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["originalWord"], "run");
        assert!(json["createdAt"].is_string());
        assert_eq!(json["data"]["partOfSpeech"], "verb");
    }

    #[tokio::test]
    async fn overwrite_keeps_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let key = LookupKey::new("run").unwrap();

        let first = doc("run");
        let created_at = first.created_at;
        store.save(first).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let mut second = doc("RUN");
        second.data.quick_translation = vec!["chạy bộ".to_string()];
        store.save(second).await.unwrap();

        let found = store.find(&key).await.unwrap().unwrap();
        assert_eq!(found.created_at, created_at);
        assert!(found.updated_at > created_at);
        assert_eq!(found.original_word, "RUN");
        assert_eq!(found.data.quick_translation, ["chạy bộ"]);
    }

    #[tokio::test]
    async fn save_replaces_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("run.json"), "{not json").unwrap();

        store.save(doc("run")).await.unwrap();

        let found = store.find(&LookupKey::new("run").unwrap()).await.unwrap().unwrap();
        assert_eq!(found.data, record("run"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_for_one_key_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileStore::open(dir.path()).await.unwrap());
        let key = LookupKey::new("run").unwrap();

        for round in 0..10 {
            let saves: Vec<_> = (0..16)
                .map(|i| {
                    let store = store.clone();
                    let doc = StoredWord::new(&key, &format!("Run{i}"), record("run"));
                    tokio::spawn(async move { store.save(doc).await })
                })
                .collect();

            for save in saves {
                save.await.unwrap().unwrap_or_else(|e| panic!("round {round}: {e}"));
            }
        }

        let found = store.find(&key).await.unwrap().unwrap();
        assert!(found.original_word.starts_with("Run"));

        // only the document itself is left behind
        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[tokio::test]
    async fn corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("run.json"), "{not json").unwrap();

        let result = store.find(&LookupKey::new("run").unwrap()).await;

        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
