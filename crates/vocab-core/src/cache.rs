use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use tokio::time::Instant;
use vocab_types::WordRecord;

use crate::LookupKey;

struct CacheEntry {
    record: WordRecord,
    expires_at: Instant,
}

/// Process-local record cache with a fixed lifetime per entry.
///
/// Size is not bounded; entries leave only when their lifetime ends. Expired
/// entries are never returned, and [`LocalCache::purge_expired`] reclaims
/// them in bulk.
pub struct LocalCache {
    ttl: Duration,
    entries: RwLock<HashMap<LookupKey, CacheEntry>>,
}

impl LocalCache {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &LookupKey) -> Option<WordRecord> {
        let now = Instant::now();

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => return Some(entry.record.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.get(key).is_some_and(|entry| entry.expires_at <= now) {
            entries.remove(key);
        }
        None
    }

    /// Insert or replace, restarting the entry's lifetime
    pub fn insert(&self, key: LookupKey, record: WordRecord) {
        let entry = CacheEntry {
            record,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, entry);
    }

    pub fn remove(&self, key: &LookupKey) -> Option<WordRecord> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .map(|entry| entry.record)
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Entry count, expired-but-unpurged entries included
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LocalCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}
