pub mod cache;
pub mod enrich;
pub mod error;
pub mod key;
pub mod lookup;
pub mod store;

#[cfg(test)]
mod tests;

pub use cache::LocalCache;
pub use enrich::Enricher;
pub use error::LookupError;
pub use key::LookupKey;
pub use lookup::{LookupOutcome, LookupService};
pub use store::{JsonFileStore, MemoryStore, StoreError, StoredWord, WordStore};
