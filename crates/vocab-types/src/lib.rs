pub mod types;

pub use types::{
    EnrichedSense, Example, LookupSource, Pronunciation, PronunciationEntry, RawEntry, RawSense,
    WordRecord,
};
