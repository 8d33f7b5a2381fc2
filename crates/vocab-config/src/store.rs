use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory for persisted word documents, in-memory store when unset
    pub data_dir: Option<PathBuf>,
}
