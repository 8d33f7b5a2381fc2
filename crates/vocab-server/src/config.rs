use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use vocab_config::Config;

/// Load `path` when given, otherwise start from defaults. Environment
/// variables override either source.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No config file given, using defaults");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let mut config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config {}", path.display()))?;

    config.apply_env();
    Ok(config)
}
