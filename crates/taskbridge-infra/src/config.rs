//! Configuration loader for taskbridge.
//!
//! Reads `config.toml` and deserializes it into [`BridgeConfig`]. Falls
//! back to defaults when the file is missing or malformed -- a bad config
//! file degrades to defaults with a warning rather than refusing to start.

use std::path::Path;

use taskbridge_types::config::BridgeConfig;

/// Load configuration from the given path.
///
/// - If the file does not exist, returns [`BridgeConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> BridgeConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return BridgeConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return BridgeConfig::default();
        }
    };

    match toml::from_str::<BridgeConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            BridgeConfig::default()
        }
    }
}
