//! Config file loading.

use std::path::Path;

use super::{
    ConfigError,
    LocalizerConfig,
};

/// Name of the optional config file looked up next to the translations.
pub const CONFIG_FILE_NAME: &str = ".localizer.json";

/// Load configuration from `root`.
///
/// Looks for a `.localizer.json` file directly inside `root`.
///
/// # Returns
/// - `Ok(Some(config))`: the file exists and was parsed
/// - `Ok(None)`: no config file
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read error
/// - JSON parse error
pub fn load_from_dir(root: &Path) -> Result<Option<LocalizerConfig>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let config: LocalizerConfig = serde_json::from_str(&content)?;

    Ok(Some(config))
}
