//! Locating, creating and reading the layout config file.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use typoly_common::ConfigError;

use super::template::default_config_toml;
use crate::schema::TypolyConfig;
use crate::validation;

/// Directory under the platform config dir that holds Typoly's files.
const APP_DIR: &str = "typoly";
const CONFIG_FILE: &str = "config.toml";

/// `~/.config/typoly/config.toml` on Linux,
/// `~/Library/Application Support/typoly/config.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;
    info!(path = %path.display(), "wrote default layout config");
    Ok(())
}

/// Read and parse `path`. A file that parses but fails validation is
/// reported and replaced by the defaults.
pub fn load_from_path(path: &Path) -> Result<TypolyConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
    let config: TypolyConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; using default layout config");
        return Ok(TypolyConfig::default());
    }
    info!(path = %path.display(), "loaded layout config");
    Ok(config)
}

/// Load from [`default_config_path`], writing the template on first run.
pub fn load_default() -> Result<TypolyConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(TypolyConfig::default())
        }
        other => other,
    }
}
