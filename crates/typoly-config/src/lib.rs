//! Typoly configuration system.
//!
//! Provides TOML-based configuration for the editor-group layout engine:
//! initial pane geometry, resize limits, keybindings, and logging. All
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use typoly_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use keybinds::KeybindRegistry;
pub use schema::{TypolyConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use typoly_common::ConfigError;

/// Load config from the platform default path, creating it if missing,
/// and validate the result.
pub fn load_config() -> Result<TypolyConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit override path, or the platform default.
pub fn load_config_from(path: Option<&Path>) -> Result<TypolyConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TypolyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&TypolyConfig::default());
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"ghost\""));
        assert!(json.contains("\"keybinds\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&TypolyConfig::default());
        let parsed: TypolyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.keybinds.toggle_preview, "Ctrl+\\");
        assert_eq!(parsed.layout.group_min_size, 50);
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ghost]\nmin_percent = 10.0\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert!((config.ghost.min_percent - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_from_missing_path_errors() {
        let result = load_config_from(Some(Path::new("/tmp/typoly_missing_dir/config.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
