//! Configuration schema types for Typoly.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the editor ships with.

mod ghost;
mod keybind_config;
mod layout;
mod system;

pub use ghost::*;
pub use keybind_config::*;
pub use layout::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Typoly's layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TypolyConfig {
    pub layout: LayoutConfig,
    pub ghost: GhostConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_layout_defaults() {
        let config = TypolyConfig::default();
        assert!((config.layout.default_split_ratio - 0.5).abs() < f64::EPSILON);
        assert!((config.layout.default_minimap_width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: TypolyConfig = toml::from_str("").unwrap();
        assert_eq!(config.keybinds.toggle_preview, "Ctrl+\\");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!((config.ghost.min_percent - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let toml_str = r#"
[layout]
default_split_ratio = 0.6

[logging]
level = "DEBUG"
"#;
        let config: TypolyConfig = toml::from_str(toml_str).unwrap();
        assert!((config.layout.default_split_ratio - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, LogLevel::Debug);
        // Untouched sections keep defaults
        assert_eq!(config.layout.group_min_size, 50);
        assert_eq!(config.keybinds.toggle_minimap, "Ctrl+Shift+M");
    }
}
