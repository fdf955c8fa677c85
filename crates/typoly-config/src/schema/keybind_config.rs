//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Cmd.
/// Multiple modifiers: "Ctrl+Shift+M".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub toggle_preview: String,
    pub toggle_minimap: String,
    pub toggle_snapshot: String,
    pub split_right: String,
    pub split_down: String,
    pub close_group: String,
    pub cancel_drag: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            toggle_preview: "Ctrl+\\".into(),
            toggle_minimap: "Ctrl+Shift+M".into(),
            toggle_snapshot: "Ctrl+Shift+C".into(),
            split_right: "Ctrl+Alt+\\".into(),
            split_down: "Ctrl+Alt+-".into(),
            close_group: "Ctrl+Alt+W".into(),
            cancel_drag: "Escape".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keybind_defaults() {
        let config = KeybindConfig::default();
        assert_eq!(config.toggle_preview, "Ctrl+\\");
        assert_eq!(config.toggle_minimap, "Ctrl+Shift+M");
        assert_eq!(config.toggle_snapshot, "Ctrl+Shift+C");
        assert_eq!(config.cancel_drag, "Escape");
    }

    #[test]
    fn keybind_partial_toml() {
        let toml_str = r#"toggle_preview = "Ctrl+P""#;
        let config: KeybindConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.toggle_preview, "Ctrl+P");
        assert_eq!(config.toggle_snapshot, "Ctrl+Shift+C");
    }
}
