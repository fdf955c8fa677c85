//! Editor-group layout defaults.

use serde::{Deserialize, Serialize};

/// Initial pane geometry for new editor groups and group-resize limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Editor share of the content width (valid range: 0.1-0.95).
    pub default_split_ratio: f64,
    /// Preview share of the right panel (valid range: 0.05-0.95).
    pub default_right_panel_split_ratio: f64,
    /// Minimap column width in pixels (valid range: 50-400).
    pub default_minimap_width: f64,
    /// Half-width of a resize handle's hit zone in pixels (valid range: 1-20).
    pub handle_hit_width: u32,
    /// Smallest size a group may be dragged to in pixels (valid range: 10-200).
    pub group_min_size: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_split_ratio: 0.5,
            default_right_panel_split_ratio: 0.5,
            default_minimap_width: 100.0,
            handle_hit_width: 6,
            group_min_size: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert!((config.default_split_ratio - 0.5).abs() < f64::EPSILON);
        assert!((config.default_right_panel_split_ratio - 0.5).abs() < f64::EPSILON);
        assert!((config.default_minimap_width - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.handle_hit_width, 6);
        assert_eq!(config.group_min_size, 50);
    }

    #[test]
    fn layout_config_partial_toml() {
        let toml_str = r#"
default_minimap_width = 160.0
handle_hit_width = 4
"#;
        let config: LayoutConfig = toml::from_str(toml_str).unwrap();
        assert!((config.default_minimap_width - 160.0).abs() < f64::EPSILON);
        assert_eq!(config.handle_hit_width, 4);
        // Defaults preserved
        assert!((config.default_split_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.group_min_size, 50);
    }
}
