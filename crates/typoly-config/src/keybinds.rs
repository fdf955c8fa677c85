//! Keybind normalisation, validation, and lookup.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use typoly_common::{Action, ConfigError, SplitDirection};

const MODIFIER_ORDER: [&str; 4] = ["ctrl", "alt", "shift", "cmd"];

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("toggle_preview", &config.toggle_preview),
        ("toggle_minimap", &config.toggle_minimap),
        ("toggle_snapshot", &config.toggle_snapshot),
        ("split_right", &config.split_right),
        ("split_down", &config.split_down),
        ("close_group", &config.close_group),
        ("cancel_drag", &config.cancel_drag),
    ]
}

fn action_for(name: &str) -> Action {
    match name {
        "toggle_preview" => Action::TogglePreview,
        "toggle_minimap" => Action::ToggleMinimap,
        "toggle_snapshot" => Action::ToggleSnapshot,
        "split_right" => Action::Split(SplitDirection::Horizontal),
        "split_down" => Action::Split(SplitDirection::Vertical),
        "close_group" => Action::CloseGroup,
        "cancel_drag" => Action::CancelDrag,
        _ => Action::None,
    }
}

/// Canonical lowercase form of a combo: modifiers in a fixed order, then
/// the key. `"Shift+Control+m"` and `"Ctrl+Shift+M"` both become
/// `"ctrl+shift+m"`.
pub fn normalize_combo(combo: &str) -> String {
    let mut modifiers: Vec<&str> = Vec::new();
    let mut key = String::new();

    for part in combo.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        let lower = part.to_lowercase();
        let modifier = match lower.as_str() {
            "ctrl" | "control" => Some("ctrl"),
            "alt" | "option" => Some("alt"),
            "shift" => Some("shift"),
            "cmd" | "meta" | "super" => Some("cmd"),
            _ => None,
        };
        match modifier {
            Some(m) if !modifiers.contains(&m) => modifiers.push(m),
            Some(_) => {}
            None => key = lower,
        }
    }

    modifiers.sort_by_key(|m| MODIFIER_ORDER.iter().position(|o| o == m));
    let mut parts: Vec<String> = modifiers.into_iter().map(String::from).collect();
    if !key.is_empty() {
        parts.push(key);
    }
    parts.join("+")
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let normalized = normalize_combo(binding);
        if normalized.is_empty() {
            continue;
        }
        if let Some(existing_name) = seen.get(&normalized) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(normalized, name);
    }

    Ok(())
}

/// Maps normalised key combos to layout actions.
#[derive(Debug, Clone, Default)]
pub struct KeybindRegistry {
    bindings: HashMap<String, Action>,
}

impl KeybindRegistry {
    pub fn from_config(config: &KeybindConfig) -> Self {
        let bindings = all_keybinds(config)
            .into_iter()
            .filter(|(_, binding)| !binding.trim().is_empty())
            .map(|(name, binding)| (normalize_combo(binding), action_for(name)))
            .collect();
        Self { bindings }
    }

    /// Resolve a combo as reported by the host, in any modifier order.
    pub fn lookup(&self, combo: &str) -> Option<&Action> {
        self.bindings.get(&normalize_combo(combo))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
