//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Typoly Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# default_split_ratio = 0.5              # 0.1-0.95, editor share of the content width
# default_right_panel_split_ratio = 0.5  # 0.05-0.95, preview share of the right panel
# default_minimap_width = 100.0          # 50-400 px
# handle_hit_width = 6                   # 1-20 px each side of a resize handle
# group_min_size = 50                    # 10-200 px

[ghost]
# min_percent = 20.0     # 0-100
# max_percent = 80.0     # 0-100, must exceed min_percent

[keybinds]
# toggle_preview = "Ctrl+\\"
# toggle_minimap = "Ctrl+Shift+M"
# toggle_snapshot = "Ctrl+Shift+C"
# split_right = "Ctrl+Alt+\\"
# split_down = "Ctrl+Alt+-"
# close_group = "Ctrl+Alt+W"
# cancel_drag = "Escape"

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
