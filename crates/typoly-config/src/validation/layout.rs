//! Layout configuration validation (default ratios, minimap, handles).

use crate::schema::TypolyConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &TypolyConfig) {
    validate_range_f64(
        errors,
        "layout.default_split_ratio",
        config.layout.default_split_ratio,
        0.1,
        0.95,
    );
    validate_range_f64(
        errors,
        "layout.default_right_panel_split_ratio",
        config.layout.default_right_panel_split_ratio,
        0.05,
        0.95,
    );
    validate_range_f64(
        errors,
        "layout.default_minimap_width",
        config.layout.default_minimap_width,
        50.0,
        400.0,
    );
    validate_range(
        errors,
        "layout.handle_hit_width",
        config.layout.handle_hit_width,
        1,
        20,
    );
    validate_range(
        errors,
        "layout.group_min_size",
        config.layout.group_min_size,
        10,
        200,
    );
}
