//! The authoritative pane-geometry model for one editor group.

mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use typoly_common::PaneRole;

    #[test]
    fn defaults() {
        let state = LayoutState::default();
        assert!(!state.show_preview());
        assert!(!state.show_snapshot());
        assert!(!state.show_minimap());
        assert!((state.split_ratio() - 0.5).abs() < f64::EPSILON);
        assert!((state.right_panel_split_ratio() - 0.5).abs() < f64::EPSILON);
        assert!((state.minimap_width_px() - 100.0).abs() < f64::EPSILON);
        assert_eq!(state.active_resize_target(), ResizeTarget::None);
        assert!(state.locked_widths().is_empty());
    }

    #[test]
    fn editor_always_visible() {
        let mut state = LayoutState::default();
        state.set_visible(PaneRole::Editor, false);
        assert!(state.is_visible(PaneRole::Editor));
    }

    #[test]
    fn split_ratio_clamps_silently() {
        let mut state = LayoutState::default();
        state.set_split_ratio(1.3);
        assert!((state.split_ratio() - 0.95).abs() < f64::EPSILON);
        state.set_split_ratio(-2.0);
        assert!((state.split_ratio() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn right_split_ratio_clamps_silently() {
        let mut state = LayoutState::default();
        state.set_right_panel_split_ratio(0.0);
        assert!((state.right_panel_split_ratio() - 0.05).abs() < f64::EPSILON);
        state.set_right_panel_split_ratio(0.99);
        assert!((state.right_panel_split_ratio() - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_writes_ignored() {
        let mut state = LayoutState::default();
        state.set_split_ratio(f64::NAN);
        state.set_right_panel_split_ratio(f64::INFINITY);
        state.set_minimap_width(f64::NEG_INFINITY, None);
        assert_eq!(state, LayoutState::default());
    }

    #[test]
    fn minimap_width_range_and_container_cap() {
        let mut state = LayoutState::default();
        state.set_minimap_width(10.0, None);
        assert!((state.minimap_width_px() - 50.0).abs() < f64::EPSILON);
        state.set_minimap_width(900.0, None);
        assert!((state.minimap_width_px() - 400.0).abs() < f64::EPSILON);
        state.set_minimap_width(300.0, Some(400.0));
        assert!((state.minimap_width_px() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn with_defaults_clamps_each_value() {
        let state = LayoutState::with_defaults(0.99, 0.01, 1000.0);
        assert!((state.split_ratio() - 0.95).abs() < f64::EPSILON);
        assert!((state.right_panel_split_ratio() - 0.05).abs() < f64::EPSILON);
        assert!((state.minimap_width_px() - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn minimap_width_is_held_to_half_the_container() {
        let mut state = LayoutState::default();
        state.set_minimap_width(400.0, None);
        state.set_visible(PaneRole::Minimap, true);

        assert!((state.minimap_width(1000.0) - 400.0).abs() < f64::EPSILON);
        assert!((state.minimap_width(390.0) - 195.0).abs() < f64::EPSILON);
        assert!((state.wrapper_width(390.0) - 195.0).abs() < f64::EPSILON);
        assert!(state.minimap_width(0.0).abs() < f64::EPSILON);
        // The stored width is untouched until refitted.
        assert!((state.minimap_width_px() - 400.0).abs() < f64::EPSILON);

        assert!(state.fit_minimap_to(390.0));
        assert!((state.minimap_width_px() - 195.0).abs() < f64::EPSILON);
        assert!(!state.fit_minimap_to(1000.0));
        assert!(!state.fit_minimap_to(f64::NAN));
        assert!((state.minimap_width_px() - 195.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrapper_width_subtracts_minimap_only_when_shown() {
        let mut state = LayoutState::default();
        assert!((state.wrapper_width(1000.0) - 1000.0).abs() < f64::EPSILON);
        state.set_visible(PaneRole::Minimap, true);
        assert!((state.wrapper_width(1000.0) - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn derived_pane_widths() {
        let mut state = LayoutState::default();
        state.set_visible(PaneRole::Preview, true);
        state.set_visible(PaneRole::Snapshot, true);
        state.set_split_ratio(0.6);
        state.set_right_panel_split_ratio(0.7);

        assert!((state.editor_width(1000.0) - 600.0).abs() < 1e-9);
        assert!((state.right_panel_width(1000.0) - 400.0).abs() < 1e-9);
        assert!((state.preview_width(1000.0) - 280.0).abs() < 1e-9);
        assert!((state.snapshot_width(1000.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn single_right_pane_takes_whole_panel() {
        let mut state = LayoutState::default();
        state.set_visible(PaneRole::Snapshot, true);
        assert!((state.snapshot_width(1000.0) - 500.0).abs() < 1e-9);
        assert!(state.preview_width(1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_right_panel_gives_editor_full_wrapper() {
        let state = LayoutState::default();
        assert!((state.editor_width(800.0) - 800.0).abs() < f64::EPSILON);
        assert!(state.right_panel_width(800.0).abs() < f64::EPSILON);
    }
}
