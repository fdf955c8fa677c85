//! Pane rects, resize handles and the geometry handed to the view.

mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LayoutState, ResizeTarget};
    use typoly_common::{PaneRole, Rect};

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 600.0)
    }

    fn state_with(preview: bool, snapshot: bool, minimap: bool) -> LayoutState {
        let mut state = LayoutState::default();
        state.set_visible(PaneRole::Preview, preview);
        state.set_visible(PaneRole::Snapshot, snapshot);
        state.set_visible(PaneRole::Minimap, minimap);
        state
    }

    #[test]
    fn editor_alone_fills_bounds() {
        let engine = LayoutEngine::default();
        let result = engine.compute(&LayoutState::default(), bounds());
        assert_eq!(result, vec![(PaneRole::Editor, bounds())]);
    }

    #[test]
    fn all_panes_left_to_right() {
        let engine = LayoutEngine::default();
        let mut state = state_with(true, true, true);
        state.set_split_ratio(0.6);
        state.set_right_panel_split_ratio(0.75);

        let result = engine.compute(&state, bounds());
        let roles: Vec<PaneRole> = result.iter().map(|(r, _)| *r).collect();
        assert_eq!(
            roles,
            vec![
                PaneRole::Editor,
                PaneRole::Preview,
                PaneRole::Snapshot,
                PaneRole::Minimap
            ]
        );
        // wrapper 900: editor 540, right 360 split 270/90, minimap 100
        assert!((result[0].1.width - 540.0).abs() < 0.01);
        assert!((result[1].1.x - 540.0).abs() < 0.01);
        assert!((result[1].1.width - 270.0).abs() < 0.01);
        assert!((result[2].1.width - 90.0).abs() < 0.01);
        assert!((result[3].1.x - 900.0).abs() < 0.01);
        assert!((result[3].1.right() - 1000.0).abs() < 0.01);
    }

    #[test]
    fn narrow_container_caps_minimap_in_rects_and_geometry() {
        let engine = LayoutEngine::default();
        let mut state = state_with(false, false, true);
        state.set_minimap_width(400.0, None);
        let narrow = Rect::new(0.0, 0.0, 390.0, 600.0);

        let result = engine.compute(&state, narrow);
        assert!((result[0].1.width - 195.0).abs() < 0.01);
        assert!((result[1].1.x - 195.0).abs() < 0.01);
        assert!((result[1].1.width - 195.0).abs() < 0.01);

        let geometry = PaneGeometry::measured(&state, 390.0);
        assert!((geometry.minimap_width_px - 195.0).abs() < 0.01);
        assert!((PaneGeometry::from(&state).minimap_width_px - 400.0).abs() < 0.01);

        let handles = engine.compute_handles(&state, narrow);
        assert_eq!(handles.len(), 1);
        assert!((handles[0].position - 195.0).abs() < 0.01);
    }

    #[test]
    fn rects_offset_by_bounds_origin() {
        let engine = LayoutEngine::default();
        let state = state_with(true, false, false);
        let result = engine.compute(&state, Rect::new(50.0, 20.0, 800.0, 400.0));
        assert!((result[0].1.x - 50.0).abs() < 0.01);
        assert!((result[1].1.x - 450.0).abs() < 0.01);
        assert!((result[1].1.y - 20.0).abs() < 0.01);
    }

    #[test]
    fn geometry_percentages() {
        let mut state = state_with(true, true, false);
        state.set_split_ratio(0.6);
        state.set_right_panel_split_ratio(0.7);
        let geometry = PaneGeometry::from(&state);
        assert!((geometry.editor_width_percent - 60.0).abs() < 1e-9);
        assert!((geometry.right_panel_width_percent - 40.0).abs() < 1e-9);
        assert!((geometry.preview_width_percent_of_right_panel - 70.0).abs() < 1e-9);
        assert!(geometry.show_preview && geometry.show_snapshot && !geometry.show_minimap);
    }

    #[test]
    fn geometry_without_right_panel() {
        let geometry = PaneGeometry::from(&LayoutState::default());
        assert!((geometry.editor_width_percent - 100.0).abs() < f64::EPSILON);
        assert!(geometry.right_panel_width_percent.abs() < f64::EPSILON);
        assert!(geometry.preview_width_percent_of_right_panel.abs() < f64::EPSILON);
    }

    #[test]
    fn geometry_single_right_pane() {
        let preview = PaneGeometry::from(&state_with(true, false, false));
        assert!((preview.preview_width_percent_of_right_panel - 100.0).abs() < f64::EPSILON);
        let snapshot = PaneGeometry::from(&state_with(false, true, false));
        assert!(snapshot.preview_width_percent_of_right_panel.abs() < f64::EPSILON);
    }

    #[test]
    fn geometry_serializes_to_json() {
        let json = serde_json::to_string(&PaneGeometry::from(&LayoutState::default())).unwrap();
        assert!(json.contains("\"editor_width_percent\":100.0"));
        assert!(json.contains("\"minimap_width_px\":100.0"));
    }

    #[test]
    fn handles_follow_visible_boundaries() {
        let engine = LayoutEngine::default();
        assert!(engine
            .compute_handles(&LayoutState::default(), bounds())
            .is_empty());

        let handles = engine.compute_handles(&state_with(true, true, true), bounds());
        let targets: Vec<ResizeTarget> = handles.iter().map(|h| h.target).collect();
        assert_eq!(
            targets,
            vec![
                ResizeTarget::EditorSplit,
                ResizeTarget::RightPanelSplit,
                ResizeTarget::Minimap
            ]
        );
        assert!((handles[0].position - 450.0).abs() < 0.01);
        assert!((handles[1].position - 675.0).abs() < 0.01);
        assert!((handles[2].position - 900.0).abs() < 0.01);
    }

    #[test]
    fn hit_test_respects_half_width_and_span() {
        let handle = ResizeHandle {
            target: ResizeTarget::EditorSplit,
            position: 400.0,
            start: 0.0,
            end: 600.0,
        };
        assert!(handle.hit_test(405.0, 300.0, 6.0));
        assert!(!handle.hit_test(410.0, 300.0, 6.0));
        assert!(!handle.hit_test(400.0, 700.0, 6.0));
    }

    #[test]
    fn hovered_handle_prefers_minimap() {
        let engine = LayoutEngine::new(30.0);
        // Snapshot is 22.5 px wide, so both of its edges are in reach.
        let mut state = state_with(true, true, true);
        state.set_split_ratio(0.5);
        state.set_right_panel_split_ratio(0.95);
        let hovered = engine.find_hovered_handle(&state, bounds(), 890.0, 10.0);
        assert_eq!(hovered.map(|h| h.target), Some(ResizeTarget::Minimap));

        assert!(engine
            .find_hovered_handle(&state, bounds(), 200.0, 10.0)
            .is_none());
    }
}
