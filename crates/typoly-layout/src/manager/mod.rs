//! WorkspaceLayout coordinates the group tree, per-group view state, and focus.

mod focus;
mod layout_compute;
mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::{DragOptions, RecordingHost, StaticMeasure};
    use crate::layout::LayoutEngine;
    use crate::state::{LayoutState, ResizeTarget};
    use crate::toggle::ToggleOutcome;
    use typoly_common::{Action, LayoutError, PaneRole, Rect, SplitDirection};

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    #[test]
    fn new_workspace_has_one_group() {
        let ws = WorkspaceLayout::new();
        assert_eq!(ws.group_count(), 1);
        assert_eq!(ws.groups(), vec![ws.active_group().clone()]);
        assert!((ws.group_min_size() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn split_active_focuses_new_group() {
        let mut ws = WorkspaceLayout::new();
        let first = ws.active_group().clone();
        let second = ws.split_active(SplitDirection::Horizontal);

        assert_eq!(ws.group_count(), 2);
        assert_eq!(ws.active_group(), &second);
        assert_eq!(ws.groups(), vec![first, second]);
    }

    #[test]
    fn split_copies_view_state_with_panes_closed() {
        let mut ws = WorkspaceLayout::new();
        let first = ws.active_group().clone();
        ws.toggle_pane(PaneRole::Preview, Some(1200.0));
        ws.view_state_mut(&first).unwrap().vim_mode = true;

        let second = ws.split_active(SplitDirection::Vertical);
        let copied = ws.view_state(&second);
        assert!(copied.vim_mode);
        assert!(!copied.layout.show_preview());
        assert!(ws.view_state(&first).layout.show_preview());
    }

    #[test]
    fn split_unknown_group_errors() {
        let mut ws = WorkspaceLayout::new();
        let missing = typoly_common::GroupId::from_string("missing");
        assert_eq!(
            ws.split(&missing, SplitDirection::Horizontal),
            Err(LayoutError::UnknownGroup("missing".into()))
        );
    }

    #[test]
    fn close_moves_focus_and_clears_state() {
        let mut ws = WorkspaceLayout::new();
        let first = ws.active_group().clone();
        let second = ws.split_active(SplitDirection::Horizontal);
        ws.view_state_mut(&second).unwrap().monospace = true;

        ws.close_active().unwrap();
        assert_eq!(ws.group_count(), 1);
        assert_eq!(ws.active_group(), &first);
        assert!(ws.view_state_mut(&second).is_none());
        assert!(!ws.view_state(&second).monospace);
    }

    #[test]
    fn close_last_group_fails() {
        let mut ws = WorkspaceLayout::new();
        assert_eq!(ws.close_active(), Err(LayoutError::LastGroup));
        assert_eq!(ws.group_count(), 1);
    }

    #[test]
    fn close_other_group_keeps_focus() {
        let mut ws = WorkspaceLayout::new();
        let first = ws.active_group().clone();
        let second = ws.split_active(SplitDirection::Horizontal);
        ws.close_group(&first).unwrap();
        assert_eq!(ws.active_group(), &second);
    }

    #[test]
    fn focus_next_and_prev_wrap() {
        let mut ws = WorkspaceLayout::new();
        let first = ws.active_group().clone();
        let second = ws.split_active(SplitDirection::Horizontal);

        assert!(ws.focus_next());
        assert_eq!(ws.active_group(), &first);
        assert!(ws.focus_prev());
        assert_eq!(ws.active_group(), &second);
        assert!(ws.focus(&first));
        assert!(!ws.focus(&typoly_common::GroupId::from_string("nope")));
    }

    #[test]
    fn focus_single_group_fails() {
        let mut ws = WorkspaceLayout::new();
        assert!(!ws.focus_next());
        assert!(!ws.focus_prev());
    }

    #[test]
    fn compute_layout_splits_viewport() {
        let mut ws = WorkspaceLayout::new();
        ws.split_active(SplitDirection::Horizontal);
        let layout = ws.compute_layout(viewport());
        assert_eq!(layout.len(), 2);
        assert!((layout[0].1.width - 600.0).abs() < 0.01);
        assert!((layout[1].1.x - 600.0).abs() < 0.01);
    }

    #[test]
    fn resize_adjacent_uses_min_size() {
        let mut ws = WorkspaceLayout::with_defaults(LayoutState::default(), 100.0);
        ws.split_active(SplitDirection::Horizontal);
        let split_id = ws.tree().split_id().unwrap().to_string();

        ws.resize_adjacent(&split_id, 0, 1190.0, viewport()).unwrap();
        let layout = ws.compute_layout(viewport());
        assert!((layout[1].1.width - 100.0).abs() < 1e-6);
    }

    #[test]
    fn commit_ghost_applies_percentage() {
        let mut ws = WorkspaceLayout::new();
        ws.split_active(SplitDirection::Vertical);
        let split_id = ws.tree().split_id().unwrap().to_string();

        ws.commit_ghost(&split_id, 0, 25.0, viewport()).unwrap();
        let layout = ws.compute_layout(viewport());
        assert!((layout[0].1.height - 200.0).abs() < 1e-6);
        assert!(ws.commit_ghost("missing", 0, 25.0, viewport()).is_err());
    }

    #[test]
    fn resize_split_sets_sizes() {
        let mut ws = WorkspaceLayout::new();
        ws.split_active(SplitDirection::Horizontal);
        let split_id = ws.tree().split_id().unwrap().to_string();
        ws.resize_split(&split_id, vec![1.0, 3.0]).unwrap();
        let layout = ws.compute_layout(viewport());
        assert!((layout[0].1.width - 300.0).abs() < 1e-6);
    }

    #[test]
    fn execute_dispatches_actions() {
        let mut ws = WorkspaceLayout::new();
        assert!(ws.execute(&Action::Split(SplitDirection::Horizontal), Some(600.0)));
        assert_eq!(ws.group_count(), 2);
        assert!(ws.execute(&Action::ToggleMinimap, Some(600.0)));
        assert!(ws.view_state(ws.active_group()).layout.show_minimap());
        assert!(ws.execute(&Action::CloseGroup, Some(600.0)));
        assert_eq!(ws.group_count(), 1);
        assert!(!ws.execute(&Action::CloseGroup, Some(600.0)));
        assert!(!ws.execute(&Action::CancelDrag, Some(600.0)));
    }

    #[test]
    fn toggle_pane_targets_active_group() {
        let mut ws = WorkspaceLayout::new();
        let first = ws.active_group().clone();
        let second = ws.split_active(SplitDirection::Horizontal);
        assert_eq!(
            ws.toggle_pane(PaneRole::Snapshot, Some(600.0)),
            Some(ToggleOutcome::Applied)
        );
        assert!(ws.view_state(&second).layout.show_snapshot());
        assert!(!ws.view_state(&first).layout.show_snapshot());
    }

    #[test]
    fn mount_and_unmount_round_trip_state() {
        let mut ws = WorkspaceLayout::new();
        ws.toggle_pane(PaneRole::Preview, Some(1000.0));

        let measure = StaticMeasure(Some(Rect::new(0.0, 0.0, 1000.0, 600.0)));
        let mut group = ws.mount_active(LayoutEngine::default(), RecordingHost::default(), measure);
        assert!(group.begin_drag(ResizeTarget::EditorSplit, DragOptions::default()));
        group.pointer_move(650.0);
        ws.unmount(group);

        let layout = ws.view_state(ws.active_group()).layout;
        assert!((layout.split_ratio() - 0.65).abs() < 1e-9);
        assert!(!layout.is_dragging());
    }

    #[test]
    fn geometry_and_panes_per_group() {
        let mut ws = WorkspaceLayout::new();
        ws.toggle_pane(PaneRole::Preview, Some(600.0));
        ws.split_active(SplitDirection::Horizontal);

        let geometry = ws.geometry();
        assert_eq!(geometry.len(), 2);
        assert!(geometry[0].1.show_preview);
        assert!(!geometry[1].1.show_preview);

        let panes = ws.compute_panes(&LayoutEngine::default(), viewport());
        assert_eq!(panes[0].1.len(), 2);
        assert_eq!(panes[1].1.len(), 1);
        assert!((panes[1].1[0].1.x - 600.0).abs() < 1e-6);
    }
}
