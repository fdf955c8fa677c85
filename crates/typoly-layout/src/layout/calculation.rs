//! Pane rects and handle positions from a `LayoutState`.

use typoly_common::{PaneRole, Rect};

use super::{LayoutEngine, ResizeHandle};
use crate::state::{LayoutState, ResizeTarget};

impl LayoutEngine {
    pub fn new(handle_hit_width: f64) -> Self {
        Self { handle_hit_width }
    }

    /// Rects of every visible pane, left to right.
    pub fn compute(&self, state: &LayoutState, bounds: Rect) -> Vec<(PaneRole, Rect)> {
        let cw = bounds.width.max(0.0);
        let widths = [
            (PaneRole::Editor, state.editor_width(cw)),
            (PaneRole::Preview, state.preview_width(cw)),
            (PaneRole::Snapshot, state.snapshot_width(cw)),
            (
                PaneRole::Minimap,
                if state.show_minimap() {
                    state.minimap_width(cw)
                } else {
                    0.0
                },
            ),
        ];

        let mut x = bounds.x;
        let mut out = Vec::with_capacity(widths.len());
        for (role, width) in widths {
            if !state.is_visible(role) {
                continue;
            }
            out.push((role, Rect::new(x, bounds.y, width, bounds.height)));
            x += width;
        }
        out
    }

    /// Handles for the boundaries currently on screen.
    pub fn compute_handles(&self, state: &LayoutState, bounds: Rect) -> Vec<ResizeHandle> {
        let rects = self.compute(state, bounds);
        let right_edge = |role: PaneRole| {
            rects
                .iter()
                .find(|(r, _)| *r == role)
                .map(|(_, rect)| rect.right())
        };
        let handle = |target, position| ResizeHandle {
            target,
            position,
            start: bounds.y,
            end: bounds.y + bounds.height,
        };

        let mut handles = Vec::new();
        if state.has_right_panel() {
            if let Some(x) = right_edge(PaneRole::Editor) {
                handles.push(handle(ResizeTarget::EditorSplit, x));
            }
        }
        if state.has_both_right_panes() {
            if let Some(x) = right_edge(PaneRole::Preview) {
                handles.push(handle(ResizeTarget::RightPanelSplit, x));
            }
        }
        if state.show_minimap() {
            let minimap_left = rects
                .iter()
                .find(|(r, _)| *r == PaneRole::Minimap)
                .map(|(_, rect)| rect.x);
            if let Some(x) = minimap_left {
                handles.push(handle(ResizeTarget::Minimap, x));
            }
        }
        handles
    }

    /// The handle under the pointer. Later handles sit above earlier ones,
    /// so the minimap edge wins over the split boundaries.
    pub fn find_hovered_handle(
        &self,
        state: &LayoutState,
        bounds: Rect,
        x: f64,
        y: f64,
    ) -> Option<ResizeHandle> {
        self.compute_handles(state, bounds)
            .into_iter()
            .rev()
            .find(|h| h.hit_test(x, y, self.handle_hit_width))
    }
}
