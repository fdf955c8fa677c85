//! Layout engine configuration and the geometry handed to the view.

use serde::{Deserialize, Serialize};
use typoly_common::Rect;

use crate::state::{LayoutState, ResizeTarget};

/// Computes pane rects and resize handles for an editor group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Half-width of a handle's hit zone, in pixels.
    pub handle_hit_width: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            handle_hit_width: 6.0,
        }
    }
}

/// What the view needs per render to size the pane boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneGeometry {
    /// Editor share of the wrapper, 0-100.
    pub editor_width_percent: f64,
    /// Right panel share of the wrapper, 0-100.
    pub right_panel_width_percent: f64,
    /// Preview share of the right panel, 0-100.
    pub preview_width_percent_of_right_panel: f64,
    pub minimap_width_px: f64,
    pub show_preview: bool,
    pub show_snapshot: bool,
    pub show_minimap: bool,
}

impl From<&LayoutState> for PaneGeometry {
    fn from(state: &LayoutState) -> Self {
        let editor_width_percent = if state.has_right_panel() {
            state.split_ratio() * 100.0
        } else {
            100.0
        };
        let preview_width_percent_of_right_panel =
            match (state.show_preview(), state.show_snapshot()) {
                (true, true) => state.right_panel_split_ratio() * 100.0,
                (true, false) => 100.0,
                _ => 0.0,
            };
        Self {
            editor_width_percent,
            right_panel_width_percent: 100.0 - editor_width_percent,
            preview_width_percent_of_right_panel,
            minimap_width_px: state.minimap_width_px(),
            show_preview: state.show_preview(),
            show_snapshot: state.show_snapshot(),
            show_minimap: state.show_minimap(),
        }
    }
}

impl PaneGeometry {
    /// Geometry for a measured container; the minimap width is the one
    /// actually on screen.
    pub fn measured(state: &LayoutState, container_width: f64) -> Self {
        Self {
            minimap_width_px: state.minimap_width(container_width),
            ..Self::from(state)
        }
    }
}

/// A draggable vertical boundary between two panes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResizeHandle {
    pub target: ResizeTarget,
    /// X position of the boundary in pixels.
    pub position: f64,
    /// Top of the handle.
    pub start: f64,
    /// Bottom of the handle.
    pub end: f64,
}

impl ResizeHandle {
    /// Test whether (x, y) falls within `half_width` of the boundary.
    pub fn hit_test(&self, x: f64, y: f64, half_width: f64) -> bool {
        (x - self.position).abs() <= half_width && y >= self.start && y <= self.end
    }
}
