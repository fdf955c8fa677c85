//! LayoutState and the per-drag capture types.

use serde::Serialize;
use typoly_common::PaneRole;

pub const SPLIT_RATIO_MIN: f64 = 0.1;
pub const SPLIT_RATIO_MAX: f64 = 0.95;
pub const RIGHT_SPLIT_RATIO_MIN: f64 = 0.05;
pub const RIGHT_SPLIT_RATIO_MAX: f64 = 0.95;
pub const MINIMAP_WIDTH_MIN: f64 = 50.0;
pub const MINIMAP_WIDTH_MAX: f64 = 400.0;
/// Largest share of the container the minimap column may take.
pub const MINIMAP_MAX_CONTAINER_SHARE: f64 = 0.5;

pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;
pub const DEFAULT_RIGHT_SPLIT_RATIO: f64 = 0.5;
pub const DEFAULT_MINIMAP_WIDTH: f64 = 100.0;

/// Which resize handle, if any, is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeTarget {
    #[default]
    None,
    /// Boundary between the editor and the right panel.
    EditorSplit,
    /// Boundary between preview and snapshot.
    RightPanelSplit,
    /// Left edge of the minimap column.
    Minimap,
}

/// Pixel widths captured when a drag starts. Each one pins a pane that is
/// not adjacent to the dragged boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LockedWidths {
    pub snapshot_px: Option<f64>,
    pub preview_px: Option<f64>,
    pub right_panel_px: Option<f64>,
}

impl LockedWidths {
    pub fn is_empty(&self) -> bool {
        self.snapshot_px.is_none() && self.preview_px.is_none() && self.right_panel_px.is_none()
    }
}

/// Pane geometry of one editor group.
///
/// Only the toggle and drag controllers write to it. Every write is clamped
/// into range; non-finite values are dropped and leave the field as it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutState {
    pub(crate) show_preview: bool,
    pub(crate) show_snapshot: bool,
    pub(crate) show_minimap: bool,
    pub(crate) split_ratio: f64,
    pub(crate) right_panel_split_ratio: f64,
    pub(crate) minimap_width_px: f64,
    pub(crate) active_resize_target: ResizeTarget,
    pub(crate) locked: LockedWidths,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            show_preview: false,
            show_snapshot: false,
            show_minimap: false,
            split_ratio: DEFAULT_SPLIT_RATIO,
            right_panel_split_ratio: DEFAULT_RIGHT_SPLIT_RATIO,
            minimap_width_px: DEFAULT_MINIMAP_WIDTH,
            active_resize_target: ResizeTarget::None,
            locked: LockedWidths::default(),
        }
    }
}

impl LayoutState {
    /// Create a state with configured starting values, each clamped.
    pub fn with_defaults(split_ratio: f64, right_panel_split_ratio: f64, minimap_width: f64) -> Self {
        let mut state = Self::default();
        state.set_split_ratio(split_ratio);
        state.set_right_panel_split_ratio(right_panel_split_ratio);
        state.set_minimap_width(minimap_width, None);
        state
    }

    // -- Accessors --

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    pub fn show_snapshot(&self) -> bool {
        self.show_snapshot
    }

    pub fn show_minimap(&self) -> bool {
        self.show_minimap
    }

    pub fn split_ratio(&self) -> f64 {
        self.split_ratio
    }

    pub fn right_panel_split_ratio(&self) -> f64 {
        self.right_panel_split_ratio
    }

    pub fn minimap_width_px(&self) -> f64 {
        self.minimap_width_px
    }

    pub fn active_resize_target(&self) -> ResizeTarget {
        self.active_resize_target
    }

    pub fn locked_widths(&self) -> LockedWidths {
        self.locked
    }

    pub fn is_dragging(&self) -> bool {
        self.active_resize_target != ResizeTarget::None
    }

    pub fn is_visible(&self, pane: PaneRole) -> bool {
        match pane {
            PaneRole::Editor => true,
            PaneRole::Preview => self.show_preview,
            PaneRole::Snapshot => self.show_snapshot,
            PaneRole::Minimap => self.show_minimap,
        }
    }

    // -- Clamping setters --

    pub(crate) fn set_split_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() {
            self.split_ratio = ratio.clamp(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX);
        }
    }

    pub(crate) fn set_right_panel_split_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() {
            self.right_panel_split_ratio = ratio.clamp(RIGHT_SPLIT_RATIO_MIN, RIGHT_SPLIT_RATIO_MAX);
        }
    }

    /// Clamp to the usable range, then to half the container when known.
    /// A container narrower than 100 px can push the width below 50.
    pub(crate) fn set_minimap_width(&mut self, px: f64, container_width: Option<f64>) {
        if !px.is_finite() {
            return;
        }
        let mut width = px.clamp(MINIMAP_WIDTH_MIN, MINIMAP_WIDTH_MAX);
        if let Some(cw) = container_width.filter(|cw| cw.is_finite()) {
            width = width.min(cw * MINIMAP_MAX_CONTAINER_SHARE).max(0.0);
        }
        self.minimap_width_px = width;
    }

    /// Re-apply the container cap after the container changed size. Returns
    /// `true` when the stored width had to shrink.
    pub(crate) fn fit_minimap_to(&mut self, container_width: f64) -> bool {
        if !container_width.is_finite() {
            return false;
        }
        let cap = (container_width * MINIMAP_MAX_CONTAINER_SHARE).max(0.0);
        if self.minimap_width_px > cap {
            self.minimap_width_px = cap;
            true
        } else {
            false
        }
    }

    /// Raw write used by the degenerate-layout path, which must not apply
    /// the container cap.
    pub(crate) fn reset_minimap_width(&mut self) {
        self.minimap_width_px = DEFAULT_MINIMAP_WIDTH;
    }

    pub(crate) fn set_visible(&mut self, pane: PaneRole, visible: bool) {
        match pane {
            PaneRole::Editor => {}
            PaneRole::Preview => self.show_preview = visible,
            PaneRole::Snapshot => self.show_snapshot = visible,
            PaneRole::Minimap => self.show_minimap = visible,
        }
    }

    // -- Derived geometry --

    /// Minimap column width inside a container of `container_width`: the
    /// stored width, held to half the container.
    pub fn minimap_width(&self, container_width: f64) -> f64 {
        if container_width.is_finite() {
            self.minimap_width_px
                .min(container_width * MINIMAP_MAX_CONTAINER_SHARE)
                .max(0.0)
        } else {
            self.minimap_width_px
        }
    }

    /// Content width left of the minimap column.
    pub fn wrapper_width(&self, container_width: f64) -> f64 {
        if self.show_minimap {
            container_width - self.minimap_width(container_width)
        } else {
            container_width
        }
    }

    pub fn has_right_panel(&self) -> bool {
        self.show_preview || self.show_snapshot
    }

    pub fn has_both_right_panes(&self) -> bool {
        self.show_preview && self.show_snapshot
    }

    pub fn editor_width(&self, container_width: f64) -> f64 {
        let wrapper = self.wrapper_width(container_width).max(0.0);
        if self.has_right_panel() {
            wrapper * self.split_ratio
        } else {
            wrapper
        }
    }

    pub fn right_panel_width(&self, container_width: f64) -> f64 {
        if !self.has_right_panel() {
            return 0.0;
        }
        self.wrapper_width(container_width).max(0.0) * (1.0 - self.split_ratio)
    }

    pub fn preview_width(&self, container_width: f64) -> f64 {
        match (self.show_preview, self.show_snapshot) {
            (true, true) => self.right_panel_width(container_width) * self.right_panel_split_ratio,
            (true, false) => self.right_panel_width(container_width),
            _ => 0.0,
        }
    }

    pub fn snapshot_width(&self, container_width: f64) -> f64 {
        match (self.show_preview, self.show_snapshot) {
            (true, true) => {
                self.right_panel_width(container_width) * (1.0 - self.right_panel_split_ratio)
            }
            (false, true) => self.right_panel_width(container_width),
            _ => 0.0,
        }
    }
}
