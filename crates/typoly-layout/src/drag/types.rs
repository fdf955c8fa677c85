//! Host seams and options for drag sessions.

use serde::{Deserialize, Serialize};
use typoly_common::Rect;

/// Smallest and largest split ratio a boundary drag can produce.
pub const DRAG_RATIO_MIN: f64 = 0.1;
pub const DRAG_RATIO_MAX: f64 = 0.9;

/// Live bounding box of the editor group's content container.
pub trait ContainerMeasure {
    /// `None` when the container is not laid out yet.
    fn measure(&self) -> Option<Rect>;
}

impl<F> ContainerMeasure for F
where
    F: Fn() -> Option<Rect>,
{
    fn measure(&self) -> Option<Rect> {
        self()
    }
}

/// A measurement that never changes. Used by headless hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticMeasure(pub Option<Rect>);

impl ContainerMeasure for StaticMeasure {
    fn measure(&self) -> Option<Rect> {
        self.0
    }
}

/// Window-level side effects of a drag session.
///
/// Every `attach_pointer_listeners` is followed by exactly one
/// `detach_pointer_listeners`.
pub trait DragHost {
    /// Route pointer-move and pointer-up from the whole window to the group.
    fn attach_pointer_listeners(&mut self);
    fn detach_pointer_listeners(&mut self);
    /// Show the column-resize cursor and block text selection while `active`.
    fn set_resize_cursor(&mut self, active: bool);
}

impl<H: DragHost + ?Sized> DragHost for &mut H {
    fn attach_pointer_listeners(&mut self) {
        (**self).attach_pointer_listeners();
    }

    fn detach_pointer_listeners(&mut self) {
        (**self).detach_pointer_listeners();
    }

    fn set_resize_cursor(&mut self, active: bool) {
        (**self).set_resize_cursor(active);
    }
}

/// A host that records the calls it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    pub attached: u32,
    pub detached: u32,
    pub resize_cursor: bool,
}

impl RecordingHost {
    /// Listeners currently attached.
    pub fn live_listeners(&self) -> u32 {
        self.attached.saturating_sub(self.detached)
    }
}

impl DragHost for RecordingHost {
    fn attach_pointer_listeners(&mut self) {
        self.attached += 1;
    }

    fn detach_pointer_listeners(&mut self) {
        self.detached += 1;
    }

    fn set_resize_cursor(&mut self, active: bool) {
        self.resize_cursor = active;
    }
}

/// How the preview|snapshot boundary responds to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightPanelDragMode {
    /// Solve the ratio from the pointer's position inside the right panel.
    #[default]
    Proportional,
    /// Keep the preview's pixel width and move the editor boundary with it.
    PinPreview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragOptions {
    pub right_panel_mode: RightPanelDragMode,
}

impl DragOptions {
    pub fn pin_preview() -> Self {
        Self {
            right_panel_mode: RightPanelDragMode::PinPreview,
        }
    }
}

/// Ratios and minimap width as they were when a drag began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RatioSnapshot {
    pub split_ratio: f64,
    pub right_panel_split_ratio: f64,
    pub minimap_width_px: f64,
}
