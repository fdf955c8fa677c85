use tracing::{debug, trace};

use super::{
    ContainerMeasure, DragHost, DragOptions, RatioSnapshot, RightPanelDragMode, DRAG_RATIO_MAX,
    DRAG_RATIO_MIN,
};
use crate::state::{
    LayoutState, LockedWidths, ResizeTarget, MINIMAP_MAX_CONTAINER_SHARE, MINIMAP_WIDTH_MAX,
    MINIMAP_WIDTH_MIN,
};

/// Drives one drag session at a time against a `LayoutState`.
#[derive(Debug, Default)]
pub struct DragController {
    origin: Option<RatioSnapshot>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `target`. Refused when a drag is already running, the
    /// handle is not on screen, or the container has no usable width.
    pub fn begin(
        &mut self,
        state: &mut LayoutState,
        target: ResizeTarget,
        options: DragOptions,
        host: &mut impl DragHost,
        measure: &impl ContainerMeasure,
    ) -> bool {
        if state.is_dragging() || !handle_visible(state, target) {
            return false;
        }
        let Some(bounds) = measure.measure() else {
            debug!(?target, "drag refused: container not measured");
            return false;
        };
        let cw = bounds.width;
        let wrapper = state.wrapper_width(cw);
        if wrapper.is_nan() || wrapper <= 0.0 {
            debug!(?target, wrapper, "drag refused: no content width");
            return false;
        }

        let mut locked = LockedWidths::default();
        match target {
            ResizeTarget::EditorSplit if state.has_both_right_panes() => {
                locked.snapshot_px = Some(state.snapshot_width(cw));
            }
            ResizeTarget::RightPanelSplit
                if options.right_panel_mode == RightPanelDragMode::PinPreview =>
            {
                locked.preview_px = Some(state.preview_width(cw));
            }
            ResizeTarget::Minimap if state.has_right_panel() => {
                locked.right_panel_px = Some(state.right_panel_width(cw));
            }
            _ => {}
        }

        self.origin = Some(RatioSnapshot {
            split_ratio: state.split_ratio,
            right_panel_split_ratio: state.right_panel_split_ratio,
            minimap_width_px: state.minimap_width_px,
        });
        state.active_resize_target = target;
        state.locked = locked;

        host.attach_pointer_listeners();
        host.set_resize_cursor(true);
        debug!(?target, ?locked, "drag started");
        true
    }

    /// Apply one pointer-move. Returns `true` when the state was updated.
    pub fn pointer_move(
        &mut self,
        state: &mut LayoutState,
        pointer_x: f64,
        measure: &impl ContainerMeasure,
    ) -> bool {
        let target = state.active_resize_target;
        if target == ResizeTarget::None || !pointer_x.is_finite() {
            return false;
        }
        let Some(bounds) = measure.measure() else {
            return false;
        };
        let cw = bounds.width;
        let wrapper = state.wrapper_width(cw);
        if wrapper.is_nan() || wrapper <= 0.0 {
            return false;
        }
        let x = pointer_x - bounds.x;

        match target {
            ResizeTarget::EditorSplit => drag_editor_split(state, x, wrapper),
            ResizeTarget::RightPanelSplit => drag_right_panel_split(state, x, wrapper),
            ResizeTarget::Minimap => drag_minimap(state, x, cw),
            ResizeTarget::None => return false,
        }
        trace!(
            ?target,
            pointer_x,
            split_ratio = state.split_ratio,
            right_panel_split_ratio = state.right_panel_split_ratio,
            minimap_width = state.minimap_width_px,
            "drag moved"
        );
        true
    }

    /// Finish the drag. Returns `false` if none was running.
    pub fn end(&mut self, state: &mut LayoutState, host: &mut impl DragHost) -> bool {
        if !state.is_dragging() {
            return false;
        }
        let target = state.active_resize_target;
        state.active_resize_target = ResizeTarget::None;
        state.locked = LockedWidths::default();
        self.origin = None;

        host.detach_pointer_listeners();
        host.set_resize_cursor(false);
        debug!(?target, "drag ended");
        true
    }

    /// Abort the drag and put the ratios back where they were at `begin`.
    pub fn cancel(&mut self, state: &mut LayoutState, host: &mut impl DragHost) -> bool {
        if !state.is_dragging() {
            return false;
        }
        if let Some(origin) = self.origin {
            state.split_ratio = origin.split_ratio;
            state.right_panel_split_ratio = origin.right_panel_split_ratio;
            state.minimap_width_px = origin.minimap_width_px;
        }
        debug!("drag cancelled");
        self.end(state, host)
    }
}

fn handle_visible(state: &LayoutState, target: ResizeTarget) -> bool {
    match target {
        ResizeTarget::None => false,
        ResizeTarget::EditorSplit => state.has_right_panel(),
        ResizeTarget::RightPanelSplit => state.has_both_right_panes(),
        ResizeTarget::Minimap => state.show_minimap,
    }
}

/// `clamp` without the panic when the range is inverted.
fn clamp_between(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max.max(min))
}

fn drag_editor_split(state: &mut LayoutState, x: f64, wrapper: f64) {
    state.set_split_ratio(clamp_between(x / wrapper, DRAG_RATIO_MIN, DRAG_RATIO_MAX));

    if let Some(snapshot_px) = state.locked.snapshot_px {
        if state.has_both_right_panes() {
            let right_px = wrapper * (1.0 - state.split_ratio);
            if right_px > 0.0 {
                state.set_right_panel_split_ratio((right_px - snapshot_px) / right_px);
            }
        }
    }
}

fn drag_right_panel_split(state: &mut LayoutState, x: f64, wrapper: f64) {
    match state.locked.preview_px {
        Some(preview_px) => {
            let boundary = clamp_between(
                x - preview_px,
                DRAG_RATIO_MIN * wrapper,
                DRAG_RATIO_MAX * wrapper,
            );
            state.set_split_ratio(boundary / wrapper);
            let right_px = wrapper * (1.0 - state.split_ratio);
            if right_px > 0.0 {
                state.set_right_panel_split_ratio(preview_px / right_px);
            }
        }
        None => {
            let right_left = wrapper * state.split_ratio;
            let right_px = wrapper - right_left;
            if right_px > 0.0 {
                state.set_right_panel_split_ratio(clamp_between(
                    (x - right_left) / right_px,
                    DRAG_RATIO_MIN,
                    DRAG_RATIO_MAX,
                ));
            }
        }
    }
}

fn drag_minimap(state: &mut LayoutState, x: f64, container_width: f64) {
    let width = clamp_between(container_width - x, MINIMAP_WIDTH_MIN, MINIMAP_WIDTH_MAX)
        .min(container_width * MINIMAP_MAX_CONTAINER_SHARE);
    state.set_minimap_width(width, Some(container_width));

    if let Some(right_px) = state.locked.right_panel_px {
        if state.has_right_panel() {
            let wrapper = container_width - state.minimap_width_px;
            state.set_split_ratio(1.0 - right_px / wrapper.max(1.0));
        }
    }
}
