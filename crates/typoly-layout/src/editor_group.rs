//! One editor group's pane strip: state, controllers and host seams.

use tracing::debug;
use typoly_common::{Action, GroupId, PaneRole, Rect};

use crate::drag::{ContainerMeasure, DragController, DragHost, DragOptions};
use crate::layout::{LayoutEngine, PaneGeometry, ResizeHandle};
use crate::state::{LayoutState, ResizeTarget};
use crate::toggle::{self, ToggleOutcome};

/// Owns the `LayoutState` of one group and routes toggles and pointer
/// events to the controllers. Dropping it ends any drag in progress.
pub struct EditorGroup<H: DragHost, M: ContainerMeasure> {
    id: GroupId,
    state: LayoutState,
    drag: DragController,
    engine: LayoutEngine,
    host: H,
    measure: M,
}

impl<H: DragHost, M: ContainerMeasure> EditorGroup<H, M> {
    pub fn new(id: GroupId, host: H, measure: M) -> Self {
        Self::with_state(id, LayoutState::default(), LayoutEngine::default(), host, measure)
    }

    pub fn with_state(
        id: GroupId,
        state: LayoutState,
        engine: LayoutEngine,
        host: H,
        measure: M,
    ) -> Self {
        Self {
            id,
            state,
            drag: DragController::new(),
            engine,
            host,
            measure,
        }
    }

    // -- Accessors --

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    pub fn measure_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Measure the container and hold the minimap to half of it, so a
    /// shrunken window never leaves the content area without width.
    fn measure_fitted(&mut self) -> Option<Rect> {
        let bounds = self.measure.measure()?;
        if self.state.fit_minimap_to(bounds.width) {
            debug!(
                group = %self.id,
                container_width = bounds.width,
                minimap_width = self.state.minimap_width_px(),
                "minimap capped to container"
            );
        }
        Some(bounds)
    }

    // -- Toggles --

    /// Toggle a pane. A drag in progress is ended first so the toggle works
    /// against settled ratios. Returns `None` for the editor.
    pub fn toggle(&mut self, pane: PaneRole) -> Option<ToggleOutcome> {
        if !pane.is_toggleable() {
            return None;
        }
        if self.drag.end(&mut self.state, &mut self.host) {
            debug!(group = %self.id, %pane, "drag ended by toggle");
        }
        let width = self.measure_fitted().map(|r| r.width);
        toggle::toggle(&mut self.state, pane, width)
    }

    // -- Drag --

    /// Begin a drag if the pointer is over a handle.
    pub fn pointer_down(&mut self, x: f64, y: f64, options: DragOptions) -> bool {
        let Some(bounds) = self.measure_fitted() else {
            return false;
        };
        match self.engine.find_hovered_handle(&self.state, bounds, x, y) {
            Some(handle) => self.begin_drag(handle.target, options),
            None => false,
        }
    }

    pub fn begin_drag(&mut self, target: ResizeTarget, options: DragOptions) -> bool {
        self.measure_fitted();
        self.drag
            .begin(&mut self.state, target, options, &mut self.host, &self.measure)
    }

    pub fn pointer_move(&mut self, x: f64) -> bool {
        self.measure_fitted();
        self.drag.pointer_move(&mut self.state, x, &self.measure)
    }

    /// Pointer released anywhere in the window.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.end(&mut self.state, &mut self.host)
    }

    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel(&mut self.state, &mut self.host)
    }

    // -- Output --

    pub fn geometry(&self) -> PaneGeometry {
        match self.measure.measure() {
            Some(bounds) => PaneGeometry::measured(&self.state, bounds.width),
            None => PaneGeometry::from(&self.state),
        }
    }

    /// Pixel rects of the visible panes; empty until measured.
    pub fn rects(&self) -> Vec<(PaneRole, Rect)> {
        self.measure
            .measure()
            .map(|bounds| self.engine.compute(&self.state, bounds))
            .unwrap_or_default()
    }

    pub fn handles(&self) -> Vec<ResizeHandle> {
        self.measure
            .measure()
            .map(|bounds| self.engine.compute_handles(&self.state, bounds))
            .unwrap_or_default()
    }

    /// Run a group-level action. Split and close belong to the workspace
    /// and are not handled here.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        if let Some(pane) = action.toggled_pane() {
            return self.toggle(pane).is_some();
        }
        match action {
            Action::CancelDrag => self.cancel_drag(),
            _ => false,
        }
    }

    /// Tear the group down and hand back its final state.
    pub fn unmount(mut self) -> LayoutState {
        self.drag.end(&mut self.state, &mut self.host);
        std::mem::take(&mut self.state)
    }
}

impl<H: DragHost, M: ContainerMeasure> Drop for EditorGroup<H, M> {
    fn drop(&mut self) {
        if self.drag.end(&mut self.state, &mut self.host) {
            debug!(group = %self.id, "drag ended on unmount");
        }
    }
}
