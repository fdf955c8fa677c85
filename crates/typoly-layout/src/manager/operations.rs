//! Split, close, resize, and pane operations on the WorkspaceLayout.

use tracing::{debug, info};
use typoly_common::{Action, GroupId, LayoutError, PaneRole, Rect, SplitDirection};

use crate::drag::{ContainerMeasure, DragHost};
use crate::editor_group::EditorGroup;
use crate::layout::LayoutEngine;
use crate::toggle::{self, ToggleOutcome};
use crate::tree::LayoutNode;

use super::WorkspaceLayout;

impl WorkspaceLayout {
    /// Split the focused group. The new group copies its settings with
    /// side panes closed and takes focus.
    pub fn split_active(&mut self, direction: SplitDirection) -> GroupId {
        let source = self.active.clone();
        match self.split(&source, direction) {
            Ok(id) => id,
            // The active group is always in the tree.
            Err(_) => source,
        }
    }

    pub fn split(
        &mut self,
        source: &GroupId,
        direction: SplitDirection,
    ) -> Result<GroupId, LayoutError> {
        let new_group = GroupId::new();
        if !self.tree.split_group(source, new_group.clone(), direction) {
            return Err(LayoutError::UnknownGroup(source.to_string()));
        }
        self.views.copy(source, &new_group);
        self.active = new_group.clone();
        info!(source = %source, group = %new_group, ?direction, "group split");
        Ok(new_group)
    }

    /// Close a group and drop its view state. Focus moves to the next group
    /// when the focused one is closed.
    pub fn close_group(&mut self, group: &GroupId) -> Result<(), LayoutError> {
        let next = self.tree.next_group(group);
        self.tree.close_group(group)?;
        self.views.clear(group);
        if &self.active == group {
            if let Some(next) = next {
                self.active = next;
            }
        }
        info!(group = %group, active = %self.active, "group closed");
        Ok(())
    }

    pub fn close_active(&mut self) -> Result<(), LayoutError> {
        let active = self.active.clone();
        self.close_group(&active)
    }

    /// Replace the sizes of a group split.
    pub fn resize_split(&mut self, split_id: &str, sizes: Vec<f64>) -> Result<(), LayoutError> {
        self.tree.set_sizes(split_id, sizes)
    }

    /// Move a group boundary to `pointer`, keeping both neighbours at least
    /// the configured minimum size.
    pub fn resize_adjacent(
        &mut self,
        split_id: &str,
        index: usize,
        pointer: f64,
        bounds: Rect,
    ) -> Result<(), LayoutError> {
        self.tree
            .resize_adjacent(split_id, index, pointer, bounds, self.group_min_size)
    }

    /// Commit a ghost drag that ended at `percent` of the split's extent.
    pub fn commit_ghost(
        &mut self,
        split_id: &str,
        index: usize,
        percent: f64,
        bounds: Rect,
    ) -> Result<(), LayoutError> {
        let rect = self
            .tree
            .split_bounds(split_id, bounds)
            .ok_or_else(|| LayoutError::UnknownSplit(split_id.to_string()))?;
        let horizontal = matches!(
            self.tree.find_split(split_id),
            Some(LayoutNode::Split {
                direction: SplitDirection::Horizontal,
                ..
            })
        );
        let pointer = if horizontal {
            rect.x + rect.width * percent / 100.0
        } else {
            rect.y + rect.height * percent / 100.0
        };
        self.resize_adjacent(split_id, index, pointer, bounds)
    }

    /// Toggle a pane of the focused group.
    pub fn toggle_pane(
        &mut self,
        pane: PaneRole,
        container_width: Option<f64>,
    ) -> Option<ToggleOutcome> {
        let view = self.views.get_mut(&self.active);
        toggle::toggle(&mut view.layout, pane, container_width)
    }

    /// Mount the focused group as a live `EditorGroup` over its stored state.
    pub fn mount_active<H: DragHost, M: ContainerMeasure>(
        &self,
        engine: LayoutEngine,
        host: H,
        measure: M,
    ) -> EditorGroup<H, M> {
        let state = self.views.get(&self.active).layout;
        EditorGroup::with_state(self.active.clone(), state, engine, host, measure)
    }

    /// Tear a mounted group down and keep its final state.
    pub fn unmount<H: DragHost, M: ContainerMeasure>(&mut self, group: EditorGroup<H, M>) {
        let id = group.id().clone();
        let state = group.unmount();
        if self.tree.contains_group(&id) {
            self.views.set_layout(&id, state);
        } else {
            debug!(group = %id, "unmounted group no longer in tree");
        }
    }

    /// Run a workspace action against the focused group.
    pub fn execute(&mut self, action: &Action, container_width: Option<f64>) -> bool {
        if let Some(pane) = action.toggled_pane() {
            return self.toggle_pane(pane, container_width).is_some();
        }
        match action {
            Action::Split(direction) => {
                let before = self.group_count();
                self.split_active(*direction);
                self.group_count() > before
            }
            Action::CloseGroup => self.close_active().is_ok(),
            _ => false,
        }
    }
}
