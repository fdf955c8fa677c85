//! Layout computation for the workspace.

use typoly_common::{GroupId, PaneRole, Rect};

use crate::layout::{LayoutEngine, PaneGeometry};

use super::WorkspaceLayout;

impl WorkspaceLayout {
    /// Rect of every group within `bounds`.
    pub fn compute_layout(&self, bounds: Rect) -> Vec<(GroupId, Rect)> {
        self.tree.compute(bounds)
    }

    /// Pane geometry of every group, in visual order.
    pub fn geometry(&self) -> Vec<(GroupId, PaneGeometry)> {
        self.tree
            .all_groups()
            .into_iter()
            .map(|id| {
                let geometry = PaneGeometry::from(&self.views.get(&id).layout);
                (id, geometry)
            })
            .collect()
    }

    /// Pane rects of every group, each laid out inside its group rect.
    pub fn compute_panes(
        &self,
        engine: &LayoutEngine,
        bounds: Rect,
    ) -> Vec<(GroupId, Vec<(PaneRole, Rect)>)> {
        self.compute_layout(bounds)
            .into_iter()
            .map(|(id, rect)| {
                let panes = engine.compute(&self.views.get(&id).layout, rect);
                (id, panes)
            })
            .collect()
    }
}
