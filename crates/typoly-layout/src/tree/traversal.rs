//! Read-only walks over the group tree: ordering and rect computation.

use typoly_common::{GroupId, Rect, SplitDirection};

use super::LayoutNode;

impl LayoutNode {
    /// The group after `current` in visual order, wrapping around.
    pub fn next_group(&self, current: &GroupId) -> Option<GroupId> {
        let ids = self.all_groups();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|id| id == current)?;
        Some(ids[(idx + 1) % ids.len()].clone())
    }

    /// The group before `current` in visual order, wrapping around.
    pub fn prev_group(&self, current: &GroupId) -> Option<GroupId> {
        let ids = self.all_groups();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|id| id == current)?;
        Some(ids[(idx + ids.len() - 1) % ids.len()].clone())
    }

    /// Rect of every group within `bounds`, in visual order.
    pub fn compute(&self, bounds: Rect) -> Vec<(GroupId, Rect)> {
        let mut out = Vec::new();
        self.walk(bounds, &mut |node, rect| {
            if let LayoutNode::Group { id } = node {
                out.push((id.clone(), rect));
            }
        });
        out
    }

    pub fn find_split(&self, split_id: &str) -> Option<&LayoutNode> {
        if self.split_id() == Some(split_id) {
            return Some(self);
        }
        match self {
            LayoutNode::Split { children, .. } => {
                children.iter().find_map(|c| c.find_split(split_id))
            }
            LayoutNode::Group { .. } => None,
        }
    }

    /// Rect occupied by the split with `split_id`.
    pub fn split_bounds(&self, split_id: &str, bounds: Rect) -> Option<Rect> {
        let mut found = None;
        self.walk(bounds, &mut |node, rect| {
            if node.split_id() == Some(split_id) {
                found = Some(rect);
            }
        });
        found
    }

    fn walk(&self, bounds: Rect, visit: &mut impl FnMut(&LayoutNode, Rect)) {
        visit(self, bounds);
        if let LayoutNode::Split {
            direction,
            children,
            sizes,
            ..
        } = self
        {
            for (child, rect) in children.iter().zip(child_rects(*direction, sizes, bounds)) {
                child.walk(rect, visit);
            }
        }
    }
}

/// Divide `bounds` along `direction` proportionally to `sizes`. Equal
/// shares when the sizes do not sum to a positive value.
fn child_rects(direction: SplitDirection, sizes: &[f64], bounds: Rect) -> Vec<Rect> {
    let total: f64 = sizes.iter().sum();
    let count = sizes.len().max(1) as f64;
    let span = match direction {
        SplitDirection::Horizontal => bounds.width,
        SplitDirection::Vertical => bounds.height,
    };

    let mut offset = 0.0;
    sizes
        .iter()
        .map(|size| {
            let share = if total > 0.0 { size / total } else { 1.0 / count };
            let length = span * share;
            let rect = match direction {
                SplitDirection::Horizontal => {
                    Rect::new(bounds.x + offset, bounds.y, length, bounds.height)
                }
                SplitDirection::Vertical => {
                    Rect::new(bounds.x, bounds.y + offset, bounds.width, length)
                }
            };
            offset += length;
            rect
        })
        .collect()
}
