//! Core types for the group tree: LayoutNode.

use serde::{Deserialize, Serialize};
use typoly_common::{new_id, GroupId, SplitDirection};

/// A node of the editor-group tree. Splits are n-ary; `sizes` holds one
/// relative flex value per child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Group {
        id: GroupId,
    },
    Split {
        id: String,
        direction: SplitDirection,
        children: Vec<LayoutNode>,
        sizes: Vec<f64>,
    },
}

impl LayoutNode {
    pub fn group(id: GroupId) -> Self {
        LayoutNode::Group { id }
    }

    /// A split giving every child an equal share.
    pub fn split(direction: SplitDirection, children: Vec<LayoutNode>) -> Self {
        let share = 1.0 / children.len().max(1) as f64;
        LayoutNode::Split {
            id: format!("split-{}", new_id()),
            direction,
            sizes: vec![share; children.len()],
            children,
        }
    }

    pub fn group_count(&self) -> usize {
        match self {
            LayoutNode::Group { .. } => 1,
            LayoutNode::Split { children, .. } => children.iter().map(Self::group_count).sum(),
        }
    }

    pub fn contains_group(&self, group: &GroupId) -> bool {
        match self {
            LayoutNode::Group { id } => id == group,
            LayoutNode::Split { children, .. } => children.iter().any(|c| c.contains_group(group)),
        }
    }

    /// All group IDs in depth-first order (matches visual order).
    pub fn all_groups(&self) -> Vec<GroupId> {
        let mut ids = Vec::new();
        self.collect_groups_into(&mut ids);
        ids
    }

    fn collect_groups_into(&self, out: &mut Vec<GroupId>) {
        match self {
            LayoutNode::Group { id } => out.push(id.clone()),
            LayoutNode::Split { children, .. } => {
                for child in children {
                    child.collect_groups_into(out);
                }
            }
        }
    }

    pub fn split_id(&self) -> Option<&str> {
        match self {
            LayoutNode::Split { id, .. } => Some(id),
            LayoutNode::Group { .. } => None,
        }
    }
}
