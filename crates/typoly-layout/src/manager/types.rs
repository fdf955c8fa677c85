//! Core types and constructors for WorkspaceLayout.

use typoly_common::GroupId;

use crate::state::LayoutState;
use crate::tree::LayoutNode;
use crate::view_state::{GroupViewState, ViewStateRegistry};

pub const DEFAULT_GROUP_MIN_SIZE: f64 = 50.0;

/// All editor groups of a window: the group tree, each group's view state,
/// and which group has focus.
#[derive(Debug, Clone)]
pub struct WorkspaceLayout {
    /// The root of the group tree.
    pub(super) tree: LayoutNode,
    pub(super) views: ViewStateRegistry,
    /// The focused group.
    pub(super) active: GroupId,
    /// Smallest size, in pixels, a group boundary drag may leave.
    pub(super) group_min_size: f64,
}

impl WorkspaceLayout {
    /// Create a workspace with a single empty group.
    pub fn new() -> Self {
        Self::with_defaults(LayoutState::default(), DEFAULT_GROUP_MIN_SIZE)
    }

    /// Create with configured pane defaults for new groups.
    pub fn with_defaults(default_layout: LayoutState, group_min_size: f64) -> Self {
        let initial = GroupId::new();
        let mut views = ViewStateRegistry::new(default_layout);
        views.get_mut(&initial);
        Self {
            tree: LayoutNode::group(initial.clone()),
            views,
            active: initial,
            group_min_size,
        }
    }

    // -- Accessors --

    pub fn active_group(&self) -> &GroupId {
        &self.active
    }

    pub fn group_count(&self) -> usize {
        self.tree.group_count()
    }

    pub fn tree(&self) -> &LayoutNode {
        &self.tree
    }

    pub fn groups(&self) -> Vec<GroupId> {
        self.tree.all_groups()
    }

    pub fn view_state(&self, group: &GroupId) -> GroupViewState {
        self.views.get(group)
    }

    /// Mutable view state of a group in the tree.
    pub fn view_state_mut(&mut self, group: &GroupId) -> Option<&mut GroupViewState> {
        if !self.tree.contains_group(group) {
            return None;
        }
        Some(self.views.get_mut(group))
    }

    pub fn group_min_size(&self) -> f64 {
        self.group_min_size
    }
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self::new()
    }
}
