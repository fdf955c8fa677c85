//! Focus navigation between groups.

use typoly_common::GroupId;

use super::WorkspaceLayout;

impl WorkspaceLayout {
    pub fn focus(&mut self, group: &GroupId) -> bool {
        if self.tree.contains_group(group) {
            self.active = group.clone();
            true
        } else {
            false
        }
    }

    pub fn focus_next(&mut self) -> bool {
        match self.tree.next_group(&self.active) {
            Some(next) => {
                self.active = next;
                true
            }
            None => false,
        }
    }

    pub fn focus_prev(&mut self) -> bool {
        match self.tree.prev_group(&self.active) {
            Some(prev) => {
                self.active = prev;
                true
            }
            None => false,
        }
    }
}
