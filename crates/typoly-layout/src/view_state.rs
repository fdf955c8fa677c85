//! Per-group view settings, keyed by group.

use std::collections::HashMap;

use serde::Serialize;
use typoly_common::{GroupId, PaneRole};

use crate::state::{LayoutState, LockedWidths, ResizeTarget};

/// Everything a group remembers about how it is displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupViewState {
    pub layout: LayoutState,
    pub source_mode: bool,
    pub vim_mode: bool,
    pub monospace: bool,
    pub line_numbers: bool,
    pub sync_scroll: bool,
}

impl GroupViewState {
    pub fn new(layout: LayoutState) -> Self {
        Self {
            layout,
            source_mode: true,
            vim_mode: false,
            monospace: false,
            line_numbers: true,
            sync_scroll: true,
        }
    }
}

impl Default for GroupViewState {
    fn default() -> Self {
        Self::new(LayoutState::default())
    }
}

/// View state of every open group. Groups without an entry read as the
/// registry's defaults.
#[derive(Debug, Clone, Default)]
pub struct ViewStateRegistry {
    defaults: GroupViewState,
    states: HashMap<GroupId, GroupViewState>,
}

impl ViewStateRegistry {
    pub fn new(default_layout: LayoutState) -> Self {
        Self {
            defaults: GroupViewState::new(default_layout),
            states: HashMap::new(),
        }
    }

    pub fn get(&self, group: &GroupId) -> GroupViewState {
        self.states
            .get(group)
            .cloned()
            .unwrap_or_else(|| self.defaults.clone())
    }

    /// Mutable entry for `group`, created from the defaults if absent.
    pub fn get_mut(&mut self, group: &GroupId) -> &mut GroupViewState {
        self.states
            .entry(group.clone())
            .or_insert_with(|| self.defaults.clone())
    }

    pub fn update(&mut self, group: &GroupId, apply: impl FnOnce(&mut GroupViewState)) {
        apply(self.get_mut(group));
    }

    /// Replace the stored layout, e.g. when a mounted group is torn down.
    pub fn set_layout(&mut self, group: &GroupId, layout: LayoutState) {
        self.get_mut(group).layout = layout;
    }

    /// Give `target` the settings of `source` with every side pane closed.
    pub fn copy(&mut self, source: &GroupId, target: &GroupId) {
        let mut copied = self.get(source);
        for pane in [PaneRole::Preview, PaneRole::Snapshot, PaneRole::Minimap] {
            copied.layout.set_visible(pane, false);
        }
        copied.layout.active_resize_target = ResizeTarget::None;
        copied.layout.locked = LockedWidths::default();
        self.states.insert(target.clone(), copied);
    }

    pub fn clear(&mut self, group: &GroupId) -> Option<GroupViewState> {
        self.states.remove(group)
    }

    pub fn contains(&self, group: &GroupId) -> bool {
        self.states.contains_key(group)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
