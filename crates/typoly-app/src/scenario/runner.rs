//! Replays scenario steps against a headless workspace.

use tracing::{debug, info, warn};
use typoly_common::{Action, Rect, SplitDirection, TypolyError};
use typoly_config::{KeybindRegistry, TypolyConfig};
use typoly_layout::drag::RecordingHost;
use typoly_layout::{
    DragOptions, EditorGroup, GhostResize, LayoutEngine, LayoutNode, LayoutState,
    ResizeTarget, WorkspaceLayout,
};

use super::report::{GroupReport, PaneReport, StepReport};
use super::{Release, Step};
use crate::headless::SharedMeasure;

type Group = EditorGroup<RecordingHost, SharedMeasure>;

/// Owns the workspace and keeps the focused group mounted while steps
/// address it. Workspace-level steps unmount it first.
pub struct Runner {
    workspace: WorkspaceLayout,
    engine: LayoutEngine,
    keybinds: KeybindRegistry,
    ghost_limits: (f64, f64),
    viewport: Rect,
    container: SharedMeasure,
    group: Option<Group>,
}

impl Runner {
    pub fn new(config: &TypolyConfig, viewport: Rect) -> Self {
        let layout = &config.layout;
        let defaults = LayoutState::with_defaults(
            layout.default_split_ratio,
            layout.default_right_panel_split_ratio,
            layout.default_minimap_width,
        );
        Self {
            workspace: WorkspaceLayout::with_defaults(defaults, f64::from(layout.group_min_size)),
            engine: LayoutEngine::new(f64::from(layout.handle_hit_width)),
            keybinds: KeybindRegistry::from_config(&config.keybinds),
            ghost_limits: (config.ghost.min_percent, config.ghost.max_percent),
            viewport,
            container: SharedMeasure::default(),
            group: None,
        }
    }

    pub fn workspace(&self) -> &WorkspaceLayout {
        &self.workspace
    }

    fn active_rect(&self) -> Option<Rect> {
        let active = self.workspace.active_group();
        self.workspace
            .compute_layout(self.viewport)
            .into_iter()
            .find(|(id, _)| id == active)
            .map(|(_, rect)| rect)
    }

    /// The focused group, mounted on first use.
    fn group(&mut self) -> &mut Group {
        if self.group.is_none() {
            self.container.set(self.active_rect());
            debug!(group = %self.workspace.active_group(), "mounting group");
        }
        let workspace = &self.workspace;
        let engine = self.engine;
        let container = &self.container;
        self.group.get_or_insert_with(|| {
            workspace.mount_active(engine, RecordingHost::default(), container.clone())
        })
    }

    fn unmount(&mut self) {
        if let Some(group) = self.group.take() {
            self.workspace.unmount(group);
        }
    }

    pub fn apply(&mut self, step: &Step) -> Result<(), TypolyError> {
        match step {
            Step::Toggle { pane } => {
                if self.group().toggle(*pane).is_none() {
                    return Err(TypolyError::Scenario(format!("{pane} cannot be toggled")));
                }
            }
            Step::Drag {
                handle,
                path,
                pin_preview,
                release,
            } => {
                let target = ResizeTarget::from(*handle);
                let options = if *pin_preview {
                    DragOptions::pin_preview()
                } else {
                    DragOptions::default()
                };
                let group = self.group();
                if !group.begin_drag(target, options) {
                    warn!(?target, "drag refused");
                    return Ok(());
                }
                for x in path {
                    group.pointer_move(*x);
                }
                match release {
                    Release::Up => {
                        group.pointer_up();
                    }
                    Release::Escape => {
                        group.cancel_drag();
                    }
                    Release::Hold => {}
                }
            }
            Step::Move { path } => {
                let group = self.group();
                for x in path {
                    group.pointer_move(*x);
                }
            }
            Step::Release => {
                self.group().pointer_up();
            }
            Step::Cancel => {
                self.group().dispatch(&Action::CancelDrag);
            }
            Step::Resize { width } => {
                if !width.is_finite() || *width < 0.0 {
                    return Err(TypolyError::Scenario(format!("invalid width {width}")));
                }
                self.viewport.width = *width;
                self.container.set(self.active_rect());
                info!(width, "container resized");
            }
            Step::Key { combo } => match self.keybinds.lookup(combo).cloned() {
                Some(action) => self.run_action(action),
                None => warn!(combo = %combo, "no action bound"),
            },
            Step::Split { direction } => self.run_action(Action::Split(*direction)),
            Step::Close => self.run_action(Action::CloseGroup),
            Step::FocusNext => {
                self.unmount();
                self.workspace.focus_next();
            }
            Step::Ghost { index, path } => self.ghost(*index, path)?,
        }
        Ok(())
    }

    fn run_action(&mut self, action: Action) {
        if action.toggled_pane().is_some() || action == Action::CancelDrag {
            self.group().dispatch(&action);
            return;
        }
        self.unmount();
        if !self.workspace.execute(&action, None) {
            warn!(action = action.label(), "action had no effect");
        }
    }

    fn ghost(&mut self, index: usize, path: &[f64]) -> Result<(), TypolyError> {
        self.unmount();
        let LayoutNode::Split { id, direction, .. } = self.workspace.tree() else {
            return Err(TypolyError::Scenario("no group split to resize".into()));
        };
        let split_id = id.clone();
        let (start, size) = match direction {
            SplitDirection::Horizontal => (self.viewport.x, self.viewport.width),
            SplitDirection::Vertical => (self.viewport.y, self.viewport.height),
        };
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return Err(TypolyError::Scenario("ghost path is empty".into()));
        };

        let (min_percent, max_percent) = self.ghost_limits;
        let mut ghost = GhostResize::begin(start, size, *first, min_percent, max_percent);
        for x in path {
            let update = ghost.update(*x);
            debug!(position = update.position, at_limit = update.at_limit, "ghost moved");
        }
        if let Some(percent) = ghost.finish(*last) {
            self.workspace
                .commit_ghost(&split_id, index, percent, self.viewport)?;
        }
        Ok(())
    }

    pub fn report(&mut self, step: usize, kind: &'static str) -> StepReport {
        let groups = self
            .workspace
            .compute_layout(self.viewport)
            .into_iter()
            .map(|(id, rect)| GroupReport {
                id: id.to_string(),
                rect,
            })
            .collect();
        let group = self.group();
        let panes = group
            .rects()
            .into_iter()
            .map(|(pane, rect)| PaneReport {
                pane,
                x: rect.x,
                width: rect.width,
            })
            .collect();
        StepReport {
            step,
            kind,
            active_group: group.id().to_string(),
            dragging: group.state().active_resize_target(),
            live_listeners: group.host().live_listeners(),
            geometry: group.geometry(),
            panes,
            groups,
        }
    }
}
