use crate::types::PaneRole;

use super::{Action, SplitDirection};

impl Action {
    /// Human-readable label for toolbar tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Action::TogglePreview => "Toggle Preview",
            Action::ToggleSnapshot => "Toggle Code Snapshot",
            Action::ToggleMinimap => "Toggle Minimap",
            Action::Split(SplitDirection::Horizontal) => "Split Right",
            Action::Split(SplitDirection::Vertical) => "Split Down",
            Action::CloseGroup => "Close Group",
            Action::CancelDrag => "Cancel Resize",
            Action::None => "None",
        }
    }

    /// The pane a toggle action switches, if it is one.
    pub fn toggled_pane(&self) -> Option<PaneRole> {
        match self {
            Action::TogglePreview => Some(PaneRole::Preview),
            Action::ToggleSnapshot => Some(PaneRole::Snapshot),
            Action::ToggleMinimap => Some(PaneRole::Minimap),
            _ => None,
        }
    }

    pub fn toggle_for(pane: PaneRole) -> Option<Action> {
        match pane {
            PaneRole::Editor => None,
            PaneRole::Preview => Some(Action::TogglePreview),
            PaneRole::Snapshot => Some(Action::ToggleSnapshot),
            PaneRole::Minimap => Some(Action::ToggleMinimap),
        }
    }

    /// Actions exposed as toolbar buttons.
    pub fn palette_actions() -> Vec<Action> {
        vec![
            Action::TogglePreview,
            Action::ToggleSnapshot,
            Action::ToggleMinimap,
            Action::Split(SplitDirection::Horizontal),
            Action::Split(SplitDirection::Vertical),
            Action::CloseGroup,
        ]
    }
}
