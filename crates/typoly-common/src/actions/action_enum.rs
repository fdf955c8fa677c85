use serde::{Deserialize, Serialize};

use super::SplitDirection;

/// Every user-triggerable layout action.
///
/// Keybinds and toolbar buttons both resolve to an `Action`; the editor
/// group and the workspace layout route it to the right controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Panes --
    TogglePreview,
    ToggleSnapshot,
    ToggleMinimap,

    // -- Groups --
    Split(SplitDirection),
    CloseGroup,

    // -- Drag --
    CancelDrag,

    // -- Noop --
    None,
}
