//! Scenario file format.

use serde::Deserialize;
use typoly_common::{PaneRole, SplitDirection};
use typoly_layout::ResizeTarget;

fn default_height() -> f64 {
    800.0
}

/// A scripted session: container size and the steps to replay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Container width; the CLI default applies when absent.
    pub width: Option<f64>,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    EditorSplit,
    RightPanelSplit,
    Minimap,
}

impl From<Handle> for ResizeTarget {
    fn from(handle: Handle) -> Self {
        match handle {
            Handle::EditorSplit => ResizeTarget::EditorSplit,
            Handle::RightPanelSplit => ResizeTarget::RightPanelSplit,
            Handle::Minimap => ResizeTarget::Minimap,
        }
    }
}

/// How a `drag` step finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Release {
    /// Pointer-up after the last point.
    #[default]
    Up,
    /// Escape after the last point.
    Escape,
    /// Leave the drag running for later steps.
    Hold,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Toggle {
        pane: PaneRole,
    },
    Drag {
        handle: Handle,
        path: Vec<f64>,
        #[serde(default)]
        pin_preview: bool,
        #[serde(default)]
        release: Release,
    },
    /// Continue a held drag.
    Move {
        path: Vec<f64>,
    },
    Release,
    Cancel,
    /// Resize the window.
    Resize {
        width: f64,
    },
    Key {
        combo: String,
    },
    Split {
        direction: SplitDirection,
    },
    Close,
    FocusNext,
    /// Ghost-drag a boundary of the root group split.
    Ghost {
        #[serde(default)]
        index: usize,
        path: Vec<f64>,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Toggle { .. } => "toggle",
            Step::Drag { .. } => "drag",
            Step::Move { .. } => "move",
            Step::Release => "release",
            Step::Cancel => "cancel",
            Step::Resize { .. } => "resize",
            Step::Key { .. } => "key",
            Step::Split { .. } => "split",
            Step::Close => "close",
            Step::FocusNext => "focus_next",
            Step::Ghost { .. } => "ghost",
        }
    }
}
