use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// The four fixed regions of an editor group's content strip, left to right
/// in the order Editor, Preview, Snapshot, Minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneRole {
    Editor,
    Preview,
    Snapshot,
    Minimap,
}

impl PaneRole {
    /// The editor is always visible; every other pane can be switched.
    pub fn is_toggleable(&self) -> bool {
        !matches!(self, PaneRole::Editor)
    }
}

impl fmt::Display for PaneRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaneRole::Editor => "editor",
            PaneRole::Preview => "preview",
            PaneRole::Snapshot => "snapshot",
            PaneRole::Minimap => "minimap",
        };
        f.write_str(name)
    }
}
