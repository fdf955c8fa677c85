//! Per-step JSON output.

use serde::Serialize;
use typoly_common::{PaneRole, Rect};
use typoly_layout::{PaneGeometry, ResizeTarget};

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub kind: &'static str,
    pub active_group: String,
    pub dragging: ResizeTarget,
    pub live_listeners: u32,
    pub geometry: PaneGeometry,
    pub panes: Vec<PaneReport>,
    pub groups: Vec<GroupReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaneReport {
    pub pane: PaneRole,
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub id: String,
    pub rect: Rect,
}
