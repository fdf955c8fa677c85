//! Pane toggles.
//!
//! Opening or closing Preview, Snapshot or Minimap keeps every other visible
//! pane at its current pixel width; the toggled pane takes its width from,
//! or gives it back to, the editor.

mod operations;

pub use operations::*;

use serde::Serialize;

/// Smallest width a newly inserted right-panel pane or the editor keeps.
pub const MIN_PANE_WIDTH: f64 = 100.0;
pub const PREVIEW_MAX_WIDTH: f64 = 400.0;
/// Share of the free wrapper width a preview takes when opened beside a snapshot.
pub const PREVIEW_SHARE: f64 = 0.4;
pub const SNAPSHOT_DEFAULT_WIDTH: f64 = 340.0;
pub const SNAPSHOT_MIN_WIDTH: f64 = 200.0;
/// A split ratio above this counts as a collapsed right panel.
pub const NEAR_COLLAPSE_RATIO: f64 = 0.9;

/// How a toggle was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// Flag flipped and ratios re-solved against the measured width.
    Applied,
    /// Container had no usable width; only the flag flipped.
    FlagOnly,
    /// Container not measured yet; nothing changed.
    Unmeasured,
}
