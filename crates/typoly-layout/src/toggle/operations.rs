use tracing::debug;
use typoly_common::PaneRole;

use super::{
    ToggleOutcome, MIN_PANE_WIDTH, NEAR_COLLAPSE_RATIO, PREVIEW_MAX_WIDTH, PREVIEW_SHARE,
    SNAPSHOT_DEFAULT_WIDTH, SNAPSHOT_MIN_WIDTH,
};
use crate::state::{LayoutState, DEFAULT_SPLIT_RATIO};

/// Toggle any switchable pane. Returns `None` for the editor.
pub fn toggle(
    state: &mut LayoutState,
    pane: PaneRole,
    container_width: Option<f64>,
) -> Option<ToggleOutcome> {
    match pane {
        PaneRole::Editor => None,
        PaneRole::Preview => Some(toggle_preview(state, container_width)),
        PaneRole::Snapshot => Some(toggle_snapshot(state, container_width)),
        PaneRole::Minimap => Some(toggle_minimap(state, container_width)),
    }
}

/// Show or hide the minimap, re-solving the split so the right panel keeps
/// its pixel width against the new wrapper width.
pub fn toggle_minimap(state: &mut LayoutState, container_width: Option<f64>) -> ToggleOutcome {
    let Some(cw) = container_width else {
        debug!("minimap toggle skipped: container not measured");
        return ToggleOutcome::Unmeasured;
    };
    let opening = !state.show_minimap;
    let wrapper = state.wrapper_width(cw);

    if wrapper.is_nan() || wrapper <= 0.0 {
        if opening && state.minimap_width_px <= 0.0 {
            state.reset_minimap_width();
        }
        state.show_minimap = opening;
        debug!(container_width = cw, opening, "minimap toggled without geometry");
        return ToggleOutcome::FlagOnly;
    }

    if opening {
        state.set_minimap_width(state.minimap_width_px, Some(cw));
    }
    let minimap = state.minimap_width(cw);
    let next_wrapper = if opening {
        wrapper - minimap
    } else {
        wrapper + minimap
    };

    if next_wrapper < 0.0 {
        state.show_minimap = opening;
        debug!(next_wrapper, "minimap toggled without geometry: wrapper would go negative");
        return ToggleOutcome::FlagOnly;
    }

    if state.has_right_panel() {
        let right_px = wrapper * (1.0 - state.split_ratio);
        state.set_split_ratio(1.0 - right_px / next_wrapper.max(1.0));
    }
    state.show_minimap = opening;
    debug!(
        opening,
        split_ratio = state.split_ratio,
        minimap_width = minimap,
        "minimap toggled"
    );
    ToggleOutcome::Applied
}

/// Show or hide the preview. A visible snapshot keeps its pixel width.
pub fn toggle_preview(state: &mut LayoutState, container_width: Option<f64>) -> ToggleOutcome {
    toggle_right_pane(state, PaneRole::Preview, container_width)
}

/// Show or hide the snapshot. A visible preview keeps its pixel width.
pub fn toggle_snapshot(state: &mut LayoutState, container_width: Option<f64>) -> ToggleOutcome {
    toggle_right_pane(state, PaneRole::Snapshot, container_width)
}

fn toggle_right_pane(
    state: &mut LayoutState,
    pane: PaneRole,
    container_width: Option<f64>,
) -> ToggleOutcome {
    let Some(cw) = container_width else {
        debug!(%pane, "toggle skipped: container not measured");
        return ToggleOutcome::Unmeasured;
    };
    let opening = !state.is_visible(pane);
    let wrapper = state.wrapper_width(cw);

    if wrapper.is_nan() || wrapper <= 0.0 {
        state.set_visible(pane, opening);
        debug!(%pane, container_width = cw, opening, "toggled without geometry");
        return ToggleOutcome::FlagOnly;
    }

    let partner = partner_of(pane);
    let partner_visible = state.is_visible(partner);
    let right_px = wrapper * (1.0 - state.split_ratio);

    match (opening, partner_visible) {
        // Survivor keeps its width; the split is re-solved around it alone.
        (false, true) => {
            let survivor_px = match partner {
                PaneRole::Snapshot => right_px * (1.0 - state.right_panel_split_ratio),
                _ => right_px * state.right_panel_split_ratio,
            };
            state.set_split_ratio(1.0 - survivor_px / wrapper);
        }
        // Right panel disappears; the ratio is kept for the next open.
        (false, false) => {}
        (true, true) => {
            let (preview_px, snapshot_px) = match pane {
                PaneRole::Preview => (preview_width_beside(wrapper, right_px), right_px),
                _ => (right_px, snapshot_width_beside(wrapper, right_px)),
            };
            let new_right = preview_px + snapshot_px;
            state.set_split_ratio(1.0 - new_right / wrapper);
            state.set_right_panel_split_ratio(preview_px / new_right);
        }
        (true, false) => {
            if state.split_ratio > NEAR_COLLAPSE_RATIO {
                state.set_split_ratio(DEFAULT_SPLIT_RATIO);
            }
        }
    }

    state.set_visible(pane, opening);
    debug!(
        %pane,
        opening,
        split_ratio = state.split_ratio,
        right_panel_split_ratio = state.right_panel_split_ratio,
        "pane toggled"
    );
    ToggleOutcome::Applied
}

fn partner_of(pane: PaneRole) -> PaneRole {
    match pane {
        PaneRole::Preview => PaneRole::Snapshot,
        _ => PaneRole::Preview,
    }
}

fn preview_width_beside(wrapper: f64, snapshot_px: f64) -> f64 {
    ((wrapper - snapshot_px) * PREVIEW_SHARE)
        .min(PREVIEW_MAX_WIDTH)
        .max(MIN_PANE_WIDTH)
}

/// Default snapshot width, shrunk so the editor keeps at least
/// `MIN_PANE_WIDTH`, but never below `SNAPSHOT_MIN_WIDTH`.
fn snapshot_width_beside(wrapper: f64, preview_px: f64) -> f64 {
    if wrapper - preview_px - SNAPSHOT_DEFAULT_WIDTH < MIN_PANE_WIDTH {
        (wrapper - preview_px - MIN_PANE_WIDTH).max(SNAPSHOT_MIN_WIDTH)
    } else {
        SNAPSHOT_DEFAULT_WIDTH
    }
}
