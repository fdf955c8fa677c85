//! Commit-on-release resizing for group boundaries.
//!
//! While dragging only a ghost line moves; the layout is updated once, on
//! release, with the final position as a percentage of the container.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GhostUpdate {
    /// Ghost line position in pixels, clamped to the allowed band.
    pub position: f64,
    /// Whether the clamp kicked in.
    pub at_limit: bool,
}

/// One ghost drag along a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostResize {
    container_start: f64,
    container_size: f64,
    min_percent: f64,
    max_percent: f64,
    position: f64,
}

impl GhostResize {
    /// Start at `pointer`. Percent limits are swapped if given out of order.
    pub fn begin(
        container_start: f64,
        container_size: f64,
        pointer: f64,
        min_percent: f64,
        max_percent: f64,
    ) -> Self {
        let (min_percent, max_percent) = if min_percent <= max_percent {
            (min_percent, max_percent)
        } else {
            (max_percent, min_percent)
        };
        Self {
            container_start,
            container_size: container_size.max(0.0),
            min_percent,
            max_percent,
            position: pointer,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    fn band(&self) -> (f64, f64) {
        (
            self.container_start + self.container_size * self.min_percent / 100.0,
            self.container_start + self.container_size * self.max_percent / 100.0,
        )
    }

    pub fn update(&mut self, pointer: f64) -> GhostUpdate {
        let (min_pos, max_pos) = self.band();
        let (position, at_limit) = if pointer <= min_pos {
            (min_pos, true)
        } else if pointer >= max_pos {
            (max_pos, true)
        } else {
            (pointer, false)
        };
        self.position = position;
        GhostUpdate { position, at_limit }
    }

    /// Final position as a percentage of the container, or `None` for a
    /// container with no size.
    pub fn finish(self, pointer: f64) -> Option<f64> {
        if self.container_size <= 0.0 {
            return None;
        }
        let (min_pos, max_pos) = self.band();
        let position = pointer.max(min_pos).min(max_pos);
        Some((position - self.container_start) / self.container_size * 100.0)
    }
}
