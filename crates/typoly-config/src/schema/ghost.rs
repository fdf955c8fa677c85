//! Ghost (commit-on-release) resize handle limits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Lowest committed position as a percentage of the container (0-100).
    pub min_percent: f64,
    /// Highest committed position as a percentage of the container (0-100).
    pub max_percent: f64,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            min_percent: 20.0,
            max_percent: 80.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_config_defaults() {
        let config = GhostConfig::default();
        assert!((config.min_percent - 20.0).abs() < f64::EPSILON);
        assert!((config.max_percent - 80.0).abs() < f64::EPSILON);
    }
}
