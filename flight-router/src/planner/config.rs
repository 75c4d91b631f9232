//! Planner tuning parameters.

use serde::{Deserialize, Serialize};

/// Parameters applied while building the transit graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Edge weight assigned to a link whose flown path has fewer than two
    /// waypoints and therefore no measurable length.
    pub fallback_link_weight: u32,

    /// Upper bound for a computed link weight. Accumulated path lengths
    /// longer than this clamp here instead of wrapping.
    pub max_link_weight: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fallback_link_weight: 0xFFFF,
            max_link_weight: 0xFFFF,
        }
    }
}
