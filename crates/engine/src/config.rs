//! Engine configuration
//!
//! The hysteresis thresholds are fixed constants in [`crate::edge_zone`];
//! only the knobs below can be changed from the runner's config file.

use serde::Deserialize;

/// Wheel units sent per sample while the pointer rests on the top or bottom edge
pub const DEFAULT_SCROLL_STEP: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wheel units per scroll action
    pub scroll_step: i32,
    /// Turn NumLock on once at startup if it is off
    pub force_num_lock_on_start: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scroll_step: DEFAULT_SCROLL_STEP,
            force_num_lock_on_start: true,
        }
    }
}
