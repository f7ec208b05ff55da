//! Edge Zone Tracker
//!
//! Turns pointer-move samples into edge triggers. Screen edges are single
//! pixel rows/columns, so every latched edge uses two thresholds: one to arm
//! and a wider one to disarm. Pointer jitter on the boundary pixel then
//! cannot refire an action.
//!
//! Rules per sample, in order:
//! 1. top-left corner toggles activation once per dwell
//! 2. corner latch releases outside the wider corner block
//! 3. top/bottom edges scroll on every sample (no latch)
//! 4. left/right edges cycle windows once per arm/disarm cycle
//!
//! Rules after the corner see the activation state as it is after any
//! toggle on the same sample.

use crate::types::{PointerSample, ScreenGeometry};

/// Corner arms when both coordinates are at or below this
pub const CORNER_ARM: i32 = 20;
/// Corner disarms when either coordinate exceeds this
pub const CORNER_RELEASE: i32 = 30;
/// Left edge disarms once `x` exceeds this
pub const LEFT_RELEASE: i32 = 5;
/// Right edge disarms once `x` drops below `total_width - RIGHT_RELEASE_MARGIN`
pub const RIGHT_RELEASE_MARGIN: i32 = 6;

/// Action produced by an edge or corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTrigger {
    ToggleActivation,
    ScrollUp,
    ScrollDown,
    CycleBackward,
    CycleForward,
}

/// Debounce latches, each set while the pointer is inside its zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeLatchSet {
    pub top_left_armed: bool,
    pub left_armed: bool,
    pub right_armed: bool,
}

#[derive(Debug, Clone)]
pub struct EdgeZoneTracker {
    geometry: ScreenGeometry,
    latches: EdgeLatchSet,
}

impl EdgeZoneTracker {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self {
            geometry,
            latches: EdgeLatchSet::default(),
        }
    }

    pub fn latches(&self) -> EdgeLatchSet {
        self.latches
    }

    /// Evaluate one sample against all zones.
    ///
    /// `active` is the activation state before this sample. Returns triggers
    /// in rule order; `ToggleActivation`, if present, is always first.
    pub fn observe(&mut self, sample: PointerSample, active: bool) -> Vec<EdgeTrigger> {
        let PointerSample { x, y, button_held } = sample;
        let mut triggers = Vec::new();
        let mut active = active;

        if x <= CORNER_ARM && y <= CORNER_ARM && !self.latches.top_left_armed {
            self.latches.top_left_armed = true;
            active = !active;
            triggers.push(EdgeTrigger::ToggleActivation);
        }
        if x > CORNER_RELEASE || y > CORNER_RELEASE {
            self.latches.top_left_armed = false;
        }

        if active && y <= 0 && x > CORNER_ARM {
            triggers.push(EdgeTrigger::ScrollUp);
        }
        if active && y >= self.geometry.screen_height - 1 {
            triggers.push(EdgeTrigger::ScrollDown);
        }

        // Left edge stays clear of the corner block so the two never share a sample.
        if active && x <= 0 && y > CORNER_ARM && !self.latches.left_armed {
            self.latches.left_armed = true;
            if !button_held {
                triggers.push(EdgeTrigger::CycleBackward);
            }
        }
        if x > LEFT_RELEASE {
            self.latches.left_armed = false;
        }

        let right_edge = self.geometry.total_width - 1;
        if active && x >= right_edge && !self.latches.right_armed {
            self.latches.right_armed = true;
            if !button_held {
                triggers.push(EdgeTrigger::CycleForward);
            }
        }
        if x < self.geometry.total_width - RIGHT_RELEASE_MARGIN {
            self.latches.right_armed = false;
        }

        triggers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> EdgeZoneTracker {
        EdgeZoneTracker::new(ScreenGeometry::new(1080, 1920))
    }

    fn at(x: i32, y: i32) -> PointerSample {
        PointerSample {
            x,
            y,
            button_held: false,
        }
    }

    #[test]
    fn test_corner_toggles_once_per_dwell() {
        let mut t = tracker();
        let mut toggles = 0;
        for (x, y) in [(10, 10), (5, 5), (20, 20), (25, 25), (0, 0)] {
            toggles += t
                .observe(at(x, y), true)
                .iter()
                .filter(|tr| **tr == EdgeTrigger::ToggleActivation)
                .count();
        }
        assert_eq!(toggles, 1);
        assert!(t.latches().top_left_armed);
    }

    #[test]
    fn test_corner_hysteresis_band_does_not_release() {
        let mut t = tracker();
        assert_eq!(t.observe(at(10, 10), true), vec![EdgeTrigger::ToggleActivation]);
        // Inside the 20..=30 band: still latched
        assert!(t.observe(at(28, 28), true).is_empty());
        assert!(t.observe(at(10, 10), true).is_empty());
        // Leave the release block, come back
        assert!(t.observe(at(31, 10), true).is_empty());
        assert!(!t.latches().top_left_armed);
        assert_eq!(t.observe(at(10, 10), true), vec![EdgeTrigger::ToggleActivation]);
    }

    #[test]
    fn test_corner_toggles_even_when_inactive() {
        let mut t = tracker();
        assert_eq!(t.observe(at(0, 0), false), vec![EdgeTrigger::ToggleActivation]);
    }

    #[test]
    fn test_top_edge_scrolls_every_sample() {
        let mut t = tracker();
        for _ in 0..3 {
            assert_eq!(t.observe(at(960, 0), true), vec![EdgeTrigger::ScrollUp]);
        }
        assert!(t.observe(at(960, 1), true).is_empty());
    }

    #[test]
    fn test_top_edge_inside_corner_columns_does_not_scroll() {
        let mut t = tracker();
        t.observe(at(100, 100), true);
        let triggers = t.observe(at(15, 0), true);
        assert_eq!(triggers, vec![EdgeTrigger::ToggleActivation]);
    }

    #[test]
    fn test_bottom_edge_scrolls_down() {
        let mut t = tracker();
        assert_eq!(t.observe(at(500, 1079), true), vec![EdgeTrigger::ScrollDown]);
        assert_eq!(t.observe(at(500, 1200), true), vec![EdgeTrigger::ScrollDown]);
        assert!(t.observe(at(500, 1078), true).is_empty());
    }

    #[test]
    fn test_edges_do_nothing_while_inactive() {
        let mut t = tracker();
        assert!(t.observe(at(960, 0), false).is_empty());
        assert!(t.observe(at(0, 500), false).is_empty());
        assert!(t.observe(at(1919, 500), false).is_empty());
        assert!(!t.latches().left_armed);
        assert!(!t.latches().right_armed);
    }

    #[test]
    fn test_left_edge_fires_once_per_arm_cycle() {
        let mut t = tracker();
        assert_eq!(t.observe(at(0, 500), true), vec![EdgeTrigger::CycleBackward]);
        assert!(t.observe(at(0, 500), true).is_empty());
        // Inside the release margin: still armed
        assert!(t.observe(at(5, 500), true).is_empty());
        assert!(t.observe(at(0, 500), true).is_empty());
        assert!(t.observe(at(6, 500), true).is_empty());
        assert_eq!(t.observe(at(0, 500), true), vec![EdgeTrigger::CycleBackward]);
    }

    #[test]
    fn test_left_edge_ignores_corner_rows() {
        let mut t = tracker();
        t.observe(at(100, 100), true);
        assert!(!t.observe(at(0, 20), true).contains(&EdgeTrigger::CycleBackward));
        assert!(!t.latches().left_armed);
    }

    #[test]
    fn test_right_edge_fires_once_per_arm_cycle() {
        let mut t = tracker();
        assert_eq!(t.observe(at(1919, 500), true), vec![EdgeTrigger::CycleForward]);
        assert!(t.observe(at(1925, 500), true).is_empty());
        assert!(t.observe(at(1914, 500), true).is_empty());
        assert!(t.latches().right_armed);
        assert!(t.observe(at(1913, 500), true).is_empty());
        assert!(!t.latches().right_armed);
        assert_eq!(t.observe(at(1919, 500), true), vec![EdgeTrigger::CycleForward]);
    }

    #[test]
    fn test_held_button_arms_without_firing() {
        let mut t = tracker();
        let dragging = PointerSample {
            x: 0,
            y: 500,
            button_held: true,
        };
        assert!(t.observe(dragging, true).is_empty());
        assert!(t.latches().left_armed);
        // Releasing the button while still on the edge does not fire late
        assert!(t.observe(at(0, 500), true).is_empty());
    }

    #[test]
    fn test_rules_after_corner_see_toggled_state() {
        // A 20px-tall screen puts the corner on the bottom edge
        let mut t = EdgeZoneTracker::new(ScreenGeometry::new(20, 1920));
        let triggers = t.observe(at(10, 19), false);
        assert_eq!(
            triggers,
            vec![EdgeTrigger::ToggleActivation, EdgeTrigger::ScrollDown]
        );
    }
}
