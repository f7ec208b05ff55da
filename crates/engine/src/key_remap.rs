//! Key Remapper
//!
//! Reuses CapsLock, ScrollLock, PrintScreen and NumLock as pointer buttons:
//!
//! | key         | down                 | up         |
//! |-------------|----------------------|------------|
//! | CapsLock    | left press           | left up    |
//! | PrintScreen | left press           | left up    |
//! | ScrollLock  | right press          | right up   |
//! | NumLock     | left double click    | -          |
//!
//! One key-down latch covers the whole keyboard: any accepted key-down sets
//! it and every key-up resets it. This collapses OS key-repeat and keeps the
//! remapped keys inert while another key is held.

use crate::types::{KeyFlags, MouseButton, PointerInjection, VirtualKey};

/// Engine state a key event is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapGate {
    pub active: bool,
    pub suppressed: bool,
}

/// Pointer effects of one key event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapOutcome {
    pub injections: Vec<PointerInjection>,
    /// Button pressed (`true`) or released (`false`) by this event, if any
    pub button_held: Option<(MouseButton, bool)>,
}

#[derive(Debug, Clone, Default)]
pub struct KeyRemapper {
    key_down_latch: bool,
}

fn held_button(key: VirtualKey) -> Option<MouseButton> {
    match key {
        VirtualKey::CapsLock | VirtualKey::PrintScreen => Some(MouseButton::Left),
        VirtualKey::ScrollLock => Some(MouseButton::Right),
        _ => None,
    }
}

fn button(button: MouseButton, flags: KeyFlags) -> PointerInjection {
    PointerInjection::Button { button, flags }
}

impl KeyRemapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down_latched(&self) -> bool {
        self.key_down_latch
    }

    pub fn key_down(&mut self, key: VirtualKey, gate: RemapGate) -> RemapOutcome {
        if !gate.active || gate.suppressed || self.key_down_latch {
            return RemapOutcome::default();
        }

        self.key_down_latch = true;

        if let Some(b) = held_button(key) {
            return RemapOutcome {
                injections: vec![button(b, KeyFlags::Down)],
                button_held: Some((b, true)),
            };
        }

        if key == VirtualKey::NumLock {
            let click = [
                button(MouseButton::Left, KeyFlags::Down),
                button(MouseButton::Left, KeyFlags::Up),
            ];
            return RemapOutcome {
                injections: [click, click].concat(),
                button_held: None,
            };
        }

        RemapOutcome::default()
    }

    /// Releases are sent regardless of activation so a press started while
    /// active is always let go.
    pub fn key_up(&mut self, key: VirtualKey, gate: RemapGate) -> RemapOutcome {
        if gate.suppressed {
            return RemapOutcome::default();
        }
        self.key_down_latch = false;

        match held_button(key) {
            Some(b) => RemapOutcome {
                injections: vec![button(b, KeyFlags::Up)],
                button_held: Some((b, false)),
            },
            None => RemapOutcome::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: RemapGate = RemapGate {
        active: true,
        suppressed: false,
    };

    #[test]
    fn test_caps_lock_press_and_release() {
        let mut remap = KeyRemapper::new();
        let down = remap.key_down(VirtualKey::CapsLock, OPEN);
        assert_eq!(
            down.injections,
            vec![button(MouseButton::Left, KeyFlags::Down)]
        );
        assert_eq!(down.button_held, Some((MouseButton::Left, true)));

        let up = remap.key_up(VirtualKey::CapsLock, OPEN);
        assert_eq!(up.injections, vec![button(MouseButton::Left, KeyFlags::Up)]);
        assert_eq!(up.button_held, Some((MouseButton::Left, false)));
    }

    #[test]
    fn test_key_repeat_collapses_to_one_press() {
        let mut remap = KeyRemapper::new();
        let presses: usize = (0..10)
            .map(|_| remap.key_down(VirtualKey::CapsLock, OPEN).injections.len())
            .sum();
        assert_eq!(presses, 1);
        assert_eq!(remap.key_up(VirtualKey::CapsLock, OPEN).injections.len(), 1);
        assert!(!remap.key_down_latched());
    }

    #[test]
    fn test_scroll_lock_is_right_button() {
        let mut remap = KeyRemapper::new();
        let down = remap.key_down(VirtualKey::ScrollLock, OPEN);
        assert_eq!(
            down.injections,
            vec![button(MouseButton::Right, KeyFlags::Down)]
        );
    }

    #[test]
    fn test_print_screen_is_left_button() {
        let mut remap = KeyRemapper::new();
        let down = remap.key_down(VirtualKey::PrintScreen, OPEN);
        assert_eq!(
            down.injections,
            vec![button(MouseButton::Left, KeyFlags::Down)]
        );
    }

    #[test]
    fn test_num_lock_double_clicks_without_holding() {
        let mut remap = KeyRemapper::new();
        let down = remap.key_down(VirtualKey::NumLock, OPEN);
        assert_eq!(down.injections.len(), 4);
        assert_eq!(down.injections[2], button(MouseButton::Left, KeyFlags::Down));
        assert_eq!(down.injections[3], button(MouseButton::Left, KeyFlags::Up));
        assert_eq!(down.button_held, None);

        let up = remap.key_up(VirtualKey::NumLock, OPEN);
        assert!(up.injections.is_empty());
        assert_eq!(up.button_held, None);
    }

    #[test]
    fn test_inactive_or_suppressed_down_is_ignored() {
        let mut remap = KeyRemapper::new();
        let inactive = RemapGate {
            active: false,
            suppressed: false,
        };
        let suppressed = RemapGate {
            active: true,
            suppressed: true,
        };
        assert_eq!(
            remap.key_down(VirtualKey::CapsLock, inactive),
            RemapOutcome::default()
        );
        assert_eq!(
            remap.key_down(VirtualKey::CapsLock, suppressed),
            RemapOutcome::default()
        );
        assert!(!remap.key_down_latched());
    }

    #[test]
    fn test_release_happens_even_when_inactive() {
        let mut remap = KeyRemapper::new();
        remap.key_down(VirtualKey::CapsLock, OPEN);
        let inactive = RemapGate {
            active: false,
            suppressed: false,
        };
        let up = remap.key_up(VirtualKey::CapsLock, inactive);
        assert_eq!(up.button_held, Some((MouseButton::Left, false)));
    }

    #[test]
    fn test_any_key_up_resets_latch() {
        let mut remap = KeyRemapper::new();
        remap.key_down(VirtualKey::CapsLock, OPEN);
        assert!(remap.key_up(VirtualKey::Other(0x10), OPEN).injections.is_empty());
        assert!(!remap.key_down_latched());
    }

    #[test]
    fn test_held_unmapped_key_blocks_remap() {
        let mut remap = KeyRemapper::new();
        let shift = VirtualKey::Other(0x10);
        assert!(remap.key_down(shift, OPEN).injections.is_empty());
        assert!(remap.key_down(shift, OPEN).injections.is_empty());
        assert!(remap.key_down_latched());
        assert_eq!(
            remap.key_down(VirtualKey::CapsLock, OPEN),
            RemapOutcome::default()
        );

        remap.key_up(shift, OPEN);
        assert_eq!(remap.key_down(VirtualKey::CapsLock, OPEN).injections.len(), 1);
    }

    #[test]
    fn test_inactive_key_down_does_not_latch() {
        let mut remap = KeyRemapper::new();
        let inactive = RemapGate {
            active: false,
            suppressed: false,
        };
        remap.key_down(VirtualKey::Other(0x10), inactive);
        assert!(!remap.key_down_latched());
    }
}
