//! Input Sending Module
//!
//! Synthetic keyboard and mouse input through `SendInput`. Every event is
//! stamped with [`INJECTION_MARKER`] so the hooks can tell our own input
//! from everyone else's.

mod keyboard;
mod mouse;

pub use keyboard::*;
pub use mouse::*;

use pointer_helper_engine::platform::{InputInjector, ToggleStateSource};
use pointer_helper_engine::types::{
    KeyFlags, LockKey, Origin, PointerInjection, VirtualKey,
};
use pointer_helper_engine::Result;

/// Value placed in `dwExtraInfo` of every injected event ("PHLP")
pub const INJECTION_MARKER: usize = 0x5048_4C50;

/// Origin of a hooked event, read from its `dwExtraInfo`
pub fn origin_of(extra_info: usize) -> Origin {
    if extra_info == INJECTION_MARKER {
        Origin::Synthetic
    } else {
        Origin::Hardware
    }
}

/// Win32 implementation of the engine's input seams
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Input;

impl InputInjector for Win32Input {
    fn inject_pointer(&mut self, event: PointerInjection) -> Result<()> {
        match event {
            PointerInjection::Button {
                button,
                flags: KeyFlags::Down,
            } => button_down(button),
            PointerInjection::Button {
                button,
                flags: KeyFlags::Up,
            } => button_up(button),
            PointerInjection::Wheel(delta) => scroll(delta),
        }
    }

    fn inject_key(&mut self, key: VirtualKey, flags: KeyFlags) -> Result<()> {
        match flags {
            KeyFlags::Down => key_down(key),
            KeyFlags::Up => key_up(key),
        }
    }
}

impl ToggleStateSource for Win32Input {
    fn query_toggle_state(&self, key: LockKey) -> Result<bool> {
        Ok(toggle_state(key))
    }
}
