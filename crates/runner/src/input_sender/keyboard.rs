//! Keyboard Input Sending

use super::INJECTION_MARKER;
use pointer_helper_engine::types::{LockKey, VirtualKey};
use pointer_helper_engine::{EngineError, Result};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyState, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, VIRTUAL_KEY,
};

/// Send a key press (key down)
pub fn key_down(key: VirtualKey) -> Result<()> {
    send_key_event(key, false)
}

/// Send a key release (key up)
pub fn key_up(key: VirtualKey) -> Result<()> {
    send_key_event(key, true)
}

/// Whether a lock key is currently toggled on
pub fn toggle_state(key: LockKey) -> bool {
    let state = unsafe { GetKeyState(key.virtual_key().code() as i32) };
    state & 1 != 0
}

/// Send a key event. Lock keys need the extended flag to toggle reliably.
fn send_key_event(key: VirtualKey, key_up: bool) -> Result<()> {
    let mut flags = KEYBD_EVENT_FLAGS(0);
    if matches!(
        key,
        VirtualKey::CapsLock | VirtualKey::NumLock | VirtualKey::ScrollLock
    ) {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    if key_up {
        flags |= KEYEVENTF_KEYUP;
    }

    let input = INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(key.code() as u16),
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: INJECTION_MARKER,
            },
        },
    };

    let result = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };

    if result == 0 {
        return Err(EngineError::Injection(format!(
            "key {:?} (up: {}) was blocked",
            key, key_up
        )));
    }

    Ok(())
}
