//! Mouse Input Sending

use super::INJECTION_MARKER;
use pointer_helper_engine::types::MouseButton;
use pointer_helper_engine::{EngineError, Result};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
    MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP,
    MOUSEEVENTF_WHEEL, MOUSEINPUT, MOUSE_EVENT_FLAGS,
};

/// Press a mouse button (button down)
pub fn button_down(button: MouseButton) -> Result<()> {
    let flags = match button {
        MouseButton::Left => MOUSEEVENTF_LEFTDOWN,
        MouseButton::Right => MOUSEEVENTF_RIGHTDOWN,
        MouseButton::Middle => MOUSEEVENTF_MIDDLEDOWN,
    };
    send_mouse_input(flags, 0, "button down")
}

/// Release a mouse button (button up)
pub fn button_up(button: MouseButton) -> Result<()> {
    let flags = match button {
        MouseButton::Left => MOUSEEVENTF_LEFTUP,
        MouseButton::Right => MOUSEEVENTF_RIGHTUP,
        MouseButton::Middle => MOUSEEVENTF_MIDDLEUP,
    };
    send_mouse_input(flags, 0, "button up")
}

/// Scroll the mouse wheel; positive is away from the user
pub fn scroll(delta: i32) -> Result<()> {
    send_mouse_input(MOUSEEVENTF_WHEEL, delta as u32, "scroll")
}

fn send_mouse_input(flags: MOUSE_EVENT_FLAGS, mouse_data: u32, what: &str) -> Result<()> {
    let input = INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx: 0,
                dy: 0,
                mouseData: mouse_data,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: INJECTION_MARKER,
            },
        },
    };

    let result = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };

    if result == 0 {
        return Err(EngineError::Injection(format!("mouse {} was blocked", what)));
    }

    Ok(())
}
