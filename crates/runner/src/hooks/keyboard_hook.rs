//! Keyboard Hook Implementation
//!
//! Windows low-level keyboard hook feeding key transitions to the engine.
//! Only plain `WM_KEYDOWN`/`WM_KEYUP` are forwarded; transitions reported as
//! system keys (with Alt held) pass through untouched.

use crate::input_sender::origin_of;
use parking_lot::{const_mutex, Mutex};
use pointer_helper_engine::hook_slot::HookSlot;
use pointer_helper_engine::types::{HookKind, Origin, RawInputEvent, VirtualKey};
use pointer_helper_engine::Result;
use windows::Win32::Foundation::{HINSTANCE, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, KBDLLHOOKSTRUCT,
    WH_KEYBOARD_LL, WM_KEYDOWN, WM_KEYUP,
};

/// Global keyboard hook handle
static KEYBOARD_HOOK: Mutex<HookSlot<HHOOK>> = const_mutex(HookSlot::new(HookKind::Keyboard));

/// Install the low-level keyboard hook. Installing twice keeps the first hook.
pub fn install_keyboard_hook() -> Result<()> {
    KEYBOARD_HOOK.lock().install_with(|| unsafe {
        let module = GetModuleHandleW(None)?;
        SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_proc), HINSTANCE(module.0), 0)
    })?;
    Ok(())
}

/// Uninstall the keyboard hook. No-op if it is not installed.
pub fn uninstall_keyboard_hook() {
    KEYBOARD_HOOK.lock().remove_with(|hook| unsafe {
        let _ = UnhookWindowsHookEx(hook);
    });
}

/// Engine event for one keyboard hook message
fn key_event(message: u32, key: VirtualKey, origin: Origin) -> Option<RawInputEvent> {
    match message {
        WM_KEYDOWN => Some(RawInputEvent::KeyDown { key, origin }),
        WM_KEYUP => Some(RawInputEvent::KeyUp { key, origin }),
        _ => None,
    }
}

/// Keyboard hook callback procedure
unsafe extern "system" fn keyboard_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    if n_code >= 0 {
        let kb_struct = &*(l_param.0 as *const KBDLLHOOKSTRUCT);
        let key = VirtualKey::from(kb_struct.vkCode);
        let origin = origin_of(kb_struct.dwExtraInfo);

        if let Some(event) = key_event(w_param.0 as u32, key, origin) {
            super::dispatch(event);
        }
    }

    // Always pass to next hook - don't block input
    CallNextHookEx(None, n_code, w_param, l_param)
}
