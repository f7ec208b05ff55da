//! Mouse Hook Implementation
//!
//! Windows low-level mouse hook feeding pointer moves and button changes to
//! the engine.

use crate::input_sender::origin_of;
use parking_lot::{const_mutex, Mutex};
use pointer_helper_engine::hook_slot::HookSlot;
use pointer_helper_engine::types::{HookKind, KeyFlags, MouseButton, RawInputEvent};
use pointer_helper_engine::Result;
use windows::Win32::Foundation::{HINSTANCE, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, MSLLHOOKSTRUCT, WH_MOUSE_LL,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEMOVE, WM_RBUTTONDOWN,
    WM_RBUTTONUP,
};

/// Global mouse hook handle
static MOUSE_HOOK: Mutex<HookSlot<HHOOK>> = const_mutex(HookSlot::new(HookKind::Pointer));

/// Install the low-level mouse hook. Installing twice keeps the first hook.
pub fn install_mouse_hook() -> Result<()> {
    MOUSE_HOOK.lock().install_with(|| unsafe {
        let module = GetModuleHandleW(None)?;
        SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_proc), HINSTANCE(module.0), 0)
    })?;
    Ok(())
}

/// Uninstall the mouse hook. No-op if it is not installed.
pub fn uninstall_mouse_hook() {
    MOUSE_HOOK.lock().remove_with(|hook| unsafe {
        let _ = UnhookWindowsHookEx(hook);
    });
}

/// Mouse hook callback procedure
unsafe extern "system" fn mouse_proc(n_code: i32, w_param: WPARAM, l_param: LPARAM) -> LRESULT {
    if n_code >= 0 {
        let ms_struct = &*(l_param.0 as *const MSLLHOOKSTRUCT);
        let origin = origin_of(ms_struct.dwExtraInfo);
        let button = |button, flags| RawInputEvent::PointerButton {
            button,
            flags,
            origin,
        };

        let event = match w_param.0 as u32 {
            WM_MOUSEMOVE => Some(RawInputEvent::PointerMove {
                x: ms_struct.pt.x,
                y: ms_struct.pt.y,
            }),
            WM_LBUTTONDOWN => Some(button(MouseButton::Left, KeyFlags::Down)),
            WM_LBUTTONUP => Some(button(MouseButton::Left, KeyFlags::Up)),
            WM_RBUTTONDOWN => Some(button(MouseButton::Right, KeyFlags::Down)),
            WM_RBUTTONUP => Some(button(MouseButton::Right, KeyFlags::Up)),
            WM_MBUTTONDOWN => Some(button(MouseButton::Middle, KeyFlags::Down)),
            WM_MBUTTONUP => Some(button(MouseButton::Middle, KeyFlags::Up)),
            _ => None,
        };

        if let Some(event) = event {
            super::dispatch(event);
        }
    }

    // Always pass to next hook
    CallNextHookEx(None, n_code, w_param, l_param)
}
