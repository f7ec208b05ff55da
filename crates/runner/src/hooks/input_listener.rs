//! Input Listener
//!
//! Owns both hooks for the lifetime of the runner. Low-level hooks are
//! serviced by the thread that installed them, so `start` and `run` must be
//! called on the same thread.

use super::{
    install_keyboard_hook, install_mouse_hook, set_sink, uninstall_keyboard_hook,
    uninstall_mouse_hook,
};
use pointer_helper_engine::{Result, SharedSink};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, error, info, warn};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, PostThreadMessageW, TranslateMessage, MSG, WM_QUIT,
};

/// Thread running the message loop, 0 when none
static LOOP_THREAD: AtomicU32 = AtomicU32::new(0);

pub struct InputListener {
    _private: (),
}

impl InputListener {
    /// Install both hooks on the current thread, forwarding to `sink`.
    ///
    /// If either hook fails, anything already installed is removed again.
    pub fn start(sink: SharedSink) -> Result<Self> {
        set_sink(Some(sink));
        let listener = InputListener { _private: () };

        install_mouse_hook()?;
        install_keyboard_hook()?;

        LOOP_THREAD.store(unsafe { GetCurrentThreadId() }, Ordering::Release);
        Ok(listener)
    }

    /// Pump messages until `WM_QUIT` arrives
    pub fn run(&self) {
        info!("Input listener message loop started");
        let mut msg = MSG::default();

        loop {
            unsafe {
                let result = GetMessageW(&mut msg, None, 0, 0);

                match result.0 {
                    -1 => {
                        error!("GetMessage error");
                        break;
                    }
                    0 => {
                        debug!("WM_QUIT received");
                        break;
                    }
                    _ => {
                        TranslateMessage(&msg);
                        DispatchMessageW(&msg);
                    }
                }
            }
        }
        info!("Input listener message loop ended");
    }

    /// Remove both hooks and release the engine. Safe to call repeatedly.
    pub fn stop(&mut self) {
        debug!("Stopping input listener");
        uninstall_mouse_hook();
        uninstall_keyboard_hook();
        set_sink(None);
        LOOP_THREAD.store(0, Ordering::Release);
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ask the message loop to exit. Callable from any thread.
pub fn request_quit() {
    let thread = LOOP_THREAD.load(Ordering::Acquire);
    if thread == 0 {
        return;
    }
    if let Err(e) = unsafe { PostThreadMessageW(thread, WM_QUIT, WPARAM(0), LPARAM(0)) } {
        warn!("Failed to post quit message: {}", e);
    }
}
