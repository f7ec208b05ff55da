//! Window Directory
//!
//! Process snapshot from `sysinfo` joined with a top-level window scan. A
//! process's main window is its first visible, unowned top-level window,
//! preferring one that has a title.

use pointer_helper_engine::platform::WindowDirectory;
use pointer_helper_engine::types::{ProcessWindow, WindowHandle};
use pointer_helper_engine::{EngineError, Result};
use std::collections::HashMap;
use sysinfo::{ProcessRefreshKind, System};
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, TRUE};
use windows::Win32::System::Threading::{AttachThreadInput, GetCurrentThreadId};
use windows::Win32::UI::WindowsAndMessaging::{
    BringWindowToTop, EnumWindows, GetForegroundWindow, GetWindow, GetWindowTextW,
    GetWindowThreadProcessId, IsIconic, IsWindowVisible, SetForegroundWindow, GW_OWNER,
};

struct MainWindow {
    hwnd: HWND,
    title: String,
}

#[derive(Debug, Default)]
pub struct Win32WindowDirectory;

impl Win32WindowDirectory {
    pub fn new() -> Self {
        Self
    }
}

fn window_title(hwnd: HWND) -> String {
    let mut buffer = [0u16; 512];
    let len = unsafe { GetWindowTextW(hwnd, &mut buffer) };
    if len <= 0 {
        return String::new();
    }
    String::from_utf16_lossy(&buffer[..len as usize])
}

fn main_windows() -> Result<HashMap<u32, MainWindow>> {
    let mut found: HashMap<u32, MainWindow> = HashMap::new();
    unsafe {
        EnumWindows(
            Some(collect_main_window),
            LPARAM(&mut found as *mut HashMap<u32, MainWindow> as isize),
        )
    }
    .map_err(|e| EngineError::Enumeration(format!("EnumWindows failed: {}", e)))?;
    Ok(found)
}

unsafe extern "system" fn collect_main_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let found = &mut *(lparam.0 as *mut HashMap<u32, MainWindow>);

    if !IsWindowVisible(hwnd).as_bool() || GetWindow(hwnd, GW_OWNER).0 != 0 {
        return TRUE;
    }

    let mut pid: u32 = 0;
    GetWindowThreadProcessId(hwnd, Some(&mut pid as *mut u32));
    if pid == 0 {
        return TRUE;
    }

    let title = window_title(hwnd);
    match found.get(&pid) {
        Some(existing) if !existing.title.is_empty() || title.is_empty() => {}
        _ => {
            found.insert(pid, MainWindow { hwnd, title });
        }
    }
    TRUE
}

impl WindowDirectory for Win32WindowDirectory {
    fn list_processes(&self) -> Result<Vec<ProcessWindow>> {
        let mut system = System::new();
        system.refresh_processes_specifics(ProcessRefreshKind::new());

        let mut windows = main_windows()?;
        let mut pids: Vec<u32> = system.processes().keys().map(|pid| pid.as_u32()).collect();
        pids.sort_unstable();

        let list = pids
            .into_iter()
            .map(|pid| match windows.remove(&pid) {
                Some(MainWindow { hwnd, title }) => ProcessWindow {
                    process_id: pid,
                    main_window: WindowHandle(hwnd.0),
                    main_window_title: title,
                    minimized: unsafe { IsIconic(hwnd) }.as_bool(),
                },
                None => ProcessWindow {
                    process_id: pid,
                    main_window: WindowHandle(0),
                    main_window_title: String::new(),
                    minimized: false,
                },
            })
            .collect::<Vec<_>>();

        tracing::trace!("Listed {} processes", list.len());
        Ok(list)
    }

    fn foreground_process_id(&self) -> Result<u32> {
        unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.0 == 0 {
                return Err(EngineError::Foreground("No foreground window".to_string()));
            }

            let mut pid: u32 = 0;
            GetWindowThreadProcessId(hwnd, Some(&mut pid as *mut u32));
            if pid == 0 {
                return Err(EngineError::Foreground(
                    "Foreground window has no owning process".to_string(),
                ));
            }
            Ok(pid)
        }
    }

    /// Borrows the foreground thread's input state so the focus change is
    /// not refused, falling back to raising the window.
    fn bring_to_foreground(&self, handle: WindowHandle) -> Result<()> {
        let target = HWND(handle.0);
        if target.0 == 0 {
            return Err(EngineError::Foreground("Window has no handle".to_string()));
        }

        unsafe {
            let current_thread = GetCurrentThreadId();
            let foreground_thread = GetWindowThreadProcessId(GetForegroundWindow(), None);

            let attached = foreground_thread != 0
                && foreground_thread != current_thread
                && AttachThreadInput(current_thread, foreground_thread, BOOL::from(true))
                    .as_bool();

            let focused = SetForegroundWindow(target).as_bool();
            let result = if focused {
                Ok(())
            } else {
                BringWindowToTop(target).map_err(|e| {
                    EngineError::Foreground(format!("BringWindowToTop failed: {}", e))
                })
            };

            if attached {
                let _ = AttachThreadInput(current_thread, foreground_thread, BOOL::from(false));
            }
            result
        }
    }
}
