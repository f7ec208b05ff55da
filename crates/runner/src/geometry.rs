//! Screen extents for the edge tracker

use pointer_helper_engine::platform::GeometryProvider;
use pointer_helper_engine::{EngineError, Result};
use windows::Win32::Foundation::{BOOL, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CYSCREEN};

#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Geometry;

impl GeometryProvider for Win32Geometry {
    fn screen_height(&self) -> Result<i32> {
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        if height <= 0 {
            return Err(EngineError::Geometry(
                "GetSystemMetrics(SM_CYSCREEN) returned 0".to_string(),
            ));
        }
        Ok(height)
    }

    fn total_width(&self) -> Result<i32> {
        let mut widths: Vec<i32> = Vec::new();

        let ok = unsafe {
            EnumDisplayMonitors(
                None,
                None,
                Some(collect_monitor_width),
                LPARAM(&mut widths as *mut Vec<i32> as isize),
            )
        };
        if !ok.as_bool() {
            return Err(EngineError::Geometry("EnumDisplayMonitors failed".to_string()));
        }
        if widths.is_empty() {
            return Err(EngineError::Geometry("No monitors found".to_string()));
        }

        tracing::debug!("Monitor widths: {:?}", widths);
        Ok(widths.iter().sum())
    }
}

unsafe extern "system" fn collect_monitor_width(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let widths = &mut *(lparam.0 as *mut Vec<i32>);

    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    if GetMonitorInfoW(monitor, &mut info).as_bool() {
        let rect = info.rcMonitor;
        widths.push(rect.right - rect.left);
    }
    TRUE
}
