//! Collaborator Interfaces
//!
//! Seams between the engine and the operating system. The Win32 adapter in
//! the runner implements these; tests use recording fakes.

use crate::error::Result;
use crate::types::{
    CycleDirection, KeyFlags, LockKey, PointerInjection, ProcessWindow, ScreenGeometry,
    VirtualKey, WindowHandle,
};

/// Reports monitor extents. Queried once at startup.
pub trait GeometryProvider {
    /// Height of the primary screen
    fn screen_height(&self) -> Result<i32>;
    /// Combined width of all screens laid out horizontally
    fn total_width(&self) -> Result<i32>;

    fn geometry(&self) -> Result<ScreenGeometry> {
        Ok(ScreenGeometry::new(self.screen_height()?, self.total_width()?))
    }
}

/// Running processes and the foreground window
pub trait WindowDirectory {
    /// Fresh snapshot in enumeration order
    fn list_processes(&self) -> Result<Vec<ProcessWindow>>;
    /// Process owning the current foreground window
    fn foreground_process_id(&self) -> Result<u32>;
    fn bring_to_foreground(&self, handle: WindowHandle) -> Result<()>;
}

/// Injects synthetic input through the OS input subsystem.
///
/// Implementations must tag every event so the adapter can report it back
/// with `Origin::Synthetic`.
pub trait InputInjector {
    fn inject_pointer(&mut self, event: PointerInjection) -> Result<()>;
    fn inject_key(&mut self, key: VirtualKey, flags: KeyFlags) -> Result<()>;
}

/// Reads the OS toggle state of a lock key
pub trait ToggleStateSource {
    fn query_toggle_state(&self, key: LockKey) -> Result<bool>;
}

/// Fire-and-forget notification for the visual shell
pub trait ActivationObserver {
    fn on_activation_changed(&mut self, active: bool);
}

impl ActivationObserver for () {
    fn on_activation_changed(&mut self, _active: bool) {}
}

/// Accepts window-cycle requests from the hook path without running them inline
pub trait CycleScheduler {
    fn request_cycle(&mut self, direction: CycleDirection);
}
