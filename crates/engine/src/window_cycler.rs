//! Window Cycler
//!
//! Moves keyboard focus to the next (or previous) running application that
//! has a titled, non-minimized main window. The process list is re-read on
//! every call, so successive cycles may walk a different ring if processes
//! start or exit in between. Every failure is a silent no-op.

use crate::platform::WindowDirectory;
use crate::types::{CycleDirection, ProcessWindow, WindowHandle};
use tracing::{debug, info};

fn step(index: usize, len: usize, direction: CycleDirection) -> usize {
    match direction {
        CycleDirection::Forward => (index + 1) % len,
        CycleDirection::Backward => (index + len - 1) % len,
    }
}

/// Pick the entry focus should move to.
///
/// Starts one step away from the foreground process and scans at most one
/// full loop in the same direction. Returns `None` if the foreground process
/// is not in the list or nothing is eligible.
pub fn select_target(
    processes: &[ProcessWindow],
    foreground_pid: u32,
    direction: CycleDirection,
) -> Option<usize> {
    let len = processes.len();
    let current = processes
        .iter()
        .position(|p| p.process_id == foreground_pid)?;

    let mut index = step(current, len, direction);
    for _ in 0..len {
        if processes[index].is_eligible() {
            return Some(index);
        }
        index = step(index, len, direction);
    }
    None
}

pub struct WindowCycler<D> {
    directory: D,
}

impl<D: WindowDirectory> WindowCycler<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Switch focus one application in `direction`.
    ///
    /// Returns the handle that was brought forward, if any.
    pub fn cycle(&self, direction: CycleDirection) -> Option<WindowHandle> {
        let processes = match self.directory.list_processes() {
            Ok(list) => list,
            Err(e) => {
                debug!("Skipping cycle: {}", e);
                return None;
            }
        };
        let foreground = match self.directory.foreground_process_id() {
            Ok(pid) => pid,
            Err(e) => {
                debug!("Skipping cycle: {}", e);
                return None;
            }
        };

        let Some(index) = select_target(&processes, foreground, direction) else {
            debug!(
                "No window to cycle {:?} to from process {}",
                direction, foreground
            );
            return None;
        };

        let target = &processes[index];
        if let Err(e) = self.directory.bring_to_foreground(target.main_window) {
            debug!("Could not focus '{}': {}", target.main_window_title, e);
            return None;
        }

        info!(
            "Switched {:?} to '{}' (pid {})",
            direction, target.main_window_title, target.process_id
        );
        Some(target.main_window)
    }
}
