//! Struct Type Definitions
//!
//! Data structures for input events, screen geometry and window snapshots.

use super::enums::{KeyFlags, MouseButton, Origin, VirtualKey};

/// Raw event as delivered by one of the two interception points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInputEvent {
    /// Pointer moved to an absolute virtual-desktop position
    PointerMove { x: i32, y: i32 },
    /// A pointer button changed state
    PointerButton {
        button: MouseButton,
        flags: KeyFlags,
        origin: Origin,
    },
    KeyDown { key: VirtualKey, origin: Origin },
    KeyUp { key: VirtualKey, origin: Origin },
}

impl RawInputEvent {
    /// Hardware pointer move
    pub fn pointer_move(x: i32, y: i32) -> Self {
        RawInputEvent::PointerMove { x, y }
    }

    /// Hardware key down
    pub fn key_down(key: VirtualKey) -> Self {
        RawInputEvent::KeyDown {
            key,
            origin: Origin::Hardware,
        }
    }

    /// Hardware key up
    pub fn key_up(key: VirtualKey) -> Self {
        RawInputEvent::KeyUp {
            key,
            origin: Origin::Hardware,
        }
    }
}

/// Pointer position at callback time, plus whether a button is held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub button_held: bool,
}

/// Screen extents used for edge detection. Immutable after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    /// Height of the primary screen
    pub screen_height: i32,
    /// Sum of the widths of all screens laid out horizontally
    pub total_width: i32,
}

impl ScreenGeometry {
    pub fn new(screen_height: i32, total_width: i32) -> Self {
        Self {
            screen_height,
            total_width,
        }
    }
}

/// Opaque top-level window handle as reported by the window directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub isize);

/// One process in a window directory snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessWindow {
    pub process_id: u32,
    pub main_window: WindowHandle,
    /// Empty when the process has no main window
    pub main_window_title: String,
    pub minimized: bool,
}

impl ProcessWindow {
    /// Whether this entry can receive focus from a cycle
    pub fn is_eligible(&self) -> bool {
        !self.main_window_title.is_empty() && !self.minimized
    }
}

/// Synthetic pointer input requested by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInjection {
    Button { button: MouseButton, flags: KeyFlags },
    /// Wheel rotation; positive scrolls up
    Wheel(i32),
}
