//! Enum Type Definitions

/// Virtual key codes the engine reacts to.
///
/// Anything else is carried through as `Other` so the adapter never has to
/// filter before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    CapsLock,
    NumLock,
    ScrollLock,
    PrintScreen,
    Other(u32),
}

impl VirtualKey {
    /// Windows virtual key code for this key
    pub fn code(self) -> u32 {
        match self {
            VirtualKey::CapsLock => 0x14,
            VirtualKey::NumLock => 0x90,
            VirtualKey::ScrollLock => 0x91,
            VirtualKey::PrintScreen => 0x2C,
            VirtualKey::Other(code) => code,
        }
    }
}

impl From<u32> for VirtualKey {
    fn from(code: u32) -> Self {
        match code {
            0x14 => VirtualKey::CapsLock,
            0x90 => VirtualKey::NumLock,
            0x91 => VirtualKey::ScrollLock,
            0x2C => VirtualKey::PrintScreen,
            other => VirtualKey::Other(other),
        }
    }
}

/// The three toggle keys kept in their desired state while active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockKey {
    CapsLock,
    NumLock,
    ScrollLock,
}

impl LockKey {
    /// All lock keys, in the order corrections are applied
    pub const ALL: [LockKey; 3] = [LockKey::CapsLock, LockKey::NumLock, LockKey::ScrollLock];

    pub fn virtual_key(self) -> VirtualKey {
        match self {
            LockKey::CapsLock => VirtualKey::CapsLock,
            LockKey::NumLock => VirtualKey::NumLock,
            LockKey::ScrollLock => VirtualKey::ScrollLock,
        }
    }
}

/// Key or button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFlags {
    Down,
    Up,
}

/// Pointer buttons tracked by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Where an observed input event came from.
///
/// `Synthetic` means the event carries this engine's own injection marker.
/// Input injected by other software is reported as `Hardware`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    Hardware,
    Synthetic,
}

/// Direction of a window cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// Which low-level interception point a hook belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    Pointer,
    Keyboard,
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookKind::Pointer => write!(f, "pointer"),
            HookKind::Keyboard => write!(f, "keyboard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_key_codes_round_trip_through_u32() {
        for key in [
            VirtualKey::CapsLock,
            VirtualKey::NumLock,
            VirtualKey::ScrollLock,
            VirtualKey::PrintScreen,
        ] {
            assert_eq!(VirtualKey::from(key.code()), key);
        }
        assert_eq!(VirtualKey::from(0x41), VirtualKey::Other(0x41));
    }

    #[test]
    fn test_lock_key_maps_to_virtual_key() {
        assert_eq!(LockKey::ScrollLock.virtual_key().code(), 0x91);
        assert_eq!(LockKey::ALL.len(), 3);
    }
}
