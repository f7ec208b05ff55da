//! Lock Key Synchronizer
//!
//! Keeps CapsLock, NumLock and ScrollLock at a desired toggle state while the
//! engine is active. The keys stay physically pressable (they double as
//! pointer buttons); any flip is reverted on the next pointer-move sample by
//! injecting a full press/release of the key.

use crate::platform::ToggleStateSource;
use crate::types::LockKey;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Desired on/off state per lock key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockKeyState {
    pub caps_lock: bool,
    pub num_lock: bool,
    pub scroll_lock: bool,
}

impl LockKeyState {
    pub fn get(&self, key: LockKey) -> bool {
        match key {
            LockKey::CapsLock => self.caps_lock,
            LockKey::NumLock => self.num_lock,
            LockKey::ScrollLock => self.scroll_lock,
        }
    }

    pub fn set(&mut self, key: LockKey, on: bool) {
        match key {
            LockKey::CapsLock => self.caps_lock = on,
            LockKey::NumLock => self.num_lock = on,
            LockKey::ScrollLock => self.scroll_lock = on,
        }
    }
}

/// Process-wide marker that the engine is emitting its own key events.
///
/// Set immediately before a synthetic key press is injected and cleared right
/// after it. Key events observed while set are ignored. Clones share the same
/// flag so the keyboard adapter can check it without taking the engine lock.
#[derive(Debug, Clone, Default)]
pub struct SuppressionFlag(Arc<AtomicBool>);

impl SuppressionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Raise the flag until the returned guard is dropped
    pub fn raise(&self) -> SuppressionGuard<'_> {
        self.0.store(true, Ordering::Release);
        SuppressionGuard(self)
    }
}

/// Clears the owning [`SuppressionFlag`] on drop
#[derive(Debug)]
pub struct SuppressionGuard<'a>(&'a SuppressionFlag);

impl Drop for SuppressionGuard<'_> {
    fn drop(&mut self) {
        self.0 .0.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Default)]
pub struct LockKeySynchronizer {
    desired: LockKeyState,
}

impl LockKeySynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desired(&self) -> LockKeyState {
        self.desired
    }

    pub fn set_desired(&mut self, key: LockKey, on: bool) {
        self.desired.set(key, on);
    }

    /// Adopt the current OS toggle states as desired.
    ///
    /// A key whose state cannot be read keeps its previous desired value.
    pub fn capture(&mut self, toggles: &dyn ToggleStateSource) {
        for key in LockKey::ALL {
            match toggles.query_toggle_state(key) {
                Ok(on) => self.desired.set(key, on),
                Err(e) => trace!("Keeping desired state for {:?}: {}", key, e),
            }
        }
    }

    /// Keys whose actual state differs from the desired one, in correction order
    pub fn drifted(&self, toggles: &dyn ToggleStateSource) -> Vec<LockKey> {
        LockKey::ALL
            .into_iter()
            .filter(|key| match toggles.query_toggle_state(*key) {
                Ok(actual) => actual != self.desired.get(*key),
                Err(_) => false,
            })
            .collect()
    }

    /// One-time startup check: NumLock must come up on.
    ///
    /// Returns `true` when a correcting press is needed.
    pub fn num_lock_needs_forcing(toggles: &dyn ToggleStateSource) -> bool {
        matches!(toggles.query_toggle_state(LockKey::NumLock), Ok(false))
    }
}
