//! Hook Slot
//!
//! Bookkeeping for one OS interception point. Installing into an occupied
//! slot returns the handle already held; removing from an empty slot does
//! nothing. The OS calls themselves are supplied by the adapter.

use crate::error::{EngineError, Result};
use crate::types::HookKind;
use tracing::{debug, info};

#[derive(Debug)]
pub struct HookSlot<H> {
    kind: HookKind,
    handle: Option<H>,
}

impl<H: Copy> HookSlot<H> {
    pub const fn new(kind: HookKind) -> Self {
        Self { kind, handle: None }
    }

    pub fn is_installed(&self) -> bool {
        self.handle.is_some()
    }

    /// Install using `install` unless a handle is already held
    pub fn install_with<F, E>(&mut self, install: F) -> Result<H>
    where
        F: FnOnce() -> std::result::Result<H, E>,
        E: std::fmt::Display,
    {
        if let Some(handle) = self.handle {
            debug!("{} hook already installed", self.kind);
            return Ok(handle);
        }

        let handle = install().map_err(|e| EngineError::HookInstall {
            kind: self.kind,
            reason: e.to_string(),
        })?;
        self.handle = Some(handle);
        info!("{} hook installed", self.kind);
        Ok(handle)
    }

    /// Remove using `remove` if a handle is held
    pub fn remove_with<F: FnOnce(H)>(&mut self, remove: F) {
        if let Some(handle) = self.handle.take() {
            remove(handle);
            info!("{} hook removed", self.kind);
        }
    }
}
