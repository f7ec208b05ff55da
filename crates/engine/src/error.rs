//! Engine Error Types

use crate::types::{HookKind, LockKey};
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error types
///
/// Only `HookInstall` is fatal to a feature. Everything else is treated as a
/// no-op for the current tick by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Interception point could not be installed
    #[error("Failed to install {kind} hook: {reason}")]
    HookInstall { kind: HookKind, reason: String },

    /// Synthetic input was rejected by the OS
    #[error("Input injection failed: {0}")]
    Injection(String),

    /// Toggle state of a lock key could not be read
    #[error("Toggle state query failed for {0:?}")]
    ToggleQuery(LockKey),

    /// Process or window enumeration failed
    #[error("Enumeration failed: {0}")]
    Enumeration(String),

    /// Window could not be brought to the foreground
    #[error("Foreground switch failed: {0}")]
    Foreground(String),

    /// Monitor layout could not be read
    #[error("Screen geometry unavailable: {0}")]
    Geometry(String),
}
