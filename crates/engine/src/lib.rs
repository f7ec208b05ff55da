//! PointerHelper Engine
//!
//! Platform-independent core of the input hook engine:
//! - Edge and corner triggers from pointer movement
//! - Lock-key synchronization with anti-feedback suppression
//! - Lock keys reused as pointer buttons
//! - Focus cycling between application windows
//!
//! Architecture:
//! - [`engine::EngineState`] makes all decisions for one raw event
//! - [`engine::HookEngine`] performs them through the [`platform`] traits
//! - The Win32 adapter in the runner crate owns the actual hooks

pub mod config;
pub mod cycle_worker;
pub mod edge_zone;
pub mod engine;
pub mod error;
pub mod hook_slot;
pub mod key_remap;
pub mod lock_keys;
pub mod platform;
pub mod types;
pub mod window_cycler;

pub use config::EngineConfig;
pub use engine::{EngineAction, EnginePorts, EngineState, HookEngine, InputSink, SharedSink};
pub use error::{EngineError, Result};
