//! Type Definitions
//!
//! Enums and data structures shared by the engine components and the OS adapter.

mod enums;
mod structs;

pub use enums::*;
pub use structs::*;
