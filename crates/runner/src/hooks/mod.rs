//! Low-level Input Hooks
//!
//! `WH_MOUSE_LL` and `WH_KEYBOARD_LL` adapters. The callbacks translate the
//! OS structs into [`RawInputEvent`]s, hand them to the shared engine and
//! always pass the event on to the next hook.

mod input_listener;
mod keyboard_hook;
mod mouse_hook;

pub use input_listener::*;
pub use keyboard_hook::*;
pub use mouse_hook::*;

use parking_lot::RwLock;
use pointer_helper_engine::types::RawInputEvent;
use pointer_helper_engine::SharedSink;
use std::sync::OnceLock;

/// Engine the callbacks forward to
static SINK: OnceLock<RwLock<Option<SharedSink>>> = OnceLock::new();

fn sink_slot() -> &'static RwLock<Option<SharedSink>> {
    SINK.get_or_init(|| RwLock::new(None))
}

pub(crate) fn set_sink(sink: Option<SharedSink>) {
    *sink_slot().write() = sink;
}

/// Forward one event without ever blocking the callback
fn dispatch(event: RawInputEvent) {
    if let Some(slot) = sink_slot().try_read() {
        if let Some(sink) = slot.as_ref() {
            sink.dispatch(event);
        }
    }
}
