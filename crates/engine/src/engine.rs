//! Hook Engine
//!
//! Dispatches raw input to the edge tracker, lock-key synchronizer and key
//! remapper, then carries out the resulting actions through the platform
//! seams. [`EngineState::handle_event`] is the pure decision step;
//! [`HookEngine`] wraps it with the effects.
//!
//! Everything here runs inside an OS hook callback with a hard latency
//! budget: no blocking, no waiting on other threads, and only `trace!` /
//! `debug!` events.

use crate::config::EngineConfig;
use crate::edge_zone::{EdgeTrigger, EdgeZoneTracker};
use crate::key_remap::{KeyRemapper, RemapGate, RemapOutcome};
use crate::lock_keys::{LockKeySynchronizer, SuppressionFlag};
use crate::platform::{
    ActivationObserver, CycleScheduler, InputInjector, ToggleStateSource,
};
use crate::types::{
    CycleDirection, KeyFlags, LockKey, MouseButton, Origin, PointerInjection, PointerSample,
    RawInputEvent, ScreenGeometry,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace};

/// Effect requested by the decision step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    /// Inject a synthetic pointer event
    Pointer(PointerInjection),
    /// Press and release a lock key with suppression raised
    CorrectLockKey(LockKey),
    CycleWindows(CycleDirection),
    ActivationChanged(bool),
}

/// Pointer buttons currently down, one bit per button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeldButtons(u8);

impl HeldButtons {
    fn bit(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 0b001,
            MouseButton::Right => 0b010,
            MouseButton::Middle => 0b100,
        }
    }

    fn set(&mut self, button: MouseButton, down: bool) {
        if down {
            self.0 |= Self::bit(button);
        } else {
            self.0 &= !Self::bit(button);
        }
    }

    fn any(self) -> bool {
        self.0 != 0
    }
}

/// All mutable engine state. One instance per engine; nothing is global.
#[derive(Debug, Clone)]
pub struct EngineState {
    active: bool,
    held_buttons: HeldButtons,
    suppression: SuppressionFlag,
    scroll_step: i32,
    tracker: EdgeZoneTracker,
    locks: LockKeySynchronizer,
    remapper: KeyRemapper,
}

impl EngineState {
    pub fn new(geometry: ScreenGeometry, config: &EngineConfig) -> Self {
        Self {
            active: true,
            held_buttons: HeldButtons::default(),
            suppression: SuppressionFlag::new(),
            scroll_step: config.scroll_step,
            tracker: EdgeZoneTracker::new(geometry),
            locks: LockKeySynchronizer::new(),
            remapper: KeyRemapper::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether any real or synthetic pointer button is down
    pub fn button_held(&self) -> bool {
        self.held_buttons.any()
    }

    pub fn suppression(&self) -> &SuppressionFlag {
        &self.suppression
    }

    pub fn tracker(&self) -> &EdgeZoneTracker {
        &self.tracker
    }

    pub fn locks(&self) -> &LockKeySynchronizer {
        &self.locks
    }

    /// Decide what one raw event does. Does not perform any effect itself.
    pub fn handle_event(
        &mut self,
        event: &RawInputEvent,
        toggles: &dyn ToggleStateSource,
    ) -> Vec<EngineAction> {
        match *event {
            RawInputEvent::PointerMove { x, y } => self.pointer_moved(x, y, toggles),
            RawInputEvent::PointerButton { button, flags, .. } => {
                self.held_buttons.set(button, flags == KeyFlags::Down);
                Vec::new()
            }
            RawInputEvent::KeyDown { key, origin } => {
                if self.ignores_key(origin) {
                    return Vec::new();
                }
                let outcome = self.remapper.key_down(key, self.gate());
                self.apply_remap(outcome)
            }
            RawInputEvent::KeyUp { key, origin } => {
                if self.ignores_key(origin) {
                    return Vec::new();
                }
                let outcome = self.remapper.key_up(key, self.gate());
                self.apply_remap(outcome)
            }
        }
    }

    fn ignores_key(&self, origin: Origin) -> bool {
        origin == Origin::Synthetic || self.suppression.is_set()
    }

    fn gate(&self) -> RemapGate {
        RemapGate {
            active: self.active,
            suppressed: self.suppression.is_set(),
        }
    }

    fn apply_remap(&mut self, outcome: RemapOutcome) -> Vec<EngineAction> {
        if let Some((button, down)) = outcome.button_held {
            self.held_buttons.set(button, down);
        }
        outcome
            .injections
            .into_iter()
            .map(EngineAction::Pointer)
            .collect()
    }

    fn pointer_moved(
        &mut self,
        x: i32,
        y: i32,
        toggles: &dyn ToggleStateSource,
    ) -> Vec<EngineAction> {
        let sample = PointerSample {
            x,
            y,
            button_held: self.held_buttons.any(),
        };
        let triggers = self.tracker.observe(sample, self.active);
        let mut actions = Vec::new();
        let mut triggers = triggers.into_iter().peekable();

        if triggers.next_if_eq(&EdgeTrigger::ToggleActivation).is_some() {
            self.active = !self.active;
            if self.active {
                self.locks.capture(toggles);
            }
            actions.push(EngineAction::ActivationChanged(self.active));
        }

        if self.active {
            actions.extend(
                self.locks
                    .drifted(toggles)
                    .into_iter()
                    .map(EngineAction::CorrectLockKey),
            );
        }

        for trigger in triggers {
            let action = match trigger {
                EdgeTrigger::ScrollUp => {
                    EngineAction::Pointer(PointerInjection::Wheel(self.scroll_step))
                }
                EdgeTrigger::ScrollDown => EngineAction::Pointer(PointerInjection::Wheel(
                    self.scroll_step.saturating_neg(),
                )),
                EdgeTrigger::CycleBackward => EngineAction::CycleWindows(CycleDirection::Backward),
                EdgeTrigger::CycleForward => EngineAction::CycleWindows(CycleDirection::Forward),
                EdgeTrigger::ToggleActivation => continue,
            };
            actions.push(action);
        }

        actions
    }
}

/// Receives raw events from the OS adapter
pub trait InputSink {
    fn handle_event(&mut self, event: RawInputEvent);
}

/// Platform seams the engine drives
pub struct EnginePorts {
    pub injector: Box<dyn InputInjector + Send>,
    pub toggles: Box<dyn ToggleStateSource + Send>,
    pub cycler: Box<dyn CycleScheduler + Send>,
    pub observer: Box<dyn ActivationObserver + Send>,
}

pub struct HookEngine {
    state: EngineState,
    ports: EnginePorts,
}

impl HookEngine {
    pub fn new(geometry: ScreenGeometry, config: &EngineConfig, ports: EnginePorts) -> Self {
        Self {
            state: EngineState::new(geometry, config),
            ports,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Shared handle to the suppression flag for the keyboard adapter
    pub fn suppression_flag(&self) -> SuppressionFlag {
        self.state.suppression.clone()
    }

    /// Startup corrections, run once before the hooks are installed.
    ///
    /// Forces NumLock on if configured and it is off, then records the
    /// current toggle states as desired.
    pub fn start(&mut self, config: &EngineConfig) {
        let forced = config.force_num_lock_on_start
            && LockKeySynchronizer::num_lock_needs_forcing(&*self.ports.toggles);
        if forced {
            debug!("NumLock is off at startup, turning it on");
            self.press_lock_key(LockKey::NumLock);
        }

        self.state.locks.capture(&*self.ports.toggles);
        if forced {
            // The OS may not report the new state yet
            self.state.locks.set_desired(LockKey::NumLock, true);
        }
        self.ports.observer.on_activation_changed(self.state.active);
    }

    fn press_lock_key(&mut self, key: LockKey) {
        let _guard = self.state.suppression.raise();
        let vk = key.virtual_key();
        let pressed = self
            .ports
            .injector
            .inject_key(vk, KeyFlags::Down)
            .and_then(|()| self.ports.injector.inject_key(vk, KeyFlags::Up));
        if let Err(e) = pressed {
            trace!("Lock key correction for {:?} failed: {}", key, e);
        }
    }

    fn perform(&mut self, action: EngineAction) {
        match action {
            EngineAction::Pointer(injection) => {
                if let Err(e) = self.ports.injector.inject_pointer(injection) {
                    trace!("Pointer injection {:?} failed: {}", injection, e);
                }
            }
            EngineAction::CorrectLockKey(key) => self.press_lock_key(key),
            EngineAction::CycleWindows(direction) => self.ports.cycler.request_cycle(direction),
            EngineAction::ActivationChanged(active) => {
                self.ports.observer.on_activation_changed(active)
            }
        }
    }
}

impl InputSink for HookEngine {
    fn handle_event(&mut self, event: RawInputEvent) {
        let actions = self
            .state
            .handle_event(&event, &*self.ports.toggles);
        for action in actions {
            self.perform(action);
        }
    }
}

/// Engine shared between the pointer and keyboard callbacks.
///
/// One lock guards the whole dispatch step. Dispatch never waits: an event
/// that arrives while the engine is busy (re-entry from its own injection)
/// is left alone.
#[derive(Clone)]
pub struct SharedSink {
    inner: Arc<Mutex<dyn InputSink + Send>>,
    suppression: SuppressionFlag,
}

impl SharedSink {
    pub fn new(engine: HookEngine) -> Self {
        let suppression = engine.suppression_flag();
        Self {
            inner: Arc::new(Mutex::new(engine)),
            suppression,
        }
    }

    /// Returns `false` if the event was not dispatched
    pub fn dispatch(&self, event: RawInputEvent) -> bool {
        let is_key = matches!(
            event,
            RawInputEvent::KeyDown { .. } | RawInputEvent::KeyUp { .. }
        );
        if is_key && self.suppression.is_set() {
            return false;
        }
        match self.inner.try_lock() {
            Some(mut sink) => {
                sink.handle_event(event);
                true
            }
            None => false,
        }
    }
}
