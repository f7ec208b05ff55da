//! Recording fakes for the engine's collaborators.
//!
//! `World` stands in for the OS: toggle keys flip on a synthetic key-up,
//! and every injection, cycle request and activation notice is recorded.

#![allow(dead_code)]

use parking_lot::Mutex;
use pointer_helper_engine::lock_keys::SuppressionFlag;
use pointer_helper_engine::platform::{
    ActivationObserver, CycleScheduler, InputInjector, ToggleStateSource, WindowDirectory,
};
use pointer_helper_engine::types::{
    CycleDirection, KeyFlags, LockKey, PointerInjection, ProcessWindow, RawInputEvent,
    ScreenGeometry, VirtualKey, WindowHandle,
};
use pointer_helper_engine::{
    EngineConfig, EngineError, EnginePorts, HookEngine, Result, SharedSink,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInjection {
    pub key: VirtualKey,
    pub flags: KeyFlags,
    /// Suppression flag value at the moment of injection
    pub suppressed: bool,
}

#[derive(Default)]
pub struct World {
    pub caps_lock: bool,
    pub num_lock: bool,
    pub scroll_lock: bool,
    pub toggle_query_fails: bool,
    pub pointer: Vec<PointerInjection>,
    pub keys: Vec<KeyInjection>,
    pub cycles: Vec<CycleDirection>,
    pub activation: Vec<bool>,
    pub flag: Option<SuppressionFlag>,
    /// When set, every injected key is fed back into this sink
    pub feedback: Option<SharedSink>,
    pub feedback_dispatched: Vec<bool>,
}

impl World {
    pub fn toggle(&mut self, key: LockKey) -> &mut bool {
        match key {
            LockKey::CapsLock => &mut self.caps_lock,
            LockKey::NumLock => &mut self.num_lock,
            LockKey::ScrollLock => &mut self.scroll_lock,
        }
    }
}

pub type SharedWorld = Arc<Mutex<World>>;

pub fn world(caps: bool, num: bool, scroll: bool) -> SharedWorld {
    Arc::new(Mutex::new(World {
        caps_lock: caps,
        num_lock: num,
        scroll_lock: scroll,
        ..World::default()
    }))
}

fn lock_key(key: VirtualKey) -> Option<LockKey> {
    LockKey::ALL.into_iter().find(|k| k.virtual_key() == key)
}

struct Injector(SharedWorld);

impl InputInjector for Injector {
    fn inject_pointer(&mut self, event: PointerInjection) -> Result<()> {
        self.0.lock().pointer.push(event);
        Ok(())
    }

    fn inject_key(&mut self, key: VirtualKey, flags: KeyFlags) -> Result<()> {
        let feedback = {
            let mut w = self.0.lock();
            let suppressed = w.flag.as_ref().map(|f| f.is_set()).unwrap_or(false);
            w.keys.push(KeyInjection {
                key,
                flags,
                suppressed,
            });
            if flags == KeyFlags::Up {
                if let Some(lock) = lock_key(key) {
                    let state = w.toggle(lock);
                    *state = !*state;
                }
            }
            w.feedback.clone()
        };

        if let Some(sink) = feedback {
            let event = match flags {
                KeyFlags::Down => RawInputEvent::key_down(key),
                KeyFlags::Up => RawInputEvent::key_up(key),
            };
            let dispatched = sink.dispatch(event);
            self.0.lock().feedback_dispatched.push(dispatched);
        }
        Ok(())
    }
}

struct Toggles(SharedWorld);

impl ToggleStateSource for Toggles {
    fn query_toggle_state(&self, key: LockKey) -> Result<bool> {
        let mut w = self.0.lock();
        if w.toggle_query_fails {
            return Err(EngineError::ToggleQuery(key));
        }
        Ok(*w.toggle(key))
    }
}

struct Cycler(SharedWorld);

impl CycleScheduler for Cycler {
    fn request_cycle(&mut self, direction: CycleDirection) {
        self.0.lock().cycles.push(direction);
    }
}

struct Observer(SharedWorld);

impl ActivationObserver for Observer {
    fn on_activation_changed(&mut self, active: bool) {
        self.0.lock().activation.push(active);
    }
}

pub fn geometry() -> ScreenGeometry {
    ScreenGeometry::new(1080, 1920)
}

/// Engine wired to `world`, not yet started
pub fn engine(world: &SharedWorld, config: &EngineConfig) -> HookEngine {
    let ports = EnginePorts {
        injector: Box::new(Injector(Arc::clone(world))),
        toggles: Box::new(Toggles(Arc::clone(world))),
        cycler: Box::new(Cycler(Arc::clone(world))),
        observer: Box::new(Observer(Arc::clone(world))),
    };
    let engine = HookEngine::new(geometry(), config, ports);
    world.lock().flag = Some(engine.suppression_flag());
    engine
}

/// Engine wired to `world` and started with the default config
pub fn started_engine(world: &SharedWorld) -> HookEngine {
    let config = EngineConfig::default();
    let mut engine = engine(world, &config);
    engine.start(&config);
    engine
}

/// Clear recorded output, keep OS state
pub fn clear(world: &SharedWorld) {
    let mut w = world.lock();
    w.pointer.clear();
    w.keys.clear();
    w.cycles.clear();
    w.activation.clear();
    w.feedback_dispatched.clear();
}

/// Static window directory
pub struct Directory {
    pub processes: Vec<ProcessWindow>,
    pub foreground: Mutex<u32>,
    pub focused: Mutex<Vec<WindowHandle>>,
}

impl Directory {
    pub fn new(processes: Vec<ProcessWindow>, foreground: u32) -> Self {
        Self {
            processes,
            foreground: Mutex::new(foreground),
            focused: Mutex::new(Vec::new()),
        }
    }
}

impl WindowDirectory for Directory {
    fn list_processes(&self) -> Result<Vec<ProcessWindow>> {
        Ok(self.processes.clone())
    }

    fn foreground_process_id(&self) -> Result<u32> {
        Ok(*self.foreground.lock())
    }

    fn bring_to_foreground(&self, handle: WindowHandle) -> Result<()> {
        self.focused.lock().push(handle);
        if let Some(p) = self.processes.iter().find(|p| p.main_window == handle) {
            *self.foreground.lock() = p.process_id;
        }
        Ok(())
    }
}

pub fn window(pid: u32, title: &str, minimized: bool) -> ProcessWindow {
    ProcessWindow {
        process_id: pid,
        main_window: WindowHandle(0x1000 + pid as isize),
        main_window_title: title.to_string(),
        minimized,
    }
}
