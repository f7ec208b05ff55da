//! Cycle Worker
//!
//! Runs [`WindowCycler`] on its own thread so the process scan never happens
//! inside a hook callback. The hook side only does a non-blocking `try_send`.

use crate::platform::{CycleScheduler, WindowDirectory};
use crate::types::CycleDirection;
use crate::window_cycler::WindowCycler;
use crossbeam_channel::{bounded, Sender, TrySendError};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

/// Queue depth used when the caller has no preference
pub const DEFAULT_QUEUE_DEPTH: usize = 4;

/// Hook-side handle to the worker thread.
///
/// Dropping every handle closes the channel and lets the worker exit.
#[derive(Clone)]
pub struct CycleRequests {
    tx: Sender<CycleDirection>,
}

impl CycleScheduler for CycleRequests {
    fn request_cycle(&mut self, direction: CycleDirection) {
        match self.tx.try_send(direction) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => debug!("Cycle queue full, dropping {:?}", direction),
            Err(TrySendError::Disconnected(_)) => debug!("Cycle worker gone"),
        }
    }
}

/// Start the worker. Returns the request handle and the thread handle.
pub fn spawn_cycle_worker<D>(
    directory: D,
    queue_depth: usize,
) -> std::io::Result<(CycleRequests, JoinHandle<()>)>
where
    D: WindowDirectory + Send + 'static,
{
    let (tx, rx) = bounded::<CycleDirection>(queue_depth.max(1));
    let handle = thread::Builder::new()
        .name("window-cycler".to_string())
        .spawn(move || {
            info!("Window cycle worker started");
            let cycler = WindowCycler::new(directory);
            for direction in rx.iter() {
                cycler.cycle(direction);
            }
            info!("Window cycle worker stopped");
        })
        .map_err(|e| {
            error!("Failed to spawn window cycle worker: {}", e);
            e
        })?;

    Ok((CycleRequests { tx }, handle))
}
