//! Activation notices
//!
//! Stands in for the visual shell: activation changes from the hook path
//! are handed to a logging thread so the callback never formats or writes.

use crossbeam_channel::{bounded, Sender};
use pointer_helper_engine::platform::ActivationObserver;
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

pub struct ActivationNotifier {
    tx: Sender<bool>,
}

impl ActivationObserver for ActivationNotifier {
    fn on_activation_changed(&mut self, active: bool) {
        if self.tx.try_send(active).is_err() {
            debug!("Activation notice dropped");
        }
    }
}

/// Start the logging thread. It exits once the notifier is dropped.
pub fn spawn_activation_log() -> std::io::Result<(ActivationNotifier, JoinHandle<()>)> {
    let (tx, rx) = bounded::<bool>(16);
    let handle = thread::Builder::new()
        .name("activation-log".to_string())
        .spawn(move || {
            for active in rx.iter() {
                if active {
                    info!("PointerHelper is ON");
                } else {
                    info!("PointerHelper is OFF");
                }
            }
        })?;
    Ok((ActivationNotifier { tx }, handle))
}
