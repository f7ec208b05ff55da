//! PointerHelper - Input Hook Runner
//!
//! This process:
//! - Loads the optional config file and sets up logging
//! - Measures the screens and applies the startup lock-key corrections
//! - Installs the low-level pointer and keyboard hooks
//! - Runs the Win32 message loop until Ctrl+C

mod config;

#[cfg(windows)]
mod geometry;
#[cfg(windows)]
mod hooks;
#[cfg(windows)]
mod input_sender;
#[cfg(windows)]
mod shell;
#[cfg(windows)]
mod window_directory;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = config::load_config();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("PointerHelper starting...");
    tracing::debug!("Configuration: {:?}", config);

    run(config)
}

#[cfg(windows)]
unsafe extern "system" fn console_handler(_ctrl_type: u32) -> windows::Win32::Foundation::BOOL {
    hooks::request_quit();
    windows::Win32::Foundation::TRUE
}

#[cfg(windows)]
fn run(config: config::RunnerConfig) -> Result<()> {
    use anyhow::Context;
    use pointer_helper_engine::cycle_worker::spawn_cycle_worker;
    use pointer_helper_engine::platform::GeometryProvider;
    use pointer_helper_engine::{EnginePorts, HookEngine, SharedSink};
    use windows::Win32::Foundation::BOOL;
    use windows::Win32::System::Console::SetConsoleCtrlHandler;

    let geometry = geometry::Win32Geometry
        .geometry()
        .context("Failed to measure screens")?;
    tracing::info!(
        "Screen height {}, total width {}",
        geometry.screen_height,
        geometry.total_width
    );

    let (cycler, cycle_thread) = spawn_cycle_worker(
        window_directory::Win32WindowDirectory::new(),
        config.cycle_queue_depth,
    )
    .context("Failed to start window cycle worker")?;
    let (observer, log_thread) =
        shell::spawn_activation_log().context("Failed to start activation log")?;

    let ports = EnginePorts {
        injector: Box::new(input_sender::Win32Input),
        toggles: Box::new(input_sender::Win32Input),
        cycler: Box::new(cycler),
        observer: Box::new(observer),
    };
    let mut engine = HookEngine::new(geometry, &config.engine, ports);
    engine.start(&config.engine);

    let listener = hooks::InputListener::start(SharedSink::new(engine))
        .context("Failed to install input hooks")?;

    unsafe { SetConsoleCtrlHandler(Some(console_handler), BOOL::from(true)) }
        .context("Failed to install Ctrl+C handler")?;

    tracing::info!("Hooks installed, press Ctrl+C to exit");
    listener.run();

    // Dropping the listener releases the engine and with it both channels
    drop(listener);
    let _ = cycle_thread.join();
    let _ = log_thread.join();

    tracing::info!("PointerHelper stopped");
    Ok(())
}

#[cfg(not(windows))]
fn run(_config: config::RunnerConfig) -> Result<()> {
    anyhow::bail!("PointerHelper only runs on Windows")
}
