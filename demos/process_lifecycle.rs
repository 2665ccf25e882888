//! Process Lifecycle
//!
//! Drives a process through load, dispatch and an I/O round trip, then
//! shows that a ready process cannot block on I/O.
//!
//! Set `PROCESS_LIFECYCLE_CONFIG` to a TOML file to change the simulated
//! I/O delay, and `RUST_LOG=debug` to see every committed transition.
//!
//! Run with: cargo run --example process_lifecycle

use process_lifecycle::config::LifecycleConfig;
use process_lifecycle::driver;
use process_lifecycle::process::Process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = LifecycleConfig::from_env()?;
    let mut process = Process::with_config(&config);

    let report = driver::run(&mut process, || tracing::info!("some func"))?;

    tracing::info!(
        process_id = %process.id(),
        final_state = %report.final_state,
        steps = ?report.labels,
        transitions = process.history().len(),
        "Run complete"
    );
    if let Some(err) = report.rejected {
        tracing::info!(%err, "Illegal request was rejected and the run continued");
    }

    Ok(())
}
