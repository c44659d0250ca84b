//! Tracing initialization (fmt subscriber with env-based filtering).
//!
//! Log verbosity is controlled through `RUST_LOG`, falling back to `info`
//! when unset:
//!
//! ```bash
//! RUST_LOG=citasalud=debug,sqlx=warn citasalud
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Errors if a subscriber was already installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
