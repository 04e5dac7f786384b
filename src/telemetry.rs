//! Tracing subscriber setup

use crate::config::PortalConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a global fmt subscriber
///
/// The filter comes from `RUST_LOG`, falling back to `log_level` from the
/// configuration. Calling this twice is harmless: the second call leaves
/// the first subscriber in place and returns `false`.
pub fn init_tracing(config: &PortalConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
