//! Logging setup for the command-line front end.
//!
//! The library logs through the `log` facade only. The binary installs a
//! `tracing-subscriber` fmt layer on stderr so stdout stays clean JSON;
//! `log` records reach it through the subscriber's `tracing-log` bridge.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Initialize stderr logging. `RUST_LOG` wins over `verbose`; otherwise
/// `verbose` raises the level to debug.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .with_filter(env_filter);

    if let Err(e) = tracing_subscriber::registry().with(stderr_layer).try_init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
