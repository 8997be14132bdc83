//! Tracing subscriber setup for hosts and tools.
//!
//! The library only emits `tracing` events. A host calls [`init`] once to get
//! formatted output filtered by `RUST_LOG` (default `posterboard=info`).

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "posterboard=info";

/// Install the global formatting subscriber. Returns `false` if one was
/// already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
