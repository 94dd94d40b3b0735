//! Tracing setup.
//!
//! Filter defaults to `info` and can be overridden through `RUST_LOG`.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already set.
pub fn try_init() -> Result<(), TryInitError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish()
        .try_init()
}

/// Install the global tracing subscriber, ignoring an already-set one.
/// Safe to call from every test.
pub fn init() {
    let _ = try_init();
}
