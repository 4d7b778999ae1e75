//! Logging setup
//!
//! The step resolver reports dropped parameters through `tracing`. Hosts
//! that want those diagnostics on a console install a subscriber here, or
//! bring their own; the renderer itself only emits events.

/// Installs a formatted tracing subscriber.
///
/// `RUST_LOG` takes precedence over the given default filter. Subsequent
/// calls are no-ops, so embedding hosts that already installed their own
/// subscriber are left undisturbed.
pub fn init(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
