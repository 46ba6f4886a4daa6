//! Tracing setup for hosts embedding the picker.
//!
//! The controller only emits `tracing` events; installing a subscriber is the
//! host's call. `init_default_tracing` covers the common case.

/// Filter used when `RUST_LOG` is unset: picker events at debug, the rest at warn.
pub const DEFAULT_FILTER: &str = "warn,timerange_picker=debug";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
