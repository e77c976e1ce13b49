//! Telemetry helpers for hosts embedding `donut-chart-rs`.
//!
//! Interaction transitions (zoom, drag gestures, control selection, plugin
//! registration) are reported through `tracing`. Hosts either call one of the
//! helpers below or install their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset: crate events at `info`, drag and
/// zoom transitions at `debug`.
pub const DEFAULT_FILTER: &str = "donut_chart=info,donut_chart::interaction=debug";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
