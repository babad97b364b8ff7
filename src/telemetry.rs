//! Telemetry helpers for binaries and applications embedding `duel-charts`.
//!
//! Loading and rendering emit `tracing` events (skipped rows, scale
//! fallbacks, render summaries). Nothing is printed unless a subscriber is
//! installed, either through `init_default_tracing` or by the host.

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`
/// (default `info`) when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
