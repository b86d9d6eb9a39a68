//! Telemetry helpers for applications embedding `chart-axes`.
//!
//! Registry mutations log at `debug`, individual bindings at `trace` and
//! rejected operations at `warn`. Hosts either call one of the init
//! helpers below or install their own `tracing` subscriber.

/// Directive used when `RUST_LOG` is unset: axis lifecycle messages from
/// this crate only.
pub const DEFAULT_TRACING_FILTER: &str = "chart_axes=info";

/// Same as [`init_tracing_with_filter`] with [`DEFAULT_TRACING_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Installs a compact `fmt` subscriber when the `telemetry` feature is on.
///
/// `RUST_LOG` takes precedence; `fallback_filter` applies only when it is
/// unset or unparsable. A fallback that does not parse either disables
/// output rather than failing. Returns `false` when the feature is off or
/// a global subscriber already exists.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("off"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
