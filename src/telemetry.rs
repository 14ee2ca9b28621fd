//! Telemetry helpers for applications embedding `linear-viz`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call
//! `init_default_tracing`, pass their own directives to
//! `init_tracing_with_filter`, or install their own `tracing` subscriber.

/// Filter used when `RUST_LOG` is unset.
///
/// Engine mutations log at `trace`, layouts and session requests at `debug`;
/// everything outside this crate stays at `info`.
pub const DEFAULT_TRACING_FILTER: &str = "info,linear_viz=debug";

/// Installs a subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a subscriber with explicit `directives`, ignoring `RUST_LOG`.
///
/// Returns `false` on malformed directives as well.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        };
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
