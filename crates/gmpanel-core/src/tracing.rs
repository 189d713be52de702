use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is unset. The ORM and driver are noisy at
/// info level, so they are pinned to warn.
const DEFAULT_FILTER: &str = "info,sea_orm=warn,sqlx=warn";

/// Initialize JSON tracing to stdout. Call once at service startup;
/// subsequent calls are ignored so tests can call it freely.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init();
}
