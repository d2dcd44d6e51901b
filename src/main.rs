//! Idea Dashboard — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and metrics.

use idea_dashboard::{api, bootstrap, metrics::Metrics};
use shuttle_axum::ShuttleAxum;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - DASHBOARD_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("DASHBOARD_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("loader=info,state=info,api=debug,warn"));

    // the hosted runtime may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let state = bootstrap().await?;
    info!(
        feed_base = %state.settings.feed_base,
        locale = ?state.settings.locale,
        "dashboard state ready"
    );

    let metrics = Metrics::init()?;
    let router = api::create_router(state).merge(metrics.router());

    Ok(router.into())
}
