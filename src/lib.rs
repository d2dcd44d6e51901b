// src/lib.rs
// Public library surface for the service binary, the snapshot renderer and integration tests.

pub mod api;
pub mod citations;
pub mod config;
pub mod feed;
pub mod filter;
pub mod labels;
pub mod loader;
pub mod metrics;
pub mod render;
pub mod sanitize;
pub mod source;
pub mod state;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::config::ServiceConfig;
pub use crate::state::AppState;

use tracing::warn;

/// Build the state from config files/env and run the initial load.
///
/// A failed initial load is logged, not returned: the dashboard still starts
/// and shows the error banner until a reload succeeds.
pub async fn bootstrap() -> anyhow::Result<AppState> {
    let settings = ServiceConfig::load_default()?;
    let state = AppState::from_settings(settings);
    if let Err(e) = state.reload().await {
        warn!(error = ?e, "initial feed load failed; serving without data");
    }
    Ok(state)
}
