//! Render the dashboard once into a standalone HTML file.
//!
//! Usage: `render_snapshot [OUT_FILE]` (defaults to `dashboard.html`); the feed
//! location and locale come from the usual service config / env vars.

use anyhow::Context;
use idea_dashboard::filter::FilterState;
use idea_dashboard::render::{render_list, render_page, render_today, PageContext};
use idea_dashboard::{AppState, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let _ = dotenvy::dotenv();

    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "dashboard.html".to_string());

    let state = AppState::from_settings(ServiceConfig::load_default()?);
    let snap = state.reload().await.context("loading feed")?;

    let ctx = state.render_ctx();
    let filter = FilterState::default();
    let settings = &state.settings;
    let html = render_page(PageContext {
        title: &settings.page_title,
        locale: settings.locale,
        last_updated: snap.last_updated(state.labels()),
        categories: &snap.categories,
        filter: &filter,
        update: state.update_action(),
        error: None,
        chart_library_url: settings.chart_library_url.as_deref(),
        stylesheet: None,
        today: render_today(&snap.feed, &ctx),
        list: render_list(&snap.feed, &filter, &ctx),
    });

    std::fs::write(&out, html).with_context(|| format!("writing {out}"))?;
    println!("rendered {} ideas -> {out}", snap.feed.ideas.len());
    Ok(())
}
