use anyhow::Context;
use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("prometheus: install recorder")?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_loads_total", "Successful feed load cycles.");
        describe_counter!("feed_load_errors_total", "Feed fetch/parse failures.");
        describe_counter!(
            "site_config_fallback_total",
            "config.json fetches that fell back to no repo path."
        );
        describe_counter!("dashboard_renders_total", "Rendered pages and fragments.");
        describe_gauge!("feed_ideas", "Ideas in the cached feed.");
        describe_gauge!("feed_last_load_ts", "Unix ts of the last successful feed load.");
    });
}
