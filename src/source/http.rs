// src/source/http.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::FeedSource;

/// Fetches documents relative to a base URL, defeating HTTP caches with a
/// `cache=<unix millis>` query parameter.
#[derive(Clone)]
pub struct HttpSource {
    base: String,
    client: Client,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base: &str, timeout: Duration) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout,
        }
    }
}

pub fn cache_busted_url(base: &str, name: &str, now_ms: i64) -> String {
    format!("{}/{}?cache={}", base.trim_end_matches('/'), name, now_ms)
}

#[async_trait]
impl FeedSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<String> {
        let url = cache_busted_url(&self.base, name, chrono::Utc::now().timestamp_millis());
        let rsp = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        let rsp = rsp
            .error_for_status()
            .with_context(|| format!("GET {url} returned an error status"))?;
        rsp.text().await.with_context(|| format!("reading body of {url}"))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
