// src/source/mod.rs
//! Where the feed documents come from.

pub mod dir;
pub mod http;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::config::ServiceConfig;

pub use dir::DirSource;
pub use http::HttpSource;

pub const FEED_DOCUMENT: &str = "ideas.json";
pub const SITE_CONFIG_DOCUMENT: &str = "config.json";

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw body of a document published next to the feed.
    async fn fetch(&self, name: &str) -> Result<String>;
    fn name(&self) -> &'static str;
}

/// Build the source described by the service config (URL base or local dir).
pub fn from_config(cfg: &ServiceConfig) -> Arc<dyn FeedSource> {
    if cfg.feed_is_remote() {
        Arc::new(HttpSource::new(
            &cfg.feed_base,
            Duration::from_secs(cfg.fetch_timeout_secs),
        ))
    } else {
        Arc::new(DirSource::new(&cfg.feed_base))
    }
}
