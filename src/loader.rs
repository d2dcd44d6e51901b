// src/loader.rs
//! One load cycle: site config (best effort), then the feed (must succeed).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use metrics::{counter, gauge};
use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::feed::Feed;
use crate::filter::derive_categories;
use crate::labels::Labels;
use crate::source::{FeedSource, FEED_DOCUMENT, SITE_CONFIG_DOCUMENT};

/// Fetch `config.json`. Any failure degrades to "no repository path".
pub async fn load_site_config(source: &dyn FeedSource) -> SiteConfig {
    let parsed = match source.fetch(SITE_CONFIG_DOCUMENT).await {
        Ok(body) => SiteConfig::from_json(&body).context("parsing config.json"),
        Err(e) => Err(e),
    };
    match parsed {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(target: "loader", error = ?e, source = source.name(), "site config unavailable, no repo path");
            counter!("site_config_fallback_total").increment(1);
            SiteConfig::default()
        }
    }
}

/// Fetch and parse `ideas.json`. Errors propagate to the caller.
pub async fn load_feed(source: &dyn FeedSource) -> Result<Feed> {
    let body = source
        .fetch(FEED_DOCUMENT)
        .await
        .context("fetching ideas.json")?;
    Feed::from_json(&body).context("parsing ideas.json")
}

/// Everything the renderers need from one completed load cycle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub feed: Feed,
    pub site: SiteConfig,
    pub categories: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(feed: Feed, site: SiteConfig) -> Self {
        let categories = derive_categories(&feed);
        Self {
            feed,
            site,
            categories,
            loaded_at: Utc::now(),
        }
    }

    /// "Last updated: <generated_at>", empty timestamp when absent.
    pub fn last_updated(&self, labels: &Labels) -> String {
        format!(
            "{}{}",
            labels.last_updated,
            self.feed.generated_at.as_deref().unwrap_or_default()
        )
    }
}

/// Second half of a load cycle: fetch the feed and pair it with the `site`
/// config resolved by [`load_site_config`].
pub async fn load_snapshot(source: &dyn FeedSource, site: SiteConfig) -> Result<Snapshot> {
    let feed = match load_feed(source).await {
        Ok(f) => f,
        Err(e) => {
            counter!("feed_load_errors_total").increment(1);
            return Err(e);
        }
    };

    let snap = Snapshot::new(feed, site);
    counter!("feed_loads_total").increment(1);
    gauge!("feed_ideas").set(snap.feed.ideas.len() as f64);
    gauge!("feed_last_load_ts").set(snap.loaded_at.timestamp() as f64);
    info!(
        target: "loader",
        ideas = snap.feed.ideas.len(),
        categories = snap.categories.len(),
        repo_path = ?snap.site.repo_path,
        "feed loaded"
    );
    Ok(snap)
}
