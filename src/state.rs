// src/state.rs
//! Shared application state: the last completed load cycle, the last site
//! config seen, and the service settings.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use tracing::warn;

use crate::config::{ServiceConfig, SiteConfig, UpdateAction};
use crate::labels::Labels;
use crate::loader::{load_site_config, load_snapshot, Snapshot};
use crate::render::RenderCtx;
use crate::source::{self, FeedSource};

#[derive(Default)]
struct Cache {
    snapshot: Option<Arc<Snapshot>>,
    // refreshed every cycle, whether or not the feed loads
    site: SiteConfig,
    last_error: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<ServiceConfig>,
    source: Arc<dyn FeedSource>,
    cache: Arc<RwLock<Cache>>,
}

impl AppState {
    pub fn new(settings: ServiceConfig, source: Arc<dyn FeedSource>) -> Self {
        Self {
            settings: Arc::new(settings),
            source,
            cache: Arc::new(RwLock::new(Cache::default())),
        }
    }

    /// State whose source is derived from the settings (`feed_base`).
    pub fn from_settings(settings: ServiceConfig) -> Self {
        let src = source::from_config(&settings);
        Self::new(settings, src)
    }

    /// Run one load cycle. The site config is stored first and independently
    /// of the feed. On success the snapshot is replaced and any previous error
    /// cleared; on failure the previous snapshot stays and the error is kept
    /// for the banner.
    pub async fn reload(&self) -> Result<Arc<Snapshot>> {
        // fetch without holding the lock; last finished reload wins
        let site = load_site_config(self.source.as_ref()).await;
        self.cache.write().expect("state rwlock poisoned").site = site.clone();

        match load_snapshot(self.source.as_ref(), site).await {
            Ok(snap) => {
                let snap = Arc::new(snap);
                let mut c = self.cache.write().expect("state rwlock poisoned");
                c.snapshot = Some(snap.clone());
                c.last_error = None;
                Ok(snap)
            }
            Err(e) => {
                warn!(target: "state", error = ?e, source = self.source.name(), "feed load failed");
                let mut c = self.cache.write().expect("state rwlock poisoned");
                c.last_error = Some(format!("{e:#}"));
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.cache.read().expect("state rwlock poisoned").snapshot.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.cache.read().expect("state rwlock poisoned").last_error.clone()
    }

    pub fn site(&self) -> SiteConfig {
        self.cache.read().expect("state rwlock poisoned").site.clone()
    }

    /// Update control for the most recently loaded `config.json`.
    pub fn update_action(&self) -> UpdateAction {
        self.site().update_action(&self.settings.github_host)
    }

    pub fn labels(&self) -> &'static Labels {
        self.settings.locale.labels()
    }

    pub fn render_ctx(&self) -> RenderCtx {
        RenderCtx::new(self.labels(), self.settings.chart_library_url.is_some())
    }
}
