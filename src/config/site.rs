// src/config/site.rs
//! Site configuration published next to the feed (`config.json`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub repo_path: Option<String>,
}

impl SiteConfig {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let mut cfg: SiteConfig = serde_json::from_str(s)?;
        cfg.repo_path = cfg
            .repo_path
            .map(|p| p.trim().trim_matches('/').to_string())
            .filter(|p| !p.is_empty());
        Ok(cfg)
    }

    /// What the "update now" control should do for this configuration.
    pub fn update_action(&self, host: &str) -> UpdateAction {
        match self.repo_path.as_deref() {
            Some(repo) => UpdateAction::Navigate(workflow_url(host, repo)),
            None => UpdateAction::Notice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Open the update workflow page in a new browsing context.
    Navigate(String),
    /// No repository configured: show the blocking notice, do not navigate.
    Notice,
}

pub fn workflow_url(host: &str, repo_path: &str) -> String {
    format!("https://{host}/{repo_path}/actions/workflows/update.yml")
}
