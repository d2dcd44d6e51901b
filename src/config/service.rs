// src/config/service.rs
//! Service settings: TOML file + environment overrides.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::labels::Locale;

pub const DEFAULT_SERVICE_CONFIG_PATH: &str = "config/dashboard.toml";
pub const ENV_SERVICE_CONFIG_PATH: &str = "DASHBOARD_CONFIG_PATH";
pub const ENV_FEED_BASE: &str = "DASHBOARD_FEED_BASE";
pub const ENV_LOCALE: &str = "DASHBOARD_LOCALE";
pub const ENV_GITHUB_HOST: &str = "DASHBOARD_GITHUB_HOST";
pub const ENV_CHART_LIB: &str = "DASHBOARD_CHART_LIB";

pub const DEFAULT_CHART_LIBRARY_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

fn default_feed_base() -> String {
    "docs".to_string()
}
fn default_github_host() -> String {
    "github.com".to_string()
}
fn default_chart_library_url() -> Option<String> {
    Some(DEFAULT_CHART_LIBRARY_URL.to_string())
}
fn default_page_title() -> String {
    "IdeaBrowser KR".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Where `ideas.json` and `config.json` live: an http(s) base URL or a local directory.
    #[serde(default = "default_feed_base")]
    pub feed_base: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_github_host")]
    pub github_host: String,
    /// Charting library script; `None` (or empty in TOML/env) disables charts.
    #[serde(default = "default_chart_library_url")]
    pub chart_library_url: Option<String>,
    /// Optional directory served under `/assets`.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            feed_base: default_feed_base(),
            locale: Locale::default(),
            github_host: default_github_host(),
            chart_library_url: default_chart_library_url(),
            static_dir: None,
            page_title: default_page_title(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading service config from {}", path.display()))?;
        let cfg: ServiceConfig = toml::from_str(&data)
            .with_context(|| format!("parsing service config {}", path.display()))?;
        Ok(cfg.normalized())
    }

    /// Load using env var + fallbacks:
    /// 1) $DASHBOARD_CONFIG_PATH
    /// 2) config/dashboard.toml
    /// 3) built-in defaults
    ///
    /// Environment overrides are applied last.
    pub fn load_default() -> Result<Self> {
        let base = if let Ok(p) = env::var(ENV_SERVICE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_SERVICE_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from_file(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_SERVICE_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from_file(&default_p)?
            } else {
                Self::default()
            }
        };
        Ok(base.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var(ENV_FEED_BASE) {
            self.feed_base = v;
        }
        if let Ok(v) = env::var(ENV_LOCALE) {
            self.locale = Locale::parse(&v);
        }
        if let Ok(v) = env::var(ENV_GITHUB_HOST) {
            self.github_host = v;
        }
        if let Ok(v) = env::var(ENV_CHART_LIB) {
            self.chart_library_url = Some(v);
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.feed_base = self.feed_base.trim().to_string();
        if self.feed_base.is_empty() {
            self.feed_base = default_feed_base();
        }
        self.github_host = self.github_host.trim().trim_end_matches('/').to_string();
        if self.github_host.is_empty() {
            self.github_host = default_github_host();
        }
        self.chart_library_url = self
            .chart_library_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        if self.fetch_timeout_secs == 0 {
            self.fetch_timeout_secs = default_fetch_timeout_secs();
        }
        self
    }

    pub fn feed_is_remote(&self) -> bool {
        self.feed_base.starts_with("http://") || self.feed_base.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ENV: [&str; 5] = [
        ENV_SERVICE_CONFIG_PATH,
        ENV_FEED_BASE,
        ENV_LOCALE,
        ENV_GITHUB_HOST,
        ENV_CHART_LIB,
    ];

    fn clear_env() {
        for k in ALL_ENV {
            env::remove_var(k);
        }
    }

    #[test]
    fn toml_fields_and_defaults() {
        let cfg: ServiceConfig = toml::from_str(
            r#"
            feed_base = "https://owner.github.io/ideas"
            locale = "en"
            chart_library_url = ""
            "#,
        )
        .unwrap();
        let cfg = cfg.normalized();
        assert!(cfg.feed_is_remote());
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.github_host, "github.com");
        assert!(cfg.chart_library_url.is_none());
        assert_eq!(cfg.fetch_timeout_secs, 15);
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        clear_env();

        // no file, no env -> built-in defaults
        let cfg = ServiceConfig::load_default().unwrap();
        assert_eq!(cfg.feed_base, "docs");
        assert!(!cfg.feed_is_remote());

        // explicit path wins, env overrides win over the file
        let p = tmp.path().join("dash.toml");
        fs::write(&p, "feed_base = \"site\"\nlocale = \"en\"\n").unwrap();
        env::set_var(ENV_SERVICE_CONFIG_PATH, p.display().to_string());
        env::set_var(ENV_GITHUB_HOST, "ghe.example.com/");
        let cfg = ServiceConfig::load_default().unwrap();
        assert_eq!(cfg.feed_base, "site");
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.github_host, "ghe.example.com");

        env::set_var(ENV_SERVICE_CONFIG_PATH, tmp.path().join("missing.toml"));
        assert!(ServiceConfig::load_default().is_err());

        clear_env();
        env::set_current_dir(&old).unwrap();
    }
}
