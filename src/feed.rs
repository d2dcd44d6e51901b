// src/feed.rs
//! Feed document model (`ideas.json`).
//!
//! The producer is loosely typed, so every field is optional and the
//! deserializers below never reject an idea because one field has an
//! unexpected shape: bad scalars become `None`, bad list entries are dropped.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_CATEGORY: &str = "generic";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default, deserialize_with = "lenient_string")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub ideas: Vec<Idea>,
}

impl Feed {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Highest ranked idea, if any.
    pub fn top(&self) -> Option<&Idea> {
        self.ideas.first()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Idea {
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub keyword_group: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub one_liner: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub why_now: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub market: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub risks: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub gtm_tactics: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub validation_steps: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub community_top: Vec<Link>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub evidence: Vec<Link>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub sources: Vec<Link>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub trend_series: Vec<TrendPoint>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub score: Option<Score>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub metrics: Option<IdeaMetrics>,
}

impl Idea {
    /// Category with the "generic" default applied.
    pub fn category(&self) -> &str {
        non_empty(self.category.as_deref()).unwrap_or(DEFAULT_CATEGORY)
    }

    /// One-liner when present, otherwise the title.
    pub fn headline(&self) -> Option<&str> {
        non_empty(self.one_liner.as_deref()).or_else(|| non_empty(self.title.as_deref()))
    }
}

/// Treat `Some("")` like `None`, as the feed producer uses both for "unknown".
pub fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Community post, evidence entry or source reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

impl Link {
    /// Title, or the URL when the title is missing.
    pub fn label(&self) -> Option<&str> {
        non_empty(self.title.as_deref()).or_else(|| non_empty(self.url.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaMetrics {
    pub trend_last: Option<f64>,
    pub trend_delta_7: Option<f64>,
    pub trend_delta_30: Option<f64>,
    pub trend_sigma: Option<f64>,
    pub community_weighted: Option<f64>,
    pub news_weighted: Option<f64>,
}

fn scalar_to_string(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(d)?))
}

/// Accepts a list of strings or a single string (older feeds used a string).
fn text_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        Value::String(s) if s.is_empty() => Vec::new(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}

fn lenient_vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_opt<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(d)?).ok())
}
