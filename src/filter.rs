// src/filter.rs
//! Category derivation and free-text/category filtering over the feed.

use std::collections::HashSet;

use serde::Deserialize;
use url::form_urlencoded;

use crate::feed::{Feed, Idea};

/// Transient UI selection; both fields empty means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

impl FilterState {
    pub fn new(q: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            category: category.into(),
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|c| !c.is_empty())
    }

    pub fn matches(&self, idea: &Idea) -> bool {
        if let Some(c) = self.selected_category() {
            if idea.category() != c {
                return false;
            }
        }
        if self.q.is_empty() {
            return true;
        }
        search_text(idea).contains(&self.q.to_lowercase())
    }

    /// `q=..&category=..` for links back to this selection; empty fields are
    /// left out, so the default filter gives `""`.
    pub fn query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !self.q.is_empty() {
            ser.append_pair("q", &self.q);
        }
        if !self.category.is_empty() {
            ser.append_pair("category", &self.category);
        }
        ser.finish()
    }
}

/// Lowercased `title + category + tags.join(",")`, the haystack for free-text search.
pub fn search_text(idea: &Idea) -> String {
    let mut s = String::new();
    s.push_str(idea.title.as_deref().unwrap_or_default());
    s.push_str(idea.category());
    s.push_str(&idea.tags.join(","));
    s.to_lowercase()
}

/// Ideas surviving the filter, in rank order.
pub fn filter_ideas<'a>(feed: &'a Feed, state: &FilterState) -> Vec<&'a Idea> {
    feed.ideas.iter().filter(|it| state.matches(it)).collect()
}

/// Distinct categories in first-occurrence order ("generic" for missing ones).
pub fn derive_categories(feed: &Feed) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for idea in &feed.ideas {
        let c = idea.category();
        if seen.insert(c) {
            out.push(c.to_string());
        }
    }
    out
}
