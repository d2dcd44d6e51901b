// src/render/mod.rs
//! Pure HTML renderers. Every function maps (feed, filter, labels) to a string;
//! side effects stay in the API layer.

pub mod chart;
pub mod list;
pub mod page;
pub mod today;

use serde::Serialize;
use std::fmt::Write as _;

use crate::citations::{evidence_anchor, format_citations};
use crate::feed::{non_empty, Idea, Link};
use crate::labels::Labels;
use crate::sanitize::{attr, esc, safe_href};

pub use chart::{ChartAdapter, ChartMount};
pub use list::render_list;
pub use page::{render_page, PageContext};
pub use today::render_today;

pub const TODAY_SECTION: &str = "today";
pub const TODAY_CHART_ID: &str = "todayChart";
pub const TODAY_COMMUNITY_CAP: usize = 6;
pub const LIST_COMMUNITY_CAP: usize = 5;
pub const LIST_SOURCES_CAP: usize = 5;

const JOIN_SEP: &str = " · ";

/// Markup plus the charts that belong to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rendered {
    pub html: String,
    pub charts: Vec<ChartMount>,
}

/// Read-only inputs shared by the detail and list renderers.
#[derive(Debug, Clone)]
pub struct RenderCtx {
    pub labels: &'static Labels,
    pub charts: ChartAdapter,
}

impl RenderCtx {
    pub fn new(labels: &'static Labels, charts_enabled: bool) -> Self {
        Self {
            labels,
            charts: ChartAdapter::new(charts_enabled, labels.search_index),
        }
    }
}

/// Sanitize, substitute the placeholder when empty, then link citations.
pub(crate) fn rich_text(text: Option<&str>, fallback: &str, section: &str) -> String {
    format_citations(&esc(Some(non_empty(text).unwrap_or(fallback))), section)
}

pub(crate) fn joined(items: &[String]) -> Option<String> {
    Some(items.join(JOIN_SEP)).filter(|s| !s.is_empty())
}

pub(crate) fn score_total(idea: &Idea) -> Option<f64> {
    idea.score.as_ref().and_then(|s| s.total)
}

fn link_item(out: &mut String, link: &Link, meta: Option<&str>, id: Option<&str>) {
    out.push_str("<li");
    if let Some(id) = id {
        let _ = write!(out, r#" id="{id}""#);
    }
    // non-web schemes are shown as plain text
    match link.url.as_deref().and_then(safe_href) {
        Some(href) => {
            let _ = write!(
                out,
                r#"><a href="{}" target="_blank" rel="noopener">{}</a>"#,
                attr(href),
                esc(link.label())
            );
        }
        None => {
            let _ = write!(out, ">{}", esc(link.label()));
        }
    }
    if let Some(m) = non_empty(meta) {
        let _ = write!(out, r#" <span class="small">({})</span>"#, esc(Some(m)));
    }
    out.push_str("</li>");
}

/// `<ul>` of community posts, capped, with their origin in parentheses.
pub(crate) fn community_list(links: &[Link], cap: usize) -> String {
    let mut out = String::from(r#"<ul class="source-list small">"#);
    for l in links.iter().take(cap) {
        link_item(&mut out, l, l.source.as_deref(), None);
    }
    out.push_str("</ul>");
    out
}

/// `<ul>` of sources with publisher, capped.
pub(crate) fn sources_list(links: &[Link], cap: usize) -> String {
    let mut out = String::from(r#"<ul class="source-list small">"#);
    for l in links.iter().take(cap) {
        link_item(&mut out, l, l.publisher.as_deref(), None);
    }
    out.push_str("</ul>");
    out
}

/// Numbered evidence list; entry `n` carries the anchor `[n]` citations point at.
pub(crate) fn evidence_list(links: &[Link], section: &str) -> String {
    let mut out = String::from("<ol>");
    for (i, l) in links.iter().enumerate() {
        let anchor = evidence_anchor(section, i + 1);
        link_item(&mut out, l, None, Some(&anchor));
    }
    out.push_str("</ol>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: Option<&str>, url: &str) -> Link {
        Link {
            title: title.map(str::to_string),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn rich_text_escapes_before_linking() {
        let out = rich_text(Some("<i>x</i> [2]"), "?", "s");
        assert!(out.starts_with("&lt;i&gt;x&lt;/i&gt; "));
        assert!(out.contains(r##"href="#ev_s_2""##));
        assert_eq!(rich_text(None, "알 수 없습니다", "s"), "알 수 없습니다");
        assert_eq!(rich_text(Some(""), "fallback", "s"), "fallback");
    }

    #[test]
    fn joined_uses_dot_separator() {
        assert_eq!(joined(&["a".into(), "b".into()]).as_deref(), Some("a · b"));
        assert_eq!(joined(&[]), None);
    }

    #[test]
    fn evidence_entries_are_one_based() {
        let out = evidence_list(&[link(Some("A"), "https://a"), link(None, "https://b")], "i0");
        assert!(out.contains(r#"<li id="ev_i0_1"><a href="https://a""#));
        // title falls back to the url
        assert!(out.contains(r#"<li id="ev_i0_2"><a href="https://b" target="_blank" rel="noopener">https://b</a>"#));
    }

    #[test]
    fn community_list_is_capped() {
        let links: Vec<Link> = (0..10).map(|i| link(Some("t"), &format!("https://c/{i}"))).collect();
        let out = community_list(&links, TODAY_COMMUNITY_CAP);
        assert_eq!(out.matches("<li>").count(), 6);
    }

    #[test]
    fn script_urls_are_not_linked() {
        let out = evidence_list(
            &[link(Some("x"), "javascript:alert(1)"), link(None, "data:text/html,<b>")],
            "i0",
        );
        assert!(!out.contains("href="), "{out}");
        assert!(out.contains(r#"<li id="ev_i0_1">x</li>"#));
        assert!(out.contains(r#"<li id="ev_i0_2">data:text/html,&lt;b&gt;</li>"#));

        let out = sources_list(&[link(Some("ok"), "https://ok.test")], LIST_SOURCES_CAP);
        assert!(out.contains(r#"href="https://ok.test""#));
    }
}
