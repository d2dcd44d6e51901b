// src/render/list.rs
//! Filterable card list. Numbering follows the filtered sequence, not the feed rank.

use std::fmt::Write as _;

use super::{
    community_list, evidence_list, joined, rich_text, score_total, sources_list, RenderCtx,
    Rendered, LIST_COMMUNITY_CAP, LIST_SOURCES_CAP,
};
use crate::feed::{non_empty, Feed, Idea};
use crate::filter::{filter_ideas, FilterState};
use crate::sanitize::esc;

pub fn card_section(idx: usize) -> String {
    format!("i{idx}")
}

pub fn card_chart_id(idx: usize) -> String {
    format!("chart_{idx}")
}

pub fn render_list(feed: &Feed, filter: &FilterState, ctx: &RenderCtx) -> Rendered {
    let items = filter_ideas(feed, filter);
    if items.is_empty() {
        return Rendered {
            html: format!(r#"<div class="card">{}</div>"#, esc(Some(ctx.labels.no_results))),
            charts: Vec::new(),
        };
    }

    let mut out = Rendered::default();
    for (idx, idea) in items.into_iter().enumerate() {
        render_card(&mut out, idx, idea, ctx);
    }
    out
}

fn render_card(out: &mut Rendered, idx: usize, it: &Idea, ctx: &RenderCtx) {
    let l = ctx.labels;
    let id = card_section(idx);
    let id = id.as_str();
    let html = &mut out.html;

    html.push_str(r#"<article class="card idea-card"><header><div>"#);
    let _ = write!(
        html,
        r#"<div class="badge">{}</div><strong>{}</strong>"#,
        esc(Some(it.category())),
        esc(Some(non_empty(it.title.as_deref()).unwrap_or(l.unknown)))
    );
    if let Some(total) = score_total(it) {
        let _ = write!(html, r#" <span class="small">· {} {}</span>"#, l.score, total);
    }
    let _ = write!(
        html,
        r#"</div><div class="small">{} {}</div></header>"#,
        l.rank,
        idx + 1
    );

    html.push_str(r#"<div class="body"><div class="grid cols-3"><div>"#);
    section(html, l.one_liner, &rich_text(it.one_liner.as_deref(), l.unknown, id));
    section(html, l.summary, &rich_text(it.summary.as_deref(), l.unknown, id));
    section(html, l.why_now, &rich_text(it.why_now.as_deref(), l.unknown, id));
    html.push_str("</div><div>");
    section(
        html,
        l.entry_strategy,
        &rich_text(joined(&it.gtm_tactics).as_deref(), l.unknown, id),
    );
    section(html, l.market, &rich_text(it.market.as_deref(), l.uncertain, id));
    section(html, l.risks, &rich_text(it.risks.as_deref(), l.uncertain, id));
    section(
        html,
        l.validation_steps,
        &rich_text(joined(&it.validation_steps).as_deref(), l.uncertain, id),
    );
    html.push_str("</div><div>");

    let chart_id = card_chart_id(idx);
    if let Some(mount) = ctx.charts.line(&chart_id, &it.trend_series) {
        let _ = write!(
            html,
            r#"<div class="small">{}</div><div class="chart-box"><canvas id="{chart_id}" height="120"></canvas></div>"#,
            l.trend
        );
        out.charts.push(mount);
    }
    let _ = write!(
        html,
        r#"<div class="small">{}</div>{}"#,
        l.community_top,
        community_list(&it.community_top, LIST_COMMUNITY_CAP)
    );
    let _ = write!(
        html,
        r#"<div class="small">{}</div>{}"#,
        l.evidence,
        evidence_list(&it.evidence, id)
    );
    if !it.sources.is_empty() {
        let _ = write!(
            html,
            r#"<div class="small">{}</div>{}"#,
            l.sources,
            sources_list(&it.sources, LIST_SOURCES_CAP)
        );
    }
    html.push_str("</div></div></div></article>");
}

fn section(html: &mut String, heading: &str, body: &str) {
    let _ = write!(html, r#"<div class="small">{heading}</div><p>{body}</p>"#);
}
