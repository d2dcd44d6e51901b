// src/render/today.rs
//! Detail view of the top-ranked idea.

use std::fmt::Write as _;

use super::{
    community_list, evidence_list, joined, rich_text, score_total, RenderCtx, Rendered,
    TODAY_CHART_ID, TODAY_COMMUNITY_CAP, TODAY_SECTION,
};
use crate::feed::Feed;
use crate::sanitize::esc;

pub fn render_today(feed: &Feed, ctx: &RenderCtx) -> Rendered {
    let l = ctx.labels;
    let Some(top) = feed.top() else {
        return Rendered {
            html: esc(Some(l.no_data)),
            charts: Vec::new(),
        };
    };
    let id = TODAY_SECTION;
    let mut html = String::with_capacity(2048);
    let mut charts = Vec::new();

    html.push_str(r#"<div class="grid cols-2"><div>"#);
    let _ = write!(
        html,
        r#"<div class="badge">{}</div><h3>{}</h3>"#,
        esc(Some(top.category())),
        esc(Some(top.headline().unwrap_or(l.unknown)))
    );
    if let Some(total) = score_total(top) {
        let _ = write!(
            html,
            r#"<div class="kv"><div class="k">{}</div><div class="v"><b>{}</b> / 100</div></div>"#,
            l.score, total
        );
    }
    let _ = write!(
        html,
        r#"<div class="small">{}</div><p>{}</p>"#,
        l.summary,
        rich_text(top.summary.as_deref(), l.unknown, id)
    );
    let _ = write!(
        html,
        r#"<div class="small">{}</div><p>{}</p>"#,
        l.why_now,
        rich_text(top.why_now.as_deref(), l.unknown, id)
    );
    let _ = write!(
        html,
        r#"<div class="small">{}</div><p>{}</p>"#,
        l.entry_strategy,
        rich_text(joined(&top.gtm_tactics).as_deref(), l.unknown, id)
    );
    html.push_str("</div><div>");

    if let Some(mount) = ctx.charts.line(TODAY_CHART_ID, &top.trend_series) {
        let _ = write!(
            html,
            r#"<div class="chart-box"><canvas id="{TODAY_CHART_ID}" height="160"></canvas></div>"#
        );
        charts.push(mount);
    }
    let _ = write!(
        html,
        r#"<div class="small">{}</div>{}</div></div>"#,
        l.community_top,
        community_list(&top.community_top, TODAY_COMMUNITY_CAP)
    );
    let _ = write!(
        html,
        r#"<div class="small">{}</div>{}"#,
        l.evidence,
        evidence_list(&top.evidence, id)
    );

    Rendered { html, charts }
}
