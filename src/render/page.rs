// src/render/page.rs
//! Full dashboard document: controls, detail view, card list, chart glue.

use std::fmt::Write as _;

use super::chart::script_json;
use super::{ChartMount, Rendered};
use crate::config::UpdateAction;
use crate::filter::FilterState;
use crate::labels::Locale;
use crate::sanitize::{attr, esc};

/// Re-requests the card list on filter input and mounts charts when the
/// charting library is present.
const GLUE_JS: &str = r#"(function(){
  function mount(list){
    if(!window.Chart||!list){return;}
    list.forEach(function(m){var el=document.getElementById(m.id);if(el){new Chart(el,m.chart);}});
  }
  var initial=document.getElementById('chartMounts');
  mount(initial?JSON.parse(initial.textContent):[]);
  var input=document.getElementById('filterInput');
  var sel=document.getElementById('categorySel');
  var list=document.getElementById('ideasList');
  if(!input||!sel||!list){return;}
  function refresh(){
    var qs=new URLSearchParams({q:input.value,category:sel.value}).toString();
    fetch('ideas?'+qs).then(function(r){return r.json();}).then(function(frag){
      list.innerHTML=frag.html;
      mount(frag.charts);
      history.replaceState(null,'','?'+qs);
      var rf=document.getElementById('reloadForm');
      if(rf){rf.setAttribute('action','reload?'+qs);}
    });
  }
  input.addEventListener('input',refresh);
  sel.addEventListener('change',refresh);
})();"#;

pub struct PageContext<'a> {
    pub title: &'a str,
    pub locale: Locale,
    pub last_updated: String,
    pub categories: &'a [String],
    pub filter: &'a FilterState,
    pub update: UpdateAction,
    /// Message of the last failed load, shown until a load succeeds.
    pub error: Option<&'a str>,
    pub chart_library_url: Option<&'a str>,
    pub stylesheet: Option<&'a str>,
    pub today: Rendered,
    pub list: Rendered,
}

/// Reload form target carrying the current selection.
fn reload_action(filter: &FilterState) -> String {
    let qs = filter.query_string();
    if qs.is_empty() {
        "reload".to_string()
    } else {
        format!("reload?{qs}")
    }
}

pub fn render_page(p: PageContext<'_>) -> String {
    let l = p.locale.labels();
    let mut html = String::with_capacity(p.today.html.len() + p.list.html.len() + 4096);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
"#,
        lang = p.locale.html_lang(),
        title = esc(Some(p.title)),
    );
    if let Some(css) = p.stylesheet {
        let _ = writeln!(html, r#"<link rel="stylesheet" href="{}">"#, attr(css));
    }
    if let Some(lib) = p.chart_library_url {
        let _ = writeln!(html, r#"<script src="{}"></script>"#, attr(lib));
    }
    html.push_str("</head>\n<body>\n");

    let _ = write!(
        html,
        r#"<header class="top"><h1>{}</h1><div id="lastUpdated" class="small">{}</div><div class="actions">{}<form id="reloadForm" method="post" action="{}"><button id="reloadBtn" type="submit">{}</button></form></div></header>
"#,
        esc(Some(p.title)),
        esc(Some(p.last_updated.as_str())),
        update_control(&p.update, l.update_button, l.repo_path_missing),
        attr(&reload_action(p.filter)),
        l.reload_button
    );

    if let Some(err) = p.error {
        let _ = writeln!(
            html,
            r#"<div class="banner error" role="alert">{}: {}</div>"#,
            l.load_failed,
            esc(Some(err))
        );
    }

    let _ = writeln!(
        html,
        r#"<section class="card"><h2>{}</h2><div id="todayBody">{}</div></section>"#,
        l.today_heading, p.today.html
    );

    let _ = write!(
        html,
        r#"<section><h2>{}</h2><form id="filterForm" method="get" action=""><input id="filterInput" name="q" type="search" value="{}" placeholder="{}"><select id="categorySel" name="category">{}</select><noscript><button type="submit">OK</button></noscript></form>
<div id="ideasList">{}</div></section>
"#,
        l.list_heading,
        attr(&p.filter.q),
        attr(l.filter_placeholder),
        category_options(p.categories, p.filter, l.all_categories),
        p.list.html
    );

    let mounts: Vec<&ChartMount> = p.today.charts.iter().chain(p.list.charts.iter()).collect();
    let _ = write!(
        html,
        "<script id=\"chartMounts\" type=\"application/json\">{}</script>\n<script>{}</script>\n</body>\n</html>\n",
        script_json(&mounts),
        GLUE_JS
    );
    html
}

/// The synthetic "all categories" option followed by the derived categories.
pub fn category_options(categories: &[String], filter: &FilterState, all_label: &str) -> String {
    let selected = filter.selected_category();
    let mut out = format!(
        r#"<option value=""{}>{}</option>"#,
        if selected.is_none() { " selected" } else { "" },
        esc(Some(all_label))
    );
    for c in categories {
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            attr(c),
            if selected == Some(c.as_str()) { " selected" } else { "" },
            esc(Some(c.as_str()))
        );
    }
    out
}

fn update_control(action: &UpdateAction, label: &str, notice: &str) -> String {
    match action {
        UpdateAction::Navigate(url) => format!(
            r#"<a id="manualBtn" class="btn" href="{}" target="_blank" rel="noopener">{}</a>"#,
            attr(url),
            esc(Some(label))
        ),
        UpdateAction::Notice => format!(
            r#"<button id="manualBtn" type="button" data-notice="{}" onclick="alert(this.dataset.notice)">{}</button>"#,
            attr(notice),
            esc(Some(label))
        ),
    }
}
