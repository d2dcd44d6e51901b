use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info};

use crate::config::UpdateAction;
use crate::feed::Feed;
use crate::filter::FilterState;
use crate::render::{render_list, render_page, render_today, PageContext, Rendered};
use crate::state::AppState;

pub const STYLESHEET_PATH: &str = "assets/style.css";

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(index))
        .route("/ideas", get(ideas_fragment))
        .route("/today", get(today_fragment))
        .route("/categories", get(categories))
        .route("/reload", post(reload))
        .route("/update", get(update));

    if let Some(dir) = state.settings.static_dir.as_ref() {
        router = router.nest_service("/assets", ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Same as [`create_router`]; re-exported at the crate root.
pub fn router(state: AppState) -> Router {
    create_router(state)
}

async fn index(State(state): State<AppState>, Query(filter): Query<FilterState>) -> Html<String> {
    counter!("dashboard_renders_total", "view" => "page").increment(1);
    let labels = state.labels();
    let ctx = state.render_ctx();
    let snap = state.snapshot();
    let error = state.last_error();
    let empty = Feed::default();
    let feed = snap.as_deref().map(|s| &s.feed).unwrap_or(&empty);

    let settings = &state.settings;
    let page = PageContext {
        title: &settings.page_title,
        locale: settings.locale,
        last_updated: snap
            .as_deref()
            .map(|s| s.last_updated(labels))
            .unwrap_or_else(|| labels.last_updated.to_string()),
        categories: snap.as_deref().map(|s| s.categories.as_slice()).unwrap_or(&[]),
        filter: &filter,
        update: state.update_action(),
        error: error.as_deref(),
        chart_library_url: settings.chart_library_url.as_deref(),
        stylesheet: settings.static_dir.as_ref().map(|_| STYLESHEET_PATH),
        today: render_today(feed, &ctx),
        list: render_list(feed, &filter, &ctx),
    };
    Html(render_page(page))
}

async fn ideas_fragment(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Json<Rendered> {
    counter!("dashboard_renders_total", "view" => "list").increment(1);
    debug!(target: "api", q = %filter.q, category = %filter.category, "list fragment");
    let ctx = state.render_ctx();
    let snap = state.snapshot();
    let out = match snap.as_deref() {
        Some(s) => render_list(&s.feed, &filter, &ctx),
        None => render_list(&Feed::default(), &filter, &ctx),
    };
    Json(out)
}

async fn today_fragment(State(state): State<AppState>) -> Json<Rendered> {
    counter!("dashboard_renders_total", "view" => "today").increment(1);
    let ctx = state.render_ctx();
    let snap = state.snapshot();
    let out = match snap.as_deref() {
        Some(s) => render_today(&s.feed, &ctx),
        None => render_today(&Feed::default(), &ctx),
    };
    Json(out)
}

async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .snapshot()
            .map(|s| s.categories.clone())
            .unwrap_or_default(),
    )
}

/// Manual reload. A failure is surfaced by the page banner, so both outcomes
/// redirect back to the dashboard with the same search and category.
async fn reload(State(state): State<AppState>, Query(filter): Query<FilterState>) -> Redirect {
    match state.reload().await {
        Ok(snap) => info!(target: "api", ideas = snap.feed.ideas.len(), "manual reload"),
        Err(_) => info!(target: "api", "manual reload failed"),
    }
    let qs = filter.query_string();
    if qs.is_empty() {
        Redirect::to("/")
    } else {
        Redirect::to(&format!("/?{qs}"))
    }
}

async fn update(State(state): State<AppState>) -> Response {
    match state.update_action() {
        UpdateAction::Navigate(url) => Redirect::to(&url).into_response(),
        UpdateAction::Notice => {
            (StatusCode::CONFLICT, state.labels().repo_path_missing).into_response()
        }
    }
}
