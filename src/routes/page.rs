use axum::{extract::Query, extract::State, response::Html, routing::get, Router};
use serde::Deserialize;
use tracing::info;

use super::AppState;
use crate::{dashboard_page, DashboardView, FilterQuery, FilterState, Tab};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/", get(handler))
}

/// Page-level query parameters; the selectors are read separately as a
/// [`FilterQuery`] from the same query string.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    tab: Option<String>,
    page: Option<String>,
}

async fn handler(
    Query(filter): Query<FilterQuery>,
    Query(params): Query<PageQuery>,
    State(state): State<AppState>,
) -> Html<String> {
    // ---
    let selection = FilterState::from(&filter);
    let tab = Tab::from_slug(params.tab.as_deref());
    info!(
        "GET / - year={} station={} category={} tab={}",
        selection.year,
        selection.station,
        selection.category,
        tab.slug()
    );

    let view = DashboardView::compute(
        &state.dataset,
        selection,
        parse_page(params.page.as_deref()),
        state.config.table_page_size,
    );

    Html(dashboard_page(&view, &state.options, tab).into_string())
}

/// 1-based page number; anything unparseable means the first page.
pub(super) fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}
