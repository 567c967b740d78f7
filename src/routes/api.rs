//! JSON endpoints exposing the same selections as the dashboard page.

use axum::{extract::Query, extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{page::parse_page, AppState};
use crate::builders::{detail_table, kpi_summary, KpiSummary, TablePage, NO_DATA};
use crate::{filter_records, FilterOptions, FilterQuery, FilterState};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/api/options", get(options))
        .route("/api/summary", get(summary))
        .route("/api/records", get(records))
}

/// Selector values echoed back in every response.
#[derive(Debug, Serialize)]
struct Selection {
    year: String,
    station: String,
    category: String,
}

impl From<&FilterState> for Selection {
    fn from(state: &FilterState) -> Self {
        Selection {
            year: state.year.to_string(),
            station: state.station.to_string(),
            category: state.category.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Panel<T> {
    selection: Selection,
    matched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<&'static str>,
}

impl<T> Panel<T> {
    fn new(state: &FilterState, matched: usize, data: Option<T>) -> Self {
        // ---
        let placeholder = data.is_none().then_some(NO_DATA);
        Panel {
            selection: Selection::from(state),
            matched,
            data,
            placeholder,
        }
    }
}

async fn options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.options.as_ref().clone())
}

async fn summary(
    Query(filter): Query<FilterQuery>,
    State(state): State<AppState>,
) -> Json<Panel<KpiSummary>> {
    // ---
    let selection = FilterState::from(&filter);
    let subset = filter_records(state.dataset.records(), &selection);
    info!("GET /api/summary - {} rows matched", subset.len());

    Json(Panel::new(&selection, subset.len(), kpi_summary(&subset)))
}

#[derive(Debug, Deserialize)]
struct RecordsQuery {
    page: Option<String>,
}

async fn records(
    Query(filter): Query<FilterQuery>,
    Query(params): Query<RecordsQuery>,
    State(state): State<AppState>,
) -> Json<Panel<TablePage>> {
    // ---
    let selection = FilterState::from(&filter);
    let subset = filter_records(state.dataset.records(), &selection);
    let page = parse_page(params.page.as_deref());
    info!("GET /api/records - {} rows matched, page {}", subset.len(), page);

    let table = detail_table(&subset, page, state.config.table_page_size);
    Json(Panel::new(&selection, subset.len(), table))
}
