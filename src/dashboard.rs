//! Recompute-on-demand view model.
//!
//! A request carries the selector triple; `DashboardView::compute` filters
//! the shared dataset once and runs every builder over the result. Nothing is
//! cached between requests.

use tracing::debug;

use crate::builders::{self, CategoryTrend, DailyPoint, KpiSummary, LabelCount, MonthlyGrid};
use crate::builders::{MonthlyTrend, PollutantBox, StationComparison, TablePage};
use crate::dataset::Dataset;
use crate::filter::{filter_records, FilterState};

// ---

/// Every panel of the dashboard for one selection. `None` means the panel
/// shows the empty-data placeholder.
#[derive(Debug, Clone)]
pub struct DashboardView {
    // ---
    pub state: FilterState,
    pub matched: usize,
    pub kpi: Option<KpiSummary>,
    pub daily: Option<Vec<DailyPoint>>,
    pub categories: Option<Vec<LabelCount>>,
    pub category_trend_all: Option<CategoryTrend>,
    pub heatmap: Option<MonthlyGrid>,
    pub monthly: Option<MonthlyTrend>,
    pub critical: Option<Vec<LabelCount>>,
    pub stations: Option<StationComparison>,
    pub boxplot: Option<Vec<PollutantBox>>,
    pub table: Option<TablePage>,
}

impl DashboardView {
    // ---
    pub fn compute(dataset: &Dataset, state: FilterState, page: usize, page_size: usize) -> Self {
        // ---
        let subset = filter_records(dataset.records(), &state);
        debug!("Selection {:?} matched {} rows", state, subset.len());

        DashboardView {
            matched: subset.len(),
            kpi: builders::kpi_summary(&subset),
            daily: builders::daily_trend(&subset),
            categories: builders::category_distribution(&subset),
            category_trend_all: builders::category_trend_all_years(dataset.records(), &state),
            heatmap: builders::monthly_heatmap(&subset),
            monthly: builders::monthly_trend(&subset),
            critical: builders::critical_distribution(&subset),
            stations: builders::station_comparison(&subset),
            boxplot: builders::pollutant_boxplot(&subset),
            table: builders::detail_table(&subset, page, page_size),
            state,
        }
    }
}
