//! HTML layout for the dashboard page.
//!
//! The page is a header, a sidebar holding the filter form and four tabs.
//! Tab switching and filter changes are plain GET requests, so every render
//! reflects exactly one selection.

use charming::Chart;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::charts;
use crate::dashboard::DashboardView;
use crate::filter::FilterOptions;

mod panels;
mod sidebar;

pub use panels::format_thousands;

const TITLE: &str = "Dashboard Kualitas Udara Jakarta";
const ECHARTS_JS: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.0/dist/echarts.min.js";
const REMIXICON_CSS: &str = "https://cdn.jsdelivr.net/npm/remixicon@3.5.0/fonts/remixicon.css";

// ---

/// The four dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Analysis,
    Stations,
    Data,
}

impl Tab {
    // ---
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Analysis, Tab::Stations, Tab::Data];

    /// Query parameter value.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Overview => "ringkasan",
            Tab::Analysis => "analisis",
            Tab::Stations => "stasiun",
            Tab::Data => "data",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Ringkasan",
            Tab::Analysis => "Analisis",
            Tab::Stations => "Stasiun",
            Tab::Data => "Data",
        }
    }

    /// Unknown or absent values fall back to the overview tab.
    pub fn from_slug(slug: Option<&str>) -> Tab {
        Tab::ALL
            .into_iter()
            .find(|t| Some(t.slug()) == slug)
            .unwrap_or_default()
    }
}

/// A chart container and its ECharts option JSON, safe to inline in `<script>`.
pub(crate) struct DashboardChart {
    pub id: &'static str,
    pub options: String,
}

impl DashboardChart {
    fn new(id: &'static str, chart: Chart) -> Self {
        DashboardChart {
            id,
            options: script_safe(&chart.to_string()),
        }
    }
}

/// Keep CSV-sourced labels from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Render the complete dashboard page.
pub fn dashboard_page(view: &DashboardView, options: &FilterOptions, active: Tab) -> Markup {
    // ---
    let mut slots = Vec::new();
    let tabs = [
        (Tab::Overview, overview_tab(view, &mut slots)),
        (Tab::Analysis, analysis_tab(view, &mut slots)),
        (Tab::Stations, stations_tab(view, &mut slots)),
        (Tab::Data, data_tab(view)),
    ];
    let query = view.state.query_string();

    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                link rel="stylesheet" href=(REMIXICON_CSS);
                style { (PreEscaped(STYLE)) }
                script src=(ECHARTS_JS) {}
            }
            body {
                header class="app-header" { h1 { (TITLE) } }
                div class="app-body" {
                    (sidebar::sidebar(&view.state, options, active))
                    main class="app-main" {
                        nav class="tabs" {
                            @for tab in Tab::ALL {
                                a class=(if tab == active { "tab active" } else { "tab" })
                                    href=(tab_href(&query, tab)) { (tab.label()) }
                            }
                        }
                        @for (tab, content) in tabs {
                            section class="tab-panel" id=(tab.slug()) hidden[tab != active] {
                                (content)
                            }
                        }
                    }
                }
                script { (PreEscaped(charts_script(&slots))) }
            }
        }
    }
}

fn tab_href(query: &str, tab: Tab) -> String {
    // ---
    if query.is_empty() {
        format!("/?tab={}", tab.slug())
    } else {
        format!("/?{}&tab={}", query, tab.slug())
    }
}

fn overview_tab(view: &DashboardView, slots: &mut Vec<DashboardChart>) -> Markup {
    // ---
    html! {
        h2 { "Ringkasan Data" }
        (panels::kpi_row(view.kpi.as_ref()))
        h3 { "Tren ISPU Harian" }
        (panels::chart_slot(slots, "daily-trend", view.daily.as_deref().map(charts::daily_trend_chart)))
        h3 { "Distribusi Kategori" }
        (panels::chart_slot(slots, "category-distribution", view.categories.as_deref().map(charts::category_chart)))
        h3 { "Tren Kategori per Tahun" }
        (panels::chart_slot(slots, "category-trend", view.category_trend_all.as_ref().map(charts::category_trend_chart)))
    }
}

fn analysis_tab(view: &DashboardView, slots: &mut Vec<DashboardChart>) -> Markup {
    // ---
    html! {
        h2 { "Analisis Pola" }
        h3 { "Pola Musiman (Heatmap)" }
        (panels::chart_slot(slots, "monthly-heatmap", view.heatmap.as_ref().map(charts::heatmap_chart)))
        div class="row" {
            div class="col" {
                h3 { "Tren Bulanan" }
                (panels::chart_slot(slots, "monthly-trend", view.monthly.as_ref().map(charts::monthly_trend_chart)))
            }
            div class="col" {
                h3 { "Polutan Kritis" }
                (panels::chart_slot(slots, "critical-pollutants", view.critical.as_deref().map(charts::critical_chart)))
            }
        }
    }
}

fn stations_tab(view: &DashboardView, slots: &mut Vec<DashboardChart>) -> Markup {
    // ---
    html! {
        h2 { "Perbandingan Stasiun" }
        h3 { "Rata-rata Polutan per Stasiun" }
        (panels::chart_slot(slots, "station-comparison", view.stations.as_ref().map(charts::station_chart)))
        h3 { "Distribusi Polutan (Box Plot)" }
        (panels::chart_slot(slots, "pollutant-boxplot", view.boxplot.as_deref().map(charts::boxplot_chart)))
    }
}

fn data_tab(view: &DashboardView) -> Markup {
    // ---
    html! {
        h2 { "Data Detail" }
        (panels::detail_table(view.table.as_ref(), &view.state.query_string()))
    }
}

/// Script that initialises every chart once the page has loaded.
fn charts_script(charts: &[DashboardChart]) -> String {
    // ---
    let inits = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const el = document.getElementById("{}");
                    if (!el || el.offsetParent === null) return;
                    const chart = echarts.init(el);
                    chart.setOption({});
                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("document.addEventListener('DOMContentLoaded', function() {{\n{inits}\n}});")
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #fafafa; color: #333; }
.app-header { background: #1976D2; color: white; padding: 12px 20px; }
.app-header h1 { margin: 0; font-size: 20px; font-weight: 600; }
.app-body { display: flex; min-height: calc(100vh - 52px); }
.sidebar { width: 280px; flex-shrink: 0; background: white; border-right: 1px solid #e0e0e0; padding: 12px; }
.sidebar label { display: block; font-size: 12px; color: #666; margin: 10px 0 4px; }
.sidebar select { width: 100%; padding: 6px; }
.app-main { flex: 1; padding: 16px 24px; min-width: 0; }
.tabs { display: flex; gap: 4px; border-bottom: 2px solid #e0e0e0; margin-bottom: 16px; }
.tab { padding: 8px 16px; text-decoration: none; color: #555; }
.tab.active { color: #2196F3; border-bottom: 2px solid #2196F3; margin-bottom: -2px; }
.kpi-row { display: flex; gap: 12px; flex-wrap: wrap; }
.kpi { flex: 1; min-width: 180px; border: 1px solid #e0e0e0; padding: 12px 15px; background: white; display: flex; align-items: center; gap: 12px; }
.kpi i { font-size: 32px; }
.kpi-label { font-size: 12px; color: #666; margin-bottom: 2px; }
.kpi-value { font-size: 24px; font-weight: 600; color: #333; }
.chart { width: 100%; height: 420px; background: white; }
.row { display: flex; gap: 16px; }
.col { flex: 1; min-width: 0; }
.placeholder { color: #666; }
table.detail { border-collapse: collapse; width: 100%; background: white; font-size: 13px; }
table.detail th, table.detail td { border: 1px solid #e0e0e0; padding: 4px 8px; text-align: left; }
.pager { margin-top: 10px; display: flex; gap: 12px; align-items: center; }
"#;
