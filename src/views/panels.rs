use charming::Chart;
use maud::{html, Markup};
use num_format::{Locale, ToFormattedString};

use super::{DashboardChart, Tab};
use crate::builders::{KpiSummary, TablePage, NO_DATA};

// ---

pub(super) fn placeholder() -> Markup {
    html! { h3 class="placeholder" { (NO_DATA) } }
}

/// Chart container, or the placeholder when the builder had no data.
pub(super) fn chart_slot(
    charts: &mut Vec<DashboardChart>,
    id: &'static str,
    chart: Option<Chart>,
) -> Markup {
    // ---
    match chart {
        Some(chart) => {
            charts.push(DashboardChart::new(id, chart));
            html! { div class="chart" id=(id) {} }
        }
        None => placeholder(),
    }
}

fn kpi_card(icon: &str, color: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="kpi" {
            i class=(icon) style=(format!("color: {color};")) {}
            div {
                div class="kpi-label" { (label) }
                div class="kpi-value" { (value) }
            }
        }
    }
}

pub(super) fn kpi_row(kpi: Option<&KpiSummary>) -> Markup {
    // ---
    let Some(kpi) = kpi else {
        return placeholder();
    };

    html! {
        div class="kpi-row" {
            (kpi_card("ri-bar-chart-box-line", "#4CAF50", "Total Pengukuran", &format_thousands(kpi.total)))
            (kpi_card("ri-dashboard-line", "#2196F3", "Rata-rata ISPU", &format!("{:.1}", kpi.avg_index)))
            (kpi_card("ri-checkbox-circle-line", "#00BCD4", "Hari Berkualitas BAIK", &format_thousands(kpi.good_days)))
            (kpi_card("ri-alert-line", "#FF9800", "Polutan Paling Kritis", &kpi.critical_pollutant))
        }
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{}", (v * 100.0).round() / 100.0))
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn page_href(query: &str, page: usize) -> String {
    // ---
    let tab = Tab::Data.slug();
    if query.is_empty() {
        format!("/?tab={tab}&page={page}")
    } else {
        format!("/?{query}&tab={tab}&page={page}")
    }
}

/// Paginated detail table, newest rows first.
pub(super) fn detail_table(table: Option<&TablePage>, query: &str) -> Markup {
    // ---
    let Some(table) = table else {
        return placeholder();
    };

    html! {
        table class="detail" {
            thead {
                tr {
                    @for col in ["tanggal", "stasiun", "categori", "max", "critical", "pm25", "pm10", "so2", "co", "o3", "no2"] {
                        th { (col) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        td { (row.tanggal) }
                        td { (text(row.stasiun.as_deref())) }
                        td { (text(row.categori.as_deref())) }
                        td { (cell(row.max)) }
                        td { (text(row.critical.as_deref())) }
                        td { (cell(row.pm25)) }
                        td { (cell(row.pm10)) }
                        td { (cell(row.so2)) }
                        td { (cell(row.co)) }
                        td { (cell(row.o3)) }
                        td { (cell(row.no2)) }
                    }
                }
            }
        }
        div class="pager" {
            @if table.page > 1 {
                a href=(page_href(query, table.page - 1)) { "« Sebelumnya" }
            }
            span { "Halaman " (table.page) " dari " (table.page_count) " (" (format_thousands(table.total_rows)) " baris)" }
            @if table.page < table.page_count {
                a href=(page_href(query, table.page + 1)) { "Berikutnya »" }
            }
        }
    }
}

/// Format a count with comma thousands separators, e.g. `12,345`.
pub fn format_thousands(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}
