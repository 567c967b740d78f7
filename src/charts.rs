//! ECharts option documents for every dashboard chart.
//!
//! Builders produce plain aggregates; this module turns each one into a
//! `charming::Chart`. The page embeds `chart.to_string()` (the ECharts option
//! JSON) and initialises it client-side. Missing values are passed as NaN,
//! which serializes to `null` and leaves a gap in the series.

use charming::{
    component::{Axis, Grid, Legend, Title, VisualMap, VisualMapChannel},
    datatype::DataPointItem,
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, Orient, Tooltip, Trigger},
    series::{Bar, Boxplot, Heatmap, Line},
    Chart,
};

use crate::builders::{
    CategoryTrend, DailyPoint, LabelCount, MonthlyGrid, MonthlyTrend, PollutantBox,
    StationComparison,
};
use crate::models::Pollutant;

const TREND_COLOR: &str = "#2196F3";
const FALLBACK_COLOR: &str = "#9E9E9E";
const HEATMAP_COLORS: [&str; 5] = ["#1a9850", "#91cf60", "#fee08b", "#fc8d59", "#d73027"];

// ---

/// Fixed color for an air-quality category label.
pub fn category_color(category: &str) -> &'static str {
    // ---
    match category {
        "BAIK" => "#4CAF50",
        "SEDANG" => "#FFC107",
        "TIDAK SEHAT" => "#FF9800",
        "SANGAT TIDAK SEHAT" => "#F44336",
        _ => FALLBACK_COLOR,
    }
}

/// Fixed color for a critical-pollutant label.
pub fn critical_color(pollutant: &str) -> &'static str {
    // ---
    match pollutant {
        "PM10" => "#FF6B6B",
        "PM25" => "#FFA500",
        "SO2" => "#4ECDC4",
        "CO" => "#95E1D3",
        "O3" => "#F38181",
        "NO2" => "#AA96DA",
        _ => FALLBACK_COLOR,
    }
}

fn or_gap(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}

fn base_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

pub fn daily_trend_chart(points: &[DailyPoint]) -> Chart {
    // ---
    let labels: Vec<String> = points
        .iter()
        .map(|p| p.date.format("%Y-%m-%d").to_string())
        .collect();
    let values: Vec<f64> = points.iter().map(|p| or_gap(p.mean)).collect();

    Chart::new()
        .title(Title::new().text("Tren ISPU dari Waktu ke Waktu"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(base_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Tanggal")
                .data(labels),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("ISPU (Max)"))
        .series(
            Line::new()
                .name("ISPU")
                .show_symbol(false)
                .item_style(ItemStyle::new().color(TREND_COLOR))
                .line_style(LineStyle::new().width(2))
                .data(values),
        )
}

pub fn category_chart(counts: &[LabelCount]) -> Chart {
    // ---
    let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
    let bars: Vec<DataPointItem> = counts
        .iter()
        .map(|c| {
            DataPointItem::new(c.count as i64)
                .item_style(ItemStyle::new().color(category_color(&c.label)))
        })
        .collect();

    Chart::new()
        .title(Title::new().text("Distribusi Kategori Kualitas Udara"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(base_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Kategori")
                .data(labels),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Jumlah"))
        .series(Bar::new().name("Jumlah").data(bars))
}

pub fn station_chart(comparison: &StationComparison) -> Chart {
    // ---
    let mut chart = Chart::new()
        .title(Title::new().text("Perbandingan Polutan per Stasiun"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().top(30))
        .grid(base_grid().top(80))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Stasiun")
                .data(comparison.stations.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Rata-rata Nilai"));

    for pollutant in Pollutant::ALL {
        let values: Vec<f64> = comparison
            .series(pollutant)
            .into_iter()
            .map(or_gap)
            .collect();
        chart = chart.series(Bar::new().name(pollutant.column()).data(values));
    }

    chart
}

pub fn heatmap_chart(grid: &MonthlyGrid) -> Chart {
    // ---
    let years: Vec<String> = grid.years.iter().map(i32::to_string).collect();
    let months: Vec<String> = grid.months.iter().map(|m| m.name().to_string()).collect();

    let data: Vec<Vec<f64>> = grid
        .cells
        .iter()
        .filter_map(|cell| {
            let x = grid.years.iter().position(|y| *y == cell.year)?;
            let y = grid.months.iter().position(|m| *m == cell.month)?;
            Some(vec![x as f64, y as f64, (cell.mean * 10.0).round() / 10.0])
        })
        .collect();

    let (min, max) = grid
        .cells
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c.mean), hi.max(c.mean))
        });
    let (min, max) = if min <= max { (min, max) } else { (0.0, 0.0) };

    Chart::new()
        .title(Title::new().text("Pola ISPU Bulanan per Tahun"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .grid(base_grid().bottom(70))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Tahun")
                .data(years),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Bulan")
                .data(months),
        )
        .visual_map(
            VisualMap::new()
                .min(min.floor())
                .max(max.ceil())
                .calculable(true)
                .orient(Orient::Horizontal)
                .left("center")
                .in_range(VisualMapChannel::new().color(HEATMAP_COLORS.to_vec())),
        )
        .series(Heatmap::new().name("ISPU").data(data))
}

pub fn critical_chart(counts: &[LabelCount]) -> Chart {
    // ---
    let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
    let bars: Vec<DataPointItem> = counts
        .iter()
        .map(|c| {
            DataPointItem::new(c.count as i64)
                .item_style(ItemStyle::new().color(critical_color(&c.label)))
        })
        .collect();

    Chart::new()
        .title(Title::new().text("Distribusi Polutan Kritis"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(base_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Jumlah Kejadian"),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Polutan")
                .data(labels),
        )
        .series(Bar::new().name("Jumlah").data(bars))
}

pub fn monthly_trend_chart(trend: &MonthlyTrend) -> Chart {
    // ---
    let periods = trend.periods();

    let mut chart = Chart::new()
        .title(Title::new().text("Tren ISPU Bulanan"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().right(10).top(30))
        .grid(base_grid().top(80))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Bulan")
                .axis_label(AxisLabel::new().rotate(45))
                .data(periods),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Rata-rata ISPU"));

    for year in trend.years() {
        let values: Vec<f64> = trend
            .points
            .iter()
            .map(|p| if p.year == year { or_gap(p.mean) } else { f64::NAN })
            .collect();
        chart = chart.series(Line::new().name(year.to_string()).data(values));
    }

    chart
}

pub fn boxplot_chart(boxes: &[PollutantBox]) -> Chart {
    // ---
    let labels: Vec<String> = boxes.iter().map(|b| b.pollutant.column().to_string()).collect();
    let data: Vec<Vec<f64>> = boxes
        .iter()
        .map(|b| vec![b.min, b.q1, b.median, b.q3, b.max])
        .collect();

    Chart::new()
        .title(Title::new().text("Distribusi Nilai Polutan"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .grid(base_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Polutan")
                .data(labels),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Nilai"))
        .series(Boxplot::new().name("Polutan").data(data))
}

pub fn category_trend_chart(trend: &CategoryTrend) -> Chart {
    // ---
    let years: Vec<String> = trend.years.iter().map(i32::to_string).collect();

    let mut chart = Chart::new()
        .title(Title::new().text("Tren Kategori Kualitas Udara per Tahun"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().right(10).top(30))
        .grid(base_grid().top(80))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Tahun")
                .data(years),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Jumlah Hari"));

    for series in &trend.series {
        let counts: Vec<i64> = series.counts.iter().map(|&c| c as i64).collect();
        chart = chart.series(
            Line::new()
                .name(series.category.as_str())
                .item_style(ItemStyle::new().color(category_color(&series.category)))
                .line_style(LineStyle::new().width(2.5))
                .data(counts),
        );
    }

    chart
}
