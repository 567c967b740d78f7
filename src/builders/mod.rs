//! Metric and chart builders.
//!
//! Every builder is a pure function from a record subset to one aggregate.
//! Builders return `None` for an empty subset; the view layer renders
//! [`NO_DATA`] in that case instead of a chart.

use std::collections::HashMap;

mod categories;
mod distribution;
mod stations;
mod summary;
mod table;
mod trends;

pub use categories::{category_trend, category_trend_all_years, CategorySeries, CategoryTrend};
pub use distribution::{
    category_distribution, critical_distribution, pollutant_boxplot, LabelCount, PollutantBox,
};
pub use stations::{station_comparison, StationComparison, StationPollutantMean};
pub use summary::{kpi_summary, KpiSummary};
pub use table::{detail_table, TablePage, TableRow};
pub use trends::{
    daily_trend, monthly_heatmap, monthly_trend, DailyPoint, HeatCell, MonthlyGrid, MonthlyPoint,
    MonthlyTrend,
};

/// Placeholder shown by every panel when the filtered subset is empty.
pub const NO_DATA: &str = "Tidak ada data untuk ditampilkan";

// ---

/// Arithmetic mean of the given values, `None` when there are none.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    // ---
    let mut acc = MeanAcc::default();
    for v in values {
        acc.push(Some(v));
    }
    acc.value()
}

/// Running mean that skips missing values.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    // ---
    pub(crate) fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    pub(crate) fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Count labels, keeping the order in which each label first appears.
pub(crate) fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    // ---
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label, counts.len());
                counts.push((label.to_string(), 1));
            }
        }
    }
    counts
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    // ---
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
pub(crate) mod fixtures {
    // ---
    use chrono::NaiveDate;

    use crate::models::{Measurement, RawRecord};

    /// Measurement with every pollutant set to `max`.
    pub fn rec(date: &str, station: &str, category: &str, max: f64, critical: &str) -> Measurement {
        // ---
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Measurement::new(
            d,
            RawRecord {
                date: date.to_string(),
                station: Some(station.to_string()),
                pm10: Some(max),
                pm25: Some(max),
                so2: Some(max),
                co: Some(max),
                o3: Some(max),
                no2: Some(max),
                max: Some(max),
                critical: Some(critical.to_string()),
                category: Some(category.to_string()),
            },
        )
    }

    pub fn refs(records: &[Measurement]) -> Vec<&Measurement> {
        records.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_mean_of_values_and_empty() {
        // ---
        assert_eq!(mean([40.0, 60.0]), Some(50.0));
        assert_eq!(mean(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_mean_acc_skips_missing() {
        // ---
        let mut acc = MeanAcc::default();
        acc.push(Some(10.0));
        acc.push(None);
        acc.push(Some(20.0));
        assert_eq!(acc.value(), Some(15.0));
        assert_eq!(MeanAcc::default().value(), None);
    }

    #[test]
    fn test_count_labels_first_seen_order() {
        // ---
        let counts = count_labels(["O3", "PM25", "O3", "CO"].into_iter());
        assert_eq!(
            counts,
            vec![
                ("O3".to_string(), 2),
                ("PM25".to_string(), 1),
                ("CO".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_quantile_interpolates() {
        // ---
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.0), 1.0);
        assert_eq!(quantile(&v, 0.5), 2.5);
        assert_eq!(quantile(&v, 0.25), 1.75);
        assert_eq!(quantile(&v, 1.0), 4.0);
        assert_eq!(quantile(&[7.0], 0.75), 7.0);
    }
}
