//! Time-based aggregates: daily trend, monthly trend and the monthly heatmap.

use std::collections::BTreeMap;

use chrono::{Month, NaiveDate};
use serde::Serialize;

use super::MeanAcc;
use crate::models::{month_abbrev, Measurement};

// ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub mean: Option<f64>,
}

/// Mean ISPU per calendar date, ordered by date.
pub fn daily_trend(records: &[&Measurement]) -> Option<Vec<DailyPoint>> {
    // ---
    if records.is_empty() {
        return None;
    }

    let mut by_date: BTreeMap<NaiveDate, MeanAcc> = BTreeMap::new();
    for r in records {
        by_date.entry(r.date).or_default().push(r.max);
    }

    Some(
        by_date
            .into_iter()
            .map(|(date, acc)| DailyPoint {
                date,
                mean: acc.value(),
            })
            .collect(),
    )
}

/// Mean ISPU for one (year, month) group.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: Month,
    pub mean: Option<f64>,
}

impl MonthlyPoint {
    /// Axis label such as `2021-Jan`.
    pub fn period(&self) -> String {
        format!("{}-{}", self.year, month_abbrev(self.month))
    }
}

/// Group by (year, month) with calendar month ordering, years ascending.
fn monthly_means(records: &[&Measurement]) -> Vec<MonthlyPoint> {
    // ---
    let mut groups: BTreeMap<(i32, u32), (Month, MeanAcc)> = BTreeMap::new();
    for r in records {
        groups
            .entry((r.year, r.month.number_from_month()))
            .or_insert_with(|| (r.month, MeanAcc::default()))
            .1
            .push(r.max);
    }

    groups
        .into_iter()
        .map(|((year, _), (month, acc))| MonthlyPoint {
            year,
            month,
            mean: acc.value(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    // ---
    /// Points ordered by year, then calendar month.
    pub points: Vec<MonthlyPoint>,
}

impl MonthlyTrend {
    // ---
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.points.iter().map(|p| p.year).collect();
        years.dedup();
        years
    }

    pub fn periods(&self) -> Vec<String> {
        self.points.iter().map(MonthlyPoint::period).collect()
    }
}

/// Monthly mean ISPU, one line per year.
pub fn monthly_trend(records: &[&Measurement]) -> Option<MonthlyTrend> {
    // ---
    if records.is_empty() {
        return None;
    }
    Some(MonthlyTrend {
        points: monthly_means(records),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub year: i32,
    pub month: Month,
    pub mean: f64,
}

/// Year x month grid of mean ISPU.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyGrid {
    // ---
    pub years: Vec<i32>,
    /// Observed months, January first.
    pub months: Vec<Month>,
    pub cells: Vec<HeatCell>,
}

impl MonthlyGrid {
    // ---
    pub fn get(&self, year: i32, month: Month) -> Option<f64> {
        self.cells
            .iter()
            .find(|c| c.year == year && c.month == month)
            .map(|c| c.mean)
    }
}

pub fn monthly_heatmap(records: &[&Measurement]) -> Option<MonthlyGrid> {
    // ---
    if records.is_empty() {
        return None;
    }

    let points = monthly_means(records);

    let mut years: Vec<i32> = points.iter().map(|p| p.year).collect();
    years.dedup();

    let mut months: Vec<Month> = points.iter().map(|p| p.month).collect();
    months.sort_by_key(|m| m.number_from_month());
    months.dedup();

    let cells = points
        .into_iter()
        .filter_map(|p| {
            p.mean.map(|mean| HeatCell {
                year: p.year,
                month: p.month,
                mean,
            })
        })
        .collect();

    Some(MonthlyGrid {
        years,
        months,
        cells,
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::builders::fixtures::{rec, refs};

    fn sample() -> Vec<Measurement> {
        vec![
            rec("2021-12-01", "DKI1", "SEDANG", 80.0, "PM25"),
            rec("2021-02-01", "DKI1", "BAIK", 40.0, "PM25"),
            rec("2021-01-15", "DKI2", "BAIK", 30.0, "PM10"),
            rec("2021-01-15", "DKI1", "SEDANG", 70.0, "PM25"),
            rec("2020-04-01", "DKI1", "BAIK", 20.0, "O3"),
        ]
    }

    #[test]
    fn test_daily_trend_averages_stations_per_date() {
        // ---
        let records = sample();
        let points = daily_trend(&refs(&records)).unwrap();

        assert_eq!(points.len(), 4);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2020, 4, 1).unwrap());
        assert_eq!(points[1].mean, Some(50.0));
        assert!(points.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_monthly_trend_is_calendar_ordered() {
        // ---
        let records = sample();
        let trend = monthly_trend(&refs(&records)).unwrap();

        assert_eq!(
            trend.periods(),
            vec!["2020-Apr", "2021-Jan", "2021-Feb", "2021-Dec"]
        );
        assert_eq!(trend.years(), vec![2020, 2021]);
        assert_eq!(trend.points[1].mean, Some(50.0));
    }

    #[test]
    fn test_heatmap_months_not_alphabetical() {
        // ---
        let records = sample();
        let grid = monthly_heatmap(&refs(&records)).unwrap();

        assert_eq!(
            grid.months,
            vec![Month::January, Month::February, Month::April, Month::December]
        );
        assert_eq!(grid.years, vec![2020, 2021]);
        assert_eq!(grid.get(2021, Month::January), Some(50.0));
        assert_eq!(grid.get(2020, Month::January), None);
    }

    #[test]
    fn test_empty_subset_is_placeholder() {
        // ---
        assert!(daily_trend(&[]).is_none());
        assert!(monthly_trend(&[]).is_none());
        assert!(monthly_heatmap(&[]).is_none());
    }
}
