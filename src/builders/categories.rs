use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::filter::{filter_records, FilterState};
use crate::models::Measurement;

// ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: String,
    /// Row counts aligned with [`CategoryTrend::years`].
    pub counts: Vec<usize>,
}

/// Rows per (year, category), one line per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTrend {
    // ---
    pub years: Vec<i32>,
    pub series: Vec<CategorySeries>,
}

/// Category counts across the years present in `records`. Combinations that
/// never occur count as zero. Rows without a category are ignored; if none
/// has one there is nothing to draw.
pub fn category_trend(records: &[&Measurement]) -> Option<CategoryTrend> {
    // ---
    let mut counts: BTreeMap<(&str, i32), usize> = BTreeMap::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut categories: BTreeSet<&str> = BTreeSet::new();

    for r in records {
        let Some(category) = r.category.as_deref() else {
            continue;
        };
        *counts.entry((category, r.year)).or_default() += 1;
        years.insert(r.year);
        categories.insert(category);
    }

    if counts.is_empty() {
        return None;
    }

    let years: Vec<i32> = years.into_iter().collect();
    let series = categories
        .into_iter()
        .map(|category| CategorySeries {
            category: category.to_string(),
            counts: years
                .iter()
                .map(|&y| counts.get(&(category, y)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    Some(CategoryTrend { years, series })
}

/// Category trend over every year, honouring only the station and category
/// selectors.
pub fn category_trend_all_years(
    records: &[Measurement],
    state: &FilterState,
) -> Option<CategoryTrend> {
    // ---
    category_trend(&filter_records(records, &state.without_year()))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::builders::fixtures::{rec, refs};
    use crate::filter::Selection;

    fn sample() -> Vec<Measurement> {
        vec![
            rec("2020-01-01", "DKI1", "BAIK", 40.0, "PM25"),
            rec("2020-01-02", "DKI1", "SEDANG", 60.0, "PM25"),
            rec("2020-01-03", "DKI2", "SEDANG", 60.0, "PM25"),
            rec("2021-01-01", "DKI1", "BAIK", 40.0, "PM25"),
            rec("2022-01-01", "DKI1", "TIDAK SEHAT", 110.0, "PM25"),
        ]
    }

    #[test]
    fn test_counts_fill_missing_with_zero() {
        // ---
        let records = sample();
        let trend = category_trend(&refs(&records)).unwrap();

        assert_eq!(trend.years, vec![2020, 2021, 2022]);
        let names: Vec<&str> = trend.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["BAIK", "SEDANG", "TIDAK SEHAT"]);
        assert_eq!(trend.series[0].counts, vec![1, 1, 0]);
        assert_eq!(trend.series[1].counts, vec![2, 0, 0]);
        assert_eq!(trend.series[2].counts, vec![0, 0, 1]);
    }

    #[test]
    fn test_all_years_ignores_year_selector() {
        // ---
        let records = sample();
        let mut state = FilterState {
            station: Selection::Only("DKI1".to_string()),
            ..FilterState::default()
        };
        let baseline = category_trend_all_years(&records, &state).unwrap();

        for year in [2020, 2021, 2022, 1999] {
            state.year = Selection::Only(year);
            assert_eq!(category_trend_all_years(&records, &state).unwrap(), baseline);
        }
        assert_eq!(baseline.series[1].counts, vec![1, 0, 0]);
    }

    #[test]
    fn test_all_years_respects_category_selector() {
        // ---
        let records = sample();
        let state = FilterState {
            category: Selection::Only("SEDANG".to_string()),
            year: Selection::Only(2021),
            ..FilterState::default()
        };
        let trend = category_trend_all_years(&records, &state).unwrap();

        assert_eq!(trend.years, vec![2020]);
        assert_eq!(trend.series.len(), 1);
        assert_eq!(trend.series[0].counts, vec![2]);
    }

    #[test]
    fn test_empty_subset_is_placeholder() {
        // ---
        assert!(category_trend(&[]).is_none());
        let state = FilterState {
            station: Selection::Only("DKI9".to_string()),
            ..FilterState::default()
        };
        assert!(category_trend_all_years(&sample(), &state).is_none());
    }
}
