use serde::Serialize;

use super::{count_labels, MeanAcc};
use crate::models::{Measurement, GOOD_CATEGORY};

// ---

/// Headline numbers shown in the KPI cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    // ---
    pub total: usize,
    pub avg_index: f64,
    pub good_days: usize,
    pub critical_pollutant: String,
}

/// Row count, mean ISPU, `BAIK` day count and the most frequent critical
/// pollutant. On a tie the alphabetically smallest label wins.
pub fn kpi_summary(records: &[&Measurement]) -> Option<KpiSummary> {
    // ---
    if records.is_empty() {
        return None;
    }

    let mut index = MeanAcc::default();
    for r in records {
        index.push(r.max);
    }

    let good_days = records.iter().filter(|r| r.category_is(GOOD_CATEGORY)).count();

    let most_common = count_labels(records.iter().filter_map(|r| r.critical.as_deref()))
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)));

    Some(KpiSummary {
        total: records.len(),
        avg_index: index.value().unwrap_or(0.0),
        good_days,
        critical_pollutant: most_common.map_or_else(|| "N/A".to_string(), |(label, _)| label),
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::builders::fixtures::{rec, refs};

    #[test]
    fn test_two_good_days_average_fifty() {
        // ---
        let records = vec![
            rec("2021-01-01", "DKI1", "BAIK", 40.0, "PM10"),
            rec("2021-01-02", "DKI1", "BAIK", 60.0, "PM10"),
        ];
        let kpi = kpi_summary(&refs(&records)).unwrap();

        assert_eq!(kpi.total, 2);
        assert_eq!(kpi.avg_index, 50.0);
        assert_eq!(kpi.good_days, 2);
        assert_eq!(kpi.critical_pollutant, "PM10");
    }

    #[test]
    fn test_matches_direct_recomputation() {
        // ---
        let records = vec![
            rec("2021-01-01", "DKI1", "BAIK", 45.0, "PM10"),
            rec("2021-01-02", "DKI2", "SEDANG", 75.0, "PM25"),
            rec("2021-01-03", "DKI3", "TIDAK SEHAT", 130.0, "PM25"),
            rec("2021-01-04", "DKI3", "BAIK", 30.0, "O3"),
        ];
        let kpi = kpi_summary(&refs(&records)).unwrap();

        let expected_avg = records.iter().filter_map(|r| r.max).sum::<f64>() / 4.0;
        let expected_good = records.iter().filter(|r| r.category_is("BAIK")).count();
        assert!((kpi.avg_index - expected_avg).abs() < 1e-9);
        assert_eq!(kpi.good_days, expected_good);
        assert_eq!(kpi.critical_pollutant, "PM25");
    }

    #[test]
    fn test_tie_goes_to_smallest_label() {
        // ---
        let records = vec![
            rec("2021-01-01", "DKI1", "SEDANG", 60.0, "O3"),
            rec("2021-01-02", "DKI1", "SEDANG", 60.0, "CO"),
            rec("2021-01-03", "DKI1", "SEDANG", 60.0, "CO"),
            rec("2021-01-04", "DKI1", "SEDANG", 60.0, "O3"),
        ];
        let kpi = kpi_summary(&refs(&records)).unwrap();
        assert_eq!(kpi.critical_pollutant, "CO");

        let reversed: Vec<_> = records.iter().rev().cloned().collect();
        let kpi = kpi_summary(&refs(&reversed)).unwrap();
        assert_eq!(kpi.critical_pollutant, "CO");
    }

    #[test]
    fn test_missing_labels_and_index() {
        // ---
        let mut records = vec![rec("2021-01-01", "DKI1", "BAIK", 40.0, "PM10")];
        records[0].critical = None;
        records[0].max = None;
        let kpi = kpi_summary(&refs(&records)).unwrap();

        assert_eq!(kpi.critical_pollutant, "N/A");
        assert_eq!(kpi.avg_index, 0.0);
    }

    #[test]
    fn test_empty_subset_is_placeholder() {
        // ---
        assert_eq!(kpi_summary(&[]), None);
    }
}
