//! Count and spread aggregates.

use serde::Serialize;

use super::{count_labels, quantile};
use crate::models::{Measurement, Pollutant};

// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

fn to_label_counts(counts: Vec<(String, usize)>) -> Vec<LabelCount> {
    counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect()
}

/// Rows per category, most frequent first.
pub fn category_distribution(records: &[&Measurement]) -> Option<Vec<LabelCount>> {
    // ---
    if records.is_empty() {
        return None;
    }

    let mut counts = to_label_counts(count_labels(
        records.iter().filter_map(|r| r.category.as_deref()),
    ));
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Some(counts)
}

/// Rows per critical pollutant, least frequent first.
pub fn critical_distribution(records: &[&Measurement]) -> Option<Vec<LabelCount>> {
    // ---
    if records.is_empty() {
        return None;
    }

    let mut counts = to_label_counts(count_labels(
        records.iter().filter_map(|r| r.critical.as_deref()),
    ));
    counts.sort_by_key(|c| c.count);
    Some(counts)
}

/// Five-number summary of one pollutant column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantBox {
    // ---
    pub pollutant: Pollutant,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// One box per pollutant column; columns without any value are left out.
pub fn pollutant_boxplot(records: &[&Measurement]) -> Option<Vec<PollutantBox>> {
    // ---
    if records.is_empty() {
        return None;
    }

    let boxes = Pollutant::ALL
        .iter()
        .filter_map(|&pollutant| {
            let mut values: Vec<f64> = records
                .iter()
                .filter_map(|r| r.pollutant(pollutant))
                .filter(|v| v.is_finite())
                .collect();
            if values.is_empty() {
                return None;
            }
            values.sort_by(f64::total_cmp);

            Some(PollutantBox {
                pollutant,
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
            })
        })
        .collect();

    Some(boxes)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::builders::fixtures::{rec, refs};

    #[test]
    fn test_category_counts_descending() {
        // ---
        let records = vec![
            rec("2021-01-01", "DKI1", "SEDANG", 60.0, "PM25"),
            rec("2021-01-02", "DKI1", "BAIK", 40.0, "PM25"),
            rec("2021-01-03", "DKI1", "BAIK", 45.0, "PM10"),
            rec("2021-01-04", "DKI1", "TIDAK SEHAT", 120.0, "PM25"),
        ];
        let counts = category_distribution(&refs(&records)).unwrap();
        let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["BAIK", "SEDANG", "TIDAK SEHAT"]);
        assert_eq!(counts[0].count, 2);
    }

    #[test]
    fn test_critical_counts_ascending() {
        // ---
        let records = vec![
            rec("2021-01-01", "DKI1", "SEDANG", 60.0, "PM25"),
            rec("2021-01-02", "DKI1", "BAIK", 40.0, "PM25"),
            rec("2021-01-03", "DKI1", "BAIK", 45.0, "O3"),
            rec("2021-01-04", "DKI1", "SEDANG", 70.0, "PM25"),
            rec("2021-01-05", "DKI1", "SEDANG", 70.0, "PM10"),
        ];
        let counts = critical_distribution(&refs(&records)).unwrap();

        assert_eq!(
            counts,
            vec![
                LabelCount { label: "O3".into(), count: 1 },
                LabelCount { label: "PM10".into(), count: 1 },
                LabelCount { label: "PM25".into(), count: 3 },
            ]
        );
    }

    #[test]
    fn test_boxplot_five_numbers() {
        // ---
        let records = vec![
            rec("2021-01-01", "DKI1", "BAIK", 10.0, "PM25"),
            rec("2021-01-02", "DKI1", "BAIK", 20.0, "PM25"),
            rec("2021-01-03", "DKI1", "BAIK", 30.0, "PM25"),
            rec("2021-01-04", "DKI1", "BAIK", 40.0, "PM25"),
            rec("2021-01-05", "DKI1", "BAIK", 50.0, "PM25"),
        ];
        let boxes = pollutant_boxplot(&refs(&records)).unwrap();

        assert_eq!(boxes.len(), 6);
        assert_eq!(boxes[0].pollutant, Pollutant::Pm25);
        assert_eq!(
            (boxes[0].min, boxes[0].q1, boxes[0].median, boxes[0].q3, boxes[0].max),
            (10.0, 20.0, 30.0, 40.0, 50.0)
        );
    }

    #[test]
    fn test_boxplot_skips_empty_columns() {
        // ---
        let mut records = vec![rec("2021-01-01", "DKI1", "BAIK", 10.0, "PM25")];
        records[0].so2 = None;
        let boxes = pollutant_boxplot(&refs(&records)).unwrap();

        assert_eq!(boxes.len(), 5);
        assert!(boxes.iter().all(|b| b.pollutant != Pollutant::So2));
    }

    #[test]
    fn test_empty_subset_is_placeholder() {
        // ---
        assert!(category_distribution(&[]).is_none());
        assert!(critical_distribution(&[]).is_none());
        assert!(pollutant_boxplot(&[]).is_none());
    }
}
