use serde::Serialize;

use crate::models::Measurement;

// ---

/// One row of the detail table. Field names follow the CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    // ---
    pub tanggal: String,
    pub stasiun: Option<String>,
    pub categori: Option<String>,
    pub max: Option<f64>,
    pub critical: Option<String>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
}

impl From<&Measurement> for TableRow {
    fn from(r: &Measurement) -> Self {
        TableRow {
            tanggal: r.date.format("%Y-%m-%d").to_string(),
            stasiun: r.station.clone(),
            categori: r.category.clone(),
            max: r.max,
            critical: r.critical.clone(),
            pm25: r.pm25,
            pm10: r.pm10,
            so2: r.so2,
            co: r.co,
            o3: r.o3,
            no2: r.no2,
        }
    }
}

/// A single page of the detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage {
    // ---
    /// 1-based page number actually served.
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub rows: Vec<TableRow>,
}

/// Newest rows first, cut into pages of `page_size`. Out-of-range page
/// numbers are clamped.
pub fn detail_table(records: &[&Measurement], page: usize, page_size: usize) -> Option<TablePage> {
    // ---
    if records.is_empty() {
        return None;
    }

    let page_size = page_size.max(1);
    let mut sorted: Vec<&Measurement> = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let page_count = sorted.len().div_ceil(page_size);
    let page = page.clamp(1, page_count);
    let rows = sorted
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|r| TableRow::from(*r))
        .collect();

    Some(TablePage {
        page,
        page_count,
        page_size,
        total_rows: sorted.len(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::builders::fixtures::{rec, refs};

    fn sample() -> Vec<Measurement> {
        vec![
            rec("2021-01-02", "DKI1", "BAIK", 40.0, "PM25"),
            rec("2021-03-01", "DKI1", "SEDANG", 60.0, "PM25"),
            rec("2020-05-05", "DKI2", "BAIK", 45.0, "PM10"),
            rec("2021-03-01", "DKI2", "BAIK", 48.0, "PM10"),
            rec("2019-12-31", "DKI3", "BAIK", 30.0, "O3"),
        ]
    }

    #[test]
    fn test_sorted_newest_first_and_stable() {
        // ---
        let records = sample();
        let table = detail_table(&refs(&records), 1, 20).unwrap();
        let dates: Vec<&str> = table.rows.iter().map(|r| r.tanggal.as_str()).collect();

        assert_eq!(
            dates,
            vec!["2021-03-01", "2021-03-01", "2021-01-02", "2020-05-05", "2019-12-31"]
        );
        assert_eq!(table.rows[0].stasiun.as_deref(), Some("DKI1"));
        assert_eq!(table.rows[1].stasiun.as_deref(), Some("DKI2"));
        assert_eq!(table.page_count, 1);
    }

    #[test]
    fn test_pagination_and_clamping() {
        // ---
        let records = sample();
        let refs = refs(&records);

        let second = detail_table(&refs, 2, 2).unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(second.page_count, 3);
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.rows[0].tanggal, "2021-01-02");

        let last = detail_table(&refs, 99, 2).unwrap();
        assert_eq!(last.page, 3);
        assert_eq!(last.rows.len(), 1);

        let first = detail_table(&refs, 0, 2).unwrap();
        assert_eq!(first.page, 1);
        assert_eq!(first.total_rows, 5);
    }

    #[test]
    fn test_empty_subset_is_placeholder() {
        // ---
        assert!(detail_table(&[], 1, 20).is_none());
    }
}
