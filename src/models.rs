//! Data models for the ISPU measurement dataset.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

// ---

/// Category label for a "good" air-quality day.
pub const GOOD_CATEGORY: &str = "BAIK";

/// Raw row as it appears in the ISPU CSV export.
///
/// Pollutant and index columns go through `csv::invalid_option`, so empty
/// cells and markers such as `---` load as missing rather than failing.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    // ---
    #[serde(rename = "tanggal")]
    pub date: String,
    #[serde(rename = "stasiun")]
    pub station: Option<String>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub pm10: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub pm25: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub so2: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub co: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub o3: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub no2: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub max: Option<f64>,
    pub critical: Option<String>,
    #[serde(rename = "categori")]
    pub category: Option<String>,
}

/// One station-day measurement with derived calendar fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    // ---
    pub date: NaiveDate,
    pub station: Option<String>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub max: Option<f64>,
    pub critical: Option<String>,
    pub category: Option<String>,
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl Measurement {
    // ---
    pub fn new(date: NaiveDate, raw: RawRecord) -> Self {
        // ---
        let month = Month::try_from(date.month() as u8).unwrap_or(Month::January);

        Measurement {
            date,
            station: non_blank(raw.station),
            pm25: raw.pm25,
            pm10: raw.pm10,
            so2: raw.so2,
            co: raw.co,
            o3: raw.o3,
            no2: raw.no2,
            max: raw.max,
            critical: non_blank(raw.critical),
            category: non_blank(raw.category),
            year: date.year(),
            month,
            day: date.day(),
        }
    }

    pub fn pollutant(&self, pollutant: Pollutant) -> Option<f64> {
        // ---
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::So2 => self.so2,
            Pollutant::Co => self.co,
            Pollutant::O3 => self.o3,
            Pollutant::No2 => self.no2,
        }
    }

    pub fn station_is(&self, station: &str) -> bool {
        self.station.as_deref() == Some(station)
    }

    pub fn category_is(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The six pollutant columns, in the order every chart presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Pm25,
    Pm10,
    So2,
    Co,
    O3,
    No2,
}

impl Pollutant {
    // ---
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
        Pollutant::No2,
    ];

    /// CSV column name, also used as the series label.
    pub fn column(self) -> &'static str {
        // ---
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
            Pollutant::O3 => "o3",
            Pollutant::No2 => "no2",
        }
    }
}

/// Short month label used on period axes, e.g. `Jan`.
pub fn month_abbrev(month: Month) -> &'static str {
    // ---
    &month.name()[..3]
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn raw(date: &str) -> RawRecord {
        // ---
        RawRecord {
            date: date.to_string(),
            station: Some("DKI1".to_string()),
            pm10: Some(40.0),
            pm25: None,
            so2: Some(10.0),
            co: Some(8.0),
            o3: Some(30.0),
            no2: Some(12.0),
            max: Some(40.0),
            critical: Some("PM10".to_string()),
            category: Some("BAIK".to_string()),
        }
    }

    #[test]
    fn test_calendar_fields_are_derived() {
        // ---
        let date = NaiveDate::from_ymd_opt(2019, 8, 17).unwrap();
        let m = Measurement::new(date, raw("2019-08-17"));

        assert_eq!(m.year, 2019);
        assert_eq!(m.month, Month::August);
        assert_eq!(m.month.name(), "August");
        assert_eq!(m.day, 17);
    }

    #[test]
    fn test_blank_labels_become_missing() {
        // ---
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let mut r = raw("2020-01-01");
        r.station = Some("  ".to_string());
        r.critical = Some(String::new());
        let m = Measurement::new(date, r);

        assert_eq!(m.station, None);
        assert_eq!(m.critical, None);
        assert!(!m.station_is(""));
        assert!(m.category_is("BAIK"));
    }

    #[test]
    fn test_pollutant_accessor_order() {
        // ---
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let m = Measurement::new(date, raw("2020-01-01"));
        let values: Vec<Option<f64>> = Pollutant::ALL.iter().map(|p| m.pollutant(*p)).collect();

        assert_eq!(
            values,
            vec![None, Some(40.0), Some(10.0), Some(8.0), Some(30.0), Some(12.0)]
        );
        assert_eq!(Pollutant::ALL[0].column(), "pm25");
    }

    #[test]
    fn test_month_abbrev() {
        // ---
        assert_eq!(month_abbrev(Month::January), "Jan");
        assert_eq!(month_abbrev(Month::September), "Sep");
    }
}
