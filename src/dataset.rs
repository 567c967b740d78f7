//! Loads the ISPU CSV export into an immutable in-memory dataset.
//!
//! Loading happens once at startup: rows are parsed, calendar fields are
//! derived and missing `pm25` readings are filled with the mean of the whole
//! file. After that the dataset is only ever read.

use std::{fs::File, io::Read, path::Path};

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::models::{Measurement, RawRecord};

const REQUIRED_COLUMNS: [&str; 11] = [
    "tanggal", "stasiun", "pm10", "pm25", "so2", "co", "o3", "no2", "max", "critical", "categori",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// ---

/// Read-only set of measurements shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    // ---
    records: Vec<Measurement>,
    pm25_fill: Option<f64>,
}

impl Dataset {
    // ---
    /// Load and prepare the dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        // ---
        let path = path.as_ref();
        info!("Loading ISPU dataset from {}", path.display());

        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }

    /// Parse CSV content from any reader. The header row is required.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        // ---
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let raw: RawRecord = row.deserialize(Some(&headers))?;

            let date = parse_date(&raw.date).ok_or_else(|| LoadError::Date {
                value: raw.date.clone(),
                line,
            })?;

            records.push(Measurement::new(date, raw));
        }

        debug!("Parsed {} rows", records.len());
        Ok(Self::from_records(records))
    }

    /// Build a dataset from already parsed measurements, filling missing
    /// `pm25` values with the global mean.
    pub fn from_records(mut records: Vec<Measurement>) -> Self {
        // ---
        let pm25_fill = crate::builders::mean(records.iter().filter_map(|r| r.pm25));

        let mut filled = 0usize;
        if let Some(fill) = pm25_fill {
            for record in records.iter_mut().filter(|r| r.pm25.is_none()) {
                record.pm25 = Some(fill);
                filled += 1;
            }
        }

        info!(
            "Dataset ready: {} rows, {} pm25 values imputed with mean {:?}",
            records.len(),
            filled,
            pm25_fill
        );

        Dataset { records, pm25_fill }
    }

    pub fn records(&self) -> &[Measurement] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Global `pm25` mean used for imputation, if any value was present.
    pub fn pm25_fill(&self) -> Option<f64> {
        self.pm25_fill
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        // ---
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Distinct non-missing stations, in order of first appearance.
    pub fn stations(&self) -> Vec<String> {
        first_seen(self.records.iter().filter_map(|r| r.station.as_deref()))
    }

    /// Distinct non-missing categories, in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        first_seen(self.records.iter().filter_map(|r| r.category.as_deref()))
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    // ---
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    // ---
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}
