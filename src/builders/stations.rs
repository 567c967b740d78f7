use std::collections::BTreeMap;

use serde::Serialize;

use super::MeanAcc;
use crate::models::{Measurement, Pollutant};

// ---

/// Mean of one pollutant at one station (long format).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationPollutantMean {
    pub station: String,
    pub pollutant: Pollutant,
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationComparison {
    // ---
    /// Stations in ascending order.
    pub stations: Vec<String>,
    /// One row per (station, pollutant), grouped by pollutant.
    pub rows: Vec<StationPollutantMean>,
}

impl StationComparison {
    // ---
    /// Means for one pollutant, aligned with `stations`.
    pub fn series(&self, pollutant: Pollutant) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .filter(|r| r.pollutant == pollutant)
            .map(|r| r.mean)
            .collect()
    }
}

/// Mean of every pollutant column per station. Rows without a station are
/// not grouped.
pub fn station_comparison(records: &[&Measurement]) -> Option<StationComparison> {
    // ---
    if records.is_empty() {
        return None;
    }

    let mut groups: BTreeMap<&str, [MeanAcc; 6]> = BTreeMap::new();
    for r in records {
        let Some(station) = r.station.as_deref() else {
            continue;
        };
        let accs = groups.entry(station).or_default();
        for (acc, pollutant) in accs.iter_mut().zip(Pollutant::ALL) {
            acc.push(r.pollutant(pollutant));
        }
    }

    let stations: Vec<String> = groups.keys().map(|s| s.to_string()).collect();
    let rows = Pollutant::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, &pollutant)| {
            groups.iter().map(move |(station, accs)| StationPollutantMean {
                station: station.to_string(),
                pollutant,
                mean: accs[i].value(),
            })
        })
        .collect();

    Some(StationComparison { stations, rows })
}
