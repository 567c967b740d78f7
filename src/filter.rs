//! Cross-filter state and the filter engine.
//!
//! The dashboard has exactly three selectors. Each is either the `Semua`
//! ("all") sentinel or a concrete value, and a record is kept when every
//! concrete selector matches it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dataset::Dataset;
use crate::models::Measurement;

/// The "all" sentinel shown in every selector.
pub const ALL: &str = "Semua";

// ---

/// A single selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    // ---
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    fn matches(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => pred(v),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// The (year, station, category) triple that drives every panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    // ---
    pub year: Selection<i32>,
    pub station: Selection<String>,
    pub category: Selection<String>,
}

impl FilterState {
    // ---
    pub fn matches(&self, record: &Measurement) -> bool {
        // ---
        self.year.matches(|y| record.year == *y)
            && self.station.matches(|s| record.station_is(s))
            && self.category.matches(|c| record.category_is(c))
    }

    /// Same station and category, any year.
    pub fn without_year(&self) -> FilterState {
        FilterState {
            year: Selection::All,
            ..self.clone()
        }
    }

    /// Query string that reproduces this selection, e.g. `year=2021&station=DKI1`.
    pub fn query_string(&self) -> String {
        // ---
        let query = FilterQuery::from(self);
        serde_urlencoded::to_string(&query).unwrap_or_else(|e| {
            warn!("Failed to encode selection {:?}: {}", self, e);
            String::new()
        })
    }
}

/// Raw selector values as they arrive in a query string.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&FilterState> for FilterQuery {
    fn from(state: &FilterState) -> Self {
        // ---
        let only = |sel: &Selection<String>| match sel {
            Selection::All => None,
            Selection::Only(v) => Some(v.clone()),
        };

        FilterQuery {
            year: match state.year {
                Selection::All => None,
                Selection::Only(y) => Some(y.to_string()),
            },
            station: only(&state.station),
            category: only(&state.category),
        }
    }
}

impl From<&FilterQuery> for FilterState {
    fn from(q: &FilterQuery) -> Self {
        // ---
        let year = match selected(q.year.as_deref()) {
            None => Selection::All,
            Some(raw) => match raw.parse::<i32>() {
                Ok(year) => Selection::Only(year),
                Err(e) => {
                    warn!("Ignoring invalid year selector '{}': {}", raw, e);
                    Selection::All
                }
            },
        };

        FilterState {
            year,
            station: selected(q.station.as_deref())
                .map_or(Selection::All, |s| Selection::Only(s.to_string())),
            category: selected(q.category.as_deref())
                .map_or(Selection::All, |c| Selection::Only(c.to_string())),
        }
    }
}

fn selected(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty() && *v != ALL)
}

/// Apply the three selectors to the full record set.
///
/// Record order is preserved; an empty result is a normal outcome.
pub fn filter_records<'a>(records: &'a [Measurement], state: &FilterState) -> Vec<&'a Measurement> {
    // ---
    records.iter().filter(|r| state.matches(r)).collect()
}

/// Choices offered by the sidebar selectors, each starting with `Semua`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    // ---
    pub years: Vec<String>,
    pub stations: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    // ---
    pub fn from_dataset(dataset: &Dataset) -> Self {
        // ---
        let with_all = |values: Vec<String>| {
            std::iter::once(ALL.to_string())
                .chain(values)
                .collect::<Vec<_>>()
        };

        FilterOptions {
            years: with_all(dataset.years().iter().map(i32::to_string).collect()),
            stations: with_all(dataset.stations()),
            categories: with_all(dataset.categories()),
        }
    }
}
