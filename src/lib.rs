//! Jakarta air-quality (ISPU) dashboard.
//!
//! Loads the historical ISPU CSV export once, then serves an HTML dashboard
//! whose panels are recomputed from three cross-filters (year, station,
//! category) on every request.
//!
//! Module boundaries follow the Explicit Module Boundary Pattern (EMBP):
//! siblings import each other only through the re-exports below.

pub mod builders;
pub mod charts;
mod config;
mod dashboard;
mod dataset;
mod error;
mod filter;
mod models;
mod routes;
mod views;

pub use config::{load_from_env, Config};
pub use dashboard::DashboardView;
pub use dataset::Dataset;
pub use error::LoadError;
pub use filter::{filter_records, FilterOptions, FilterQuery, FilterState, Selection, ALL};
pub use models::{Measurement, Pollutant, RawRecord, GOOD_CATEGORY};
pub use routes::{router, AppState};
pub use views::{dashboard_page, format_thousands, Tab};
