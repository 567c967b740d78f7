//! Startup error type for the ISPU dataset loader.
//!
//! Every failure here is fatal: the dashboard has nothing to serve without
//! the dataset. `main` converts these into `anyhow::Error` and exits.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    // ---
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Unparseable date '{value}' on line {line}")]
    Date { value: String, line: u64 },
}
