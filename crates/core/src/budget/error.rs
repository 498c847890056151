//! Budget loading and query error types.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading the budget source.
///
/// Any of these aborts startup; no partial index is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("Budget data source not found: {}", path.display())]
    SourceMissing {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The source exists but could not be opened or read.
    #[error("Failed to read budget data from {origin}: {source}")]
    SourceUnreadable {
        /// Path or description of the source.
        origin: String,
        /// Underlying reader error.
        #[source]
        source: csv::Error,
    },

    /// The header row lacks a required column.
    #[error("Budget data is missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Reasons a single source row is dropped during a lenient load.
///
/// These never escape the loader; they are collected into the
/// [`LoadReport`](super::types::LoadReport) and logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    /// The row could not be split into the expected fields.
    #[error("Malformed row: {0}")]
    MalformedRow(String),

    /// The percent field is not a number.
    #[error("Percent is not a number: {0:?}")]
    InvalidPercent(String),

    /// The percent field parsed to NaN or infinity.
    #[error("Percent is not finite: {0:?}")]
    NonFinitePercent(String),

    /// The percent field is below zero.
    #[error("Percent cannot be negative: {0}")]
    NegativePercent(f64),

    /// The sector is blank after trimming.
    #[error("Sector cannot be empty")]
    EmptySector,
}

/// Errors returned by budget queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No records are loaded for the requested year.
    #[error("Data for this year not found: {year}")]
    YearNotFound {
        /// The requested year, trimmed.
        year: String,
    },
}

impl QueryError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::YearNotFound { .. } => 404,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::YearNotFound { .. } => "year_not_found",
        }
    }
}
