//! Budget allocation data types.

use serde::Serialize;

use super::error::RowError;

/// One sector's share of total tax allocation for a year.
///
/// Serialized as `{"sector": "...", "percent": 12.5}`, which is the
/// shape the presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRecord {
    /// Expenditure sector name, never empty.
    pub sector: String,
    /// Share of the year's allocation, finite and non-negative.
    pub percent: f64,
}

impl BudgetRecord {
    /// Creates a budget record.
    #[must_use]
    pub fn new(sector: impl Into<String>, percent: f64) -> Self {
        Self {
            sector: sector.into(),
            percent,
        }
    }
}

/// A source row dropped by the lenient ingest policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line in the source (the header is line 1).
    pub line: u64,
    /// Why the row was dropped.
    pub reason: RowError,
}

/// Summary of a completed load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Number of records accepted into the index.
    pub records: usize,
    /// Rows dropped, in source order.
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    /// Returns true if no row was dropped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
