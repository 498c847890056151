//! Read-only query service over the loaded budget index.

use super::error::QueryError;
use super::index::YearIndex;
use super::types::BudgetRecord;

/// Budget query service.
///
/// Owns the [`YearIndex`] for the lifetime of the process. Every method
/// takes `&self`, so one instance behind an `Arc` serves concurrent
/// requests without locking.
#[derive(Debug, Clone, Default)]
pub struct BudgetQueryService {
    index: YearIndex,
}

impl BudgetQueryService {
    /// Creates a service that takes ownership of `index`.
    #[must_use]
    pub fn new(index: YearIndex) -> Self {
        Self { index }
    }

    /// Lists every loaded year in ascending lexicographic order.
    #[must_use]
    pub fn list_years(&self) -> Vec<String> {
        self.index.years().map(str::to_string).collect()
    }

    /// Returns the records for `year` in source order.
    ///
    /// Surrounding whitespace in `year` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::YearNotFound` if the year is not loaded.
    pub fn get_budget(&self, year: &str) -> Result<&[BudgetRecord], QueryError> {
        let year = year.trim();
        self.index
            .get(year)
            .ok_or_else(|| QueryError::YearNotFound {
                year: year.to_string(),
            })
    }

    /// Number of loaded years.
    #[must_use]
    pub fn year_count(&self) -> usize {
        self.index.len()
    }

    /// Number of loaded records across all years.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.index.record_count()
    }
}

impl From<YearIndex> for BudgetQueryService {
    fn from(index: YearIndex) -> Self {
        Self::new(index)
    }
}
