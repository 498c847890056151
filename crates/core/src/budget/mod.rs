//! Budget allocation loading and lookup.

pub mod error;
pub mod index;
pub mod loader;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{LoadError, QueryError, RowError};
pub use index::YearIndex;
pub use loader::{LoadOutcome, RecordLoader};
pub use service::BudgetQueryService;
pub use types::{BudgetRecord, LoadReport, SkippedRow};
