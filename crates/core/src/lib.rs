//! Core budget allocation logic for TaxLens.
//!
//! This crate contains pure loading and lookup logic with ZERO web dependencies.
//!
//! # Modules
//!
//! - `budget` - Record loading, the per-year index and the read-only query service

pub mod budget;

pub use budget::{
    BudgetQueryService, BudgetRecord, LoadError, LoadOutcome, LoadReport, QueryError,
    RecordLoader, RowError, SkippedRow, YearIndex,
};
