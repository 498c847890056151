//! Budget source loader.
//!
//! Reads a CSV with a `year,sector,percent` header into a [`YearIndex`].
//! Ingest is lenient: a row that fails validation is dropped and recorded
//! in the [`LoadReport`], and the load carries on. Only problems with the
//! source as a whole (missing file, unreadable data, missing column) fail
//! the load.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use super::error::{LoadError, RowError};
use super::index::YearIndex;
use super::types::{BudgetRecord, LoadReport, SkippedRow};

const YEAR_COLUMN: &str = "year";
const SECTOR_COLUMN: &str = "sector";
const PERCENT_COLUMN: &str = "percent";

/// Result of a successful load.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// The populated index.
    pub index: YearIndex,
    /// Accepted and skipped row counts.
    pub report: LoadReport,
}

/// Loader for the budget CSV source.
pub struct RecordLoader;

impl RecordLoader {
    /// Loads budget records from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::SourceMissing` if `path` does not exist,
    /// `LoadError::SourceUnreadable` if it cannot be read, and
    /// `LoadError::MissingColumn` if the header lacks a required column.
    pub fn load_path(path: &Path) -> Result<LoadOutcome, LoadError> {
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::SourceMissing {
                path: path.to_path_buf(),
            },
            _ => LoadError::SourceUnreadable {
                origin: origin.clone(),
                source: csv::Error::from(e),
            },
        })?;

        Self::load_from(file, &origin)
    }

    /// Loads budget records from any CSV reader.
    ///
    /// # Errors
    ///
    /// Same as [`RecordLoader::load_path`], minus `SourceMissing`.
    pub fn load_reader<R: Read>(reader: R) -> Result<LoadOutcome, LoadError> {
        Self::load_from(reader, "<reader>")
    }

    fn load_from<R: Read>(reader: R, origin: &str) -> Result<LoadOutcome, LoadError> {
        let unreadable = |source: csv::Error| LoadError::SourceUnreadable {
            origin: origin.to_string(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::locate(reader.headers().map_err(unreadable)?)?;

        let mut outcome = LoadOutcome::default();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(unreadable(e)),
                Err(e) => {
                    let line = e.position().map_or(0, csv::Position::line);
                    skip(&mut outcome.report, line, RowError::MalformedRow(e.to_string()));
                    continue;
                }
            };

            let line = record.position().map_or(0, csv::Position::line);
            match columns.parse(&record) {
                Ok((year, budget_record)) => {
                    outcome.index.push(year, budget_record);
                    outcome.report.records += 1;
                }
                Err(reason) => skip(&mut outcome.report, line, reason),
            }
        }

        info!(
            path = %origin,
            years = outcome.index.len(),
            records = outcome.report.records,
            skipped = outcome.report.skipped.len(),
            "Budget data loaded"
        );
        Ok(outcome)
    }
}

fn skip(report: &mut LoadReport, line: u64, reason: RowError) {
    warn!(line, reason = %reason, "Skipping budget row");
    report.skipped.push(SkippedRow { line, reason });
}

/// Field positions of the required columns.
struct Columns {
    year: usize,
    sector: usize,
    percent: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            year: find(YEAR_COLUMN)?,
            sector: find(SECTOR_COLUMN)?,
            percent: find(PERCENT_COLUMN)?,
        })
    }

    fn parse(&self, record: &StringRecord) -> Result<(String, BudgetRecord), RowError> {
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .ok_or_else(|| RowError::MalformedRow(format!("missing {name} field")))
        };

        let year = field(self.year, YEAR_COLUMN)?.trim();
        let sector = field(self.sector, SECTOR_COLUMN)?.trim();
        let raw_percent = field(self.percent, PERCENT_COLUMN)?;

        let percent = parse_percent(raw_percent)?;
        if sector.is_empty() {
            return Err(RowError::EmptySector);
        }

        Ok((year.to_string(), BudgetRecord::new(sector, percent)))
    }
}

/// Parses a percent string, accepting only finite, non-negative values.
fn parse_percent(raw: &str) -> Result<f64, RowError> {
    let trimmed = raw.trim();
    let percent: f64 = trimmed
        .parse()
        .map_err(|_| RowError::InvalidPercent(raw.to_string()))?;

    if !percent.is_finite() {
        return Err(RowError::NonFinitePercent(raw.to_string()));
    }
    if percent < 0.0 {
        return Err(RowError::NegativePercent(percent));
    }
    // "-0" parses to -0.0, which would serialize with its sign.
    Ok(percent.abs())
}
