//! Year-keyed index of budget records.

use std::collections::BTreeMap;

use super::types::BudgetRecord;

/// Budget records grouped by year.
///
/// Keys are kept in lexicographic order and each year's records stay in
/// insertion order. A year is only present once it holds a record, so no
/// entry is ever empty. Only the loader (or [`FromIterator`]) can add
/// records; once built the index is read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearIndex {
    years: BTreeMap<String, Vec<BudgetRecord>>,
}

impl YearIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, year: String, record: BudgetRecord) {
        self.years.entry(year).or_default().push(record);
    }

    /// Returns the records for an exact year key.
    #[must_use]
    pub fn get(&self, year: &str) -> Option<&[BudgetRecord]> {
        self.years.get(year).map(Vec::as_slice)
    }

    /// Iterates year keys in ascending order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.keys().map(String::as_str)
    }

    /// Number of distinct years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns true if no year is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Total number of records across all years.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }
}

impl<Y: Into<String>> FromIterator<(Y, BudgetRecord)> for YearIndex {
    fn from_iter<I: IntoIterator<Item = (Y, BudgetRecord)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (year, record) in iter {
            index.push(year.into(), record);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_sorted_and_records_in_order() {
        let index: YearIndex = [
            ("2023", BudgetRecord::new("Health", 40.0)),
            ("2021", BudgetRecord::new("Defense", 10.0)),
            ("2023", BudgetRecord::new("Education", 60.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.years().collect::<Vec<_>>(), vec!["2021", "2023"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.record_count(), 3);

        let sectors: Vec<&str> = index
            .get("2023")
            .expect("year present")
            .iter()
            .map(|r| r.sector.as_str())
            .collect();
        assert_eq!(sectors, vec!["Health", "Education"]);
    }

    #[test]
    fn test_duplicate_sectors_are_kept() {
        let index: YearIndex = [
            ("2020", BudgetRecord::new("Health", 5.0)),
            ("2020", BudgetRecord::new("Health", 7.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.get("2020").map(<[BudgetRecord]>::len), Some(2));
    }

    #[test]
    fn test_empty_index() {
        let index = YearIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.record_count(), 0);
        assert!(index.get("2020").is_none());
    }
}
