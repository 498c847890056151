//! Property-based tests for budget loading and queries.

use proptest::prelude::*;

use super::error::QueryError;
use super::loader::RecordLoader;
use super::service::BudgetQueryService;
use super::types::BudgetRecord;

fn row_strategy() -> impl Strategy<Value = (String, String, f64)> {
    ("20[0-3][0-9]", "[A-Z][a-z]{1,10}", 0.0f64..100.0)
}

fn to_csv(rows: &[(String, String, f64)]) -> String {
    let mut csv = String::from("year,sector,percent\n");
    for (year, sector, percent) in rows {
        csv.push_str(&format!("{year},{sector},{percent}\n"));
    }
    csv
}

fn service_for(rows: &[(String, String, f64)]) -> BudgetQueryService {
    let outcome = RecordLoader::load_reader(to_csv(rows).as_bytes()).expect("load should succeed");
    BudgetQueryService::new(outcome.index)
}

proptest! {
    /// Every loaded year is listed exactly once, in ascending order.
    #[test]
    fn test_years_unique_and_sorted(rows in prop::collection::vec(row_strategy(), 0..40)) {
        let years = service_for(&rows).list_years();

        let mut expected: Vec<String> = rows.iter().map(|(y, _, _)| y.clone()).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(years, expected);
    }

    /// Each listed year returns its rows in source order.
    #[test]
    fn test_listed_years_return_source_rows(rows in prop::collection::vec(row_strategy(), 1..40)) {
        let service = service_for(&rows);

        for year in service.list_years() {
            let expected: Vec<BudgetRecord> = rows
                .iter()
                .filter(|(y, _, _)| *y == year)
                .map(|(_, s, p)| BudgetRecord::new(s.clone(), *p))
                .collect();
            let records = service.get_budget(&year).expect("listed year must resolve");
            prop_assert!(!records.is_empty());
            prop_assert_eq!(records, expected.as_slice());
        }
        prop_assert_eq!(service.record_count(), rows.len());
    }

    /// Years never loaded always miss, with the trimmed year echoed back.
    #[test]
    fn test_unlisted_year_not_found(
        rows in prop::collection::vec(row_strategy(), 0..20),
        probe in "19[0-9]{2}",
    ) {
        let service = service_for(&rows);

        prop_assert_eq!(
            service.get_budget(&format!("  {probe} ")),
            Err(QueryError::YearNotFound { year: probe.clone() })
        );
    }

    /// Padding the requested year does not change the lookup outcome.
    #[test]
    fn test_whitespace_does_not_affect_lookup(
        rows in prop::collection::vec(row_strategy(), 1..20),
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t]{0,3}",
    ) {
        let service = service_for(&rows);
        let year = rows[0].0.clone();
        let padded = format!("{pad_left}{year}{pad_right}");

        prop_assert_eq!(service.get_budget(&padded), service.get_budget(&year));
    }

    /// Repeated queries serialize to identical bytes.
    #[test]
    fn test_get_budget_idempotent(rows in prop::collection::vec(row_strategy(), 1..20)) {
        let service = service_for(&rows);
        let year = &rows[0].0;

        let first = serde_json::to_vec(service.get_budget(year).expect("hit")).expect("serialize");
        let second = serde_json::to_vec(service.get_budget(year).expect("hit")).expect("serialize");
        prop_assert_eq!(first, second);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_malformed_percent_excluded() {
        let csv = "year,sector,percent\n2023,Health,abc\n2023,Defense,30\n";
        let outcome = RecordLoader::load_reader(csv.as_bytes()).expect("load should succeed");
        let service = BudgetQueryService::new(outcome.index);

        assert_eq!(
            service.get_budget("2023"),
            Ok(&[BudgetRecord::new("Defense", 30.0)][..])
        );
    }

    #[test]
    fn test_serialized_shape() {
        let csv = "year,sector,percent\n2022,Education,20\n2022,Health,80\n";
        let outcome = RecordLoader::load_reader(csv.as_bytes()).expect("load should succeed");
        let service = BudgetQueryService::new(outcome.index);

        let json = serde_json::to_string(service.get_budget("2022").expect("hit")).expect("serialize");
        assert_eq!(
            json,
            r#"[{"sector":"Education","percent":20.0},{"sector":"Health","percent":80.0}]"#
        );
    }

    #[test]
    fn test_header_only_source() {
        let outcome =
            RecordLoader::load_reader("year,sector,percent\n".as_bytes()).expect("load should succeed");
        let service = BudgetQueryService::new(outcome.index);

        assert!(service.list_years().is_empty());
        assert!(matches!(
            service.get_budget("2023"),
            Err(QueryError::YearNotFound { .. })
        ));
        assert!(matches!(
            service.get_budget(""),
            Err(QueryError::YearNotFound { .. })
        ));
    }
}
