// Engine module - filtering, grouping, and duration statistics
// This layer sits between the record collection (types) and CLI presentation

mod distinct;
mod stats;

pub use distinct::distinct_values;
pub use stats::{grouped_statistics, EmployeeStats, StatsReport};

use shiftlog_types::{Record, RecordFilter};

// Façade API - Stable public interface for the runtime/CLI layers

/// Apply a conjunctive employee/product filter, preserving original
/// relative order. The source collection is never mutated; an empty
/// result is a normal outcome, not an error.
pub fn apply_filter(records: &[Record], filter: &RecordFilter) -> Vec<Record> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftlog_types::{parse_timestamp, FieldFilter};

    fn record(employee: &str, product: &str, start: &str, end: &str) -> Record {
        Record::new(
            employee,
            product,
            parse_timestamp("start", start).unwrap(),
            parse_timestamp("end", end).unwrap(),
        )
        .unwrap()
    }

    fn sample() -> Vec<Record> {
        vec![
            record("Ada", "Widget", "2024-03-01 09:00", "2024-03-01 09:30"),
            record("Grace", "Gadget", "2024-03-01 10:00", "2024-03-01 10:20"),
            record("Ada", "Gadget", "2024-03-01 11:00", "2024-03-01 11:10"),
        ]
    }

    #[test]
    fn test_unconstrained_filter_is_identity() {
        let records = sample();
        let filtered = apply_filter(&records, &RecordFilter::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_by_employee() {
        let records = sample();
        let filter = RecordFilter::new(FieldFilter::Exact("Ada".to_string()), FieldFilter::All);
        let filtered = apply_filter(&records, &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.employee == "Ada"));
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let records = sample();
        let filter = RecordFilter::new(
            FieldFilter::Exact("Ada".to_string()),
            FieldFilter::Exact("Gadget".to_string()),
        );
        let filtered = apply_filter(&records, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product, "Gadget");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let filter = RecordFilter::new(FieldFilter::All, FieldFilter::Exact("Gadget".to_string()));
        let once = apply_filter(&records, &filter);
        let twice = apply_filter(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_unknown_value_yields_empty() {
        let records = sample();
        let filter = RecordFilter::new(FieldFilter::Exact("Nobody".to_string()), FieldFilter::All);
        assert!(apply_filter(&records, &filter).is_empty());
    }

    #[test]
    fn test_filter_empty_collection() {
        assert!(apply_filter(&[], &RecordFilter::default()).is_empty());
    }
}
