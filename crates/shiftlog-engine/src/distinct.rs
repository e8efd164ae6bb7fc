use shiftlog_types::{Record, RecordField};

/// Distinct values observed for a field, in first-seen order.
///
/// First-seen order is load-bearing: it populates filter choices and is
/// the deterministic tie-break order for fastest/slowest selection.
pub fn distinct_values(records: &[Record], field: RecordField) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        let value = record.field(field);
        if !seen.iter().any(|existing: &String| existing == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftlog_types::parse_timestamp;

    fn record(employee: &str, product: &str) -> Record {
        Record::new(
            employee,
            product,
            parse_timestamp("start", "2024-03-01 09:00").unwrap(),
            parse_timestamp("end", "2024-03-01 10:00").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_distinct_preserves_first_seen_order() {
        let records = vec![
            record("Grace", "Widget"),
            record("Ada", "Gadget"),
            record("Grace", "Widget"),
            record("Lin", "Widget"),
        ];
        assert_eq!(
            distinct_values(&records, RecordField::Employee),
            vec!["Grace", "Ada", "Lin"]
        );
        assert_eq!(
            distinct_values(&records, RecordField::Product),
            vec!["Widget", "Gadget"]
        );
    }

    #[test]
    fn test_distinct_empty_collection() {
        assert!(distinct_values(&[], RecordField::Employee).is_empty());
    }
}
