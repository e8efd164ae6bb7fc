use shiftlog_engine::{apply_filter, grouped_statistics};
use shiftlog_types::{parse_timestamp, Record, RecordFilter};

fn record(employee: &str, product: &str, minutes: i64) -> Record {
    let start = parse_timestamp("start", "2024-03-01 09:00").unwrap();
    let end = start + chrono::Duration::minutes(minutes);
    Record::new(employee, product, start, end).unwrap()
}

#[test]
fn test_report_shape() {
    let records = vec![
        record("A", "Widget", 10),
        record("A", "Widget", 20),
        record("A", "Gadget", 30),
        record("B", "Widget", 5),
    ];

    let report = grouped_statistics(&records).expect("non-empty view");

    insta::assert_json_snapshot!(report, @r###"
    {
      "employees": [
        {
          "employee": "A",
          "record_count": 3,
          "mean_minutes": 20.0,
          "stddev_minutes": 10.0
        },
        {
          "employee": "B",
          "record_count": 1,
          "mean_minutes": 5.0,
          "stddev_minutes": null
        }
      ],
      "fastest": "B",
      "slowest": "A"
    }
    "###);
}

#[test]
fn test_filter_then_report_pipeline() {
    let records = vec![
        record("A", "Widget", 10),
        record("A", "Gadget", 50),
        record("B", "Widget", 30),
    ];

    let filter = RecordFilter::from_args(None, Some("Widget"));
    let filtered = apply_filter(&records, &filter);
    let report = grouped_statistics(&filtered).expect("non-empty view");

    // Only the Widget records remain, so A's lone Gadget session does not
    // skew the mean.
    assert_eq!(report.employees[0].mean_minutes, 10.0);
    assert_eq!(report.fastest, "A");
    assert_eq!(report.slowest, "B");
}

#[test]
fn test_report_on_unmatched_filter_is_none() {
    let records = vec![record("A", "Widget", 10)];
    let filter = RecordFilter::from_args(Some("Nobody"), None);
    let filtered = apply_filter(&records, &filter);
    assert!(grouped_statistics(&filtered).is_none());
}
