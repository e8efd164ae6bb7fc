use std::path::Path;

use shiftlog_engine::{apply_filter, distinct_values, grouped_statistics, StatsReport};
use shiftlog_store::Database;
use shiftlog_types::{parse_timestamp, Record, RecordField, RecordFilter};

use crate::Result;

/// One interactive session over the record collection.
///
/// Owns the in-memory collection for its lifetime: constructed from a
/// full `load()` at open, rewritten to the store after every append.
/// There is no ambient global state; callers pass the session into each
/// operation.
pub struct Session {
    db: Database,
    records: Vec<Record>,
}

impl Session {
    /// Open (or create) the store in `data_dir` and load the collection.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let db = Database::open(&data_dir.join("shiftlog.db"))?;
        Self::from_db(db)
    }

    /// Open an in-memory session (testing and throwaway runs).
    pub fn open_in_memory() -> Result<Self> {
        Self::from_db(Database::open_in_memory()?)
    }

    fn from_db(db: Database) -> Result<Self> {
        let records = db.load()?;
        Ok(Self { db, records })
    }

    /// Parse, validate, append, and persist one record from raw form
    /// input. On any failure the collection is unchanged, both in memory
    /// and on disk.
    pub fn submit_record(
        &mut self,
        employee: &str,
        product: &str,
        start_raw: &str,
        end_raw: &str,
    ) -> Result<Record> {
        let start = parse_timestamp("start", start_raw)?;
        let end = parse_timestamp("end", end_raw)?;
        let record = Record::new(employee, product, start, end)?;

        self.records.push(record.clone());
        if let Err(err) = self.db.save(&self.records) {
            // Keep memory and disk in agreement when the rewrite fails
            self.records.pop();
            return Err(err.into());
        }

        Ok(record)
    }

    /// The full collection in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Filtered view of the collection, original order preserved.
    pub fn filtered_view(&self, filter: &RecordFilter) -> Vec<Record> {
        apply_filter(&self.records, filter)
    }

    /// Grouped statistics over the filtered view; `None` when the view
    /// is empty.
    pub fn analytics(&self, filter: &RecordFilter) -> Option<StatsReport> {
        grouped_statistics(&self.filtered_view(filter))
    }

    /// Distinct employee names, first-seen order.
    pub fn employees(&self) -> Vec<String> {
        distinct_values(&self.records, RecordField::Employee)
    }

    /// Distinct product names, first-seen order.
    pub fn products(&self) -> Vec<String> {
        distinct_values(&self.records, RecordField::Product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_submit_appends_and_derives_duration() {
        let mut session = Session::open_in_memory().unwrap();
        let record = session
            .submit_record("Ada", "Widget", "2024-03-01 09:00", "2024-03-01 09:45")
            .unwrap();

        assert_eq!(record.duration_minutes, 45.0);
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_submit_rejects_bad_timestamp_and_leaves_collection_unchanged() {
        let mut session = Session::open_in_memory().unwrap();
        let err = session
            .submit_record("Ada", "Widget", "not-a-time", "2024-03-01 09:45")
            .unwrap_err();

        assert!(matches!(err, Error::Invalid(shiftlog_types::Error::Parse { field: "start", .. })));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_submit_rejects_end_before_start() {
        let mut session = Session::open_in_memory().unwrap();
        let err = session
            .submit_record("Ada", "Widget", "2024-03-01 10:00", "2024-03-01 09:00")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "end time must be after start time"
        );
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_submit_allows_duplicate_records() {
        let mut session = Session::open_in_memory().unwrap();
        for _ in 0..2 {
            session
                .submit_record("Ada", "Widget", "2024-03-01 09:00", "2024-03-01 09:45")
                .unwrap();
        }
        assert_eq!(session.records().len(), 2);
    }

    #[test]
    fn test_session_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut session = Session::open(dir.path()).unwrap();
            session
                .submit_record("Ada", "Widget", "2024-03-01 09:00", "2024-03-01 09:45")
                .unwrap();
        }

        let session = Session::open(dir.path()).unwrap();
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].employee, "Ada");
    }

    #[test]
    fn test_analytics_through_session() {
        let mut session = Session::open_in_memory().unwrap();
        session
            .submit_record("Ada", "Widget", "2024-03-01 09:00", "2024-03-01 09:10")
            .unwrap();
        session
            .submit_record("Grace", "Widget", "2024-03-01 09:00", "2024-03-01 09:30")
            .unwrap();

        let report = session.analytics(&RecordFilter::default()).unwrap();
        assert_eq!(report.fastest, "Ada");
        assert_eq!(report.slowest, "Grace");

        let empty = session.analytics(&RecordFilter::from_args(Some("Nobody"), None));
        assert!(empty.is_none());
    }

    #[test]
    fn test_distinct_values_through_session() {
        let mut session = Session::open_in_memory().unwrap();
        session
            .submit_record("Grace", "Gadget", "2024-03-01 09:00", "2024-03-01 09:10")
            .unwrap();
        session
            .submit_record("Ada", "Widget", "2024-03-01 10:00", "2024-03-01 10:30")
            .unwrap();
        session
            .submit_record("Grace", "Widget", "2024-03-01 11:00", "2024-03-01 11:05")
            .unwrap();

        assert_eq!(session.employees(), vec!["Grace", "Ada"]);
        assert_eq!(session.products(), vec!["Gadget", "Widget"]);
    }
}
