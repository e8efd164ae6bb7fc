use rusqlite::{params, Connection};
use shiftlog_types::{parse_timestamp, Record, TIMESTAMP_FORMAT};
use std::path::Path;

use crate::{Error, Result};

// NOTE: Store Design Rationale
//
// Why whole-collection rewrite (not incremental insert)?
// - The collection is append-only and session-owned; the store is the
//   single source of truth across sessions
// - A full transactional rewrite after every append keeps the on-disk
//   state equal to the in-memory state on every path
// - Collections are interactive-session sized; rewrite cost is noise
//
// Why re-validate rows on load?
// - Records are only ever constructed through Record::new, so a row that
//   fails validation means the file was edited or damaged outside the
//   process; surfacing Corrupt beats silently loading an invalid record
// - Durations are re-derived on load, which also guarantees the
//   round-trip invariant load(save(C)) == C

/// SQLite-backed record store.
///
/// Opening a path that does not exist yet creates an empty store, so a
/// first-run `load` yields the empty collection rather than an error.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                employee TEXT NOT NULL,
                product TEXT NOT NULL,
                start_ts TEXT NOT NULL,
                end_ts TEXT NOT NULL,
                duration_minutes REAL NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Load the whole collection in insertion order.
    pub fn load(&self) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT employee, product, start_ts, end_ts FROM records ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (employee, product, start_raw, end_raw) = row?;
            let start = parse_timestamp("start", &start_raw)
                .map_err(|e| Error::Corrupt(e.to_string()))?;
            let end =
                parse_timestamp("end", &end_raw).map_err(|e| Error::Corrupt(e.to_string()))?;
            let record = Record::new(employee, product, start, end)
                .map_err(|e| Error::Corrupt(e.to_string()))?;
            records.push(record);
        }

        Ok(records)
    }

    /// Replace the stored collection with `records`, preserving order.
    ///
    /// Runs as a single transaction: either the full rewrite lands or the
    /// previous state survives untouched.
    pub fn save(&mut self, records: &[Record]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM records", [])?;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO records (employee, product, start_ts, end_ts, duration_minutes)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )?;
            for record in records {
                stmt.execute(params![
                    &record.employee,
                    &record.product,
                    record.start.format(TIMESTAMP_FORMAT).to_string(),
                    record.end.format(TIMESTAMP_FORMAT).to_string(),
                    record.duration_minutes,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}
