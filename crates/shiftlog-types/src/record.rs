use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Canonical textual timestamp form: minute resolution, no timezone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Which record field a value refers to (used for distinct-value listing
/// and filter population).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Employee,
    Product,
}

/// One completed work session.
///
/// Immutable once constructed: the only way to obtain a `Record` is
/// [`Record::new`], which enforces `end > start` and derives the duration.
/// The collection a record lives in is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub employee: String,
    pub product: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Derived `(end - start)` in minutes; fractional minutes preserved.
    pub duration_minutes: f64,
}

impl Record {
    /// Construct a validated record with its derived duration.
    ///
    /// Fails with [`Error::Validation`] when either name is empty or the
    /// end timestamp is not strictly after the start timestamp. A record
    /// violating those invariants is never constructed.
    pub fn new(
        employee: impl Into<String>,
        product: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        let employee = employee.into();
        let product = product.into();

        if employee.trim().is_empty() {
            return Err(Error::Validation("employee name must not be empty".to_string()));
        }
        if product.trim().is_empty() {
            return Err(Error::Validation("product name must not be empty".to_string()));
        }
        if end <= start {
            return Err(Error::Validation(
                "end time must be after start time".to_string(),
            ));
        }

        Ok(Self {
            employee,
            product,
            duration_minutes: compute_duration(start, end),
            start,
            end,
        })
    }

    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Employee => &self.employee,
            RecordField::Product => &self.product,
        }
    }
}

/// Parse timestamp text in the canonical `YYYY-MM-DD HH:MM` form.
///
/// `field` names the originating form field ("start" / "end") so parse
/// failures identify which input was malformed.
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|_| Error::Parse {
        field,
        raw: raw.to_string(),
    })
}

/// Wall-clock difference between two timestamps, in minutes.
///
/// Pure over its inputs: seconds divided by 60, no rounding.
pub fn compute_duration(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}
