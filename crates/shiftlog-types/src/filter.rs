use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Textual sentinel meaning "no constraint" for a filter field.
pub const ALL_SENTINEL: &str = "ALL";

/// Exact-match predicate on a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFilter {
    /// No constraint on this field.
    #[default]
    All,
    /// Match records whose field equals this value exactly.
    Exact(String),
}

impl FieldFilter {
    /// Interpret raw filter text: the "ALL" sentinel (case-insensitive)
    /// means unconstrained, anything else is an exact match.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            FieldFilter::All
        } else {
            FieldFilter::Exact(raw.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Exact(expected) => expected == value,
        }
    }
}

/// Conjunctive filter over employee and product.
///
/// The two predicates are independent; a record must satisfy both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    pub employee: FieldFilter,
    pub product: FieldFilter,
}

impl RecordFilter {
    pub fn new(employee: FieldFilter, product: FieldFilter) -> Self {
        Self { employee, product }
    }

    /// Build a filter from optional raw argument text; a missing argument
    /// is unconstrained, same as passing "ALL".
    pub fn from_args(employee: Option<&str>, product: Option<&str>) -> Self {
        Self {
            employee: employee.map(FieldFilter::parse).unwrap_or_default(),
            product: product.map(FieldFilter::parse).unwrap_or_default(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.employee.matches(&record.employee) && self.product.matches(&record.product)
    }

    /// True when neither field is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.employee == FieldFilter::All && self.product == FieldFilter::All
    }
}
