pub mod error;
pub mod filter;
pub mod record;

pub use error::{Error, Result};
pub use filter::{FieldFilter, RecordFilter};
pub use record::{compute_duration, parse_timestamp, Record, RecordField, TIMESTAMP_FORMAT};
