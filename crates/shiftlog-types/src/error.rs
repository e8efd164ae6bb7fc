use std::fmt;

/// Result type for shiftlog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Timestamp text did not match the expected format.
    /// Carries the field name and the raw input so the caller can
    /// redisplay the offending value.
    Parse { field: &'static str, raw: String },

    /// Input parsed but is semantically invalid (e.g. end before start)
    Validation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { field, raw } => {
                write!(f, "invalid {} timestamp {:?} (expected YYYY-MM-DD HH:MM)", field, raw)
            }
            Error::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}
