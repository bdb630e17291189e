//! Measurement error model.

use thiserror::Error;

/// Result type used when turning raw request fields into measurements.
pub type MeasurementResult<T> = Result<T, MeasurementError>;

/// A request field could not be turned into a usable measurement.
///
/// Every variant names the offending form field so callers can report it back
/// verbatim. These are per-request failures: they never abort the process and
/// never produce a submission record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    /// The field was not present in the request at all.
    #[error("missing measurement field `{field}`")]
    Missing { field: &'static str },

    /// The field was present but is not a decimal number.
    #[error("field `{field}` is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// The field parsed, but to an infinity or NaN.
    #[error("field `{field}` must be a finite number, got {value:?}")]
    NotFinite { field: &'static str, value: String },
}

impl MeasurementError {
    /// Name of the form field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NotFinite { field, .. } => field,
        }
    }
}
