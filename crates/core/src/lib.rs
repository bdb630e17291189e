//! `cropguide-core`: measurement primitives shared by every layer.
//!
//! This crate does no I/O.

pub mod error;
pub mod id;
pub mod measurement;
pub mod value_object;

pub use error::{MeasurementError, MeasurementResult};
pub use id::SubmissionId;
pub use measurement::{FEATURE_COUNT, Feature, MeasurementVector};
pub use value_object::ValueObject;
