//! Submission logging: one appended row per successful classification.

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use cropguide_ai::Classification;
use cropguide_core::{MeasurementVector, SubmissionId};

pub use in_memory::InMemorySubmissionRecorder;
pub use postgres::PostgresSubmissionRecorder;

/// One row for the `predictions` table.
///
/// `id` and `recorded_at` identify the submission in logs; only the
/// measurements and `crop` are part of the stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub recorded_at: DateTime<Utc>,
    pub measurements: MeasurementVector,
    /// Crop names joined with `", "`, in catalog order.
    pub crop: String,
}

impl SubmissionRecord {
    pub fn from_classification(classification: &Classification) -> Self {
        Self {
            id: SubmissionId::new(),
            recorded_at: Utc::now(),
            measurements: classification.measurements,
            crop: classification.joined_crop_names(),
        }
    }
}

/// Failure to log a submission. The classification itself is unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("failed to connect to submission store: {0}")]
    Connect(String),

    #[error("failed to insert submission: {0}")]
    Insert(String),

    #[error("submission store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only sink for submission records.
#[async_trait::async_trait]
pub trait SubmissionRecorder: Send + Sync {
    async fn record(&self, record: &SubmissionRecord) -> Result<(), PersistenceError>;
}

#[async_trait::async_trait]
impl<S> SubmissionRecorder for Arc<S>
where
    S: SubmissionRecorder + ?Sized,
{
    async fn record(&self, record: &SubmissionRecord) -> Result<(), PersistenceError> {
        (**self).record(record).await
    }
}
