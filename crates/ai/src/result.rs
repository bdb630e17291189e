use thiserror::Error;

use cropguide_core::MeasurementVector;

use crate::catalog::{ClusterId, CropEntry};

/// Result of classifying one measurement vector.
///
/// This is an inference output, not a persisted record; callers decide whether
/// (and where) to log it.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Measurements that were classified.
    pub measurements: MeasurementVector,

    /// Cluster assigned by the model.
    pub cluster_id: ClusterId,

    /// Catalog entries for `cluster_id`, in catalog order. Never empty.
    pub crops: &'static [CropEntry],
}

impl Classification {
    pub fn crop_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.crops.iter().map(|c| c.name)
    }

    /// Crop names joined with `", "`, in catalog order.
    pub fn joined_crop_names(&self) -> String {
        self.crop_names().collect::<Vec<_>>().join(", ")
    }
}

/// Errors raised while building models from fitted parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AiError {
    #[error("expected {expected} values for {what}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid model parameters: {0}")]
    InvalidModel(String),
}
