use std::collections::HashMap;
use std::sync::Arc;

use cropguide_core::{MeasurementResult, MeasurementVector};

use crate::catalog::CropCatalog;
use crate::cluster::NearestCentroidModel;
use crate::result::Classification;
use crate::scaler::StandardScaler;

/// Raw form fields → crop recommendation.
///
/// Holds only shared, read-only handles, so one pipeline can serve any number
/// of concurrent requests without locking. Classification never persists
/// anything; recording the outcome is the caller's job.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    scaler: Arc<StandardScaler>,
    model: Arc<NearestCentroidModel>,
    catalog: CropCatalog,
}

impl InferencePipeline {
    pub fn new(
        scaler: Arc<StandardScaler>,
        model: Arc<NearestCentroidModel>,
        catalog: CropCatalog,
    ) -> Self {
        Self {
            scaler,
            model,
            catalog,
        }
    }

    /// Parse the seven named fields and classify them.
    ///
    /// Fails only if a field is missing, unparseable or non-finite.
    pub fn classify(&self, fields: &HashMap<String, String>) -> MeasurementResult<Classification> {
        let measurements = MeasurementVector::from_fields(fields)?;
        Ok(self.classify_measurements(measurements))
    }

    pub fn classify_measurements(&self, measurements: MeasurementVector) -> Classification {
        let normalized = self.scaler.transform(&measurements);
        let cluster_id = self.model.predict(&normalized);
        Classification {
            measurements,
            cluster_id,
            crops: self.catalog.lookup(cluster_id),
        }
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    pub fn model(&self) -> &NearestCentroidModel {
        &self.model
    }
}
