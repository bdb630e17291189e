use std::sync::Arc;

use cropguide_ai::{CropCatalog, InferencePipeline};
use cropguide_infra::{
    AppConfig, ArtifactError, ArtifactStore, InMemorySubmissionRecorder,
    PostgresSubmissionRecorder, SubmissionRecorder,
};

/// Everything a request handler needs, built once at startup.
///
/// Immutable after construction; shared across requests behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    pipeline: InferencePipeline,
    recorder: Arc<dyn SubmissionRecorder>,
}

impl AppServices {
    pub fn new(pipeline: InferencePipeline, recorder: Arc<dyn SubmissionRecorder>) -> Self {
        Self { pipeline, recorder }
    }

    /// Load artifacts and pick a recorder from configuration.
    ///
    /// Any artifact failure is returned as-is; callers must not start serving.
    pub fn from_config(config: &AppConfig) -> Result<Self, ArtifactError> {
        let store = ArtifactStore::initialize(config.artifact_paths())?;

        let recorder: Arc<dyn SubmissionRecorder> = match &config.database_url {
            Some(url) => Arc::new(PostgresSubmissionRecorder::new(url.clone())),
            None => {
                tracing::warn!("DATABASE_URL not set; submissions are kept in memory only");
                Arc::new(InMemorySubmissionRecorder::new())
            }
        };

        Ok(Self::new(store.pipeline(CropCatalog::builtin()), recorder))
    }

    pub fn pipeline(&self) -> &InferencePipeline {
        &self.pipeline
    }

    pub fn recorder(&self) -> &Arc<dyn SubmissionRecorder> {
        &self.recorder
    }
}
