//! Infrastructure layer: artifact loading, configuration, submission storage.

pub mod artifacts;
pub mod config;
pub mod recorder;

pub use artifacts::{ArtifactError, ArtifactKind, ArtifactPaths, ArtifactStore, ReferenceDataset};
pub use config::{AppConfig, ConfigError};
pub use recorder::{
    InMemorySubmissionRecorder, PersistenceError, PostgresSubmissionRecorder, SubmissionRecord,
    SubmissionRecorder,
};
