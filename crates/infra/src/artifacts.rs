//! Startup loading of the fitted inference artifacts.
//!
//! Three files are required: the scaler coefficients, the cluster centroids,
//! and the reference dataset the model was fitted on. All three are checked
//! for existence before any is parsed, and any failure is fatal: the process
//! must not serve requests without a complete set.
//!
//! ## Formats
//!
//! | artifact | default file | content |
//! |---|---|---|
//! | scaler | `standardscaler.json` | `{"mean": [7], "scale": [7]}` |
//! | cluster model | `kmeans_model.json` | `{"centroids": [[7], ...]}` |
//! | reference dataset | `filteringdata.csv` | header with the seven feature columns |

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use cropguide_ai::{
    AiError, ClusterModelParams, CropCatalog, InferencePipeline, NearestCentroidModel,
    ScalerParams, StandardScaler,
};
use cropguide_core::Feature;

pub const SCALER_FILE: &str = "standardscaler.json";
pub const MODEL_FILE: &str = "kmeans_model.json";
pub const REFERENCE_FILE: &str = "filteringdata.csv";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    Scaler,
    ClusterModel,
    ReferenceData,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArtifactKind::Scaler => "scaler",
            ArtifactKind::ClusterModel => "cluster model",
            ArtifactKind::ReferenceData => "reference dataset",
        })
    }
}

/// Startup failure while loading artifacts. Always fatal.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("{kind} file not found at {}", .path.display())]
    Missing { kind: ArtifactKind, path: PathBuf },

    #[error("failed to read {kind} at {}: {source}", .path.display())]
    Unreadable {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {kind} at {}: {reason}", .path.display())]
    Malformed {
        kind: ArtifactKind,
        path: PathBuf,
        reason: String,
    },
}

impl ArtifactError {
    /// Path of the artifact that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path, .. }
            | Self::Unreadable { path, .. }
            | Self::Malformed { path, .. } => path,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Missing { kind, .. }
            | Self::Unreadable { kind, .. }
            | Self::Malformed { kind, .. } => *kind,
        }
    }
}

/// Locations of the three required artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub model: PathBuf,
    pub reference_data: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            scaler: dir.join(SCALER_FILE),
            model: dir.join(MODEL_FILE),
            reference_data: dir.join(REFERENCE_FILE),
        }
    }

    fn iter(&self) -> [(ArtifactKind, &Path); 3] {
        [
            (ArtifactKind::ClusterModel, self.model.as_path()),
            (ArtifactKind::Scaler, self.scaler.as_path()),
            (ArtifactKind::ReferenceData, self.reference_data.as_path()),
        ]
    }
}

/// Header + size of the reference dataset.
///
/// Only used to confirm the artifact set is complete; the pipeline never reads
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataset {
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Read-only holder of the loaded artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    paths: ArtifactPaths,
    scaler: Arc<StandardScaler>,
    model: Arc<NearestCentroidModel>,
    reference: ReferenceDataset,
}

impl ArtifactStore {
    /// Verify and load all three artifacts. Reads each file exactly once.
    pub fn initialize(paths: ArtifactPaths) -> Result<Self, ArtifactError> {
        for (kind, path) in paths.iter() {
            if !path.exists() {
                return Err(ArtifactError::Missing {
                    kind,
                    path: path.to_path_buf(),
                });
            }
        }

        let model = load_model(&paths.model)?;
        let scaler = load_scaler(&paths.scaler)?;
        let reference = load_reference(&paths.reference_data)?;

        tracing::info!(
            scaler = %paths.scaler.display(),
            model = %paths.model.display(),
            reference_data = %paths.reference_data.display(),
            clusters = model.n_clusters(),
            reference_rows = reference.rows,
            "inference artifacts loaded"
        );

        Ok(Self {
            paths,
            scaler: Arc::new(scaler),
            model: Arc::new(model),
            reference,
        })
    }

    pub fn scaler(&self) -> &Arc<StandardScaler> {
        &self.scaler
    }

    pub fn model(&self) -> &Arc<NearestCentroidModel> {
        &self.model
    }

    pub fn reference(&self) -> &ReferenceDataset {
        &self.reference
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// Wire the loaded artifacts into an inference pipeline.
    pub fn pipeline(&self, catalog: CropCatalog) -> InferencePipeline {
        InferencePipeline::new(self.scaler.clone(), self.model.clone(), catalog)
    }
}

fn read(kind: ArtifactKind, path: &Path) -> Result<String, ArtifactError> {
    fs::read_to_string(path).map_err(|source| ArtifactError::Unreadable {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

fn malformed(kind: ArtifactKind, path: &Path, reason: impl fmt::Display) -> ArtifactError {
    ArtifactError::Malformed {
        kind,
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn load_scaler(path: &Path) -> Result<StandardScaler, ArtifactError> {
    let kind = ArtifactKind::Scaler;
    let params: ScalerParams =
        serde_json::from_str(&read(kind, path)?).map_err(|e| malformed(kind, path, e))?;
    StandardScaler::from_params(params).map_err(|e: AiError| malformed(kind, path, e))
}

fn load_model(path: &Path) -> Result<NearestCentroidModel, ArtifactError> {
    let kind = ArtifactKind::ClusterModel;
    let params: ClusterModelParams =
        serde_json::from_str(&read(kind, path)?).map_err(|e| malformed(kind, path, e))?;
    NearestCentroidModel::from_params(params).map_err(|e| malformed(kind, path, e))
}

fn csv_error(kind: ArtifactKind, path: &Path, err: csv::Error) -> ArtifactError {
    if !err.is_io_error() {
        return malformed(kind, path, err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ArtifactError::Unreadable {
            kind,
            path: path.to_path_buf(),
            source,
        },
        other => malformed(kind, path, format!("{other:?}")),
    }
}

fn load_reference(path: &Path) -> Result<ReferenceDataset, ArtifactError> {
    let kind = ArtifactKind::ReferenceData;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(kind, path, e))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(kind, path, e))?
        .iter()
        .map(|c| c.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    for feature in Feature::ALL {
        let wanted = feature.column_name();
        if !columns.iter().any(|c| c.eq_ignore_ascii_case(wanted)) {
            return Err(malformed(kind, path, format!("missing column `{wanted}`")));
        }
    }

    let mut rows = 0;
    for record in reader.records() {
        record.map_err(|e| csv_error(kind, path, e))?;
        rows += 1;
    }

    Ok(ReferenceDataset { columns, rows })
}
