//! `cropguide-ai`
//!
//! **Responsibility:** crop recommendation inference.
//!
//! - `scaler`: fitted standardization of the seven measurements.
//! - `cluster`: nearest-centroid assignment in normalized space.
//! - `catalog`: the compiled-in cluster → crops table.
//! - `pipeline`: raw fields in, cluster + crops out.
//!
//! This crate never touches the filesystem or a database; fitted parameters are
//! handed in by callers (see `cropguide-infra`).

pub mod catalog;
pub mod cluster;
pub mod pipeline;
pub mod result;
pub mod scaler;

pub use catalog::{ClusterId, CropCatalog, CropEntry, UNKNOWN_CROPS};
pub use cluster::{ClusterModelParams, NearestCentroidModel};
pub use pipeline::InferencePipeline;
pub use result::{AiError, Classification};
pub use scaler::{NormalizedVector, ScalerParams, StandardScaler};
