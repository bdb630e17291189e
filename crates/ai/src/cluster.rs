//! Nearest-centroid cluster assignment.

use serde::{Deserialize, Serialize};

use cropguide_core::FEATURE_COUNT;

use crate::catalog::ClusterId;
use crate::result::AiError;
use crate::scaler::{NormalizedVector, to_feature_array};

/// Fitted centroids as exported from training (`cluster_centers_`).
///
/// Centroids live in normalized space; the index of a centroid is its
/// cluster ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterModelParams {
    pub centroids: Vec<Vec<f64>>,
}

/// Immutable partition function over a fixed set of centroids.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestCentroidModel {
    centroids: Vec<[f64; FEATURE_COUNT]>,
}

impl NearestCentroidModel {
    pub fn new(centroids: Vec<[f64; FEATURE_COUNT]>) -> Result<Self, AiError> {
        if centroids.is_empty() {
            return Err(AiError::InvalidModel(
                "cluster model has no centroids".to_string(),
            ));
        }
        if centroids.iter().flatten().any(|v| !v.is_finite()) {
            return Err(AiError::InvalidModel(
                "centroid coordinates must be finite".to_string(),
            ));
        }
        Ok(Self { centroids })
    }

    pub fn from_params(params: ClusterModelParams) -> Result<Self, AiError> {
        let centroids = params
            .centroids
            .into_iter()
            .map(|c| to_feature_array("centroid", c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(centroids)
    }

    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Assign `x` to the Euclidean-closest centroid.
    ///
    /// Ties resolve to the lowest centroid index.
    pub fn predict(&self, x: &NormalizedVector) -> ClusterId {
        let mut best = 0usize;
        let mut best_distance = squared_distance(&x.0, &self.centroids[0]);

        for (idx, centroid) in self.centroids.iter().enumerate().skip(1) {
            let d = squared_distance(&x.0, centroid);
            if d < best_distance {
                best = idx;
                best_distance = d;
            }
        }

        ClusterId::from_index(best)
    }
}

fn squared_distance(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
