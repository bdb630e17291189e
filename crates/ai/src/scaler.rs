//! Pre-fitted per-feature standardization.

use serde::{Deserialize, Serialize};

use cropguide_core::{FEATURE_COUNT, MeasurementVector};

use crate::result::AiError;

/// Fitted coefficients as exported from training (`mean_` / `scale_`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// A measurement vector after standardization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalizedVector(pub [f64; FEATURE_COUNT]);

/// Immutable standard scaler: `(x - mean) / scale` per feature.
///
/// A stored scale of exactly zero (constant feature at fit time) divides by 1,
/// matching how the scaler was fitted.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Result<Self, AiError> {
        if mean.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return Err(AiError::InvalidModel(
                "scaler coefficients must be finite".to_string(),
            ));
        }
        if scale.iter().any(|s| *s < 0.0) {
            return Err(AiError::InvalidModel(
                "scaler scale must be non-negative".to_string(),
            ));
        }

        let scale = scale.map(|s| if s == 0.0 { 1.0 } else { s });
        Ok(Self { mean, scale })
    }

    pub fn from_params(params: ScalerParams) -> Result<Self, AiError> {
        let mean = to_feature_array("scaler mean", params.mean)?;
        let scale = to_feature_array("scaler scale", params.scale)?;
        Self::new(mean, scale)
    }

    pub fn transform(&self, m: &MeasurementVector) -> NormalizedVector {
        let x = m.as_array();
        NormalizedVector(core::array::from_fn(|i| (x[i] - self.mean[i]) / self.scale[i]))
    }

    pub fn mean(&self) -> &[f64; FEATURE_COUNT] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64; FEATURE_COUNT] {
        &self.scale
    }
}

pub(crate) fn to_feature_array(
    what: &'static str,
    values: Vec<f64>,
) -> Result<[f64; FEATURE_COUNT], AiError> {
    let actual = values.len();
    values.try_into().map_err(|_| AiError::DimensionMismatch {
        what,
        expected: FEATURE_COUNT,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(values: [f64; 7]) -> MeasurementVector {
        MeasurementVector::new(values).unwrap()
    }

    #[test]
    fn transform_subtracts_mean_and_divides_by_scale() {
        let scaler = StandardScaler::new([1.0; 7], [2.0; 7]).unwrap();
        let z = scaler.transform(&m([3.0, 1.0, -1.0, 5.0, 1.0, 2.0, 0.0]));
        assert_eq!(z.0, [1.0, 0.0, -1.0, 2.0, 0.0, 0.5, -0.5]);
    }

    #[test]
    fn zero_scale_is_treated_as_one() {
        let mut scale = [1.0; 7];
        scale[3] = 0.0;
        let scaler = StandardScaler::new([0.0; 7], scale).unwrap();
        assert_eq!(scaler.scale()[3], 1.0);
        let z = scaler.transform(&m([0.0, 0.0, 0.0, 4.5, 0.0, 0.0, 0.0]));
        assert_eq!(z.0[3], 4.5);
    }

    #[test]
    fn from_params_rejects_wrong_arity() {
        let err = StandardScaler::from_params(ScalerParams {
            mean: vec![0.0; 6],
            scale: vec![1.0; 7],
        })
        .unwrap_err();
        assert_eq!(
            err,
            AiError::DimensionMismatch {
                what: "scaler mean",
                expected: 7,
                actual: 6
            }
        );
    }

    #[test]
    fn rejects_non_finite_or_negative_coefficients() {
        let mut mean = [0.0; 7];
        mean[0] = f64::NAN;
        assert!(StandardScaler::new(mean, [1.0; 7]).is_err());

        let mut scale = [1.0; 7];
        scale[6] = -1.0;
        assert!(StandardScaler::new([0.0; 7], scale).is_err());
    }

    #[test]
    fn params_decode_from_json() {
        let json = r#"{"mean":[1,2,3,4,5,6,7],"scale":[1,1,1,1,1,1,1]}"#;
        let params: ScalerParams = serde_json::from_str(json).unwrap();
        let scaler = StandardScaler::from_params(params).unwrap();
        assert_eq!(scaler.mean(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
