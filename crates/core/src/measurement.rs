//! Soil/climate measurements submitted for classification.

use std::collections::HashMap;

use crate::error::{MeasurementError, MeasurementResult};
use crate::value_object::ValueObject;

/// Number of features the scaler and cluster model were fitted on.
pub const FEATURE_COUNT: usize = 7;

/// One input feature.
///
/// The declaration order is the column order the fitted artifacts expect, so
/// `Feature::ALL` must never be reordered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Nitrogen,
        Feature::Phosphorus,
        Feature::Potassium,
        Feature::Temperature,
        Feature::Humidity,
        Feature::Ph,
        Feature::Rainfall,
    ];

    /// Form field name used by inbound requests.
    pub fn field_name(self) -> &'static str {
        match self {
            Feature::Nitrogen => "n",
            Feature::Phosphorus => "p",
            Feature::Potassium => "k",
            Feature::Temperature => "temperature",
            Feature::Humidity => "humidity",
            Feature::Ph => "ph",
            Feature::Rainfall => "rainfall",
        }
    }

    /// Column name in the reference dataset and the `predictions` table.
    pub fn column_name(self) -> &'static str {
        match self {
            Feature::Nitrogen => "N",
            Feature::Phosphorus => "P",
            Feature::Potassium => "K",
            other => other.field_name(),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The seven ordered measurements of a single request.
///
/// Values are guaranteed finite; no range validation is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeasurementVector {
    values: [f64; FEATURE_COUNT],
}

impl ValueObject for MeasurementVector {}

impl MeasurementVector {
    /// Build from already-numeric values (in `Feature::ALL` order).
    pub fn new(values: [f64; FEATURE_COUNT]) -> MeasurementResult<Self> {
        for feature in Feature::ALL {
            let v = values[feature.index()];
            if !v.is_finite() {
                return Err(MeasurementError::NotFinite {
                    field: feature.field_name(),
                    value: v.to_string(),
                });
            }
        }
        Ok(Self { values })
    }

    /// Parse the seven named form fields.
    ///
    /// Fields are checked in feature order, so the first failing field is the
    /// one reported.
    pub fn from_fields(fields: &HashMap<String, String>) -> MeasurementResult<Self> {
        let mut values = [0.0; FEATURE_COUNT];
        for feature in Feature::ALL {
            let field = feature.field_name();
            let raw = fields
                .get(field)
                .ok_or(MeasurementError::Missing { field })?;
            values[feature.index()] = parse_field(field, raw)?;
        }
        Ok(Self { values })
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }
}

fn parse_field(field: &'static str, raw: &str) -> MeasurementResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| MeasurementError::NotANumber {
            field,
            value: raw.to_string(),
        })?;

    if !value.is_finite() {
        return Err(MeasurementError::NotFinite {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}
