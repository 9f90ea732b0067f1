//! Hand landmark samples.
//!
//! A sample is 21 tracked hand joints in 3D, sent as a flat list ordered point by
//! point (`x0, y0, z0, x1, ...`). Joint order carries meaning and is never changed.

use crate::core::errors::{SignError, SignResult};
use ndarray::Array2;
use serde_json::Value;

/// Number of tracked hand joints in a sample.
pub const NUM_LANDMARKS: usize = 21;

/// Coordinates per joint.
pub const LANDMARK_DIMS: usize = 3;

/// Length of the flat feature vector the model consumes.
pub const FEATURE_LEN: usize = NUM_LANDMARKS * LANDMARK_DIMS;

/// Index of the wrist joint, the reference point for centering.
pub const WRIST: usize = 0;

/// Message returned when a request carries no landmark sample.
pub const MISSING_FEATURES: &str = "No features provided";

/// One hand pose: a `[21, 3]` matrix of joint coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Array2<f64>,
}

impl LandmarkSet {
    /// Builds a sample from a flat list of exactly 63 finite values.
    pub fn from_flat(values: &[f64]) -> SignResult<Self> {
        if values.len() != FEATURE_LEN {
            return Err(SignError::invalid_input(format!(
                "expected {} landmark values ({} points x {}), got {}",
                FEATURE_LEN,
                NUM_LANDMARKS,
                LANDMARK_DIMS,
                values.len()
            )));
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SignError::invalid_input(format!(
                "feature at index {} is not a finite number",
                index
            )));
        }

        let points = Array2::from_shape_vec((NUM_LANDMARKS, LANDMARK_DIMS), values.to_vec())
            .map_err(|e| SignError::normalization("reshape landmarks to 21x3", e))?;
        Ok(Self { points })
    }

    /// Builds a sample from the `features` member of a request body.
    ///
    /// An absent or `null` member yields [`MISSING_FEATURES`]; anything other than an
    /// array of 63 numbers is rejected as invalid input.
    pub fn from_json(features: Option<&Value>) -> SignResult<Self> {
        let values = match features {
            None | Some(Value::Null) => return Err(SignError::invalid_input(MISSING_FEATURES)),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(SignError::invalid_input(format!(
                    "features must be an array of {} numbers",
                    FEATURE_LEN
                )));
            }
        };

        let flat = values
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_f64().ok_or_else(|| {
                    SignError::invalid_input(format!("feature at index {} is not a number", index))
                })
            })
            .collect::<SignResult<Vec<f64>>>()?;

        Self::from_flat(&flat)
    }

    /// The `[21, 3]` coordinate matrix.
    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }

    /// Coordinates of a single joint.
    pub fn point(&self, index: usize) -> Option<[f64; 3]> {
        (index < NUM_LANDMARKS).then(|| {
            let row = self.points.row(index);
            [row[0], row[1], row[2]]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ramp() -> Vec<f64> {
        (0..FEATURE_LEN).map(|i| i as f64).collect()
    }

    #[test]
    fn test_from_flat_preserves_point_order() {
        let set = LandmarkSet::from_flat(&ramp()).unwrap();
        assert_eq!(set.points().shape(), &[21, 3]);
        assert_eq!(set.point(0), Some([0.0, 1.0, 2.0]));
        assert_eq!(set.point(20), Some([60.0, 61.0, 62.0]));
        assert_eq!(set.point(21), None);
    }

    #[test]
    fn test_from_flat_wrong_length() {
        let err = LandmarkSet::from_flat(&[0.0; 62]).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("got 62"));
        assert!(LandmarkSet::from_flat(&[0.0; 64]).is_err());
        assert!(LandmarkSet::from_flat(&[]).is_err());
    }

    #[test]
    fn test_from_json_missing_and_null() {
        for features in [None, Some(&Value::Null)] {
            match LandmarkSet::from_json(features) {
                Err(SignError::InvalidInput { message }) => assert_eq!(message, MISSING_FEATURES),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_json_non_numeric() {
        let mut values: Vec<Value> = ramp().into_iter().map(Value::from).collect();
        values[5] = json!("five");
        let err = LandmarkSet::from_json(Some(&Value::Array(values))).unwrap_err();
        assert!(err.to_string().contains("index 5"));
    }

    #[test]
    fn test_from_json_not_an_array() {
        assert!(LandmarkSet::from_json(Some(&json!("1,2,3"))).is_err());
        assert!(LandmarkSet::from_json(Some(&json!({ "x": 1 }))).is_err());
    }

    #[test]
    fn test_from_json_accepts_integers_and_floats() {
        let mut values: Vec<Value> = ramp().into_iter().map(Value::from).collect();
        values[0] = json!(1);
        values[1] = json!(-0.25);
        let set = LandmarkSet::from_json(Some(&Value::Array(values))).unwrap();
        assert_eq!(set.point(0), Some([1.0, -0.25, 2.0]));
    }
}
