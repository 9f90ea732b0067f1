//! Landmark normalization.
//!
//! Centers a hand pose on a reference joint and scales it so the largest absolute
//! coordinate is 1. The result no longer depends on where the hand is in the frame
//! or how large it appears.

use crate::core::Tensor1D;
use crate::core::errors::{SignError, SignResult};
use crate::domain::landmarks::{FEATURE_LEN, LandmarkSet, NUM_LANDMARKS, WRIST};

/// A 63-value feature vector ready for the model.
///
/// The reference joint sits at the origin, and every value lies in `[-1, 1]`. A
/// sample whose joints all coincide with the reference is all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFeatures(Tensor1D);

impl NormalizedFeatures {
    pub fn as_array(&self) -> &Tensor1D {
        &self.0
    }

    /// Largest absolute value in the vector.
    pub fn max_abs(&self) -> f32 {
        self.0.iter().fold(0.0_f32, |m, v| m.max(v.abs()))
    }
}

/// Translation and scale normalization for a [`LandmarkSet`].
#[derive(Debug, Clone)]
pub struct NormalizeLandmarks {
    /// Joint subtracted from every point.
    pub reference: usize,
}

impl Default for NormalizeLandmarks {
    fn default() -> Self {
        Self { reference: WRIST }
    }
}

impl NormalizeLandmarks {
    /// Creates a normalizer centering on `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if `reference` is not a valid joint index.
    pub fn new(reference: usize) -> SignResult<Self> {
        if reference >= NUM_LANDMARKS {
            return Err(SignError::config_error(format!(
                "reference landmark {} out of range 0..{}",
                reference, NUM_LANDMARKS
            )));
        }
        Ok(Self { reference })
    }

    /// Normalizes one sample.
    ///
    /// 1. Subtract the reference joint from every joint.
    /// 2. Divide everything by the largest absolute coordinate, unless it is zero.
    /// 3. Flatten back to point-then-coordinate order.
    ///
    /// # Errors
    ///
    /// Returns `SignError::InvalidInput` when centering overflows, i.e. two finite
    /// coordinates lie further apart than `f64::MAX`.
    pub fn apply(&self, landmarks: &LandmarkSet) -> SignResult<NormalizedFeatures> {
        let points = landmarks.points();
        let reference = points.row(self.reference).to_owned();
        let mut centered = points - &reference;

        let max_abs = centered.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        if !max_abs.is_finite() {
            return Err(SignError::invalid_input(
                "landmark coordinates span too large a range to normalize",
            ));
        }
        if max_abs != 0.0 {
            centered.mapv_inplace(|v| v / max_abs);
        }

        let flat = centered
            .into_shape_with_order(FEATURE_LEN)
            .map_err(|e| SignError::normalization("flatten normalized landmarks", e))?;
        Ok(NormalizedFeatures(flat.mapv(|v| v as f32)))
    }

    /// Normalizes a flat list of 63 values.
    pub fn apply_flat(&self, values: &[f64]) -> SignResult<NormalizedFeatures> {
        self.apply(&LandmarkSet::from_flat(values)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// First point at the origin, every other point at (1, 0, 0).
    fn unit_x_hand() -> Vec<f64> {
        let mut values = vec![0.0, 0.0, 0.0];
        for _ in 0..20 {
            values.extend_from_slice(&[1.0, 0.0, 0.0]);
        }
        values
    }

    fn samples() -> Vec<Vec<f64>> {
        vec![
            (0..FEATURE_LEN).map(|i| i as f64).collect(),
            (0..FEATURE_LEN).map(|i| (i as f64 * 0.37).sin() * 250.0).collect(),
            (0..FEATURE_LEN).map(|i| -(i as f64) * 1e-4 + 0.5).collect(),
            (0..FEATURE_LEN)
                .map(|i| if i % 2 == 0 { 1e6 } else { -3.0 })
                .collect(),
            unit_x_hand(),
        ]
    }

    #[test]
    fn test_unit_x_hand() {
        let out = NormalizeLandmarks::default().apply_flat(&unit_x_hand()).unwrap();
        let values = out.as_array().to_vec();
        assert_eq!(values.len(), FEATURE_LEN);
        assert_eq!(&values[..3], &[0.0, 0.0, 0.0]);
        assert_eq!(values[3], 1.0);
        assert_eq!(out.max_abs(), 1.0);
    }

    #[test]
    fn test_reference_point_is_origin() {
        let normalizer = NormalizeLandmarks::default();
        for sample in samples() {
            let out = normalizer.apply_flat(&sample).unwrap();
            assert_eq!(&out.as_array().to_vec()[..3], &[0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_values_bounded_by_one() {
        let normalizer = NormalizeLandmarks::default();
        for sample in samples() {
            let out = normalizer.apply_flat(&sample).unwrap();
            assert!(out.max_abs() <= 1.0);
            assert!((out.max_abs() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_hand_is_all_zero() {
        let mut sample = Vec::new();
        for _ in 0..NUM_LANDMARKS {
            sample.extend_from_slice(&[0.3, -0.7, 0.05]);
        }
        let out = NormalizeLandmarks::default().apply_flat(&sample).unwrap();
        assert!(out.as_array().iter().all(|v| *v == 0.0));
        assert!(out.as_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_translation_and_scale_invariance() {
        let base: Vec<f64> = (0..FEATURE_LEN).map(|i| (i as f64 * 0.91).cos()).collect();
        let moved: Vec<f64> = base
            .chunks(3)
            .flat_map(|p| [p[0] * 4.0 + 10.0, p[1] * 4.0 - 3.0, p[2] * 4.0 + 0.5])
            .collect();

        let normalizer = NormalizeLandmarks::default();
        let a = normalizer.apply_flat(&base).unwrap();
        let b = normalizer.apply_flat(&moved).unwrap();
        for (x, y) in a.as_array().iter().zip(b.as_array()) {
            assert!((x - y).abs() < 1e-5, "{} vs {}", x, y);
        }
    }

    #[test]
    fn test_reapply_on_unit_range_is_stable() {
        let normalizer = NormalizeLandmarks::default();
        let once = normalizer.apply_flat(&unit_x_hand()).unwrap();
        let as_f64: Vec<f64> = once.as_array().iter().map(|v| *v as f64).collect();
        let twice = normalizer.apply_flat(&as_f64).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_reference() {
        let normalizer = NormalizeLandmarks::new(20).unwrap();
        let sample: Vec<f64> = (0..FEATURE_LEN).map(|i| i as f64).collect();
        let out = normalizer.apply_flat(&sample).unwrap();
        assert_eq!(&out.as_array().to_vec()[60..], &[0.0, 0.0, 0.0]);
        assert_eq!(out.as_array().to_vec()[0], -1.0);
        assert!(NormalizeLandmarks::new(21).is_err());
    }

    #[test]
    fn test_overflowing_range_is_rejected() {
        let mut sample = vec![-1e308, 0.0, 0.0];
        for _ in 0..20 {
            sample.extend_from_slice(&[1e308, 0.0, 0.0]);
        }
        let err = NormalizeLandmarks::default().apply_flat(&sample).unwrap_err();
        assert!(matches!(err, SignError::InvalidInput { .. }));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_extreme_but_representable_range_stays_bounded() {
        let mut sample = vec![-4e307, 0.0, 0.0];
        for _ in 0..20 {
            sample.extend_from_slice(&[4e307, 0.0, 0.0]);
        }
        let out = NormalizeLandmarks::default().apply_flat(&sample).unwrap();
        assert!(out.as_array().iter().all(|v| v.is_finite()));
        assert_eq!(out.max_abs(), 1.0);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = NormalizeLandmarks::default().apply_flat(&[1.0; 60]).unwrap_err();
        assert!(matches!(err, SignError::InvalidInput { .. }));
    }
}
