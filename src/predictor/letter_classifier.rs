//! Letter Classifier
//!
//! This module turns one hand pose into one fingerspelling letter. The sample is
//! normalized, wrapped as a batch of one, scored by the shared inference engine, and
//! the best-scoring class is mapped onto `A..=Z`.
//!
//! The classifier holds no per-request state. One instance is built at startup and
//! shared by every request.

use crate::core::batch::ToBatch;
use crate::core::errors::{SignError, SignResult};
use crate::core::{InferenceEngine, Tensor2D};
use crate::domain::landmarks::LandmarkSet;
use crate::domain::letters::{Letter, NUM_LETTERS};
use crate::processors::{NormalizeLandmarks, NormalizedFeatures, Topk};
use std::sync::Arc;
use tracing::debug;

/// The letter chosen for one sample and the model's score for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub letter: Letter,
    pub score: f32,
}

/// Classifier combining landmark normalization with a letter model.
#[derive(Debug)]
pub struct LetterClassifier {
    engine: Arc<dyn InferenceEngine>,
    normalizer: NormalizeLandmarks,
    topk: Topk,
}

impl LetterClassifier {
    /// Creates a classifier over `engine` that centers samples on the wrist.
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self {
            engine,
            normalizer: NormalizeLandmarks::default(),
            topk: Topk::new(),
        }
    }

    /// Replaces the landmark normalizer.
    pub fn with_normalizer(mut self, normalizer: NormalizeLandmarks) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Name of the model behind this classifier.
    pub fn model_name(&self) -> &str {
        self.engine.model_name()
    }

    /// Normalizes a raw sample and classifies it.
    pub fn predict(&self, landmarks: &LandmarkSet) -> SignResult<Prediction> {
        let features = self.normalizer.apply(landmarks)?;
        self.classify(&features)
    }

    /// Classifies an already normalized feature vector.
    ///
    /// # Errors
    ///
    /// Returns `SignError::ModelInvocation` when the engine fails or its output is not a
    /// single row of at least 26 numeric scores.
    pub fn classify(&self, features: &NormalizedFeatures) -> SignResult<Prediction> {
        let batch = features.as_array().to_single_batch()?;
        let scores = self.engine.infer(&batch)?;
        let prediction = self.select_letter(&scores)?;
        debug!(
            model = self.engine.model_name(),
            letter = %prediction.letter,
            score = prediction.score,
            "prediction"
        );
        Ok(prediction)
    }

    /// Picks the letter with the highest score from a `[1, classes]` score tensor.
    ///
    /// Only the first 26 classes are ranked. Ties go to the earlier letter.
    fn select_letter(&self, scores: &Tensor2D) -> SignResult<Prediction> {
        let model_name = self.engine.model_name();
        let (rows, classes) = scores.dim();
        if rows != 1 {
            return Err(SignError::malformed_output(
                model_name,
                format!("expected scores for 1 sample, got {}", rows),
            ));
        }
        if classes < NUM_LETTERS {
            return Err(SignError::malformed_output(
                model_name,
                format!(
                    "expected at least {} class scores, got {}",
                    NUM_LETTERS, classes
                ),
            ));
        }

        let row: Vec<f32> = scores.row(0).iter().take(NUM_LETTERS).copied().collect();
        let ranked = self
            .topk
            .process(&row, 1)
            .map_err(|reason| SignError::malformed_output(model_name, reason))?;
        let (index, score) = ranked
            .best()
            .ok_or_else(|| SignError::malformed_output(model_name, "no class ranked"))?;
        let letter = Letter::from_index(index).ok_or_else(|| {
            SignError::malformed_output(model_name, format!("class {} has no letter", index))
        })?;

        Ok(Prediction { letter, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::OpaqueError;
    use crate::domain::landmarks::FEATURE_LEN;
    use std::sync::Mutex;

    /// Returns fixed scores and remembers the last input it saw.
    #[derive(Debug)]
    struct FixedScores {
        scores: Tensor2D,
        seen: Mutex<Option<Tensor2D>>,
    }

    impl FixedScores {
        fn row(scores: Vec<f32>) -> Arc<Self> {
            let len = scores.len();
            Arc::new(Self {
                scores: Tensor2D::from_shape_vec((1, len), scores).unwrap(),
                seen: Mutex::new(None),
            })
        }

        fn peak_at(index: usize) -> Arc<Self> {
            let mut scores = vec![0.01; NUM_LETTERS];
            scores[index] = 0.9;
            Self::row(scores)
        }
    }

    impl InferenceEngine for FixedScores {
        fn infer(&self, input: &Tensor2D) -> Result<Tensor2D, SignError> {
            *self.seen.lock().unwrap() = Some(input.clone());
            Ok(self.scores.clone())
        }

        fn model_name(&self) -> &str {
            "fixed"
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl InferenceEngine for Failing {
        fn infer(&self, _input: &Tensor2D) -> Result<Tensor2D, SignError> {
            Err(SignError::model_invocation(
                "failing",
                "forward_pass",
                "runtime crashed",
                OpaqueError::new("boom"),
            ))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn ramp_hand() -> LandmarkSet {
        let values: Vec<f64> = (0..FEATURE_LEN).map(|i| i as f64).collect();
        LandmarkSet::from_flat(&values).unwrap()
    }

    #[test]
    fn test_first_and_last_letters() {
        let first = LetterClassifier::new(FixedScores::peak_at(0));
        assert_eq!(first.predict(&ramp_hand()).unwrap().letter.as_char(), 'A');

        let last = LetterClassifier::new(FixedScores::peak_at(25));
        assert_eq!(last.predict(&ramp_hand()).unwrap().letter.as_char(), 'Z');
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        let mut scores = vec![0.0; NUM_LETTERS];
        scores[7] = 0.5;
        scores[3] = 0.5;
        let classifier = LetterClassifier::new(FixedScores::row(scores));
        let prediction = classifier.predict(&ramp_hand()).unwrap();
        assert_eq!(prediction.letter.as_char(), 'D');
        assert_eq!(prediction.score, 0.5);
    }

    #[test]
    fn test_signed_zero_scores_tie() {
        let mut scores = vec![-1.0; NUM_LETTERS];
        scores[0] = -0.0;
        scores[1] = 0.0;
        let classifier = LetterClassifier::new(FixedScores::row(scores));
        assert_eq!(classifier.predict(&ramp_hand()).unwrap().letter.as_char(), 'A');
    }

    #[test]
    fn test_deterministic_for_identical_scores() {
        let classifier = LetterClassifier::new(FixedScores::peak_at(11));
        let a = classifier.predict(&ramp_hand()).unwrap();
        let b = classifier.predict(&ramp_hand()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.letter.as_char(), 'L');
    }

    #[test]
    fn test_engine_receives_normalized_single_batch() {
        let engine = FixedScores::peak_at(0);
        let classifier = LetterClassifier::new(engine.clone());
        classifier.predict(&ramp_hand()).unwrap();

        let seen = engine.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.shape(), &[1, FEATURE_LEN]);
        assert_eq!(seen[[0, 0]], 0.0);
        assert_eq!(seen[[0, FEATURE_LEN - 1]], 1.0);
    }

    #[test]
    fn test_extra_classes_are_ignored() {
        let mut scores = vec![0.0; NUM_LETTERS + 2];
        scores[NUM_LETTERS + 1] = 10.0;
        scores[2] = 1.0;
        let classifier = LetterClassifier::new(FixedScores::row(scores));
        assert_eq!(classifier.predict(&ramp_hand()).unwrap().letter.as_char(), 'C');
    }

    #[test]
    fn test_too_few_classes_is_model_error() {
        let classifier = LetterClassifier::new(FixedScores::row(vec![0.5; 10]));
        let err = classifier.predict(&ramp_hand()).unwrap_err();
        assert!(matches!(err, SignError::ModelInvocation { .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_nan_scores_are_model_error() {
        let mut scores = vec![0.1; NUM_LETTERS];
        scores[4] = f32::NAN;
        let classifier = LetterClassifier::new(FixedScores::row(scores));
        assert!(matches!(
            classifier.predict(&ramp_hand()),
            Err(SignError::ModelInvocation { .. })
        ));
    }

    #[test]
    fn test_multiple_rows_is_model_error() {
        let engine = Arc::new(FixedScores {
            scores: Tensor2D::zeros((2, NUM_LETTERS)),
            seen: Mutex::new(None),
        });
        let classifier = LetterClassifier::new(engine);
        assert!(classifier.predict(&ramp_hand()).is_err());
    }

    #[test]
    fn test_engine_failure_propagates() {
        let classifier = LetterClassifier::new(Arc::new(Failing));
        let err = classifier.predict(&ramp_hand()).unwrap_err();
        assert!(err.to_string().contains("forward_pass"));
    }
}
