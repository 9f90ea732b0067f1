//! Top-k ranking of class scores.

use std::cmp::Ordering;

/// The `k` best classes of one score row, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct TopkResult {
    /// Class indexes ordered by descending score.
    pub indexes: Vec<usize>,
    /// Scores matching `indexes`.
    pub scores: Vec<f32>,
}

impl TopkResult {
    /// The winning class index and score.
    pub fn best(&self) -> Option<(usize, f32)> {
        Some((*self.indexes.first()?, *self.scores.first()?))
    }
}

/// A processor for extracting top-k results from classification scores.
///
/// Classes with equal scores keep their index order, so the lowest index wins a tie.
/// `0.0` and `-0.0` count as equal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Topk;

impl Topk {
    pub fn new() -> Self {
        Self
    }

    /// Ranks one score row and keeps the best `k` classes.
    ///
    /// # Arguments
    ///
    /// * `scores` - Confidence scores for all classes, indexed by class ID.
    /// * `k` - Number of top predictions to extract (must be > 0).
    ///
    /// # Returns
    ///
    /// * `Ok(TopkResult)` - At most `k` classes, best first.
    /// * `Err(String)` - If `k` is 0, the row is empty, or a score is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asl_letters::processors::Topk;
    ///
    /// let result = Topk::new().process(&[0.2, 0.8, 0.8], 2).unwrap();
    /// assert_eq!(result.indexes, vec![1, 2]);
    /// ```
    pub fn process(&self, scores: &[f32], k: usize) -> Result<TopkResult, String> {
        if k == 0 {
            return Err("k must be greater than 0".to_string());
        }
        if scores.is_empty() {
            return Err("Empty prediction vector".to_string());
        }
        if let Some(idx) = scores.iter().position(|s| s.is_nan()) {
            return Err(format!("score for class {} is NaN", idx));
        }

        let mut indexed_scores: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
        // Stable sort: equal scores stay in index order. NaN was rejected above.
        indexed_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        indexed_scores.truncate(k.min(scores.len()));

        let (indexes, scores) = indexed_scores.into_iter().unzip();
        Ok(TopkResult { indexes, scores })
    }
}
