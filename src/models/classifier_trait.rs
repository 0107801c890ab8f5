use anyhow::Result;
use ndarray::Array2;

/// A small trait abstraction for the estimators wrapped by the
/// `BookingClassifier` facade. Implementations own their fitted state;
/// calling `predict_proba` before a successful `fit` is the estimator's
/// own error, surfaced as-is.
pub trait ClassifierModel {
    /// Fit the model. `y` holds 0/1 labels (1 = accepted).
    fn fit(&mut self, x: &Array2<f32>, y: &[i32]) -> Result<()>;

    /// Predict the positive-class probability (0..1) for each row of `x`.
    fn predict_proba(&mut self, x: &Array2<f32>) -> Result<Vec<f32>>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
