//! Train/evaluate/predict facade over a boxed estimator.

use anyhow::Result;

use crate::config::ModelConfig;
use crate::dataset::Dataset;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::build_model;
use crate::stats::{f1_score, precision_score, recall_score, roc_auc_score, EvalMetrics};

/// Wraps one estimator together with the feature columns it consumes and
/// the target column it predicts. Features and target are fixed at
/// construction; the only state that changes afterwards is the
/// estimator's own fitted parameters, mutated once by a successful
/// `train`.
pub struct BookingClassifier {
    model: Box<dyn ClassifierModel>,
    features: Vec<String>,
    target: String,
}

impl BookingClassifier {
    pub fn new(
        model: Box<dyn ClassifierModel>,
        features: Vec<String>,
        target: impl Into<String>,
    ) -> Self {
        BookingClassifier {
            model,
            features,
            target: target.into(),
        }
    }

    /// Convenience constructor routing through the model factory.
    pub fn from_config(
        config: ModelConfig,
        features: Vec<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(build_model(config), features, target)
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Fit the estimator on the configured feature and target columns.
    ///
    /// A missing or non-numeric column surfaces as the extraction's own
    /// error, untranslated.
    pub fn train(&mut self, df_train: &Dataset) -> Result<()> {
        let x = df_train.feature_matrix(&self.features)?;
        let y = df_train.label_vector(&self.target)?;

        log::info!(
            "Training {} model on {} rows with {} features",
            self.model.name(),
            x.nrows(),
            x.ncols()
        );

        self.model.fit(&x, &y)
    }

    /// Score a test set: probabilities from the fitted estimator,
    /// thresholded at 0.5 for the counting metrics, continuous for
    /// ROC-AUC.
    ///
    /// Fails when the estimator is untrained, and when the truth vector
    /// holds a single class (ROC-AUC undefined).
    pub fn evaluate(&mut self, df_test: &Dataset) -> Result<EvalMetrics> {
        let x = df_test.feature_matrix(&self.features)?;
        let y_true = df_test.label_vector(&self.target)?;

        let probabilities = self.model.predict_proba(&x)?;
        let y_pred: Vec<i32> = probabilities.iter().map(|&p| i32::from(p >= 0.5)).collect();

        let metrics = EvalMetrics {
            precision: precision_score(&y_true, &y_pred),
            recall: recall_score(&y_true, &y_pred),
            f1_score: f1_score(&y_true, &y_pred),
            roc_auc: roc_auc_score(&y_true, &probabilities)?,
        };

        log::info!(
            "Evaluation of {} model: precision={:.4} recall={:.4} f1={:.4} roc_auc={:.4}",
            self.model.name(),
            metrics.precision,
            metrics.recall,
            metrics.f1_score,
            metrics.roc_auc
        );

        Ok(metrics)
    }

    /// Positive-class probability for every row, in input order.
    /// No thresholding, no state mutation.
    pub fn predict(&mut self, df: &Dataset) -> Result<Vec<f32>> {
        let x = df.feature_matrix(&self.features)?;
        self.model.predict_proba(&x)
    }
}
