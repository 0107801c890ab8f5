use anyhow::{bail, Context, Result};
use linfa::traits::Fit;
use linfa::Dataset;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::ClassifierModel;

/// Logistic-regression classifier backed by linfa.
pub struct LogisticClassifier {
    model: Option<FittedLogisticRegression<f64, i32>>,
    config: ModelConfig,
}

impl LogisticClassifier {
    pub fn new(config: ModelConfig) -> Self {
        LogisticClassifier {
            model: None,
            config,
        }
    }
}

impl ClassifierModel for LogisticClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &[i32]) -> Result<()> {
        let ModelType::Logistic {
            max_iterations,
            gradient_tolerance,
        } = &self.config.model_type
        else {
            bail!(
                "Expected ModelType::Logistic params, got {:?}",
                self.config.model_type
            );
        };

        // linfa works in f64; widen the feature matrix and keep 0/1
        // integer targets (1 is the accepted class).
        let x_f64 = x.mapv(|v| f64::from(v));
        let targets = Array1::from_vec(y.iter().map(|&label| i32::from(label == 1)).collect());
        let dataset = Dataset::new(x_f64, targets);

        let model = LogisticRegression::default()
            .max_iterations(*max_iterations)
            .gradient_tolerance(*gradient_tolerance)
            .fit(&dataset)
            .context("Failed to fit logistic regression")?;

        self.model = Some(model);
        Ok(())
    }

    fn predict_proba(&mut self, x: &Array2<f32>) -> Result<Vec<f32>> {
        let Some(model) = self.model.as_ref() else {
            bail!("Logistic model has not been trained; call fit first");
        };

        let x_f64 = x.mapv(|v| f64::from(v));
        let probabilities = model.predict_probabilities(&x_f64);
        Ok(probabilities.iter().map(|&p| p as f32).collect())
    }

    fn name(&self) -> &str {
        "logistic"
    }
}
