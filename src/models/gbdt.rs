use anyhow::{bail, Result};
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::Array2;

use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::ClassifierModel;

/// Gradient Boosting Decision Tree (GBDT) classifier
pub struct GbdtClassifier {
    model: Option<GBDT>,
    config: ModelConfig,
}

impl GbdtClassifier {
    pub fn new(config: ModelConfig) -> Self {
        GbdtClassifier {
            model: None,
            config,
        }
    }
}

impl ClassifierModel for GbdtClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &[i32]) -> Result<()> {
        let feature_size = x.ncols();

        match &self.config.model_type {
            ModelType::GBDT {
                max_depth,
                num_boost_round,
                debug,
                training_optimization_level,
                loss_type,
            } => {
                let mut config = Config::new();

                config.set_feature_size(feature_size);
                config.set_shrinkage(self.config.learning_rate);
                config.set_max_depth(*max_depth);
                config.set_iterations(*num_boost_round as usize);
                config.set_debug(*debug);
                config.set_training_optimization_level(*training_optimization_level);
                config.set_loss(loss_type);

                let mut gbdt = GBDT::new(&config);

                // LogLikelyhood training expects 1 / -1 labels.
                let mut train_x = DataVec::new();
                for (i, row) in x.outer_iter().enumerate() {
                    let label = if y[i] == 1 { 1.0 } else { -1.0 };
                    train_x.push(Data::new_training_data(row.to_vec(), 1.0, label, None));
                }

                gbdt.fit(&mut train_x);

                self.model = Some(gbdt);
                Ok(())
            }
            #[cfg(feature = "linfa")]
            _ => {
                bail!(
                    "Expected ModelType::GBDT params, got {:?}",
                    self.config.model_type
                );
            }
        }
    }

    fn predict_proba(&mut self, x: &Array2<f32>) -> Result<Vec<f32>> {
        let Some(model) = self.model.as_ref() else {
            bail!("GBDT model has not been trained; call fit first");
        };

        let mut test_x = DataVec::new();
        for row in x.outer_iter() {
            test_x.push(Data::new_training_data(row.to_vec(), 1.0, 0.0, None));
        }

        // With the LogLikelyhood loss, predict yields the positive-class
        // probability.
        Ok(model.predict(&test_x))
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}
