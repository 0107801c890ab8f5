pub mod gbdt;
#[cfg(feature = "linfa")]
pub mod logistic;

pub mod classifier_trait;
pub mod factory;
