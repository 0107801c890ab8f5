//! dispatch-classifiers: feature engineering and acceptance models for
//! ride-allocation events.
//!
//! This crate provides a small column-oriented dataset type, pure feature
//! transforms over driver-booking event records (driver-to-pickup
//! distance, hour of day, leakage-safe historical acceptance counts), a
//! classifier facade over pluggable estimators (GBDT, optional linfa
//! logistic regression), evaluation metrics, and plotting helpers.
//!
//! The design favors small, testable modules with feature flags to avoid
//! requiring optional model backends unless explicitly enabled.
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod models;
pub mod report;
pub mod stats;
