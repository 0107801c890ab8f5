//! Integration tests for classification metrics, config types and plots.

use dispatch_classifiers::config::{ModelConfig, ModelType};
use dispatch_classifiers::error::MetricsError;
use dispatch_classifiers::report::plots::{plot_probability_histogram, plot_roc_curve};
use dispatch_classifiers::stats::{
    f1_score, precision_score, recall_score, roc_auc_score, roc_curve,
};

// ---------------------------------------------------------------------------
// Thresholded metrics
// ---------------------------------------------------------------------------

#[test]
fn precision_recall_f1_known_values() {
    let y_true = vec![1, 0, 1, 1];
    let y_pred = vec![1, 1, 1, 0];

    // tp = 2, fp = 1, fn = 1
    assert!((precision_score(&y_true, &y_pred) - 2.0 / 3.0).abs() < 1e-6);
    assert!((recall_score(&y_true, &y_pred) - 2.0 / 3.0).abs() < 1e-6);
    assert!((f1_score(&y_true, &y_pred) - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn precision_reports_zero_when_nothing_predicted_positive() {
    let y_true = vec![1, 1, 0];
    let y_pred = vec![0, 0, 0];
    assert_eq!(precision_score(&y_true, &y_pred), 0.0);
    assert_eq!(f1_score(&y_true, &y_pred), 0.0);
}

#[test]
fn recall_reports_zero_when_truth_has_no_positives() {
    let y_true = vec![0, 0, 0];
    let y_pred = vec![1, 0, 1];
    assert_eq!(recall_score(&y_true, &y_pred), 0.0);
    assert_eq!(f1_score(&y_true, &y_pred), 0.0);
}

#[test]
fn perfect_predictions_score_one() {
    let y_true = vec![1, 0, 1, 0];
    let y_pred = vec![1, 0, 1, 0];
    assert_eq!(precision_score(&y_true, &y_pred), 1.0);
    assert_eq!(recall_score(&y_true, &y_pred), 1.0);
    assert_eq!(f1_score(&y_true, &y_pred), 1.0);
}

// ---------------------------------------------------------------------------
// ROC-AUC
// ---------------------------------------------------------------------------

#[test]
fn roc_auc_perfect_separation_is_one() {
    let y_true = vec![0, 0, 1, 1];
    let scores = vec![0.1, 0.2, 0.8, 0.9];
    let auc = roc_auc_score(&y_true, &scores).unwrap();
    assert!((auc - 1.0).abs() < 1e-6, "auc = {}", auc);
}

#[test]
fn roc_auc_inverted_ranking_is_zero() {
    let y_true = vec![1, 1, 0, 0];
    let scores = vec![0.1, 0.2, 0.8, 0.9];
    let auc = roc_auc_score(&y_true, &scores).unwrap();
    assert!(auc.abs() < 1e-6, "auc = {}", auc);
}

#[test]
fn roc_auc_all_tied_scores_is_half() {
    let y_true = vec![1, 0, 1, 0];
    let scores = vec![0.5, 0.5, 0.5, 0.5];
    let auc = roc_auc_score(&y_true, &scores).unwrap();
    assert!((auc - 0.5).abs() < 1e-6, "auc = {}", auc);
}

#[test]
fn roc_auc_single_class_is_an_explicit_error() {
    let y_true = vec![0, 0, 0];
    let scores = vec![0.1, 0.5, 0.9];
    assert!(matches!(
        roc_auc_score(&y_true, &scores),
        Err(MetricsError::SingleClass)
    ));
}

#[test]
fn roc_auc_rejects_nan_scores() {
    let y_true = vec![1, 0];
    let scores = vec![0.7, f32::NAN];
    assert!(matches!(
        roc_auc_score(&y_true, &scores),
        Err(MetricsError::NaNFound(1))
    ));
}

#[test]
fn roc_auc_rejects_length_mismatch() {
    let y_true = vec![1, 0, 1];
    let scores = vec![0.7, 0.2];
    assert!(matches!(
        roc_auc_score(&y_true, &scores),
        Err(MetricsError::LengthMismatch)
    ));
}

// ---------------------------------------------------------------------------
// ROC curve
// ---------------------------------------------------------------------------

#[test]
fn roc_curve_runs_from_origin_to_one_one() {
    let y_true = vec![0, 1, 0, 1, 1];
    let scores = vec![0.2, 0.9, 0.4, 0.6, 0.7];
    let (fpr, tpr) = roc_curve(&y_true, &scores).unwrap();

    assert_eq!(fpr[0], 0.0);
    assert_eq!(tpr[0], 0.0);
    assert_eq!(*fpr.last().unwrap(), 1.0);
    assert_eq!(*tpr.last().unwrap(), 1.0);

    // Both rates are non-decreasing over the sweep
    for pair in fpr.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    for pair in tpr.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

// ---------------------------------------------------------------------------
// Config / ModelType
// ---------------------------------------------------------------------------

#[test]
fn model_type_default_is_gbdt() {
    let mt = ModelType::default();
    match mt {
        ModelType::GBDT { max_depth, .. } => assert_eq!(max_depth, 6),
        #[allow(unreachable_patterns)]
        _ => panic!("default ModelType should be GBDT"),
    }
}

#[test]
fn model_type_from_str_gbdt() {
    let mt: ModelType = "gbdt".parse().unwrap();
    match mt {
        ModelType::GBDT { num_boost_round, .. } => assert!(num_boost_round > 0),
        #[allow(unreachable_patterns)]
        _ => panic!("expected GBDT"),
    }
}

#[test]
fn model_type_from_str_unknown_errors() {
    let result: Result<ModelType, _> = "random_forest".parse();
    assert!(result.is_err());
}

#[test]
fn model_config_default_values() {
    let cfg = ModelConfig::default();
    assert!(cfg.learning_rate > 0.0);
}

#[test]
fn model_config_serializes_to_json() {
    let cfg = ModelConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("learning_rate"));
    assert!(json.contains("GBDT"));
}

#[test]
fn model_config_round_trips_json() {
    let cfg = ModelConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: ModelConfig = serde_json::from_str(&json).unwrap();
    assert!((cfg.learning_rate - cfg2.learning_rate).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Plots
// ---------------------------------------------------------------------------

#[test]
fn probability_histogram_builds() {
    let probabilities = vec![0.9, 0.1, 0.8, 0.3];
    let labels = vec![1, 0, 1, 0];
    let plot = plot_probability_histogram(&probabilities, &labels, "Acceptance probabilities");
    assert!(plot.is_ok());
}

#[test]
fn roc_plot_single_class_errors() {
    let scores = vec![0.9, 0.1];
    let labels = vec![1, 1];
    assert!(plot_roc_curve(&labels, &scores, "ROC").is_err());
}
