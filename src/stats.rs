//! Binary-classification metrics for acceptance models.
//!
//! Thresholded metrics (precision, recall, F1) follow a
//! report-0-on-zero-division policy; ranking metrics (ROC-AUC, ROC curve)
//! are computed from continuous scores and refuse degenerate inputs with
//! an explicit error rather than producing NaN.

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Evaluation summary for a binary acceptance classifier.
///
/// Serializes to a four-key mapping of metric name to value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalMetrics {
    pub precision: f32,
    pub recall: f32,
    pub f1_score: f32,
    pub roc_auc: f32,
}

fn binary_counts(y_true: &[i32], y_pred: &[i32]) -> (usize, usize, usize) {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "Labels and predictions must have the same length"
    );

    let mut tp = 0;
    let mut fp = 0;
    let mut fn_ = 0;
    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        match (truth == 1, pred == 1) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }
    (tp, fp, fn_)
}

/// Fraction of predicted positives that are true positives.
/// Reports 0.0 when nothing was predicted positive.
pub fn precision_score(y_true: &[i32], y_pred: &[i32]) -> f32 {
    let (tp, fp, _) = binary_counts(y_true, y_pred);
    if tp + fp == 0 {
        return 0.0;
    }
    tp as f32 / (tp + fp) as f32
}

/// Fraction of true positives that were predicted positive.
/// Reports 0.0 when the truth holds no positives.
pub fn recall_score(y_true: &[i32], y_pred: &[i32]) -> f32 {
    let (tp, _, fn_) = binary_counts(y_true, y_pred);
    if tp + fn_ == 0 {
        return 0.0;
    }
    tp as f32 / (tp + fn_) as f32
}

/// Harmonic mean of precision and recall.
/// Reports 0.0 when both are zero.
pub fn f1_score(y_true: &[i32], y_pred: &[i32]) -> f32 {
    let precision = precision_score(y_true, y_pred);
    let recall = recall_score(y_true, y_pred);
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

fn check_ranking_inputs(y_true: &[i32], scores: &[f32]) -> Result<(f64, f64), MetricsError> {
    if y_true.len() != scores.len() {
        return Err(MetricsError::LengthMismatch);
    }

    let nan_count = scores.iter().filter(|s| s.is_nan()).count();
    if nan_count > 0 {
        return Err(MetricsError::NaNFound(nan_count));
    }

    let total_pos = y_true.iter().filter(|&&label| label == 1).count() as f64;
    let total_neg = y_true.len() as f64 - total_pos;
    if total_pos == 0.0 || total_neg == 0.0 {
        return Err(MetricsError::SingleClass);
    }

    Ok((total_pos, total_neg))
}

/// Area under the ROC curve from continuous scores.
///
/// Computed with the trapezoidal rule over score tie groups: positives in
/// a tie group beat all strictly-lower negatives and count half against
/// negatives in the same group.
///
/// # Errors
///
/// `LengthMismatch` when the slices differ in length, `NaNFound` when any
/// score is NaN, `SingleClass` when the truth vector holds one class
/// (ROC-AUC is undefined there and must not degrade to a silent value).
pub fn roc_auc_score(y_true: &[i32], scores: &[f32]) -> Result<f32, MetricsError> {
    let (total_pos, total_neg) = check_ranking_inputs(y_true, scores)?;

    // Sort by score ascending, labels alongside.
    let mut combined: Vec<(f32, i32)> = scores.iter().copied().zip(y_true.iter().copied()).collect();
    combined.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("NaN scores rejected above"));

    let mut auc = 0.0f64;
    let mut cum_pos = 0.0f64;
    let mut cum_neg = 0.0f64;
    let mut prev_score = f32::NEG_INFINITY;
    let mut prev_pos = 0.0f64;
    let mut prev_neg = 0.0f64;

    for (score, label) in combined {
        if score != prev_score {
            auc += (cum_pos - prev_pos) * (cum_neg + prev_neg) / 2.0;
            prev_score = score;
            prev_pos = cum_pos;
            prev_neg = cum_neg;
        }

        if label == 1 {
            cum_pos += 1.0;
        } else {
            cum_neg += 1.0;
        }
    }

    // Close the last tie group.
    auc += (total_pos - prev_pos) * (total_neg + prev_neg) / 2.0;

    Ok((auc / (total_pos * total_neg)) as f32)
}

/// ROC curve points as `(false positive rates, true positive rates)`,
/// one point per distinct score threshold plus the (0,0) origin.
///
/// Shares the input checks of [`roc_auc_score`].
pub fn roc_curve(y_true: &[i32], scores: &[f32]) -> Result<(Vec<f32>, Vec<f32>), MetricsError> {
    let (total_pos, total_neg) = check_ranking_inputs(y_true, scores)?;

    // Sweep thresholds from the highest score down.
    let mut combined: Vec<(f32, i32)> = scores.iter().copied().zip(y_true.iter().copied()).collect();
    combined.sort_by(|a, b| b.0.partial_cmp(&a.0).expect("NaN scores rejected above"));

    let mut fpr = vec![0.0f32];
    let mut tpr = vec![0.0f32];
    let mut cum_pos = 0.0f64;
    let mut cum_neg = 0.0f64;

    let mut i = 0;
    while i < combined.len() {
        let threshold = combined[i].0;
        while i < combined.len() && combined[i].0 == threshold {
            if combined[i].1 == 1 {
                cum_pos += 1.0;
            } else {
                cum_neg += 1.0;
            }
            i += 1;
        }
        fpr.push((cum_neg / total_neg) as f32);
        tpr.push((cum_pos / total_pos) as f32);
    }

    Ok((fpr, tpr))
}
