use itertools_num::linspace;
use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Histogram, Plot, Scatter};

use crate::stats::roc_curve;

/// Plot a histogram of predicted acceptance probabilities, split by the
/// true outcome class.
pub fn plot_probability_histogram(
    probabilities: &[f32],
    labels: &[i32],
    title: &str,
) -> Result<Plot, String> {
    // Assert that the probabilities and labels have the same length
    assert_eq!(
        probabilities.len(),
        labels.len(),
        "Probabilities and labels must have the same length"
    );

    // Assert that the labels are only two classes
    assert!(
        labels.iter().all(|&l| l == 0 || l == 1),
        "Labels must be composed of only two classes, 1 for accepted and 0 for declined"
    );

    let mut probabilities_accepted = Vec::new();
    let mut probabilities_declined = Vec::new();

    for (probability, label) in probabilities.iter().zip(labels.iter()) {
        if *label == 1 {
            probabilities_accepted.push(*probability);
        } else {
            probabilities_declined.push(*probability);
        }
    }

    let trace_accepted = Histogram::new(probabilities_accepted).name("Accepted");

    let trace_declined = Histogram::new(probabilities_declined).name("Declined");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Predicted probability"))
        .y_axis(Axis::new().title("Count"));

    let mut plot = Plot::new();
    plot.add_trace(trace_accepted);
    plot.add_trace(trace_declined);
    plot.set_layout(layout);

    Ok(plot)
}

/// Plot the ROC curve for continuous scores against 0/1 labels, with the
/// chance diagonal for reference.
pub fn plot_roc_curve(y_true: &[i32], scores: &[f32], title: &str) -> Result<Plot, String> {
    let (fpr, tpr) = roc_curve(y_true, scores).map_err(|e| e.to_string())?;

    let trace_roc = Scatter::new(fpr, tpr).mode(Mode::Lines).name("ROC");

    let diagonal: Vec<f64> = linspace(0.0, 1.0, 100).collect();
    let trace_chance = Scatter::new(diagonal.clone(), diagonal)
        .mode(Mode::Lines)
        .name("Chance");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("False positive rate"))
        .y_axis(Axis::new().title("True positive rate"));

    let mut plot = Plot::new();
    plot.add_trace(trace_roc);
    plot.add_trace(trace_chance);
    plot.set_layout(layout);

    Ok(plot)
}
