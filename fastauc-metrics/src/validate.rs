//! Argument checks applied before input reaches the sweep.

use fastauc_core::{AucError, Result};

/// Reject mismatched lengths, empty input and NaN scores.
pub(crate) fn check_pairs<L>(labels: &[L], scores: &[f64]) -> Result<()> {
    if labels.len() != scores.len() {
        return Err(AucError::InvalidInput(format!(
            "labels length {} != scores length {}",
            labels.len(),
            scores.len()
        )));
    }
    if scores.is_empty() {
        return Err(AucError::InvalidInput("empty input".into()));
    }
    if let Some(i) = scores.iter().position(|s| s.is_nan()) {
        return Err(AucError::InvalidInput(format!("score at index {i} is NaN")));
    }
    Ok(())
}

/// Reject NaN labels; a NaN never equals the positive class and would be
/// counted as a negative without complaint.
pub(crate) fn check_numeric_labels(labels: &[f64], positive_class: f64) -> Result<()> {
    if positive_class.is_nan() {
        return Err(AucError::InvalidInput("positive class is NaN".into()));
    }
    if let Some(i) = labels.iter().position(|l| l.is_nan()) {
        return Err(AucError::InvalidInput(format!("label at index {i} is NaN")));
    }
    Ok(())
}
