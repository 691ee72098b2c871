//! Caller-facing entry points.
//!
//! These functions take plain parallel slices, check them, and hand a
//! [`Ranking`] to the sweep. Hosts that hold labels as numbers (Python lists,
//! JSON arrays, delimited text) use [`fast_auc`]; generic labels go through
//! [`roc_auc`].

use fastauc_core::Result;
use tracing::debug;

use crate::auc::Ranking;
use crate::roc::RocCurve;
use crate::validate;

/// Label value treated as positive when the caller does not name one.
pub const DEFAULT_POSITIVE_CLASS: f64 = 1.0;

/// Parameters for numeric-label AUC.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AucConfig {
    /// Label value of the positive class. Every other label is negative.
    pub positive_class: f64,
}

impl Default for AucConfig {
    fn default() -> Self {
        Self {
            positive_class: DEFAULT_POSITIVE_CLASS,
        }
    }
}

/// Area under the ROC curve for any label type.
///
/// # Errors
///
/// Returns an error if the slices are empty, have different lengths,
/// contain a NaN score, or contain no positive / no negative samples.
pub fn roc_auc<L: PartialEq + Clone>(labels: &[L], scores: &[f64], positive: &L) -> Result<f64> {
    validate::check_pairs(labels, scores)?;
    Ranking::from_slices(labels, scores).auc(positive)
}

/// Area under the ROC curve for numeric labels.
///
/// `positive_class` defaults to [`DEFAULT_POSITIVE_CLASS`]. Labels are
/// compared to it exactly.
///
/// # Errors
///
/// Returns [`fastauc_core::AucError::InvalidInput`] for empty input,
/// mismatched lengths or NaN values, and
/// [`fastauc_core::AucError::DegenerateInput`] when a class is absent.
pub fn fast_auc(labels: &[f64], scores: &[f64], positive_class: Option<f64>) -> Result<f64> {
    let positive_class = positive_class.unwrap_or(DEFAULT_POSITIVE_CLASS);
    let ranking = numeric_ranking(labels, scores, positive_class)?;
    let result = ranking.auc(&positive_class);
    match &result {
        Ok(auc) => debug!(n = ranking.len(), positive_class, auc, "computed ROC AUC"),
        Err(e) => debug!(n = ranking.len(), positive_class, error = %e, "ROC AUC undefined"),
    }
    result
}

/// ROC curve for numeric labels, with the same checks and default as
/// [`fast_auc`].
pub fn fast_roc_curve(
    labels: &[f64],
    scores: &[f64],
    positive_class: Option<f64>,
) -> Result<RocCurve> {
    let positive_class = positive_class.unwrap_or(DEFAULT_POSITIVE_CLASS);
    let ranking = numeric_ranking(labels, scores, positive_class)?;
    let curve = ranking.roc_curve(&positive_class)?;
    debug!(
        n = ranking.len(),
        vertices = curve.points.len(),
        auc = curve.auc,
        "computed ROC curve"
    );
    Ok(curve)
}

/// Validate numeric labels and scores and rank them once.
///
/// For callers that need several views of the same input (AUC, curve,
/// class totals) without sorting it again.
pub fn numeric_ranking(
    labels: &[f64],
    scores: &[f64],
    positive_class: f64,
) -> Result<Ranking<f64>> {
    validate::check_pairs(labels, scores)?;
    validate::check_numeric_labels(labels, positive_class)?;
    Ok(Ranking::from_slices(labels, scores))
}
