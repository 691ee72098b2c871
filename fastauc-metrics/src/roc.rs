//! ROC curve vertices visited by the AUC sweep.

use fastauc_core::Result;

use crate::auc::Ranking;
use crate::validate;

/// A single vertex of the ROC curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocPoint {
    /// Lowest score predicted positive at this vertex (`+inf` at the origin).
    pub threshold: f64,
    /// False positive rate: FP / N.
    pub fpr: f64,
    /// True positive rate: TP / P.
    pub tpr: f64,
}

/// ROC curve with AUC.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// One vertex per tied-score group, from (0, 0) to (1, 1).
    pub points: Vec<RocPoint>,
    /// Area under the curve, identical to [`Ranking::auc`].
    pub auc: f64,
}

impl RocCurve {
    pub fn thresholds(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.threshold).collect()
    }

    pub fn fpr(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.fpr).collect()
    }

    pub fn tpr(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.tpr).collect()
    }
}

impl<L: PartialEq> Ranking<L> {
    /// The ROC curve traced by the sweep, with its area.
    ///
    /// # Errors
    ///
    /// Returns [`fastauc_core::AucError::DegenerateInput`] when a class is
    /// absent.
    pub fn roc_curve(&self, positive: &L) -> Result<RocCurve> {
        let mut points = Vec::new();
        let auc = self.sweep(positive, |p| points.push(p))?;
        Ok(RocCurve { points, auc })
    }
}

/// Compute the ROC curve of `scores` against `labels`.
///
/// # Errors
///
/// Returns an error if the slices are empty, have different lengths,
/// contain a NaN score, or contain no positive / no negative samples.
pub fn roc_curve<L: PartialEq + Clone>(labels: &[L], scores: &[f64], positive: &L) -> Result<RocCurve> {
    validate::check_pairs(labels, scores)?;
    Ranking::from_slices(labels, scores).roc_curve(positive)
}
