//! Exact ROC AUC by a single descending sweep.
//!
//! Observations are ranked by descending score and visited once. Each time
//! the score changes, the trapezoid between the previous group's ROC vertex
//! and the current one is added to the area, so a group of tied scores
//! contributes one diagonal segment rather than a staircase whose shape
//! would depend on the order of the tied elements. Coordinates are divided
//! by the class totals before they enter the trapezoid, which keeps every
//! intermediate value in `[0, 1]`.
//!
//! Scores are compared as `f64` everywhere: the sort comparator and the
//! group-boundary test use the same total order, so groups never split or
//! merge differently between the two steps.

use std::cmp::Ordering;

use fastauc_core::{AucError, Result};

use crate::roc::RocPoint;

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// A single `(score, label)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation<L> {
    score: f64,
    label: L,
}

impl<L> Observation<L> {
    /// Pair a score with its label.
    ///
    /// `-0.0` is stored as `0.0` so that both zeros fall in the same tied
    /// group under the ranking's total order.
    pub fn new(score: f64, label: L) -> Self {
        Self {
            score: canonical_score(score),
            label,
        }
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }
}

/// Fold `-0.0` into `0.0`; every other value is returned unchanged.
#[inline]
fn canonical_score(score: f64) -> f64 {
    if score == 0.0 {
        0.0
    } else {
        score
    }
}

/// Descending score order.
#[inline]
fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[inline]
fn same_score(a: f64, b: f64) -> bool {
    a.total_cmp(&b) == Ordering::Equal
}

// ---------------------------------------------------------------------------
// Class totals
// ---------------------------------------------------------------------------

/// Number of positive (`P`) and negative (`N`) observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTotals {
    pub positives: u64,
    pub negatives: u64,
}

impl ClassTotals {
    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.positives + self.negatives
    }

    /// Whether both classes are present.
    pub fn is_complete(&self) -> bool {
        self.positives > 0 && self.negatives > 0
    }

    fn require_complete(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(AucError::DegenerateInput {
                positives: self.positives,
                negatives: self.negatives,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Observations sorted by descending score.
///
/// The sort is stable, but the relative order of tied observations never
/// affects the AUC: a tied group is always consumed whole before its area is
/// accumulated.
#[derive(Debug, Clone)]
pub struct Ranking<L> {
    observations: Vec<Observation<L>>,
}

impl<L> Ranking<L> {
    /// Rank a set of observations.
    ///
    /// Scores are canonicalised again here, since observations may also
    /// arrive through deserialization without passing [`Observation::new`].
    pub fn new(mut observations: Vec<Observation<L>>) -> Self {
        for obs in &mut observations {
            obs.score = canonical_score(obs.score);
        }
        observations.sort_by(|a, b| descending(a.score, b.score));
        Self { observations }
    }

    /// Number of ranked observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations, highest score first.
    pub fn observations(&self) -> &[Observation<L>] {
        &self.observations
    }

    /// Iterate over maximal runs of identical scores, highest first.
    pub fn tied_groups(&self) -> impl Iterator<Item = &[Observation<L>]> + '_ {
        self.observations.chunk_by(|a, b| same_score(a.score, b.score))
    }
}

impl<L: Clone> Ranking<L> {
    /// Pair `labels[i]` with `scores[i]` and rank the pairs.
    ///
    /// Pairs are formed with `zip`, so a length mismatch silently drops the
    /// tail of the longer slice; [`crate::roc_auc`] checks lengths first.
    pub fn from_slices(labels: &[L], scores: &[f64]) -> Self {
        let observations = labels
            .iter()
            .zip(scores)
            .map(|(label, &score)| Observation::new(score, label.clone()))
            .collect();
        Self::new(observations)
    }
}

impl<L: PartialEq> Ranking<L> {
    /// Count observations labelled `positive` and all the others.
    pub fn class_totals(&self, positive: &L) -> ClassTotals {
        let positives = self
            .observations
            .iter()
            .filter(|o| o.label == *positive)
            .count() as u64;
        ClassTotals {
            positives,
            negatives: self.observations.len() as u64 - positives,
        }
    }

    /// Area under the ROC curve, treating `positive` as the positive class.
    ///
    /// # Errors
    ///
    /// Returns [`AucError::DegenerateInput`] when every observation is
    /// positive or none is.
    pub fn auc(&self, positive: &L) -> Result<f64> {
        self.sweep(positive, |_| {})
    }

    /// Run the sweep, reporting each ROC vertex to `on_vertex` as it is
    /// closed, and return the accumulated area.
    pub(crate) fn sweep<F>(&self, positive: &L, mut on_vertex: F) -> Result<f64>
    where
        F: FnMut(RocPoint),
    {
        let totals = self.class_totals(positive).require_complete()?;
        let mut state = SweepState::new(totals);

        for obs in &self.observations {
            if state.starts_new_group(obs.score) {
                on_vertex(state.close_group());
                state.open_group(obs.score);
            }
            state.count(obs.label == *positive);
        }

        let (area, last) = state.finish();
        on_vertex(last);
        Ok(area)
    }
}

// ---------------------------------------------------------------------------
// Sweep state
// ---------------------------------------------------------------------------

/// Running counters of one sweep.
///
/// `tp_prev` / `fp_prev` hold the counts at the start of the current tied
/// group; `prev_score` is `None` until the first observation is seen, which
/// makes the first trapezoid zero-area and anchors the curve at the origin.
#[derive(Debug)]
struct SweepState {
    area: f64,
    prev_score: Option<f64>,
    tp: u64,
    fp: u64,
    tp_prev: u64,
    fp_prev: u64,
    p: f64,
    n: f64,
}

impl SweepState {
    fn new(totals: ClassTotals) -> Self {
        Self {
            area: 0.0,
            prev_score: None,
            tp: 0,
            fp: 0,
            tp_prev: 0,
            fp_prev: 0,
            p: totals.positives as f64,
            n: totals.negatives as f64,
        }
    }

    #[inline]
    fn starts_new_group(&self, score: f64) -> bool {
        match self.prev_score {
            Some(prev) => !same_score(score, prev),
            None => true,
        }
    }

    fn threshold(&self) -> f64 {
        self.prev_score.unwrap_or(f64::INFINITY)
    }

    /// Add the trapezoid of the group that just ended and return its
    /// closing vertex. Uses the running counters, which do not yet include
    /// the observation that triggered the close.
    fn close_group(&mut self) -> RocPoint {
        let fpr = self.fp as f64 / self.n;
        let tpr = self.tp as f64 / self.p;
        self.area += trapezoid_area(
            fpr,
            self.fp_prev as f64 / self.n,
            tpr,
            self.tp_prev as f64 / self.p,
        );
        RocPoint {
            threshold: self.threshold(),
            fpr,
            tpr,
        }
    }

    fn open_group(&mut self, score: f64) {
        self.prev_score = Some(score);
        self.fp_prev = self.fp;
        self.tp_prev = self.tp;
    }

    #[inline]
    fn count(&mut self, is_positive: bool) {
        if is_positive {
            self.tp += 1;
        } else {
            self.fp += 1;
        }
    }

    /// Close the last tied group against the terminal vertex `(1, 1)`.
    /// No later score exists to trigger this inside the loop.
    fn finish(mut self) -> (f64, RocPoint) {
        self.area += trapezoid_area(
            1.0,
            self.fp_prev as f64 / self.n,
            1.0,
            self.tp_prev as f64 / self.p,
        );
        let last = RocPoint {
            threshold: self.threshold(),
            fpr: 1.0,
            tpr: 1.0,
        };
        (self.area, last)
    }
}

/// Area of the trapezoid between `(x1, y1)` and `(x2, y2)` over the x axis.
#[inline]
pub fn trapezoid_area(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    (x1 - x2).abs() * (y1 + y2) / 2.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn auc_of(labels: &[i32], scores: &[f64], positive: i32) -> Result<f64> {
        Ranking::from_slices(labels, scores).auc(&positive)
    }

    // ── Trapezoid ───────────────────────────────────────────────

    #[test]
    fn trapezoid_known_values() {
        assert!((trapezoid_area(0.0, 1.0, 0.0, 1.0) - 0.5).abs() < 1e-12);
        assert!((trapezoid_area(0.25, 0.75, 1.0, 1.0) - 0.5).abs() < 1e-12);
        assert_eq!(trapezoid_area(0.3, 0.3, 0.2, 0.9), 0.0);
    }

    #[test]
    fn trapezoid_ignores_x_order() {
        let a = trapezoid_area(0.1, 0.6, 0.2, 0.4);
        let b = trapezoid_area(0.6, 0.1, 0.2, 0.4);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    // ── Ranking ─────────────────────────────────────────────────

    #[test]
    fn ranking_sorts_descending() {
        let r = Ranking::from_slices(&[0, 1, 2, 3], &[0.5, 2.0, -1.0, 1.0]);
        let scores: Vec<f64> = r.observations().iter().map(|o| o.score()).collect();
        assert_eq!(scores, vec![2.0, 1.0, 0.5, -1.0]);
        assert_eq!(*r.observations()[0].label(), 1);
    }

    #[test]
    fn ranking_groups_ties() {
        let r = Ranking::from_slices(&[1, 0, 1, 0, 1], &[3.0, 2.0, 3.0, 1.0, 2.0]);
        let sizes: Vec<usize> = r.tied_groups().map(|g| g.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn signed_zeros_share_a_group() {
        let r = Ranking::from_slices(&[1, 0], &[0.0, -0.0]);
        assert_eq!(r.tied_groups().count(), 1);
    }

    #[test]
    fn ranking_folds_negative_zero_from_raw_observations() {
        let raw = vec![
            Observation { score: 0.0, label: 1 },
            Observation { score: -0.0, label: 0 },
        ];
        let r = Ranking::new(raw);
        assert_eq!(r.tied_groups().count(), 1);
        assert!(r.observations().iter().all(|o| o.score().is_sign_positive()));
        assert_eq!(r.auc(&1).unwrap(), 0.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_negative_zero_ties_with_zero() {
        let raw: Vec<Observation<i32>> = serde_json::from_str(
            r#"[{"score": 0.0, "label": 1}, {"score": -0.0, "label": 0}]"#,
        )
        .unwrap();
        assert!(raw[1].score().is_sign_negative());
        let r = Ranking::new(raw);
        assert_eq!(r.tied_groups().count(), 1);
        assert_eq!(r.auc(&1).unwrap(), 0.5);
    }

    #[test]
    fn class_totals_counts_positive_label_only() {
        let r = Ranking::from_slices(&[1, -1, 1, 2], &[0.1, 0.2, 0.3, 0.4]);
        let t = r.class_totals(&1);
        assert_eq!(t.positives, 2);
        assert_eq!(t.negatives, 2);
        assert_eq!(t.total(), 4);
        assert!(t.is_complete());
    }

    // ── AUC ─────────────────────────────────────────────────────

    #[test]
    fn perfect_separation() {
        let auc = Ranking::from_slices(&['+', '+', '-', '-'], &[10.0, 9.0, 8.0, 7.0])
            .auc(&'+')
            .unwrap();
        assert_eq!(auc, 1.0);
    }

    #[test]
    fn perfect_anti_separation() {
        let auc = Ranking::from_slices(&['-', '-', '+', '+'], &[10.0, 9.0, 8.0, 7.0])
            .auc(&'+')
            .unwrap();
        assert_eq!(auc, 0.0);
    }

    #[test]
    fn all_tied_is_one_half() {
        for labels in [[1, 0, 0, 0], [0, 0, 1, 1], [1, 1, 1, 0], [0, 1, 0, 1]] {
            let auc = auc_of(&labels, &[4.2; 4], 1).unwrap();
            assert!((auc - 0.5).abs() < 1e-12, "labels {labels:?} gave {auc}");
        }
    }

    #[test]
    fn single_negative_ranked_last() {
        let scores = [10.0, 5.0, 90.0, 1.0, -20.0, -1.0];
        let labels = [1, 1, 1, 1, 1, -1];
        // The lone negative scores -1, above the positive at -20, so it
        // is outranked by 4 of the 5 positives.
        let auc = auc_of(&labels, &scores, 1).unwrap();
        assert!((auc - 0.8).abs() < 1e-12);
    }

    #[test]
    fn interleaved_known_value() {
        // (0.9,T) (0.7,F) (0.5,T) (0.3,F): 3 of 4 pairs ordered correctly.
        let auc = Ranking::from_slices(&[true, false, true, false], &[0.9, 0.7, 0.5, 0.3])
            .auc(&true)
            .unwrap();
        assert!((auc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn partial_tie_counts_half() {
        // Positive 3 beats both negatives, positive 2 ties one and beats one:
        // (2 + 1.5) / 4.
        let auc = auc_of(&[1, 1, 0, 0], &[3.0, 2.0, 2.0, 1.0], 1).unwrap();
        assert!((auc - 0.875).abs() < 1e-12);
    }

    #[test]
    fn ties_are_order_independent() {
        let a = auc_of(&[1, 0, 1, 0], &[2.0, 2.0, 1.0, 1.0], 1).unwrap();
        let b = auc_of(&[0, 1, 0, 1], &[2.0, 2.0, 1.0, 1.0], 1).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert!((a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn scores_distinct_only_in_double_precision_are_not_merged() {
        // 1.0 and 1.0 + 1e-12 collapse to the same f32.
        let auc = auc_of(&[1, 0], &[1.0 + 1e-12, 1.0], 1).unwrap();
        assert_eq!(auc, 1.0);
    }

    #[test]
    fn infinite_scores_rank_at_the_extremes() {
        let auc = auc_of(
            &[1, 1, 0, 0],
            &[f64::INFINITY, 0.0, -1.0, f64::NEG_INFINITY],
            1,
        )
        .unwrap();
        assert_eq!(auc, 1.0);

        let auc = auc_of(&[0, 1], &[f64::NEG_INFINITY, f64::NEG_INFINITY], 1).unwrap();
        assert!((auc - 0.5).abs() < 1e-12);
    }

    #[test]
    fn label_outside_both_classes_counts_negative() {
        // Only the positive marker matters; 0 and 7 are both negatives.
        let auc = auc_of(&[1, 0, 7], &[3.0, 2.0, 1.0], 1).unwrap();
        assert_eq!(auc, 1.0);
    }

    #[test]
    fn all_positive_is_degenerate() {
        let err = auc_of(&[1, 1, 1], &[0.9, 0.8, 0.7], 1).unwrap_err();
        assert!(matches!(
            err,
            AucError::DegenerateInput {
                positives: 3,
                negatives: 0
            }
        ));
    }

    #[test]
    fn no_positive_is_degenerate() {
        let err = auc_of(&[0, 0], &[0.9, 0.8], 1).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn empty_ranking_is_degenerate() {
        let r: Ranking<i32> = Ranking::new(Vec::new());
        assert!(r.is_empty());
        assert!(r.auc(&1).unwrap_err().is_degenerate());
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let labels = [1, 0, 1, 1, 0, 0, 1, 0];
        let scores = [0.31, 0.72, 0.72, 0.05, 0.44, 0.31, 0.99, 0.18];
        let r = Ranking::from_slices(&labels, &scores);
        let a = r.auc(&1).unwrap();
        let b = r.auc(&1).unwrap();
        let c = auc_of(&labels, &scores, 1).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert_eq!(a.to_bits(), c.to_bits());
    }

    #[test]
    fn large_input_stays_in_unit_interval() {
        let n = 200_000;
        let labels: Vec<u8> = (0..n).map(|i| (i % 3 == 0) as u8).collect();
        let scores: Vec<f64> = (0..n).map(|i| ((i * 7919) % 1000) as f64).collect();
        let auc = Ranking::from_slices(&labels, &scores).auc(&1).unwrap();
        assert!((0.0..=1.0).contains(&auc));
    }
}
