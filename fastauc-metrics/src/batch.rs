//! AUC over many independent scoring problems.
//!
//! Every problem gets its own ranking and counters, so problems can be
//! evaluated on separate threads with no coordination.

use fastauc_core::Result;

use crate::boundary::{fast_auc, AucConfig};

/// One `(labels, scores)` problem borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct AucProblem<'a> {
    pub labels: &'a [f64],
    pub scores: &'a [f64],
}

impl<'a> AucProblem<'a> {
    pub fn new(labels: &'a [f64], scores: &'a [f64]) -> Self {
        Self { labels, scores }
    }
}

/// Compute [`fast_auc`] for each problem, in input order.
///
/// With the `parallel` feature problems are spread over the rayon pool; the
/// results are the same either way. A failing problem yields its own `Err`
/// without affecting the others.
pub fn roc_auc_batch(problems: &[AucProblem<'_>], config: &AucConfig) -> Vec<Result<f64>> {
    let positive_class = Some(config.positive_class);

    #[cfg(feature = "parallel")]
    let results: Vec<Result<f64>> = {
        use rayon::prelude::*;
        problems
            .par_iter()
            .map(|p| fast_auc(p.labels, p.scores, positive_class))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<f64>> = problems
        .iter()
        .map(|p| fast_auc(p.labels, p.scores, positive_class))
        .collect();

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_follow_input_order() {
        let perfect = ([1.0, 1.0, 0.0, 0.0], [4.0, 3.0, 2.0, 1.0]);
        let inverse = ([0.0, 0.0, 1.0, 1.0], [4.0, 3.0, 2.0, 1.0]);
        let tied = ([1.0, 0.0, 1.0, 0.0], [1.0; 4]);
        let problems = [
            AucProblem::new(&perfect.0, &perfect.1),
            AucProblem::new(&inverse.0, &inverse.1),
            AucProblem::new(&tied.0, &tied.1),
        ];
        let out = roc_auc_batch(&problems, &AucConfig::default());
        let aucs: Vec<f64> = out.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(aucs[0], 1.0);
        assert_eq!(aucs[1], 0.0);
        assert!((aucs[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn failures_are_isolated() {
        let good = ([1.0, 0.0], [0.9, 0.1]);
        let degenerate = ([1.0, 1.0], [0.9, 0.1]);
        let problems = [
            AucProblem::new(&good.0, &good.1),
            AucProblem::new(&degenerate.0, &degenerate.1),
            AucProblem::new(&good.0, &good.1[..1]),
        ];
        let out = roc_auc_batch(&problems, &AucConfig::default());
        assert_eq!(out.len(), 3);
        assert_eq!(*out[0].as_ref().unwrap(), 1.0);
        assert!(out[1].as_ref().unwrap_err().is_degenerate());
        assert!(out[2].is_err());
    }

    #[test]
    fn matches_individual_calls() {
        let labels: Vec<Vec<f64>> = (0..16)
            .map(|k| (0..50).map(|i| ((i * 31 + k) % 3 == 0) as u8 as f64).collect())
            .collect();
        let scores: Vec<Vec<f64>> = (0..16)
            .map(|k| (0..50).map(|i| ((i * 17 + k * 5) % 11) as f64).collect())
            .collect();
        let problems: Vec<AucProblem<'_>> = labels
            .iter()
            .zip(&scores)
            .map(|(l, s)| AucProblem::new(l, s))
            .collect();
        let config = AucConfig { positive_class: 1.0 };
        for (p, r) in problems.iter().zip(roc_auc_batch(&problems, &config)) {
            let single = fast_auc(p.labels, p.scores, Some(1.0)).unwrap();
            assert_eq!(r.unwrap().to_bits(), single.to_bits());
        }
    }
}
