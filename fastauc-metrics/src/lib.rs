//! ROC AUC for binary scoring problems.
//!
//! - **Engine** — [`Ranking`] sorts `(score, label)` observations by
//!   descending score and sweeps them once, closing one trapezoid per
//!   tied-score group
//! - **ROC curve** — [`RocCurve`], the vertices visited by that same sweep
//! - **Boundary** — [`fast_auc`] / [`roc_auc`] validate caller input before
//!   it reaches the engine
//! - **Batch** — [`roc_auc_batch`] over independent problems (parallel with
//!   the `parallel` feature)
//!
//! # Example
//!
//! ```
//! let scores = [10.0, 5.0, 90.0, 1.0, -20.0, -1.0];
//! let labels = [1.0, 1.0, 1.0, 1.0, 1.0, -1.0];
//! let auc = fastauc_metrics::fast_auc(&labels, &scores, None).unwrap();
//! assert!((auc - 0.8).abs() < 1e-12);
//!
//! let tied = fastauc_metrics::fast_auc(&labels, &[3.0; 6], None).unwrap();
//! assert_eq!(tied, 0.5);
//! ```

pub mod auc;
pub mod batch;
pub mod boundary;
pub mod roc;

mod validate;

pub use auc::{trapezoid_area, ClassTotals, Observation, Ranking};
pub use batch::{roc_auc_batch, AucProblem};
pub use boundary::{
    fast_auc, fast_roc_curve, numeric_ranking, roc_auc, AucConfig, DEFAULT_POSITIVE_CLASS,
};
pub use roc::{roc_curve, RocCurve, RocPoint};
