//! Python bindings for fastauc-metrics: ROC AUC and ROC curves.

use pyo3::prelude::*;

use crate::error::IntoPyResult;

/// ROC curve vertices with their area.
#[pyclass(frozen, get_all)]
pub struct RocCurve {
    pub thresholds: Vec<f64>,
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub auc: f64,
}

impl From<fastauc_metrics::RocCurve> for RocCurve {
    fn from(c: fastauc_metrics::RocCurve) -> Self {
        Self {
            thresholds: c.thresholds(),
            fpr: c.fpr(),
            tpr: c.tpr(),
            auc: c.auc,
        }
    }
}

#[pymethods]
impl RocCurve {
    fn __repr__(&self) -> String {
        format!("RocCurve(auc={}, vertices={})", self.auc, self.fpr.len())
    }
}

/// Area under the ROC curve. Labels equal to `posclass` are positive.
#[pyfunction]
#[pyo3(signature = (labels, scores, posclass=fastauc_metrics::DEFAULT_POSITIVE_CLASS))]
fn fast_auc(labels: Vec<f64>, scores: Vec<f64>, posclass: f64) -> PyResult<f64> {
    fastauc_metrics::fast_auc(&labels, &scores, Some(posclass)).into_pyresult()
}

/// ROC curve traced by the AUC sweep.
#[pyfunction]
#[pyo3(signature = (labels, scores, posclass=fastauc_metrics::DEFAULT_POSITIVE_CLASS))]
fn roc_curve(labels: Vec<f64>, scores: Vec<f64>, posclass: f64) -> PyResult<RocCurve> {
    fastauc_metrics::fast_roc_curve(&labels, &scores, Some(posclass))
        .map(RocCurve::from)
        .into_pyresult()
}

/// AUC of several independent problems, released from the GIL while they
/// run.
#[pyfunction]
#[pyo3(signature = (problems, posclass=fastauc_metrics::DEFAULT_POSITIVE_CLASS))]
fn fast_auc_many(
    py: Python<'_>,
    problems: Vec<(Vec<f64>, Vec<f64>)>,
    posclass: f64,
) -> PyResult<Vec<f64>> {
    let config = fastauc_metrics::AucConfig {
        positive_class: posclass,
    };
    let results = py.allow_threads(|| {
        let borrowed: Vec<fastauc_metrics::AucProblem<'_>> = problems
            .iter()
            .map(|(l, s)| fastauc_metrics::AucProblem::new(l, s))
            .collect();
        fastauc_metrics::roc_auc_batch(&borrowed, &config)
    });
    results
        .into_iter()
        .collect::<Result<Vec<f64>, _>>()
        .into_pyresult()
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fast_auc, m)?)?;
    m.add_function(wrap_pyfunction!(roc_curve, m)?)?;
    m.add_function(wrap_pyfunction!(fast_auc_many, m)?)?;
    m.add_class::<RocCurve>()?;
    Ok(())
}
