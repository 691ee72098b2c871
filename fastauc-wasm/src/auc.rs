//! ROC AUC wrappers with JSON input/output.

use serde::Serialize;

use fastauc_core::{AucError, Result};
use fastauc_metrics::RocCurve;

use crate::error::envelope;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// ── Wrapper types ────────────────────────────────────────────────────────

/// Serializable ROC curve as parallel arrays.
///
/// The first threshold is `+inf`, which JSON cannot express; it is emitted
/// as `null`.
#[derive(Debug, Serialize)]
pub struct JsRocCurve {
    pub thresholds: Vec<Option<f64>>,
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub auc: f64,
}

impl From<RocCurve> for JsRocCurve {
    fn from(c: RocCurve) -> Self {
        Self {
            thresholds: c
                .points
                .iter()
                .map(|p| p.threshold.is_finite().then_some(p.threshold))
                .collect(),
            fpr: c.fpr(),
            tpr: c.tpr(),
            auc: c.auc,
        }
    }
}

// ── JSON boundary functions ──────────────────────────────────────────────

fn parse_f64_array(what: &str, json: &str) -> Result<Vec<f64>> {
    serde_json::from_str::<Vec<f64>>(json)
        .map_err(|e| AucError::Parse(format!("{what}: invalid JSON number array: {e}")))
}

fn parse_pairs(labels_json: &str, scores_json: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    Ok((
        parse_f64_array("labels", labels_json)?,
        parse_f64_array("scores", scores_json)?,
    ))
}

/// Area under the ROC curve from JSON arrays of labels and scores.
///
/// Labels equal to `positive_class` are positive, all others negative.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn fast_auc(labels_json: &str, scores_json: &str, positive_class: f64) -> String {
    envelope(parse_pairs(labels_json, scores_json).and_then(|(labels, scores)| {
        fastauc_metrics::fast_auc(&labels, &scores, Some(positive_class))
    }))
}

/// ROC curve from JSON arrays of labels and scores.
///
/// Returns JSON `JsRocCurve`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn roc_curve(labels_json: &str, scores_json: &str, positive_class: f64) -> String {
    envelope(parse_pairs(labels_json, scores_json).and_then(|(labels, scores)| {
        fastauc_metrics::fast_roc_curve(&labels, &scores, Some(positive_class))
            .map(JsRocCurve::from)
    }))
}
