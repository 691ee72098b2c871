//! `fastauc` — area under the ROC curve for labelled scores.
//!
//! ## Usage
//!
//! ```text
//! fastauc scores.csv                       # label,score per line
//! fastauc --positive-class -1 scores.tsv
//! cat run.json | fastauc --json --curve    # {"labels": [...], "scores": [...]}
//! ```
//!
//! | Variable                  | Default        | Description                      |
//! |---------------------------|----------------|----------------------------------|
//! | `FASTAUC_POSITIVE_CLASS`  | `1`            | label value of the positive class |
//! | `FASTAUC_FORMAT`          | `auto`         | `auto`, `csv` or `json`          |
//! | `FASTAUC_LOG`             | `fastauc=warn` | tracing filter, logs go to stderr |

mod input;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use fastauc_metrics::{numeric_ranking, RocCurve, DEFAULT_POSITIVE_CLASS};

use crate::input::{Dataset, Format};

// ─────────────────────────────────────────────
// CLI
// ─────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "fastauc", version)]
#[command(about = "Area under the ROC curve for labelled scores")]
struct Cli {
    /// Input file, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Label value of the positive class (overrides a JSON document's own)
    #[arg(long, short = 'p', env = "FASTAUC_POSITIVE_CLASS", allow_negative_numbers = true)]
    positive_class: Option<f64>,

    /// Input format
    #[arg(long, value_enum, env = "FASTAUC_FORMAT", default_value_t = Format::Auto)]
    format: Format,

    /// Print a JSON report instead of the bare AUC
    #[arg(long)]
    json: bool,

    /// Include the ROC curve vertices
    #[arg(long)]
    curve: bool,

    /// Tracing filter, e.g. `fastauc=debug`
    #[arg(long, env = "FASTAUC_LOG", default_value = "fastauc=warn")]
    log: String,
}

// ─────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Report {
    auc: f64,
    n: usize,
    positives: u64,
    negatives: u64,
    positive_class: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    roc: Option<Vec<Vertex>>,
}

#[derive(Debug, Serialize)]
struct Vertex {
    /// `None` for the origin, whose threshold is `+inf`.
    threshold: Option<f64>,
    fpr: f64,
    tpr: f64,
}

impl Report {
    fn build(data: &Dataset, positive_class: f64, with_curve: bool) -> fastauc_core::Result<Self> {
        let ranking = numeric_ranking(&data.labels, &data.scores, positive_class)?;
        let (auc, roc) = if with_curve {
            let curve = ranking.roc_curve(&positive_class)?;
            (curve.auc, Some(vertices(&curve)))
        } else {
            (ranking.auc(&positive_class)?, None)
        };
        let totals = ranking.class_totals(&positive_class);
        Ok(Self {
            auc,
            n: ranking.len(),
            positives: totals.positives,
            negatives: totals.negatives,
            positive_class,
            roc,
        })
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.auc)?;
        if let Some(roc) = &self.roc {
            writeln!(out, "threshold\tfpr\ttpr")?;
            for v in roc {
                match v.threshold {
                    Some(t) => writeln!(out, "{t}\t{}\t{}", v.fpr, v.tpr)?,
                    None => writeln!(out, "inf\t{}\t{}", v.fpr, v.tpr)?,
                }
            }
        }
        Ok(())
    }
}

fn vertices(curve: &RocCurve) -> Vec<Vertex> {
    curve
        .points
        .iter()
        .map(|p| Vertex {
            threshold: p.threshold.is_finite().then_some(p.threshold),
            fpr: p.fpr,
            tpr: p.tpr,
        })
        .collect()
}

// ─────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let data = input::read(&cli.input, cli.format)
        .with_context(|| format!("failed to read labelled scores from {}", cli.input))?;
    let positive_class = cli
        .positive_class
        .or(data.positive_class)
        .unwrap_or(DEFAULT_POSITIVE_CLASS);
    info!(
        source = %cli.input,
        n = data.labels.len(),
        positive_class,
        "loaded labelled scores"
    );

    let report = Report::build(&data, positive_class, cli.curve)
        .context("failed to compute ROC AUC")?;
    info!(auc = report.auc, positives = report.positives, negatives = report.negatives, "done");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }
    Ok(())
}
