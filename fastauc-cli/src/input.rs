//! Reading labelled scores from delimited text or JSON.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use fastauc_core::{AucError, Result};

/// Input document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// JSON for `.json` paths or input starting with `{`, delimited text otherwise
    Auto,
    /// One `label,score` pair per line (comma, semicolon, tab or spaces)
    Csv,
    /// `{"labels": [...], "scores": [...], "positive_class": 1}`
    Json,
}

/// Parallel labels and scores read from one input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    pub labels: Vec<f64>,
    pub scores: Vec<f64>,
    /// Positive class named by the document itself (JSON only).
    #[serde(default)]
    pub positive_class: Option<f64>,
}

/// Read `source` (a path, or `-` for stdin) in the given format.
pub fn read(source: &str, format: Format) -> Result<Dataset> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };
    parse(&text, resolve(format, source, &text))
}

/// Pick a concrete format for `Auto`.
pub fn resolve(format: Format, source: &str, text: &str) -> Format {
    match format {
        Format::Auto => {
            let by_extension = Path::new(source)
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));
            if by_extension || text.trim_start().starts_with('{') {
                Format::Json
            } else {
                Format::Csv
            }
        }
        other => other,
    }
}

pub fn parse(text: &str, format: Format) -> Result<Dataset> {
    match format {
        Format::Json => parse_json(text),
        Format::Csv | Format::Auto => parse_delimited(text),
    }
}

pub fn parse_json(text: &str) -> Result<Dataset> {
    serde_json::from_str(text).map_err(|e| AucError::Parse(format!("invalid JSON document: {e}")))
}

/// Parse `label<sep>score` lines.
///
/// Blank lines and `#` comments are skipped. The first data line may be a
/// header: it is dropped when its fields are not both numbers.
pub fn parse_delimited(text: &str) -> Result<Dataset> {
    let mut labels = Vec::new();
    let mut scores = Vec::new();
    let mut seen_data = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = idx + 1;
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 2 {
            return Err(AucError::Parse(format!(
                "line {lineno}: expected 2 fields (label, score), found {}",
                fields.len()
            )));
        }

        let parsed = (fields[0].parse::<f64>(), fields[1].parse::<f64>());
        let first = !seen_data;
        seen_data = true;
        match parsed {
            (Ok(label), Ok(score)) => {
                labels.push(label);
                scores.push(score);
            }
            _ if first => continue,
            (Err(_), _) => {
                return Err(AucError::Parse(format!(
                    "line {lineno}: label {:?} is not a number",
                    fields[0]
                )))
            }
            (_, Err(_)) => {
                return Err(AucError::Parse(format!(
                    "line {lineno}: score {:?} is not a number",
                    fields[1]
                )))
            }
        }
    }

    Ok(Dataset {
        labels,
        scores,
        positive_class: None,
    })
}
