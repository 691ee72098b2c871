//! JSON envelope returned by every `fastauc-wasm` function.
//!
//! An AUC is `{"ok": 0.8}`. A failure carries the message and the class of
//! failure, so callers can tell an undefined AUC apart from bad arguments:
//!
//! ```json
//! {"error": "degenerate input: ...", "kind": "degenerate"}
//! ```

use serde::Serialize;

use fastauc_core::AucError;

/// Failure class reported next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// A class is absent; the AUC is undefined.
    Degenerate,
    /// Empty input, mismatched lengths or NaN values.
    Invalid,
    /// The labels or scores were not JSON number arrays.
    Parse,
    Io,
    /// The result itself could not be encoded.
    Internal,
}

impl From<&AucError> for FailureKind {
    fn from(e: &AucError) -> Self {
        match e {
            AucError::DegenerateInput { .. } => FailureKind::Degenerate,
            AucError::InvalidInput(_) => FailureKind::Invalid,
            AucError::Parse(_) => FailureKind::Parse,
            AucError::Io(_) => FailureKind::Io,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Envelope<'a, T: Serialize> {
    Success { ok: &'a T },
    Failure { error: String, kind: FailureKind },
}

fn encode<T: Serialize>(envelope: &Envelope<'_, T>) -> String {
    serde_json::to_string(envelope)
        .unwrap_or_else(|_| r#"{"error":"cannot encode result","kind":"internal"}"#.into())
}

/// `{"ok": val}`.
pub fn envelope_ok<T: Serialize>(val: &T) -> String {
    encode(&Envelope::Success { ok: val })
}

/// `{"error": msg, "kind": ...}` for a fastauc error.
pub fn envelope_err(e: &AucError) -> String {
    encode::<()>(&Envelope::Failure {
        error: e.to_string(),
        kind: FailureKind::from(e),
    })
}

/// Encode a `fastauc_core::Result<T>`.
pub fn envelope<T: Serialize>(r: fastauc_core::Result<T>) -> String {
    match r {
        Ok(val) => envelope_ok(&val),
        Err(e) => envelope_err(&e),
    }
}
