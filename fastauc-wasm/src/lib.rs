//! WASM bindings for fastauc.
//!
//! Every public function accepts JSON arrays as `&str` plus plain numbers and
//! returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>", "kind": "degenerate" | "invalid" | "parse"}`
//!
//! `#[wasm_bindgen]` annotations are only applied with the `wasm` feature.
//!
//! # Example
//!
//! ```
//! let json = fastauc_wasm::fast_auc("[1, 1, 0, 0]", "[0.9, 0.8, 0.3, 0.1]", 1.0);
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"], 1.0);
//! ```

pub mod auc;
pub mod error;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use auc::{fast_auc, roc_curve, JsRocCurve};
pub use error::{envelope, envelope_err, envelope_ok, FailureKind};
