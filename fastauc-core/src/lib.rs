//! Shared primitives for the fastauc workspace.
//!
//! `fastauc-core` provides the foundation the other fastauc crates build on:
//!
//! - **Error types** — [`AucError`] and [`Result`] for structured error handling

pub mod error;

pub use error::{AucError, Result};
