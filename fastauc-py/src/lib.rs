//! Python bindings for fastauc.
//!
//! ```python
//! import fastauc
//! fastauc.fast_auc([1, 1, 1, 1, 1, -1], [10, 5, 90, 1, -20, -1])
//! ```
//!
//! Label and score lists must have equal length. Errors surface as
//! `ValueError`.

mod auc;
mod error;

use pyo3::prelude::*;

#[pymodule]
fn fastauc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    auc::register(m)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
