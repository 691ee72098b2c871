//! Map `AucError` variants to Python exceptions.

use fastauc_core::AucError;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::PyErr;

/// Extension trait for converting `Result<T, AucError>` into `PyResult<T>`.
pub trait IntoPyResult<T> {
    fn into_pyresult(self) -> pyo3::PyResult<T>;
}

impl<T> IntoPyResult<T> for Result<T, AucError> {
    fn into_pyresult(self) -> pyo3::PyResult<T> {
        self.map_err(to_pyerr)
    }
}

fn to_pyerr(e: AucError) -> PyErr {
    match e {
        AucError::Io(ref _inner) => PyIOError::new_err(e.to_string()),
        AucError::DegenerateInput { .. } | AucError::InvalidInput(_) | AucError::Parse(_) => {
            PyValueError::new_err(e.to_string())
        }
    }
}
