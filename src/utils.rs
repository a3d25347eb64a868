//! utils — conversion helpers for the Python boundary.
//!
//! Everything here is compiled only with the `python-bindings` feature.
//! The helpers turn NumPy arrays, pandas objects, SciPy sparse matrices and
//! plain sequences into the crate's [`InputArray`] / [`DataMatrix`]
//! containers, so the validation and naming code never sees Python types.

#[cfg(feature = "python-bindings")]
use faer::sparse::Triplet;

#[cfg(feature = "python-bindings")]
use ndarray::{Array1, ArrayD};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArrayDyn;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    data::matrix::{DataMatrix, InputArray, build_sparse},
    data::weights::{KernelMatrix, WeightsMatrix},
    validation::errors::InputError,
};

/// Convert a Python object into an [`InputArray`].
///
/// Accepted inputs, tried in order:
/// - a float64 `numpy.ndarray` of any rank;
/// - a pandas object exposing `to_numpy()`;
/// - a SciPy sparse matrix (anything exposing `tocoo()`), kept sparse;
/// - a nested sequence of floats (rank 1 or 2).
///
/// Errors
/// ------
/// - `InputError::UnsupportedArrayType` (as `ValueError`) for anything
///   else, naming the Python type.
#[cfg(feature = "python-bindings")]
pub fn extract_input_array(raw: &Bound<'_, PyAny>) -> PyResult<InputArray> {
    if let Ok(arr) = raw.extract::<PyReadonlyArrayDyn<f64>>() {
        return Ok(InputArray::Dense(arr.as_array().to_owned()));
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Ok(arr) = obj.extract::<PyReadonlyArrayDyn<f64>>() {
            return Ok(InputArray::Dense(arr.as_array().to_owned()));
        }
    }

    if raw.hasattr("tocoo")? {
        return extract_sparse(raw).map(InputArray::Sparse);
    }

    if let Ok(vec) = raw.extract::<Vec<f64>>() {
        return Ok(InputArray::Dense(Array1::from(vec).into_dyn()));
    }
    if let Ok(rows) = raw.extract::<Vec<Vec<f64>>>() {
        return nested_to_array(rows);
    }

    let found = raw.get_type().name()?.to_string();
    Err(InputError::UnsupportedArrayType { found }.into())
}

/// Convert a Python object into a 2-D [`DataMatrix`].
#[cfg(feature = "python-bindings")]
pub fn extract_data_matrix(raw: &Bound<'_, PyAny>) -> PyResult<DataMatrix> {
    Ok(extract_input_array(raw)?.to_matrix()?)
}

/// Build a [`WeightsMatrix`] from a dense or sparse adjacency object.
#[cfg(feature = "python-bindings")]
pub fn extract_weights(raw: &Bound<'_, PyAny>) -> PyResult<WeightsMatrix> {
    Ok(WeightsMatrix::new(extract_data_matrix(raw)?)?)
}

/// Build a [`KernelMatrix`] from an adjacency object and optional unit ids.
///
/// Without ids, units are named by their row position (`"0"`, `"1"`, ...).
#[cfg(feature = "python-bindings")]
pub fn extract_kernel(raw: &Bound<'_, PyAny>, ids: Option<Vec<String>>) -> PyResult<KernelMatrix> {
    let adjacency = extract_data_matrix(raw)?;
    let ids = ids.unwrap_or_else(|| (0..adjacency.nrows()).map(|i| i.to_string()).collect());
    Ok(KernelMatrix::new(ids, adjacency)?)
}

#[cfg(feature = "python-bindings")]
fn extract_sparse(
    raw: &Bound<'_, PyAny>,
) -> PyResult<faer::sparse::SparseColMat<usize, f64>> {
    let coo = raw.call_method0("tocoo")?;
    let (nrows, ncols): (usize, usize) = coo.getattr("shape")?.extract()?;
    let rows: Vec<usize> = coo.getattr("row")?.call_method0("tolist")?.extract()?;
    let cols: Vec<usize> = coo.getattr("col")?.call_method0("tolist")?.extract()?;
    let values: Vec<f64> = coo.getattr("data")?.call_method0("tolist")?.extract()?;

    let triplets: Vec<Triplet<usize, usize, f64>> = rows
        .into_iter()
        .zip(cols)
        .zip(values)
        .map(|((row, col), val)| Triplet::new(row, col, val))
        .collect();
    Ok(build_sparse(nrows, ncols, &triplets)?)
}

#[cfg(feature = "python-bindings")]
fn nested_to_array(rows: Vec<Vec<f64>>) -> PyResult<InputArray> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(InputError::UnsupportedArrayType { found: "ragged sequence".to_string() }.into());
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let arr = ArrayD::from_shape_vec(vec![nrows, ncols], flat).map_err(|_| {
        PyErr::from(InputError::UnsupportedArrayType { found: "ragged sequence".to_string() })
    })?;
    Ok(InputArray::Dense(arr))
}
