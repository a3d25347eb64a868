//! spreg_inputs — input validation and variable naming for spatial regression.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the input-validation and naming layer of a spatial econometrics toolkit to
//! Python via the `_spreg_inputs` extension module. Estimators call into this
//! crate before any numerical work: it checks that user data is well-formed
//! and derives the labels regression output is printed with.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`data`, `validation`, `naming`) as the
//!   public crate surface.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for the
//!   `_spreg_inputs` Python extension.
//! - Create and register Python submodules (`validation`, `naming`) under
//!   `spreg_inputs` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All checking and naming logic lives in the inner Rust modules; this file
//!   performs only FFI glue and error mapping.
//! - Python inputs are converted to [`data::InputArray`] / [`data::DataMatrix`]
//!   by the helpers in [`utils`]; weights objects cross the boundary as
//!   adjacency arrays and are wrapped in the verified reference containers.
//!
//! Conventions
//! -----------
//! - Python-exposed functions keep the names of their Rust counterparts and
//!   live under `_spreg_inputs.<submodule>`.
//! - Every [`validation::InputError`] surfaces in Python as `ValueError` with
//!   the same message.
//!
//! Downstream usage
//! ----------------
//! - Native Rust estimators depend directly on [`validation`] and [`naming`]
//!   and can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_spreg_inputs` and re-exports its
//!   functions from thin pure-Python facades.
//!
//! Testing notes
//! -------------
//! - Behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_input_pipeline.rs`; the bindings add no logic of
//!   their own.

pub mod data;
pub mod naming;
pub mod utils;
pub mod validation;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyTuple},
};

#[cfg(feature = "python-bindings")]
use crate::{
    data::{InputArray, KernelWeights, SpatialWeights},
    utils::{extract_data_matrix, extract_input_array, extract_kernel, extract_weights},
};

// ---- validation submodule -------------------------------------------------

/// check_arrays(*arrays) — number of observations shared by the inputs.
///
/// `None` entries are ignored. Raises `ValueError` on the first structural
/// violation.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_arrays", signature = (*arrays))]
fn py_check_arrays(arrays: &Bound<'_, PyTuple>) -> PyResult<usize> {
    let owned: Vec<Option<InputArray>> = arrays
        .iter()
        .map(|item| if item.is_none() { Ok(None) } else { extract_input_array(&item).map(Some) })
        .collect::<PyResult<_>>()?;
    let refs: Vec<Option<&InputArray>> = owned.iter().map(Option::as_ref).collect();
    Ok(validation::check_arrays(&refs)?)
}

/// check_y(y, n) — dependent variable as an `(n, 1)` float64 array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_y")]
fn py_check_y<'py>(
    py: Python<'py>, y: &Bound<'py, PyAny>, n: usize,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let y = extract_input_array(y)?;
    Ok(validation::check_y(&y, n)?.into_pyarray(py))
}

/// check_weights(w, y, w_required=False, time=False)
///
/// `w` is a dense or sparse adjacency array. Returns `True` when a weights
/// object was checked.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_weights", signature = (w, y, w_required = false, time = false))]
fn py_check_weights(
    w: Option<&Bound<'_, PyAny>>, y: &Bound<'_, PyAny>, w_required: bool, time: bool,
) -> PyResult<bool> {
    let w = w.map(extract_weights).transpose()?;
    let y = extract_input_array(y)?;
    let (n, _) = y.matrix_shape()?;
    let y = validation::check_y(&y, n)?;
    let check = validation::check_weights(
        w.as_ref().map(|w| w as &dyn SpatialWeights),
        &y,
        w_required,
        time,
    )?;
    Ok(check.checked())
}

/// check_robust(robust, wk=None, wk_ids=None) — normalized robust choice.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_robust", signature = (robust = None, wk = None, wk_ids = None))]
fn py_check_robust(
    robust: Option<&str>, wk: Option<&Bound<'_, PyAny>>, wk_ids: Option<Vec<String>>,
) -> PyResult<Option<String>> {
    let wk = wk.map(|raw| extract_kernel(raw, wk_ids)).transpose()?;
    let choice = validation::check_robust(robust, wk.as_ref().map(|k| k as &dyn KernelWeights))?;
    Ok(choice.map(|c| c.as_str().to_string()))
}

/// check_spat_diag(spat_diag, w=None)
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_spat_diag", signature = (spat_diag, w = None))]
fn py_check_spat_diag(spat_diag: bool, w: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
    let w = w.map(extract_weights).transpose()?;
    Ok(validation::check_spat_diag(spat_diag, w.as_ref().map(|w| w as &dyn SpatialWeights))?)
}

/// check_regimes(reg_set, n, k) — regime ids are compared by their `str()`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_regimes")]
fn py_check_regimes(reg_set: &Bound<'_, PyAny>, n: usize, k: usize) -> PyResult<()> {
    let ids: Vec<String> = reg_set
        .try_iter()?
        .map(|item| Ok(item?.str()?.to_string()))
        .collect::<PyResult<_>>()?;
    Ok(validation::check_regimes(&ids, n, k)?)
}

/// check_constant(x, name_x=None, just_rem=False) -> (x, name_x, warning)
///
/// The returned design block is always dense.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_constant", signature = (x, name_x = None, just_rem = false))]
fn py_check_constant<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, name_x: Option<Vec<String>>, just_rem: bool,
) -> PyResult<(Bound<'py, PyArray2<f64>>, Option<Vec<String>>, Option<String>)> {
    let x = extract_data_matrix(x)?;
    let out = validation::check_constant(&x, name_x.as_deref(), just_rem)?;
    Ok((out.x.to_dense().into_pyarray(py), out.names, out.warning))
}

// ---- naming submodule -----------------------------------------------------

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_ds", signature = (name_ds = None))]
fn py_set_name_ds(name_ds: Option<&str>) -> String {
    naming::set_name_ds(name_ds)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_y", signature = (name_y = None))]
fn py_set_name_y(name_y: Option<&str>) -> String {
    naming::set_name_y(name_y)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_x", signature = (name_x, x, constant = false))]
fn py_set_name_x(
    name_x: Option<Vec<String>>, x: &Bound<'_, PyAny>, constant: bool,
) -> PyResult<Vec<String>> {
    let x = extract_data_matrix(x)?;
    Ok(naming::set_name_x(name_x.as_deref(), &x, constant))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_yend", signature = (name_yend, yend = None))]
fn py_set_name_yend(
    name_yend: Option<Vec<String>>, yend: Option<&Bound<'_, PyAny>>,
) -> PyResult<Vec<String>> {
    let yend = yend.map(extract_data_matrix).transpose()?;
    Ok(naming::set_name_yend(name_yend.as_deref(), yend.as_ref()))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_q", signature = (name_q, q = None))]
fn py_set_name_q(name_q: Option<Vec<String>>, q: Option<&Bound<'_, PyAny>>) -> PyResult<Vec<String>> {
    let q = q.map(extract_data_matrix).transpose()?;
    Ok(naming::set_name_q(name_q.as_deref(), q.as_ref()))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_yend_sp")]
fn py_set_name_yend_sp(name_y: &str) -> String {
    naming::set_name_yend_sp(name_y)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "set_name_q_sp",
    signature = (name_x, w_lags, name_q, lag_q, force_all = false)
)]
fn py_set_name_q_sp(
    name_x: Vec<String>, w_lags: usize, name_q: Vec<String>, lag_q: bool, force_all: bool,
) -> Vec<String> {
    naming::set_name_q_sp(&name_x, w_lags, &name_q, lag_q, force_all)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_h")]
fn py_set_name_h(name_x: Vec<String>, name_q: Vec<String>) -> Vec<String> {
    naming::set_name_h(&name_x, &name_q)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_robust", signature = (robust = None))]
fn py_set_robust(robust: Option<&str>) -> String {
    naming::set_robust(robust)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "set_name_w", signature = (name_w, w = None))]
fn py_set_name_w(name_w: Option<&str>, w: Option<&Bound<'_, PyAny>>) -> PyResult<Option<String>> {
    let w = w.map(extract_weights).transpose()?;
    Ok(naming::set_name_w(name_w, w.as_ref().map(|w| w as &dyn SpatialWeights)))
}

/// _spreg_inputs — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_spreg_inputs` Python module and register the `validation`
/// and `naming` submodules used by the public `spreg_inputs` package.
///
/// Key behaviors
/// -------------
/// - Create the submodules and attach their functions.
/// - Attach the submodules to the parent `_spreg_inputs` module.
/// - Register them in `sys.modules` so they are importable via dotted
///   paths from Python.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - Invoked automatically by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _spreg_inputs<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let validation_mod = PyModule::new(_py, "validation")?;
    let naming_mod = PyModule::new(_py, "naming")?;
    validation_functions(_py, m, &validation_mod)?;
    naming_functions(_py, m, &naming_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("spreg_inputs.validation", validation_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("spreg_inputs.naming", naming_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn validation_functions<'py>(
    _py: Python, spreg_inputs: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_check_arrays, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_y, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_weights, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_robust, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_spat_diag, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_regimes, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_constant, m)?)?;
    spreg_inputs.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn naming_functions<'py>(
    _py: Python, spreg_inputs: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_set_name_ds, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_y, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_x, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_yend, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_q, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_yend_sp, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_q_sp, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_h, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_robust, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_name_w, m)?)?;
    spreg_inputs.add_submodule(m)?;
    Ok(())
}
