//! naming::names — single-model variable labels with generic fallbacks.
//!
//! Purpose
//! -------
//! Derive the labels regression output is printed with: dataset,
//! dependent, exogenous, endogenous, instrument, spatial-lag and
//! spatial-instrument names, the robust method, and the weights name.
//! Every function is total: a missing (or empty) user value resolves to a
//! fixed generic pattern, so reporting code never handles absent names.
//!
//! Conventions
//! -----------
//! - The intercept is always named [`CONSTANT`] and always comes first.
//! - Generic names are 1-based: `var_1`, `endogenous_1`, `instrument_1`.
//! - Spatial lags of order 1 are prefixed `W_`; order `k ≥ 2` uses `Wk_`.

use crate::data::{matrix::DataMatrix, weights::SpatialWeights};

/// Literal name of the intercept column.
pub const CONSTANT: &str = "CONSTANT";

/// Dataset name; `"unknown"` when not supplied.
pub fn set_name_ds(name_ds: Option<&str>) -> String {
    non_empty(name_ds).unwrap_or("unknown").to_string()
}

/// Dependent variable name; `"dep_var"` when not supplied.
pub fn set_name_y(name_y: Option<&str>) -> String {
    non_empty(name_y).unwrap_or("dep_var").to_string()
}

/// Exogenous variable names, intercept first.
///
/// Parameters
/// ----------
/// - `name_x`: `Option<&[String]>`
///   User names of the non-intercept columns. `None` or empty selects the
///   generic `var_<i>` names.
/// - `x`: `&DataMatrix`
///   Design block the names describe. When `constant` is `false` it is
///   assumed to already contain the intercept column, so one fewer generic
///   name is generated.
/// - `constant`: `bool`
///   If `false` (default in estimators), [`CONSTANT`] is prepended to the
///   list; if `true`, the names are returned without it.
///
/// Returns
/// -------
/// `Vec<String>` — generic names yield exactly `x.ncols()` labels in both
/// modes.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::Array2;
/// use spreg_inputs::data::DataMatrix;
/// use spreg_inputs::naming::set_name_x;
///
/// let x = DataMatrix::Dense(Array2::zeros((10, 5)));
/// assert_eq!(
///     set_name_x(None, &x, false),
///     vec!["CONSTANT", "var_1", "var_2", "var_3", "var_4"]
/// );
/// ```
pub fn set_name_x(name_x: Option<&[String]>, x: &DataMatrix, constant: bool) -> Vec<String> {
    let mut names = match name_x.filter(|names| !names.is_empty()) {
        Some(names) => names.to_vec(),
        None => {
            let count = (x.ncols() + usize::from(constant)).saturating_sub(1);
            generic("var", count)
        }
    };
    if !constant {
        names.insert(0, CONSTANT.to_string());
    }
    names
}

/// Endogenous variable names; empty when there is no endogenous block.
pub fn set_name_yend(name_yend: Option<&[String]>, yend: Option<&DataMatrix>) -> Vec<String> {
    names_or_generic(name_yend, yend, "endogenous")
}

/// External instrument names; empty when there is no instrument block.
pub fn set_name_q(name_q: Option<&[String]>, q: Option<&DataMatrix>) -> Vec<String> {
    names_or_generic(name_q, q, "instrument")
}

/// Name of the spatially lagged dependent variable.
pub fn set_name_yend_sp(name_y: &str) -> String {
    format!("W_{name_y}")
}

/// Names of the spatial instruments.
///
/// Parameters
/// ----------
/// - `name_x`: `&[String]`
///   Exogenous names, intercept first.
/// - `w_lags`: `usize`
///   Highest spatial lag order of the instruments.
/// - `name_q`: `&[String]`
///   External instrument names.
/// - `lag_q`: `bool`
///   Also lag the external instruments.
/// - `force_all`: `bool`
///   Keep the first entry of `name_x` (normally the intercept) in the base
///   set.
///
/// Returns
/// -------
/// `Vec<String>` — `W_<b>` for every base name `b`, then `W<k>_<b>` for
/// `k = 2..=w_lags`, i.e. `max(w_lags, 1) × |base|` names.
///
/// Examples
/// --------
/// ```rust
/// use spreg_inputs::naming::set_name_q_sp;
///
/// let name_x: Vec<String> = ["CONSTANT", "inc", "hoval"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(
///     set_name_q_sp(&name_x, 2, &[], false, false),
///     vec!["W_inc", "W_hoval", "W2_inc", "W2_hoval"]
/// );
/// ```
pub fn set_name_q_sp(
    name_x: &[String], w_lags: usize, name_q: &[String], lag_q: bool, force_all: bool,
) -> Vec<String> {
    let mut base: Vec<&String> = if force_all {
        name_x.iter().collect()
    } else {
        name_x.iter().skip(1).collect()
    };
    if lag_q {
        base.extend(name_q);
    }

    let mut sp_inst_names: Vec<String> = base.iter().map(|name| format!("W_{name}")).collect();
    for lag in 2..=w_lags {
        sp_inst_names.extend(base.iter().map(|name| format!("W{lag}_{name}")));
    }
    sp_inst_names
}

/// Full instrument names: exogenous first, then instruments.
pub fn set_name_h(name_x: &[String], name_q: &[String]) -> Vec<String> {
    name_x.iter().chain(name_q).cloned().collect()
}

/// Robust method label; `"unadjusted"` when none was requested.
pub fn set_robust(robust: Option<&str>) -> String {
    non_empty(robust).unwrap_or("unadjusted").to_string()
}

/// Weights name: `None` without weights, `"unknown"` without a name.
pub fn set_name_w(name_w: Option<&str>, w: Option<&dyn SpatialWeights>) -> Option<String> {
    w.map(|_| name_w.unwrap_or("unknown").to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn generic(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}_{i}")).collect()
}

fn names_or_generic(
    names: Option<&[String]>, block: Option<&DataMatrix>, prefix: &str,
) -> Vec<String> {
    match (block, names.filter(|names| !names.is_empty())) {
        (None, _) => Vec::new(),
        (Some(_), Some(names)) => names.to_vec(),
        (Some(block), None) => generic(prefix, block.ncols()),
    }
}
