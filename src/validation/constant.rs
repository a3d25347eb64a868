//! validation::constant — constant-column detection and intercept handling.
//!
//! Purpose
//! -------
//! Detect columns of a design block whose entries are all identical, drop
//! them together with their names, and (unless asked not to) put a single
//! literal intercept column of ones at the front. This gives every
//! estimator the same canonical layout: one intercept, first, and no other
//! constant regressors.
//!
//! Key behaviors
//! -------------
//! - Column ranges come from [`DataMatrix::column_ranges`], so dense and
//!   sparse blocks are classified by the same rule.
//! - Dropped variables are reported in a human-readable warning, by name
//!   when names were supplied, by count otherwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input has already passed `check_arrays` (finite, 2-D).
//! - An input made only of constant columns is valid: the result is the
//!   `(n, 1)` intercept (or an `(n, 0)` block when `just_rem` is set).
//! - The returned names never include the intercept; callers prepend
//!   `CONSTANT` when building the full name set (see
//!   [`set_name_x`](crate::naming::set_name_x)).

use crate::{
    data::matrix::DataMatrix,
    validation::errors::{InputError, InputResult},
};

/// Result of [`check_constant`].
///
/// Fields
/// ------
/// - `x`: [`DataMatrix`]
///   Block without constant columns, with the intercept prepended unless
///   `just_rem` was set. Storage form (dense/sparse) is preserved.
/// - `names`: `Option<Vec<String>>`
///   Supplied names minus those of dropped columns; `None` when no names
///   were supplied.
/// - `warning`: `Option<String>`
///   Message listing removed variables; `None` when nothing was removed.
#[derive(Debug, Clone)]
pub struct ConstantCheck {
    pub x: DataMatrix,
    pub names: Option<Vec<String>>,
    pub warning: Option<String>,
}

/// Remove constant columns and optionally insert an intercept.
///
/// Parameters
/// ----------
/// - `x`: `&DataMatrix`
///   Design block, dense or sparse.
/// - `name_x`: `Option<&[String]>`
///   Names of the columns of `x`. An empty slice counts as "no names".
/// - `just_rem`: `bool`
///   If `true`, only remove constant columns; if `false`, also prepend a
///   column of ones.
///
/// Returns
/// -------
/// `InputResult<ConstantCheck>`
///
/// Errors
/// ------
/// - `InputError::NameCountMismatch` when names are supplied and their
///   number differs from `x.ncols()`.
/// - `InputError::SparseConstruction` if a sparse block cannot be rebuilt.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use spreg_inputs::data::DataMatrix;
/// use spreg_inputs::validation::check_constant;
///
/// let x = DataMatrix::Dense(array![[1.0, 2.0], [1.0, 3.0], [1.0, 5.0]]);
/// let names = vec!["one".to_string(), "inc".to_string()];
/// let out = check_constant(&x, Some(&names), false).unwrap();
///
/// assert_eq!(out.x.ncols(), 2);
/// assert_eq!(out.names, Some(vec!["inc".to_string()]));
/// assert_eq!(out.warning.as_deref(), Some("Variable(s) ['one'] removed for being constant."));
/// ```
pub fn check_constant(
    x: &DataMatrix, name_x: Option<&[String]>, just_rem: bool,
) -> InputResult<ConstantCheck> {
    let name_x = name_x.filter(|names| !names.is_empty());
    if let Some(names) = name_x {
        if names.len() != x.ncols() {
            return Err(InputError::NameCountMismatch { names: names.len(), columns: x.ncols() });
        }
    }

    let ranges = x.column_ranges();
    let (constant, varying): (Vec<usize>, Vec<usize>) =
        (0..x.ncols()).partition(|&col| ranges[col] == 0.0);

    let trimmed = if constant.is_empty() { x.clone() } else { x.select_columns(&varying)? };

    let warning = match (constant.len(), name_x) {
        (0, _) => None,
        (_, Some(names)) => {
            let removed: Vec<String> =
                constant.iter().map(|&col| format!("'{}'", names[col])).collect();
            Some(format!("Variable(s) [{}] removed for being constant.", removed.join(", ")))
        }
        (1, None) => Some("One variable has been removed for being constant.".to_string()),
        (count, None) => Some(format!("{count} variables have been removed for being constant.")),
    };
    if let Some(msg) = &warning {
        log::warn!("{msg}");
    }

    let names = name_x.map(|names| varying.iter().map(|&col| names[col].clone()).collect());
    let x = if just_rem { trimmed } else { trimmed.with_intercept()? };

    Ok(ConstantCheck { x, names, warning })
}
