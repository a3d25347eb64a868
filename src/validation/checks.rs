//! validation::checks — independent input checks for regression estimators.
//!
//! Purpose
//! -------
//! Implement the individual checks run on user-supplied regression inputs
//! before any numerical work: array shape/type consistency and finiteness,
//! dependent-variable shape, spatial-weights well-formedness, robust
//! variance configuration (including kernel-weight bounds for HAC), the
//! spatial-diagnostics precondition, and regime sufficiency.
//!
//! Key behaviors
//! -------------
//! - [`check_arrays`] returns the shared observation count `n`.
//! - [`check_y`] returns `y` reshaped to exactly `(n, 1)`.
//! - [`check_weights`] returns a [`WeightsCheck`] carrying the provenance
//!   flag of the weights object instead of rejecting unknown
//!   implementations.
//! - [`check_robust`], [`check_spat_diag`], and [`check_regimes`] either
//!   succeed or report the violated configuration invariant.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every check is pure: no state is kept between calls and inputs are
//!   never mutated.
//! - Checks fail at the first violation with an [`InputError`]; there is
//!   no partial result.
//! - [`check_weights`] expects a `y` that already passed [`check_y`]; the
//!   [`ValidatedInputs`](crate::validation::pipeline::ValidatedInputs)
//!   pipeline enforces that ordering by construction.
//!
//! Conventions
//! -----------
//! - Diagonal and kernel bounds are compared exactly (no tolerance), and a
//!   NaN anywhere in a bounded quantity is a violation.
//! - Kernel weights are accepted on `[0, 1]`; a weight of exactly 1.0
//!   passes. The list of a unit also contains its own diagonal weight.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover every error branch and the success paths of
//!   each check.

use crate::{
    data::{
        matrix::InputArray,
        weights::{KernelWeights, Provenance, SpatialWeights},
    },
    validation::{
        errors::{InputError, InputResult},
        robust::RobustChoice,
    },
};
use ndarray::{Array2, Ix2};
use std::{collections::HashSet, hash::Hash};

/// Outcome of [`check_weights`].
///
/// `provenance` is `None` when no weights object was supplied (and none
/// was required), otherwise the provenance reported by the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightsCheck {
    pub provenance: Option<Provenance>,
}

impl WeightsCheck {
    /// True when a weights object was supplied and checked.
    pub fn checked(&self) -> bool {
        self.provenance.is_some()
    }

    /// True when the supplied weights come from an unverified implementation.
    pub fn is_unverified(&self) -> bool {
        self.provenance == Some(Provenance::Unverified)
    }
}

/// Check shape, type, and finiteness of a set of input arrays.
///
/// Parameters
/// ----------
/// - `arrays`: `&[Option<&InputArray>]`
///   Blocks passed to an estimator (y, X, endogenous regressors,
///   instruments, ...). `None` entries are skipped.
///
/// Returns
/// -------
/// `InputResult<usize>`
///   The number of observations `n` shared by every present array.
///
/// Errors
/// ------
/// - `InputError::InvalidDimensions` for rank 0 or rank > 2 arrays.
/// - `InputError::MoreColumnsThanRows` when an array has `cols > rows`.
/// - `InputError::NonFiniteValues` when an array holds NaN or ±∞.
/// - `InputError::RowCountMismatch` when row counts differ.
/// - `InputError::NoArrays` when every entry is `None`.
///
/// Notes
/// -----
/// - Rank-1 arrays count as a single column.
/// - Checks run array by array, so the first malformed array determines
///   the error even if later arrays have mismatched lengths.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::Array2;
/// use spreg_inputs::data::InputArray;
/// use spreg_inputs::validation::check_arrays;
///
/// let y = InputArray::from(Array2::<f64>::zeros((49, 1)));
/// let x = InputArray::from(Array2::<f64>::ones((49, 2)));
/// assert_eq!(check_arrays(&[Some(&y), Some(&x), None]), Ok(49));
/// ```
pub fn check_arrays(arrays: &[Option<&InputArray>]) -> InputResult<usize> {
    let mut rows = Vec::with_capacity(arrays.len());
    for array in arrays.iter().flatten() {
        let (n_rows, n_cols) = array.matrix_shape()?;
        if n_rows < n_cols {
            return Err(InputError::MoreColumnsThanRows { rows: n_rows, cols: n_cols });
        }
        if !array.is_all_finite() {
            return Err(InputError::NonFiniteValues);
        }
        rows.push(n_rows);
    }

    let n = *rows.first().ok_or(InputError::NoArrays)?;
    if rows.iter().any(|&r| r != n) {
        return Err(InputError::RowCountMismatch { rows });
    }
    Ok(n)
}

/// Check the dependent variable and bring it to shape `(n, 1)`.
///
/// Parameters
/// ----------
/// - `y`: `&InputArray`
///   Dependent variable. Must be dense; rank 1 or rank 2.
/// - `n`: `usize`
///   Observation count, typically returned by [`check_arrays`].
///
/// Returns
/// -------
/// `InputResult<Array2<f64>>`
///   `y` as an owned `(n, 1)` array.
///
/// Errors
/// ------
/// - `InputError::DependentNotDense` for sparse input.
/// - `InputError::InvalidDimensions` for rank 0 or rank > 2.
/// - `InputError::DependentShape` when a flat `y` does not hold exactly
///   `n` elements or a 2-D `y` is not `(n, 1)`.
/// - `InputError::NonFiniteValues` when `y` holds NaN or ±∞.
pub fn check_y(y: &InputArray, n: usize) -> InputResult<Array2<f64>> {
    let dense = match y {
        InputArray::Dense(arr) => arr,
        InputArray::Sparse(_) => return Err(InputError::DependentNotDense),
    };
    let shape_error = || InputError::DependentShape { n, shape: dense.shape().to_vec() };

    let reshaped = match dense.ndim() {
        1 => Array2::from_shape_vec((n, 1), dense.iter().copied().collect())
            .map_err(|_| shape_error())?,
        2 => dense.clone().into_dimensionality::<Ix2>().map_err(|_| shape_error())?,
        ndim => return Err(InputError::InvalidDimensions { ndim }),
    };

    if reshaped.dim() != (n, 1) {
        return Err(shape_error());
    }
    if !reshaped.iter().all(|v| v.is_finite()) {
        return Err(InputError::NonFiniteValues);
    }
    Ok(reshaped)
}

/// Check a spatial weights object against the dependent variable.
///
/// Parameters
/// ----------
/// - `w`: `Option<&dyn SpatialWeights>`
///   Weights graph, if any.
/// - `y`: `&Array2<f64>`
///   Validated dependent variable; its row count is the expected unit count.
/// - `w_required`: `bool`
///   Whether the estimator needs a weights graph.
/// - `time`: `bool`
///   Panel mode: the unit count need not equal the number of rows of `y`.
///
/// Returns
/// -------
/// `InputResult<WeightsCheck>`
///   `provenance: None` when no weights were supplied and none were
///   required; otherwise the provenance of `w`.
///
/// Errors
/// ------
/// - `InputError::WeightsRequired` when `w_required` and `w` is `None`.
/// - `InputError::WeightsDimension` when `!time` and the unit count differs
///   from `y.nrows()`.
/// - `InputError::NonZeroDiagonal` when any diagonal entry is not 0.
///
/// Notes
/// -----
/// - An unverified weights implementation is not an error. It is logged at
///   `warn` level and reported through [`WeightsCheck::is_unverified`].
pub fn check_weights(
    w: Option<&dyn SpatialWeights>, y: &Array2<f64>, w_required: bool, time: bool,
) -> InputResult<WeightsCheck> {
    let Some(w) = w else {
        if w_required {
            return Err(InputError::WeightsRequired);
        }
        return Ok(WeightsCheck { provenance: None });
    };

    let provenance = w.provenance();
    if provenance == Provenance::Unverified {
        log::warn!("w is not a verified weights implementation; checking it through its API only");
    }

    if !time && w.unit_count() != y.nrows() {
        return Err(InputError::WeightsDimension { units: w.unit_count(), n: y.nrows() });
    }

    if let Some((min, max)) = extrema(w.diagonal().iter().copied()) {
        if min != 0.0 || max != 0.0 {
            return Err(InputError::NonZeroDiagonal { min, max });
        }
    }
    Ok(WeightsCheck { provenance: Some(provenance) })
}

/// Check the robust variance choice against the kernel weights.
///
/// Parameters
/// ----------
/// - `robust`: `Option<&str>`
///   Requested adjustment; `None` or `""` means no adjustment.
/// - `wk`: `Option<&dyn KernelWeights>`
///   Kernel weights, required for HAC and forbidden otherwise.
///
/// Returns
/// -------
/// `InputResult<Option<RobustChoice>>`
///   The parsed choice, or `None` when no adjustment was requested.
///
/// Errors
/// ------
/// - `InputError::InvalidRobust` for an unknown choice.
/// - `InputError::HacRequiresKernel` for HAC without kernel weights.
/// - `InputError::KernelDiagonal` when a kernel diagonal entry is not 1.
/// - `InputError::KernelUnitMissing` when an id has no weight list.
/// - `InputError::NegativeKernelWeight` / `InputError::KernelWeightAboveOne`
///   when a unit's weights leave `[0, 1]`.
/// - `InputError::KernelNotAllowed` for White/OGMM with kernel weights.
pub fn check_robust(
    robust: Option<&str>, wk: Option<&dyn KernelWeights>,
) -> InputResult<Option<RobustChoice>> {
    let Some(robust) = robust.filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    let choice: RobustChoice = robust.parse()?;

    if !choice.requires_kernel() {
        if wk.is_some() {
            return Err(InputError::KernelNotAllowed { robust: choice.to_string() });
        }
        return Ok(Some(choice));
    }

    let wk = wk.ok_or(InputError::HacRequiresKernel)?;
    if let Some((min, max)) = extrema(wk.diagonal().iter().copied()) {
        if min.is_nan() || min < 1.0 || max > 1.0 {
            return Err(InputError::KernelDiagonal { min, max });
        }
    }

    for id in wk.id_order() {
        let weights =
            wk.weights_of(id).ok_or_else(|| InputError::KernelUnitMissing { id: id.clone() })?;
        let Some((vmin, vmax)) = extrema(weights.iter().copied()) else {
            continue;
        };
        if vmin.is_nan() || vmin < 0.0 {
            return Err(InputError::NegativeKernelWeight { id: id.clone(), value: vmin });
        }
        // Exactly 1.0 passes.
        if vmax > 1.0 {
            return Err(InputError::KernelWeightAboveOne { id: id.clone(), value: vmax });
        }
    }
    Ok(Some(choice))
}

/// Require a weights object whenever spatial diagnostics are requested.
///
/// Errors
/// ------
/// - `InputError::SpatialDiagnosticsRequireWeights` when `spat_diag` is
///   set and `w` is `None`.
pub fn check_spat_diag(spat_diag: bool, w: Option<&dyn SpatialWeights>) -> InputResult<()> {
    if spat_diag && w.is_none() {
        return Err(InputError::SpatialDiagnosticsRequireWeights);
    }
    Ok(())
}

/// Check that a regime partition leaves enough observations per regime.
///
/// Parameters
/// ----------
/// - `reg_set`: `&[R]`
///   Regime identifiers; duplicates are counted once.
/// - `n`: `usize`
///   Number of observations.
/// - `k`: `usize`
///   Number of parameters of the largest per-regime model.
///
/// Errors
/// ------
/// - `InputError::TooFewRegimes` with fewer than 2 distinct ids.
/// - `InputError::InsufficientObservations` when `n / regimes < k + 1`.
///
/// Examples
/// --------
/// ```rust
/// use spreg_inputs::validation::check_regimes;
///
/// assert!(check_regimes(&["a", "b", "c"], 90, 5).is_ok());
/// assert!(check_regimes(&["a", "b"], 10, 5).is_err());
/// ```
pub fn check_regimes<R: Eq + Hash>(reg_set: &[R], n: usize, k: usize) -> InputResult<()> {
    let regimes = reg_set.iter().collect::<HashSet<_>>().len();
    if regimes < 2 {
        return Err(InputError::TooFewRegimes { found: regimes });
    }
    if (n as f64) / (regimes as f64) < (k + 1) as f64 {
        return Err(InputError::InsufficientObservations { n, regimes, k });
    }
    Ok(())
}

/// Min and max of a sequence; NaN in, NaN out. `None` for empty input.
fn extrema(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut out: Option<(f64, f64)> = None;
    for v in values {
        if v.is_nan() {
            return Some((f64::NAN, f64::NAN));
        }
        out = Some(match out {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        matrix::DataMatrix,
        weights::{KernelMatrix, WeightsMatrix},
    };
    use faer::sparse::{SparseColMat, Triplet};
    use ndarray::{Array1, Array3, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `check_arrays`: common row count, skipped `None`s, rank/column/finite
    //   violations, mismatched lengths, sparse input.
    // - `check_y`: reshaping, shape and representation violations.
    // - `check_weights`: required/absent, dimension, diagonal, time mode,
    //   unverified provenance.
    // - `check_robust`: HAC bounds (including the inclusive 1.0 bound),
    //   White/OGMM exclusivity, invalid choices.
    // - `check_spat_diag` and `check_regimes`.
    // -------------------------------------------------------------------------

    struct ForeignWeights {
        diagonal: Array1<f64>,
    }

    impl SpatialWeights for ForeignWeights {
        fn unit_count(&self) -> usize {
            self.diagonal.len()
        }

        fn diagonal(&self) -> Array1<f64> {
            self.diagonal.clone()
        }
    }

    fn ring(n: usize) -> WeightsMatrix {
        let adjacency = Array2::from_shape_fn((n, n), |(i, j)| {
            if (i + 1) % n == j || (j + 1) % n == i { 1.0 } else { 0.0 }
        });
        WeightsMatrix::new(adjacency).expect("square adjacency")
    }

    fn kernel(adjacency: Array2<f64>) -> KernelMatrix {
        let ids = (0..adjacency.nrows()).map(|i| format!("u{i}")).collect();
        KernelMatrix::new(ids, adjacency).expect("square kernel")
    }

    #[test]
    // Purpose
    // -------
    // Verify the common row count is returned and `None` entries are skipped.
    //
    // Given
    // -----
    // - y (5,), X (5, 2), and a missing block.
    //
    // Expect
    // ------
    // - `Ok(5)`.
    fn check_arrays_returns_common_row_count() {
        // Arrange
        let y = InputArray::from(array![1.0, 2.0, 3.0, 4.0, 5.0]);
        let x = InputArray::from(Array2::<f64>::ones((5, 2)));

        // Act
        let result = check_arrays(&[Some(&y), None, Some(&x)]);

        // Assert
        assert_eq!(result, Ok(5));
    }

    #[test]
    // Purpose
    // -------
    // Ensure mismatched row counts are rejected and reported.
    //
    // Given
    // -----
    // - Arrays with 5 and 4 rows.
    //
    // Expect
    // ------
    // - `RowCountMismatch { rows: [5, 4] }`.
    fn check_arrays_rejects_mismatched_lengths() {
        // Arrange
        let a = InputArray::from(Array2::<f64>::zeros((5, 1)));
        let b = InputArray::from(Array2::<f64>::zeros((4, 1)));

        // Act
        let result = check_arrays(&[Some(&a), Some(&b)]);

        // Assert
        assert_eq!(result, Err(InputError::RowCountMismatch { rows: vec![5, 4] }));
    }

    #[test]
    // Purpose
    // -------
    // Check the structural rejections: rank 3, more columns than rows, no
    // arrays at all.
    //
    // Given
    // -----
    // - A rank-3 array, a (2, 3) matrix, and an all-`None` list.
    //
    // Expect
    // ------
    // - `InvalidDimensions`, `MoreColumnsThanRows`, `NoArrays`.
    fn check_arrays_rejects_structural_violations() {
        // Arrange
        let cube = InputArray::from(Array3::<f64>::zeros((3, 2, 1)).into_dyn());
        let wide = InputArray::from(Array2::<f64>::zeros((2, 3)));

        // Act / Assert
        assert_eq!(
            check_arrays(&[Some(&cube)]),
            Err(InputError::InvalidDimensions { ndim: 3 })
        );
        assert_eq!(
            check_arrays(&[Some(&wide)]),
            Err(InputError::MoreColumnsThanRows { rows: 2, cols: 3 })
        );
        assert_eq!(check_arrays(&[None, None]), Err(InputError::NoArrays));
    }

    #[test]
    // Purpose
    // -------
    // Verify a single non-finite entry fails the check regardless of the
    // remaining entries, for dense and sparse input.
    //
    // Given
    // -----
    // - A dense (3, 1) array with an infinity; a sparse (3, 1) with a NaN.
    //
    // Expect
    // ------
    // - `NonFiniteValues` in both cases.
    fn check_arrays_rejects_non_finite_values() {
        // Arrange
        let dense = InputArray::from(array![[1.0], [f64::INFINITY], [3.0]]);
        let sparse = InputArray::from(
            SparseColMat::<usize, f64>::try_new_from_triplets(
                3,
                1,
                &[Triplet::new(0, 0, 1.0), Triplet::new(2, 0, f64::NAN)],
            )
            .expect("valid triplets"),
        );

        // Act / Assert
        assert_eq!(check_arrays(&[Some(&dense)]), Err(InputError::NonFiniteValues));
        assert_eq!(check_arrays(&[Some(&sparse)]), Err(InputError::NonFiniteValues));
    }

    #[test]
    // Purpose
    // -------
    // Verify a flat y is reshaped to (n, 1) and a column y passes unchanged.
    //
    // Given
    // -----
    // - y = [1, 2, 3] flat and as a (3, 1) column.
    //
    // Expect
    // ------
    // - Both yield [[1], [2], [3]].
    fn check_y_reshapes_flat_input() {
        // Arrange
        let flat = InputArray::from(array![1.0, 2.0, 3.0]);
        let column = InputArray::from(array![[1.0], [2.0], [3.0]]);

        // Act
        let from_flat = check_y(&flat, 3).expect("flat y");
        let from_column = check_y(&column, 3).expect("column y");

        // Assert
        assert_eq!(from_flat, array![[1.0], [2.0], [3.0]]);
        assert_eq!(from_flat, from_column);
    }

    #[test]
    // Purpose
    // -------
    // Ensure y violations are reported: wrong length, two columns, sparse,
    // NaN.
    //
    // Given
    // -----
    // - Flat y of length 4 with n = 3, a (3, 2) y, a sparse y, and a NaN y.
    //
    // Expect
    // ------
    // - `DependentShape`, `DependentShape`, `DependentNotDense`,
    //   `NonFiniteValues`.
    fn check_y_rejects_malformed_dependent() {
        // Arrange
        let long = InputArray::from(array![1.0, 2.0, 3.0, 4.0]);
        let wide = InputArray::from(Array2::<f64>::zeros((3, 2)));
        let sparse = InputArray::from(
            SparseColMat::<usize, f64>::try_new_from_triplets(3, 1, &[Triplet::new(0, 0, 1.0)])
                .expect("valid triplets"),
        );
        let nan = InputArray::from(array![1.0, f64::NAN, 3.0]);

        // Act / Assert
        assert_eq!(
            check_y(&long, 3),
            Err(InputError::DependentShape { n: 3, shape: vec![4] })
        );
        assert_eq!(
            check_y(&wide, 3),
            Err(InputError::DependentShape { n: 3, shape: vec![3, 2] })
        );
        assert_eq!(check_y(&sparse, 3), Err(InputError::DependentNotDense));
        assert_eq!(check_y(&nan, 3), Err(InputError::NonFiniteValues));
    }

    #[test]
    // Purpose
    // -------
    // Verify the weights check passes silently for a matching zero-diagonal
    // graph and is a no-op when weights are absent and optional.
    //
    // Given
    // -----
    // - A 4-unit ring and y of 4 rows.
    //
    // Expect
    // ------
    // - Verified provenance; `provenance: None` without weights.
    fn check_weights_accepts_matching_zero_diagonal_graph() {
        // Arrange
        let w = ring(4);
        let y = Array2::<f64>::zeros((4, 1));

        // Act
        let checked = check_weights(Some(&w), &y, true, false).expect("valid weights");
        let skipped = check_weights(None, &y, false, false).expect("optional weights");

        // Assert
        assert_eq!(checked.provenance, Some(Provenance::Verified));
        assert!(!checked.is_unverified());
        assert!(!skipped.checked());
    }

    #[test]
    // Purpose
    // -------
    // Ensure required-but-absent weights, dimension mismatches, and self
    // loops are rejected; time mode lifts only the dimension requirement.
    //
    // Given
    // -----
    // - y of 5 rows, a 4-unit ring, and a 5-unit graph with a self loop.
    //
    // Expect
    // ------
    // - `WeightsRequired`, `WeightsDimension`, `NonZeroDiagonal`; the ring
    //   passes in time mode.
    fn check_weights_rejects_missing_mismatched_and_self_loops() {
        // Arrange
        let y = Array2::<f64>::zeros((5, 1));
        let small = ring(4);
        let mut adjacency = Array2::<f64>::zeros((5, 5));
        adjacency[[2, 2]] = 0.5;
        let looped = WeightsMatrix::new(adjacency).expect("square");

        // Act / Assert
        assert_eq!(check_weights(None, &y, true, false), Err(InputError::WeightsRequired));
        assert_eq!(
            check_weights(Some(&small), &y, false, false),
            Err(InputError::WeightsDimension { units: 4, n: 5 })
        );
        assert!(check_weights(Some(&small), &y, false, true).is_ok());
        assert_eq!(
            check_weights(Some(&looped), &y, false, false),
            Err(InputError::NonZeroDiagonal { min: 0.0, max: 0.5 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify foreign implementations pass with an unverified flag.
    //
    // Given
    // -----
    // - A third-party weights type with a zero diagonal of length 3.
    //
    // Expect
    // ------
    // - `Ok` with `is_unverified() == true`.
    fn check_weights_flags_unverified_provenance() {
        // Arrange
        let w = ForeignWeights { diagonal: Array1::zeros(3) };
        let y = Array2::<f64>::zeros((3, 1));

        // Act
        let result = check_weights(Some(&w), &y, false, false).expect("compatible weights");

        // Assert
        assert!(result.is_unverified());
    }

    #[test]
    // Purpose
    // -------
    // Verify sparse adjacency diagonals are checked like dense ones.
    //
    // Given
    // -----
    // - A 3x3 sparse adjacency with a stored 1.0 at (0, 0).
    //
    // Expect
    // ------
    // - `NonZeroDiagonal { min: 0, max: 1 }`.
    fn check_weights_reads_sparse_diagonal() {
        // Arrange
        let adjacency = SparseColMat::<usize, f64>::try_new_from_triplets(
            3,
            3,
            &[Triplet::new(0, 0, 1.0), Triplet::new(1, 2, 1.0)],
        )
        .expect("valid triplets");
        let w = WeightsMatrix::new(DataMatrix::Sparse(adjacency)).expect("square");
        let y = Array2::<f64>::zeros((3, 1));

        // Act
        let result = check_weights(Some(&w), &y, false, false);

        // Assert
        assert_eq!(result, Err(InputError::NonZeroDiagonal { min: 0.0, max: 1.0 }));
    }

    #[test]
    // Purpose
    // -------
    // Verify HAC accepts a kernel with unit diagonal and off-diagonal
    // weights in [0, 1], including a weight of exactly 1.0.
    //
    // Given
    // -----
    // - A 3x3 kernel with an off-diagonal 1.0.
    //
    // Expect
    // ------
    // - `Ok(Some(RobustChoice::Hac))`.
    fn check_robust_hac_accepts_inclusive_upper_bound() {
        // Arrange
        let wk = kernel(array![[1.0, 1.0, 0.0], [0.3, 1.0, 0.2], [0.0, 0.2, 1.0]]);

        // Act
        let result = check_robust(Some("HAC"), Some(&wk));

        // Assert
        assert_eq!(result, Ok(Some(RobustChoice::Hac)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure HAC rejects missing kernels, non-unit diagonals, negative
    // weights, and weights above one.
    //
    // Given
    // -----
    // - No kernel; a kernel with a 0.9 diagonal; one with -0.1; one with 1.5.
    //
    // Expect
    // ------
    // - The matching error for each.
    fn check_robust_hac_rejects_out_of_bounds_kernels() {
        // Arrange
        let low_diag = kernel(array![[1.0, 0.2], [0.2, 0.9]]);
        let negative = kernel(array![[1.0, -0.1], [0.2, 1.0]]);
        let above = kernel(array![[1.0, 0.2], [1.5, 1.0]]);

        // Act / Assert
        assert_eq!(check_robust(Some("hac"), None), Err(InputError::HacRequiresKernel));
        assert_eq!(
            check_robust(Some("hac"), Some(&low_diag)),
            Err(InputError::KernelDiagonal { min: 0.9, max: 1.0 })
        );
        assert_eq!(
            check_robust(Some("hac"), Some(&negative)),
            Err(InputError::NegativeKernelWeight { id: "u0".to_string(), value: -0.1 })
        );
        assert_eq!(
            check_robust(Some("hac"), Some(&above)),
            Err(InputError::KernelWeightAboveOne { id: "u1".to_string(), value: 1.5 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify White/OGMM fail iff kernel weights are supplied, unset robust
    // is a no-op, and unknown choices are rejected.
    //
    // Given
    // -----
    // - A valid kernel; robust in {white, ogmm, None, "", bogus}.
    //
    // Expect
    // ------
    // - `KernelNotAllowed` with a kernel, `Ok` without; `InvalidRobust` for
    //   "bogus".
    fn check_robust_white_and_ogmm_forbid_kernel_weights() {
        // Arrange
        let wk = kernel(Array2::<f64>::eye(2));

        // Act / Assert
        assert_eq!(check_robust(Some("white"), None), Ok(Some(RobustChoice::White)));
        assert_eq!(
            check_robust(Some("White"), Some(&wk)),
            Err(InputError::KernelNotAllowed { robust: "white".to_string() })
        );
        assert_eq!(
            check_robust(Some("ogmm"), Some(&wk)),
            Err(InputError::KernelNotAllowed { robust: "ogmm".to_string() })
        );
        assert_eq!(check_robust(None, Some(&wk)), Ok(None));
        assert_eq!(check_robust(Some(""), None), Ok(None));
        assert_eq!(
            check_robust(Some("bogus"), None),
            Err(InputError::InvalidRobust { value: "bogus".to_string() })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the spatial diagnostics precondition.
    //
    // Given
    // -----
    // - Diagnostics requested with and without weights, and not requested.
    //
    // Expect
    // ------
    // - Error only when requested without weights.
    fn check_spat_diag_requires_weights_when_requested() {
        // Arrange
        let w = ring(3);

        // Act / Assert
        assert!(check_spat_diag(true, Some(&w)).is_ok());
        assert!(check_spat_diag(false, None).is_ok());
        assert_eq!(check_spat_diag(true, None), Err(InputError::SpatialDiagnosticsRequireWeights));
    }

    #[test]
    // Purpose
    // -------
    // Check regime sufficiency on the documented examples.
    //
    // Given
    // -----
    // - ["a", "b", "c"] with n = 90, k = 5; ["a", "b"] with n = 10, k = 5;
    //   ["a", "a"] with n = 100, k = 1.
    //
    // Expect
    // ------
    // - Ok; `InsufficientObservations`; `TooFewRegimes { found: 1 }`.
    fn check_regimes_enforces_count_and_degrees_of_freedom() {
        // Act / Assert
        assert!(check_regimes(&["a", "b", "c"], 90, 5).is_ok());
        assert_eq!(
            check_regimes(&["a", "b"], 10, 5),
            Err(InputError::InsufficientObservations { n: 10, regimes: 2, k: 5 })
        );
        assert_eq!(check_regimes(&["a", "a"], 100, 1), Err(InputError::TooFewRegimes { found: 1 }));
    }
}
