//! data::matrix — dense/sparse containers for regression variable blocks.
//!
//! Purpose
//! -------
//! Represent the variable blocks handed to the validation layer (y, X,
//! endogenous regressors, instruments) in the two accepted storage forms:
//! dense `ndarray` arrays and sparse `faer` column-compressed matrices.
//! Provide the small set of column-wise primitives the checks and the
//! constant-column routine need, with one implementation per storage form
//! behind a representation-agnostic surface.
//!
//! Key behaviors
//! -------------
//! - [`InputArray`] holds raw, unvalidated input: a dense array of any rank
//!   or a sparse matrix. Its [`InputArray::matrix_shape`] applies the
//!   "rank 1 is one column, rank > 2 is invalid" rule.
//! - [`DataMatrix`] holds a validated 2-D block and exposes
//!   [`DataMatrix::column_ranges`], [`DataMatrix::select_columns`],
//!   [`DataMatrix::with_intercept`], and [`DataMatrix::diagonal`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Sparse matrices are column-compressed (`col_ptr` covers every stored
//!   entry), as produced by `SparseColMat::try_new_from_triplets`.
//! - Implicit zeros of a sparse column take part in its min/max, so a
//!   sparse and a dense copy of the same data have identical column ranges.
//! - A column range is NaN whenever the column holds a NaN.
//!
//! Conventions
//! -----------
//! - Rows index observations, columns index variables.
//! - Operations that rebuild a sparse matrix return [`InputResult`] because
//!   `faer` validates triplet input; dense paths never fail.

use crate::validation::errors::{InputError, InputResult};
use faer::sparse::{SparseColMat, Triplet};
use ndarray::{Array1, Array2, ArrayD, Axis, Ix2};

/// Raw input block prior to validation.
#[derive(Clone)]
pub enum InputArray {
    Dense(ArrayD<f64>),
    Sparse(SparseColMat<usize, f64>),
}

impl std::fmt::Debug for InputArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputArray::Dense(arr) => f.debug_tuple("Dense").field(arr).finish(),
            InputArray::Sparse(mat) => f
                .debug_struct("Sparse")
                .field("nrows", &mat.nrows())
                .field("ncols", &mat.ncols())
                .finish(),
        }
    }
}

impl InputArray {
    /// Number of axes; sparse matrices are always 2-D.
    pub fn ndim(&self) -> usize {
        match self {
            InputArray::Dense(arr) => arr.ndim(),
            InputArray::Sparse(_) => 2,
        }
    }

    /// Raw shape as reported by the storage.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            InputArray::Dense(arr) => arr.shape().to_vec(),
            InputArray::Sparse(mat) => vec![mat.nrows(), mat.ncols()],
        }
    }

    /// `(rows, cols)` under the regression convention.
    ///
    /// Rank-1 arrays are read as a single column. Rank 0 and rank > 2 are
    /// rejected with [`InputError::InvalidDimensions`].
    pub fn matrix_shape(&self) -> InputResult<(usize, usize)> {
        let shape = self.shape();
        match shape.as_slice() {
            [rows] => Ok((*rows, 1)),
            [rows, cols] => Ok((*rows, *cols)),
            _ => Err(InputError::InvalidDimensions { ndim: shape.len() }),
        }
    }

    /// True when every stored value is finite.
    pub fn is_all_finite(&self) -> bool {
        match self {
            InputArray::Dense(arr) => arr.iter().all(|v| v.is_finite()),
            InputArray::Sparse(mat) => sparse_all_finite(mat),
        }
    }

    /// Convert to a 2-D [`DataMatrix`], reading rank-1 input as a column.
    pub fn to_matrix(&self) -> InputResult<DataMatrix> {
        match self {
            InputArray::Dense(arr) => {
                let (rows, cols) = self.matrix_shape()?;
                let dense = if arr.ndim() == 1 {
                    Array2::from_shape_vec((rows, cols), arr.iter().copied().collect())
                } else {
                    arr.clone().into_dimensionality::<Ix2>()
                }
                .map_err(|_| InputError::InvalidDimensions { ndim: arr.ndim() })?;
                Ok(DataMatrix::Dense(dense))
            }
            InputArray::Sparse(mat) => Ok(DataMatrix::Sparse(mat.clone())),
        }
    }
}

impl From<Array1<f64>> for InputArray {
    fn from(arr: Array1<f64>) -> Self {
        InputArray::Dense(arr.into_dyn())
    }
}

impl From<Array2<f64>> for InputArray {
    fn from(arr: Array2<f64>) -> Self {
        InputArray::Dense(arr.into_dyn())
    }
}

impl From<ArrayD<f64>> for InputArray {
    fn from(arr: ArrayD<f64>) -> Self {
        InputArray::Dense(arr)
    }
}

impl From<SparseColMat<usize, f64>> for InputArray {
    fn from(mat: SparseColMat<usize, f64>) -> Self {
        InputArray::Sparse(mat)
    }
}

impl From<DataMatrix> for InputArray {
    fn from(mat: DataMatrix) -> Self {
        match mat {
            DataMatrix::Dense(arr) => InputArray::Dense(arr.into_dyn()),
            DataMatrix::Sparse(mat) => InputArray::Sparse(mat),
        }
    }
}

/// DataMatrix — a validated 2-D variable block, dense or sparse.
///
/// Purpose
/// -------
/// Carry one design block (X, endogenous regressors, instruments, or an
/// adjacency structure) through the constant-column routine and the
/// weights containers without forcing sparse input into dense storage.
///
/// Invariants
/// ----------
/// - Always two-dimensional.
/// - Sparse storage is column-compressed.
#[derive(Clone)]
pub enum DataMatrix {
    Dense(Array2<f64>),
    Sparse(SparseColMat<usize, f64>),
}

impl std::fmt::Debug for DataMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataMatrix::Dense(arr) => f.debug_tuple("Dense").field(arr).finish(),
            DataMatrix::Sparse(mat) => f
                .debug_struct("Sparse")
                .field("nrows", &mat.nrows())
                .field("ncols", &mat.ncols())
                .finish(),
        }
    }
}

impl From<Array2<f64>> for DataMatrix {
    fn from(arr: Array2<f64>) -> Self {
        DataMatrix::Dense(arr)
    }
}

impl From<SparseColMat<usize, f64>> for DataMatrix {
    fn from(mat: SparseColMat<usize, f64>) -> Self {
        DataMatrix::Sparse(mat)
    }
}

impl DataMatrix {
    pub fn nrows(&self) -> usize {
        match self {
            DataMatrix::Dense(arr) => arr.nrows(),
            DataMatrix::Sparse(mat) => mat.nrows(),
        }
    }

    pub fn ncols(&self) -> usize {
        match self {
            DataMatrix::Dense(arr) => arr.ncols(),
            DataMatrix::Sparse(mat) => mat.ncols(),
        }
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, DataMatrix::Sparse(_))
    }

    pub fn is_all_finite(&self) -> bool {
        match self {
            DataMatrix::Dense(arr) => arr.iter().all(|v| v.is_finite()),
            DataMatrix::Sparse(mat) => sparse_all_finite(mat),
        }
    }

    /// Peak-to-peak range (max − min) of every column.
    ///
    /// Returns
    /// -------
    /// `Array1<f64>` of length `ncols()`. A zero entry marks a column whose
    /// entries are all identical. Empty columns (zero rows) report 0.
    ///
    /// Notes
    /// -----
    /// - For sparse storage a column with fewer stored entries than rows
    ///   also contains implicit zeros, which enter the min/max exactly as a
    ///   dense zero would.
    /// - Any NaN in a column makes its range NaN, so it is never reported
    ///   as constant.
    pub fn column_ranges(&self) -> Array1<f64> {
        match self {
            DataMatrix::Dense(arr) => {
                arr.columns().into_iter().map(|col| range_of(col.iter().copied())).collect()
            }
            DataMatrix::Sparse(mat) => {
                let nrows = mat.nrows();
                let (symbolic, values) = mat.parts();
                let col_ptr = symbolic.col_ptr();
                (0..mat.ncols())
                    .map(|col| {
                        let stored = &values[col_ptr[col]..col_ptr[col + 1]];
                        let implicit_zero = (stored.len() < nrows).then_some(0.0);
                        range_of(stored.iter().copied().chain(implicit_zero))
                    })
                    .collect()
            }
        }
    }

    /// Keep only the listed columns, in the listed order.
    pub fn select_columns(&self, keep: &[usize]) -> InputResult<DataMatrix> {
        match self {
            DataMatrix::Dense(arr) => Ok(DataMatrix::Dense(arr.select(Axis(1), keep))),
            DataMatrix::Sparse(mat) => {
                let (symbolic, values) = mat.parts();
                let col_ptr = symbolic.col_ptr();
                let row_idx = symbolic.row_idx();
                let mut triplets = Vec::new();
                for (new_col, &old_col) in keep.iter().enumerate() {
                    for idx in col_ptr[old_col]..col_ptr[old_col + 1] {
                        triplets.push(Triplet::new(row_idx[idx], new_col, values[idx]));
                    }
                }
                build_sparse(mat.nrows(), keep.len(), &triplets).map(DataMatrix::Sparse)
            }
        }
    }

    /// Prepend a literal intercept column of ones.
    pub fn with_intercept(&self) -> InputResult<DataMatrix> {
        match self {
            DataMatrix::Dense(arr) => {
                let (n, k) = arr.dim();
                let out = Array2::from_shape_fn((n, k + 1), |(i, j)| {
                    if j == 0 { 1.0 } else { arr[[i, j - 1]] }
                });
                Ok(DataMatrix::Dense(out))
            }
            DataMatrix::Sparse(mat) => {
                let (symbolic, values) = mat.parts();
                let col_ptr = symbolic.col_ptr();
                let row_idx = symbolic.row_idx();
                let mut triplets: Vec<Triplet<usize, usize, f64>> =
                    (0..mat.nrows()).map(|row| Triplet::new(row, 0, 1.0)).collect();
                for col in 0..mat.ncols() {
                    for idx in col_ptr[col]..col_ptr[col + 1] {
                        triplets.push(Triplet::new(row_idx[idx], col + 1, values[idx]));
                    }
                }
                build_sparse(mat.nrows(), mat.ncols() + 1, &triplets).map(DataMatrix::Sparse)
            }
        }
    }

    /// Main diagonal, length `min(nrows, ncols)`; missing sparse entries are 0.
    pub fn diagonal(&self) -> Array1<f64> {
        match self {
            DataMatrix::Dense(arr) => arr.diag().to_owned(),
            DataMatrix::Sparse(mat) => {
                let (symbolic, values) = mat.parts();
                let col_ptr = symbolic.col_ptr();
                let row_idx = symbolic.row_idx();
                let len = mat.nrows().min(mat.ncols());
                Array1::from_shape_fn(len, |col| {
                    (col_ptr[col]..col_ptr[col + 1])
                        .find(|&idx| row_idx[idx] == col)
                        .map_or(0.0, |idx| values[idx])
                })
            }
        }
    }

    /// Dense copy of the block.
    pub fn to_dense(&self) -> Array2<f64> {
        match self {
            DataMatrix::Dense(arr) => arr.clone(),
            DataMatrix::Sparse(mat) => {
                let mut dense = Array2::<f64>::zeros((mat.nrows(), mat.ncols()));
                let (symbolic, values) = mat.parts();
                let col_ptr = symbolic.col_ptr();
                let row_idx = symbolic.row_idx();
                for col in 0..mat.ncols() {
                    for idx in col_ptr[col]..col_ptr[col + 1] {
                        dense[[row_idx[idx], col]] = values[idx];
                    }
                }
                dense
            }
        }
    }
}

fn range_of(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut seen = false;
    for v in values {
        if v.is_nan() {
            return f64::NAN;
        }
        lo = lo.min(v);
        hi = hi.max(v);
        seen = true;
    }
    if seen { hi - lo } else { 0.0 }
}

fn sparse_all_finite(mat: &SparseColMat<usize, f64>) -> bool {
    let (symbolic, values) = mat.parts();
    let stored = symbolic.col_ptr()[mat.ncols()];
    values[..stored].iter().all(|v| v.is_finite())
}

pub(crate) fn build_sparse(
    nrows: usize, ncols: usize, triplets: &[Triplet<usize, usize, f64>],
) -> InputResult<SparseColMat<usize, f64>> {
    SparseColMat::try_new_from_triplets(nrows, ncols, triplets)
        .map_err(|err| InputError::SparseConstruction(format!("{err:?}")))
}
