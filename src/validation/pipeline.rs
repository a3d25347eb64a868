//! validation::pipeline — ordered validation with the observation count
//! threaded through as a value.
//!
//! Purpose
//! -------
//! Run the independent checks of [`checks`](crate::validation::checks) in
//! the order estimators depend on, without relying on callers to remember
//! that order. The shape check and the dependent-variable check produce a
//! [`ValidatedInputs`] value holding `n` and the reshaped `y`; every check
//! that needs them (weights, robust, diagnostics, regimes) is a method on
//! that value, so it cannot run before `n` and `y` exist.
//!
//! Key behaviors
//! -------------
//! - [`ValidatedInputs::new`] runs `check_arrays` over `y` and the other
//!   blocks, then `check_y` with the resulting `n`.
//! - [`ValidationOptions`] gathers the estimator-level settings (weights
//!   required, time mode, robust choice, spatial diagnostics).
//! - [`ValidatedInputs::apply`] runs the configured weights, robust, and
//!   diagnostics checks and returns a [`ValidationReport`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A `ValidatedInputs` value always satisfies: `y.dim() == (n, 1)`,
//!   all blocks share `n` rows, all values are finite.
//! - The report's `weights` field carries the provenance of the weights
//!   object; unverified implementations do not fail validation.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ndarray::{Array1, Array2};
//! use spreg_inputs::data::InputArray;
//! use spreg_inputs::validation::{ValidatedInputs, ValidationOptions};
//!
//! let y = InputArray::from(Array1::linspace(0.0, 1.0, 49));
//! let x = InputArray::from(Array2::from_shape_fn((49, 2), |(i, j)| (i * (j + 1)) as f64));
//!
//! let inputs = ValidatedInputs::new(&y, &[Some(&x)]).unwrap();
//! let report = inputs.apply(&ValidationOptions::default(), None, None).unwrap();
//! assert_eq!(report.n, 49);
//! assert_eq!(report.y.dim(), (49, 1));
//! ```

use crate::{
    data::{
        matrix::InputArray,
        weights::{KernelWeights, SpatialWeights},
    },
    validation::{
        checks::{
            WeightsCheck, check_arrays, check_regimes, check_robust, check_spat_diag,
            check_weights, check_y,
        },
        errors::InputResult,
        robust::RobustChoice,
    },
};
use ndarray::Array2;
use std::hash::Hash;

/// ValidationOptions — estimator-level validation settings.
///
/// Fields
/// ------
/// - `w_required`: `bool`
///   The estimator cannot run without a weights graph.
/// - `time`: `bool`
///   Panel data: the weights unit count need not equal `n`.
/// - `robust`: `Option<String>`
///   Requested robust adjustment (`"hac"`, `"white"`, `"ogmm"`), if any.
/// - `spat_diag`: `bool`
///   Spatial diagnostics were requested.
///
/// Notes
/// -----
/// - `Default` describes a plain non-spatial estimator: no weights
///   required, no time dimension, no robust adjustment, no diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOptions {
    pub w_required: bool,
    pub time: bool,
    pub robust: Option<String>,
    pub spat_diag: bool,
}

impl ValidationOptions {
    pub fn new(w_required: bool, time: bool, robust: Option<String>, spat_diag: bool) -> Self {
        ValidationOptions { w_required, time, robust, spat_diag }
    }
}

/// Outcome of a full validation pass.
///
/// - `n`: shared observation count.
/// - `y`: dependent variable as `(n, 1)`.
/// - `weights`: result of the weights check (provenance flag).
/// - `robust`: parsed robust choice, `None` when unadjusted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub n: usize,
    pub y: Array2<f64>,
    pub weights: WeightsCheck,
    pub robust: Option<RobustChoice>,
}

/// ValidatedInputs — observation count and dependent variable that passed
/// the shape and dependent checks.
///
/// Purpose
/// -------
/// Carry `n` and `y` forward as typed values so that checks depending on
/// them are only reachable after they were validated.
///
/// Invariants
/// ----------
/// - `y.dim() == (n, 1)` and every block given to [`ValidatedInputs::new`]
///   has `n` rows and finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInputs {
    n: usize,
    y: Array2<f64>,
}

impl ValidatedInputs {
    /// Run the shape check over `y` and `others`, then the dependent check.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `&InputArray`
    ///   Dependent variable (flat or single column, dense).
    /// - `others`: `&[Option<&InputArray>]`
    ///   Remaining blocks (X, endogenous regressors, instruments); `None`
    ///   entries are skipped.
    ///
    /// Errors
    /// ------
    /// - Any error of [`check_arrays`] or [`check_y`].
    pub fn new(y: &InputArray, others: &[Option<&InputArray>]) -> InputResult<Self> {
        let mut arrays = Vec::with_capacity(others.len() + 1);
        arrays.push(Some(y));
        arrays.extend_from_slice(others);

        let n = check_arrays(&arrays)?;
        let y = check_y(y, n)?;
        log::debug!("validated {} input blocks with n = {n}", arrays.iter().flatten().count());
        Ok(ValidatedInputs { n, y })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    pub fn into_y(self) -> Array2<f64> {
        self.y
    }

    /// [`check_weights`] against the validated `y`.
    pub fn check_weights(
        &self, w: Option<&dyn SpatialWeights>, w_required: bool, time: bool,
    ) -> InputResult<WeightsCheck> {
        check_weights(w, &self.y, w_required, time)
    }

    /// [`check_robust`]; independent of `n` but kept here so a full pass
    /// reads as one chain of calls.
    pub fn check_robust(
        &self, robust: Option<&str>, wk: Option<&dyn KernelWeights>,
    ) -> InputResult<Option<RobustChoice>> {
        check_robust(robust, wk)
    }

    /// [`check_spat_diag`].
    pub fn check_spat_diag(
        &self, spat_diag: bool, w: Option<&dyn SpatialWeights>,
    ) -> InputResult<()> {
        check_spat_diag(spat_diag, w)
    }

    /// [`check_regimes`] with the validated `n`.
    pub fn check_regimes<R: Eq + Hash>(&self, reg_set: &[R], k: usize) -> InputResult<()> {
        check_regimes(reg_set, self.n, k)
    }

    /// Run weights, robust, and diagnostics checks as configured.
    ///
    /// Parameters
    /// ----------
    /// - `opts`: `&ValidationOptions`
    ///   Estimator-level settings.
    /// - `w`: `Option<&dyn SpatialWeights>`
    ///   Spatial weights, if any.
    /// - `wk`: `Option<&dyn KernelWeights>`
    ///   Kernel weights for HAC, if any.
    ///
    /// Returns
    /// -------
    /// `InputResult<ValidationReport>`
    ///   The validated `n` and `y` plus the weights and robust outcomes.
    ///
    /// Errors
    /// ------
    /// - The first error of [`check_weights`], [`check_robust`], or
    ///   [`check_spat_diag`], in that order.
    pub fn apply(
        &self, opts: &ValidationOptions, w: Option<&dyn SpatialWeights>,
        wk: Option<&dyn KernelWeights>,
    ) -> InputResult<ValidationReport> {
        let weights = self.check_weights(w, opts.w_required, opts.time)?;
        let robust = self.check_robust(opts.robust.as_deref(), wk)?;
        self.check_spat_diag(opts.spat_diag, w)?;

        Ok(ValidationReport { n: self.n, y: self.y.clone(), weights, robust })
    }
}
