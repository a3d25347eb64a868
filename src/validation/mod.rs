//! validation — structural and numerical checks on regression inputs.
//!
//! Purpose
//! -------
//! Collect the checks run on user-supplied data before estimation: array
//! shapes and finiteness, the dependent variable, spatial and kernel
//! weights, the robust variance choice, the spatial diagnostics
//! precondition, regime sufficiency, and constant-column handling.
//!
//! Key behaviors
//! -------------
//! - Independent check functions ([`check_arrays`], [`check_y`],
//!   [`check_weights`], [`check_robust`], [`check_spat_diag`],
//!   [`check_regimes`]) that either succeed or return an [`InputError`].
//! - [`check_constant`] removes constant columns and inserts the intercept.
//! - [`ValidatedInputs`] sequences the checks, threading the validated `n`
//!   and `y` to the checks that depend on them; [`ValidationOptions`]
//!   configures a full pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - Checks are pure and fail fast; nothing is recovered internally.
//! - The only non-fatal condition is an unverified weights
//!   implementation, surfaced through [`WeightsCheck`].
//!
//! Conventions
//! -----------
//! - A single error type, [`InputError`], covers every violation; its
//!   `Display` message names the violated invariant.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its branches; the end-to-end
//!   path is covered in `tests/integration_input_pipeline.rs`.

pub mod checks;
pub mod constant;
pub mod errors;
pub mod pipeline;
pub mod robust;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::checks::{
    WeightsCheck, check_arrays, check_regimes, check_robust, check_spat_diag, check_weights,
    check_y,
};
pub use self::constant::{ConstantCheck, check_constant};
pub use self::errors::{InputError, InputResult};
pub use self::pipeline::{ValidatedInputs, ValidationOptions, ValidationReport};
pub use self::robust::RobustChoice;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can `use spreg_inputs::validation::prelude::*;` to
// import the validation surface in a single line.

pub mod prelude {
    pub use super::checks::{check_arrays, check_y};
    pub use super::constant::check_constant;
    pub use super::errors::{InputError, InputResult};
    pub use super::pipeline::{ValidatedInputs, ValidationOptions};
}
