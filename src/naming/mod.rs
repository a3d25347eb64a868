//! naming — variable labels for regression output.
//!
//! Purpose
//! -------
//! Turn optional user-supplied names into the complete, ordered label sets
//! regression reports print, and expand them per regime for multi-regime
//! models.
//!
//! Key behaviors
//! -------------
//! - [`names`]: total single-model name functions with generic fallbacks
//!   (`var_<i>`, `endogenous_<i>`, `instrument_<i>`, `W_` / `Wk_` lags).
//! - [`regimes`]: [`set_name_multi`] and the [`LabeledModel`] seam
//!   estimator types implement.
//!
//! Conventions
//! -----------
//! - Name synthesis never fails; absent and empty inputs are treated alike.

pub mod names;
pub mod regimes;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::names::{
    CONSTANT, set_name_ds, set_name_h, set_name_q, set_name_q_sp, set_name_w, set_name_x,
    set_name_y, set_name_yend, set_name_yend_sp, set_robust,
};
pub use self::regimes::{
    EndogenousSpec, LabeledModel, ModelLabels, MultiRegimeSpec, SpatialLagSpec, set_name_multi,
};
