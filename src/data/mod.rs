//! data — input containers and weights contracts.
//!
//! Purpose
//! -------
//! Hold the value types the validation and naming layers operate on:
//! dense/sparse variable blocks ([`InputArray`], [`DataMatrix`]) and the
//! capability traits through which spatial and kernel weights are consumed
//! ([`SpatialWeights`], [`KernelWeights`]).
//!
//! Key behaviors
//! -------------
//! - Interpret raw inputs under the regression convention (rank 1 is one
//!   column) and expose column ranges, column selection, intercept
//!   insertion, and diagonals on either storage form.
//! - Ship reference weights containers ([`WeightsMatrix`],
//!   [`KernelMatrix`]) for callers without their own weights library.
//!
//! Conventions
//! -----------
//! - No I/O and no logging; everything here is a plain container or a
//!   column-wise primitive.

pub mod matrix;
pub mod weights;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::matrix::{DataMatrix, InputArray};
pub use self::weights::{KernelMatrix, KernelWeights, Provenance, SpatialWeights, WeightsMatrix};
