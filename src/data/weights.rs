//! data::weights — capability traits for spatial and kernel weights.
//!
//! Purpose
//! -------
//! Describe what the validation layer needs from a spatial-weights object
//! without owning a weights implementation. Any type that can report its
//! unit count and the diagonal of its adjacency is accepted as a weights
//! graph; kernel weights additionally expose a unit ordering and a weight
//! list per unit.
//!
//! Key behaviors
//! -------------
//! - [`SpatialWeights`]: unit count, adjacency diagonal, and a
//!   [`Provenance`] marker (defaults to [`Provenance::Unverified`]).
//! - [`KernelWeights`]: everything in [`SpatialWeights`] plus
//!   [`KernelWeights::id_order`] and [`KernelWeights::weights_of`].
//! - [`WeightsMatrix`] and [`KernelMatrix`]: reference containers backed by
//!   a [`DataMatrix`], reporting [`Provenance::Verified`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Reference containers are square by construction; a [`KernelMatrix`]
//!   has exactly one id per unit.
//! - A kernel weight list for unit `i` contains the self weight (the
//!   diagonal entry) followed by every non-zero off-diagonal entry of row
//!   `i`, in column order.
//!
//! Conventions
//! -----------
//! - Third-party weights implementations keep the default `provenance()`;
//!   checks then succeed but flag the result as unverified instead of
//!   rejecting the object.

use crate::{
    data::matrix::DataMatrix,
    validation::errors::{InputError, InputResult},
};
use ndarray::Array1;
use std::collections::HashMap;

/// Whether a weights object comes from a known implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Verified,
    Unverified,
}

/// Adjacency structure over `n` spatial units.
pub trait SpatialWeights {
    /// Number of spatial units (rows of the adjacency).
    fn unit_count(&self) -> usize;

    /// Main diagonal of the adjacency.
    fn diagonal(&self) -> Array1<f64>;

    fn provenance(&self) -> Provenance {
        Provenance::Unverified
    }
}

/// Kernel weights used for HAC variance estimation.
pub trait KernelWeights: SpatialWeights {
    /// Unit identifiers in adjacency order.
    fn id_order(&self) -> &[String];

    /// Weight list of one unit, including its self weight.
    fn weights_of(&self, id: &str) -> Option<&[f64]>;
}

/// WeightsMatrix — square adjacency in dense or sparse storage.
#[derive(Debug, Clone)]
pub struct WeightsMatrix {
    adjacency: DataMatrix,
}

impl WeightsMatrix {
    /// Wrap an adjacency matrix.
    ///
    /// Errors
    /// ------
    /// - `InputError::NotSquare` when the adjacency is not `n × n`.
    pub fn new(adjacency: impl Into<DataMatrix>) -> InputResult<Self> {
        let adjacency = adjacency.into();
        ensure_square(&adjacency)?;
        Ok(WeightsMatrix { adjacency })
    }

    pub fn adjacency(&self) -> &DataMatrix {
        &self.adjacency
    }
}

impl SpatialWeights for WeightsMatrix {
    fn unit_count(&self) -> usize {
        self.adjacency.nrows()
    }

    fn diagonal(&self) -> Array1<f64> {
        self.adjacency.diagonal()
    }

    fn provenance(&self) -> Provenance {
        Provenance::Verified
    }
}

/// KernelMatrix — kernel weights with an explicit unit ordering.
///
/// Purpose
/// -------
/// Hold a square kernel adjacency together with the ids of its units and
/// the per-unit weight lists the HAC bound check walks over.
///
/// Fields
/// ------
/// - `adjacency`: [`DataMatrix`]
///   Square kernel matrix; row `i` belongs to `id_order[i]`.
/// - `id_order`: `Vec<String>`
///   Unit identifiers in row order.
/// - `weights`: `HashMap<String, Vec<f64>>`
///   Self weight followed by the non-zero neighbor weights, per unit.
#[derive(Debug, Clone)]
pub struct KernelMatrix {
    adjacency: DataMatrix,
    id_order: Vec<String>,
    weights: HashMap<String, Vec<f64>>,
}

impl KernelMatrix {
    /// Build kernel weights from unit ids and a square adjacency.
    ///
    /// Errors
    /// ------
    /// - `InputError::NotSquare` when the adjacency is not `n × n`.
    /// - `InputError::KernelIdCount` when `id_order.len() != n`.
    pub fn new(id_order: Vec<String>, adjacency: impl Into<DataMatrix>) -> InputResult<Self> {
        let adjacency = adjacency.into();
        ensure_square(&adjacency)?;
        if id_order.len() != adjacency.nrows() {
            return Err(InputError::KernelIdCount {
                ids: id_order.len(),
                units: adjacency.nrows(),
            });
        }

        let dense = adjacency.to_dense();
        let weights = id_order
            .iter()
            .zip(dense.rows())
            .enumerate()
            .map(|(i, (id, row))| {
                let mut list = vec![row[i]];
                list.extend(
                    row.iter().enumerate().filter(|&(j, &v)| j != i && v != 0.0).map(|(_, &v)| v),
                );
                (id.clone(), list)
            })
            .collect();

        Ok(KernelMatrix { adjacency, id_order, weights })
    }

    pub fn adjacency(&self) -> &DataMatrix {
        &self.adjacency
    }
}

impl SpatialWeights for KernelMatrix {
    fn unit_count(&self) -> usize {
        self.adjacency.nrows()
    }

    fn diagonal(&self) -> Array1<f64> {
        self.adjacency.diagonal()
    }

    fn provenance(&self) -> Provenance {
        Provenance::Verified
    }
}

impl KernelWeights for KernelMatrix {
    fn id_order(&self) -> &[String] {
        &self.id_order
    }

    fn weights_of(&self, id: &str) -> Option<&[f64]> {
        self.weights.get(id).map(Vec::as_slice)
    }
}

fn ensure_square(adjacency: &DataMatrix) -> InputResult<()> {
    if adjacency.nrows() != adjacency.ncols() {
        return Err(InputError::NotSquare { rows: adjacency.nrows(), cols: adjacency.ncols() });
    }
    Ok(())
}
