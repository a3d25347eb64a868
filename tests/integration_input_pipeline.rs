//! Integration tests for the input validation and naming pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path an estimator takes before fitting: shape
//!   agreement, dependent-variable normalization, constant handling,
//!   weights/robust/diagnostics checks, regime sufficiency, and the labels
//!   the fitted model is reported with.
//! - Use a realistic 49-unit lattice dataset rather than toy 2x2 inputs.
//!
//! Coverage
//! --------
//! - `validation`:
//!   - `check_arrays`, `check_y`, `check_constant`, `check_regimes`.
//!   - `ValidatedInputs::apply` with weights, kernel weights, and options.
//! - `naming`:
//!   - Single-model names built from the validated design.
//!   - Multi-regime expansion with spatial-lag instruments.
//!
//! Exclusions
//! ----------
//! - Individual error branches of each check; those are covered by unit
//!   tests.
//! - Python bindings.
use std::collections::BTreeMap;

use approx::assert_relative_eq;
use ndarray::{Array1, Array2};
use spreg_inputs::{
    data::{DataMatrix, InputArray, KernelMatrix, Provenance, WeightsMatrix},
    naming::{
        EndogenousSpec, ModelLabels, MultiRegimeSpec, SpatialLagSpec, set_name_h, set_name_multi,
        set_name_q, set_name_q_sp, set_name_x, set_name_y, set_name_yend, set_name_yend_sp,
    },
    validation::{
        InputError, RobustChoice, ValidatedInputs, ValidationOptions, check_arrays,
        check_constant, check_regimes, check_y,
    },
};

const SIDE: usize = 7;
const N: usize = SIDE * SIDE;

/// Rook contiguity on a `SIDE x SIDE` lattice with a zero diagonal.
fn rook_lattice() -> Array2<f64> {
    let mut w = Array2::<f64>::zeros((N, N));
    for r in 0..SIDE {
        for c in 0..SIDE {
            let i = r * SIDE + c;
            if r + 1 < SIDE {
                w[[i, i + SIDE]] = 1.0;
                w[[i + SIDE, i]] = 1.0;
            }
            if c + 1 < SIDE {
                w[[i, i + 1]] = 1.0;
                w[[i + 1, i]] = 1.0;
            }
        }
    }
    w
}

/// Triangular distance-decay kernel on the same lattice, unit diagonal.
fn lattice_kernel() -> Array2<f64> {
    Array2::from_shape_fn((N, N), |(i, j)| {
        let (ri, ci) = ((i / SIDE) as f64, (i % SIDE) as f64);
        let (rj, cj) = ((j / SIDE) as f64, (j % SIDE) as f64);
        let dist = ((ri - rj).powi(2) + (ci - cj).powi(2)).sqrt();
        (1.0 - dist / 3.0).max(0.0)
    })
}

/// Dependent variable and a two-column design with no constant column.
fn columbus_like() -> (Array1<f64>, Array2<f64>) {
    let y = Array1::from_shape_fn(N, |i| 15.0 + 0.5 * i as f64 - 0.01 * (i * i) as f64);
    let x = Array2::from_shape_fn((N, 2), |(i, j)| match j {
        0 => 10.0 + (i % 11) as f64,
        _ => 30.0 + 2.5 * (i % 5) as f64,
    });
    (y, x)
}

#[test]
// Purpose
// -------
// Run the full single-model path on a 49-observation dataset.
//
// Given
// -----
// - y of length 49 (rank 1), X of shape (49, 2) without a constant column.
//
// Expect
// ------
// - `check_arrays` returns 49 and `check_y` returns y as (49, 1) unchanged.
// - `check_constant` prepends an intercept and removes nothing.
// - `set_name_x(None, X_with_intercept, false)` returns
//   [CONSTANT, var_1, var_2].
fn single_model_pipeline_on_lattice_data() {
    // Arrange
    let (y, x) = columbus_like();
    let y_in = InputArray::from(y.clone());
    let x_in = InputArray::from(x.clone());

    // Act
    let n = check_arrays(&[Some(&y_in), Some(&x_in)]).expect("consistent shapes");
    let y_checked = check_y(&y_in, n).expect("valid dependent");
    let design = check_constant(&DataMatrix::Dense(x), None, false).expect("dense design");
    let name_x = set_name_x(design.names.as_deref(), &design.x, false);

    // Assert
    assert_eq!(n, N);
    assert_eq!(y_checked.dim(), (N, 1));
    for (got, want) in y_checked.column(0).iter().zip(y.iter()) {
        assert_relative_eq!(*got, *want);
    }
    assert_eq!(design.x.ncols(), 3);
    assert!(design.warning.is_none());
    assert_eq!(name_x, vec!["CONSTANT", "var_1", "var_2"]);
}

#[test]
// Purpose
// -------
// Run the configured validation pass with weights and HAC kernel weights.
//
// Given
// -----
// - Rook weights and a triangular kernel on the 7x7 lattice.
// - Options: weights required, HAC, spatial diagnostics on.
//
// Expect
// ------
// - Report carries n = 49, verified weights, and `RobustChoice::Hac`.
// - Switching to White with the same kernel is rejected.
fn configured_validation_with_weights_and_kernel() {
    // Arrange
    let (y, x) = columbus_like();
    let x_in = InputArray::from(x);
    let w = WeightsMatrix::new(rook_lattice()).expect("square weights");
    let ids: Vec<String> = (0..N).map(|i| format!("unit{i}")).collect();
    let wk = KernelMatrix::new(ids, lattice_kernel()).expect("square kernel");
    let hac = ValidationOptions::new(true, false, Some("HAC".to_string()), true);
    let white = ValidationOptions { robust: Some("white".to_string()), ..hac.clone() };

    // Act
    let inputs = ValidatedInputs::new(&InputArray::from(y), &[Some(&x_in)]).expect("valid data");
    let report = inputs.apply(&hac, Some(&w), Some(&wk)).expect("valid configuration");
    let rejected = inputs.apply(&white, Some(&w), Some(&wk));

    // Assert
    assert_eq!(report.n, N);
    assert_eq!(report.weights.provenance, Some(Provenance::Verified));
    assert!(!report.weights.is_unverified());
    assert_eq!(report.robust, Some(RobustChoice::Hac));
    assert!(matches!(rejected, Err(InputError::KernelNotAllowed { .. })));
}

#[test]
// Purpose
// -------
// Check regime sufficiency and expand labels for a spatial-lag IV model
// estimated separately in each regime.
//
// Given
// -----
// - Three regimes over 49 observations, k = 3 regressors.
// - name_y = "crime", name_x = [inc], yend = [hoval], q = [discbd],
//   w_lags = 2, lagged instruments.
//
// Expect
// ------
// - Regimes pass (49 / 3 = 16 >= 4); 20 regimes fail.
// - Regime "east" labels match the single-model functions applied to the
//   "east_"-prefixed names.
fn multi_regime_spatial_lag_labels() {
    // Arrange
    let regimes: Vec<&str> =
        (0..N).map(|i| ["east", "north", "west"][i % 3]).collect();
    let many: Vec<usize> = (0..N).map(|i| i % 20).collect();
    let (_, x) = columbus_like();
    let x = DataMatrix::Dense(x.slice(ndarray::s![.., 0..1]).to_owned());
    let block = DataMatrix::Dense(Array2::zeros((N, 1)));
    let name_x = vec!["inc".to_string()];
    let name_yend = vec!["hoval".to_string()];
    let name_q = vec!["discbd".to_string()];
    let models: BTreeMap<String, ModelLabels> = ["east", "north", "west"]
        .iter()
        .map(|id| (id.to_string(), ModelLabels::default()))
        .collect();
    let ids: Vec<String> = models.keys().cloned().collect();
    let spec = MultiRegimeSpec {
        title: "GM_Lag - Regime ",
        name_ds: Some("columbus"),
        name_y: Some("crime"),
        name_x: Some(&name_x),
        name_multi_id: Some("nsa"),
        robust: Some("white"),
        endog: Some(EndogenousSpec {
            yend: Some(&block),
            q: Some(&block),
            name_yend: Some(&name_yend),
            name_q: Some(&name_q),
        }),
        sp_lag: Some(SpatialLagSpec::new(2, true)),
        ..Default::default()
    };

    // Act
    let sufficient = check_regimes(&regimes, N, 3);
    let insufficient = check_regimes(&many, N, 3);
    let out = set_name_multi(&models, &ids, &x, &spec);

    // Assert
    assert!(sufficient.is_ok());
    assert!(matches!(
        insufficient,
        Err(InputError::InsufficientObservations { n: N, regimes: 20, k: 3 })
    ));

    let east = &out["east"];
    let prefix = |names: Vec<String>| -> Vec<String> {
        names.into_iter().map(|name| format!("east_{name}")).collect()
    };
    let expected_x = prefix(set_name_x(Some(&name_x), &x, false));
    let expected_y = format!("east_{}", set_name_y(Some("crime")));
    let mut expected_yend = prefix(set_name_yend(Some(&name_yend), Some(&block)));
    expected_yend.push(set_name_yend_sp(&expected_y));
    let mut expected_q = prefix(set_name_q(Some(&name_q), Some(&block)));
    expected_q.extend(set_name_q_sp(&expected_x, 2, &expected_q, true, false));

    assert_eq!(east.title, "GM_Lag - Regime east");
    assert_eq!(east.name_ds, "columbus");
    assert_eq!(east.name_multi_id, "nsa");
    assert_eq!(east.robust, "white");
    assert_eq!(east.name_w, None);
    assert_eq!(east.name_y, expected_y);
    assert_eq!(east.name_x, expected_x);
    assert_eq!(east.name_yend, expected_yend);
    assert_eq!(east.name_q, expected_q);
    assert_eq!(
        east.name_q,
        vec![
            "east_discbd",
            "W_east_inc",
            "W_east_discbd",
            "W2_east_inc",
            "W2_east_discbd"
        ]
    );
    assert_eq!(east.name_h, set_name_h(&expected_x, &expected_q));
    assert_eq!(out["west"].name_x, vec!["west_CONSTANT", "west_inc"]);
}
