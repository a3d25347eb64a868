//! naming::regimes — per-regime label expansion for multi-regime models.
//!
//! Purpose
//! -------
//! Give every regime-specific sub-model of a multi-regime regression its
//! own labels: a title suffixed with the regime id and variable names
//! prefixed with `"<id>_"`, derived from one shared naming request.
//!
//! Key behaviors
//! -------------
//! - [`set_name_multi`] borrows the model map and returns a new one; the
//!   input map is never modified.
//! - Only ids present in both the requested id list and the map are
//!   expanded; missing ids are skipped and logged at `debug`.
//! - With endogenous information the endogenous and instrument names are
//!   prefixed too; with spatial-lag information the lagged dependent
//!   variable and spatial instruments are appended, and the combined
//!   `name_z` / `name_h` sets are rebuilt.
//!
//! Invariants & assumptions
//! ------------------------
//! - The shared names are resolved once with the single-model rules of
//!   [`crate::naming::names`] before any prefixing, so every regime sees the
//!   same base labels.
//! - Fields of a model not touched by the expansion keep their values.

use std::{collections::BTreeMap, fmt::Display};

use crate::{
    data::{matrix::DataMatrix, weights::SpatialWeights},
    naming::names::{
        set_name_ds, set_name_q, set_name_q_sp, set_name_w, set_name_x, set_name_y,
        set_name_yend, set_name_yend_sp, set_robust,
    },
};

/// Labels carried by a fitted regression for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelLabels {
    pub title: String,
    pub name_ds: String,
    pub name_y: String,
    pub name_x: Vec<String>,
    pub name_yend: Vec<String>,
    pub name_q: Vec<String>,
    pub name_z: Vec<String>,
    pub name_h: Vec<String>,
    pub robust: String,
    pub name_w: Option<String>,
    pub name_multi_id: String,
}

/// A model whose reporting labels can be read and replaced.
///
/// Estimator result types implement this to take part in
/// [`set_name_multi`]; the expansion clones each model and rewrites its
/// labels through [`LabeledModel::labels_mut`].
pub trait LabeledModel: Clone {
    fn labels(&self) -> &ModelLabels;
    fn labels_mut(&mut self) -> &mut ModelLabels;
}

impl LabeledModel for ModelLabels {
    fn labels(&self) -> &ModelLabels {
        self
    }

    fn labels_mut(&mut self) -> &mut ModelLabels {
        self
    }
}

/// Endogenous blocks and their names, as used by instrumental-variable
/// models.
///
/// An absent block yields no names; an absent or empty name list with a
/// present block yields generic names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndogenousSpec<'a> {
    pub yend: Option<&'a DataMatrix>,
    pub q: Option<&'a DataMatrix>,
    pub name_yend: Option<&'a [String]>,
    pub name_q: Option<&'a [String]>,
}

/// Spatial-lag instrument settings.
///
/// Fields
/// ------
/// - `w_lags`: `usize`
///   Highest spatial lag order used for the instruments.
/// - `lag_q`: `bool`
///   Also lag the external instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialLagSpec {
    pub w_lags: usize,
    pub lag_q: bool,
}

impl SpatialLagSpec {
    pub fn new(w_lags: usize, lag_q: bool) -> Self {
        SpatialLagSpec { w_lags, lag_q }
    }
}

impl Default for SpatialLagSpec {
    /// First-order lags, external instruments lagged.
    fn default() -> Self {
        SpatialLagSpec { w_lags: 1, lag_q: true }
    }
}

/// Shared naming request for a multi-regime expansion.
///
/// Every `Option<&str>` / `Option<&[String]>` field falls back to the
/// single-model default when `None` or empty. `title` is used verbatim as
/// the prefix of each regime title.
#[derive(Clone, Copy, Default)]
pub struct MultiRegimeSpec<'a> {
    pub title: &'a str,
    pub name_ds: Option<&'a str>,
    pub name_y: Option<&'a str>,
    pub name_x: Option<&'a [String]>,
    pub name_multi_id: Option<&'a str>,
    pub name_w: Option<&'a str>,
    pub weights: Option<&'a dyn SpatialWeights>,
    pub robust: Option<&'a str>,
    pub endog: Option<EndogenousSpec<'a>>,
    pub sp_lag: Option<SpatialLagSpec>,
}

/// Expand shared labels into per-regime labels.
///
/// Parameters
/// ----------
/// - `models`: `&BTreeMap<K, M>`
///   Regime-specific sub-models keyed by regime id.
/// - `regime_ids`: `&[K]`
///   Ids to expand, in order.
/// - `x`: `&DataMatrix`
///   Shared exogenous block; only its column count is used, for generic
///   names.
/// - `spec`: `&MultiRegimeSpec`
///   Shared names and the optional endogenous / spatial-lag information.
///
/// Returns
/// -------
/// `BTreeMap<K, M>` — a copy of `models` in which every expanded regime
/// `r` carries:
/// - `title = "<title><r>"`, `name_y = "<r>_<name_y>"`,
///   `name_x = ["<r>_<name>", ...]` (intercept included);
/// - dataset, regime-id, robust and weights names from the single-model
///   rules;
/// - with endogenous or spatial-lag information, prefixed `name_yend` and
///   `name_q`, the spatial extensions when lagged, and
///   `name_z = name_x + name_yend`, `name_h = name_x + name_q`.
///
/// Examples
/// --------
/// ```rust
/// use std::collections::BTreeMap;
/// use ndarray::Array2;
/// use spreg_inputs::data::DataMatrix;
/// use spreg_inputs::naming::{ModelLabels, MultiRegimeSpec, set_name_multi};
///
/// let models: BTreeMap<&str, ModelLabels> =
///     [("a", ModelLabels::default()), ("b", ModelLabels::default())].into_iter().collect();
/// let x = DataMatrix::Dense(Array2::zeros((10, 2)));
/// let names = vec!["inc".to_string()];
/// let spec = MultiRegimeSpec { title: "OLS - REGIME ", name_x: Some(&names), ..Default::default() };
///
/// let out = set_name_multi(&models, &["a", "b"], &x, &spec);
/// assert_eq!(out["b"].title, "OLS - REGIME b");
/// assert_eq!(out["a"].name_x, vec!["a_CONSTANT", "a_inc"]);
/// ```
pub fn set_name_multi<K, M>(
    models: &BTreeMap<K, M>, regime_ids: &[K], x: &DataMatrix, spec: &MultiRegimeSpec<'_>,
) -> BTreeMap<K, M>
where
    K: Ord + Clone + Display,
    M: LabeledModel,
{
    let name_ds = set_name_ds(spec.name_ds);
    let name_y = set_name_y(spec.name_y);
    let name_x = set_name_x(spec.name_x, x, false);
    let name_multi_id = set_name_ds(spec.name_multi_id);
    let robust = set_robust(spec.robust);
    let name_w = set_name_w(spec.name_w, spec.weights);

    let instrumented = spec.endog.is_some() || spec.sp_lag.is_some();
    let endog = spec.endog.unwrap_or_default();
    let name_yend = set_name_yend(endog.name_yend, endog.yend);
    let name_q = set_name_q(endog.name_q, endog.q);

    let mut expanded = models.clone();
    for id in regime_ids {
        let Some(model) = expanded.get_mut(id) else {
            log::debug!("regime {id} has no model; skipping name expansion");
            continue;
        };
        let labels = model.labels_mut();
        let prefix = |names: &[String]| -> Vec<String> {
            names.iter().map(|name| format!("{id}_{name}")).collect()
        };

        labels.title = format!("{}{id}", spec.title);
        labels.name_ds = name_ds.clone();
        labels.robust = robust.clone();
        labels.name_w = name_w.clone();
        labels.name_y = format!("{id}_{name_y}");
        labels.name_x = prefix(&name_x);
        labels.name_multi_id = name_multi_id.clone();

        if instrumented {
            let mut regime_yend = prefix(&name_yend);
            let mut regime_q = prefix(&name_q);
            if let Some(sp_lag) = spec.sp_lag {
                regime_yend.push(set_name_yend_sp(&labels.name_y));
                let spatial_q =
                    set_name_q_sp(&labels.name_x, sp_lag.w_lags, &regime_q, sp_lag.lag_q, false);
                regime_q.extend(spatial_q);
            }
            labels.name_z = labels.name_x.iter().chain(&regime_yend).cloned().collect();
            labels.name_h = labels.name_x.iter().chain(&regime_q).cloned().collect();
            labels.name_yend = regime_yend;
            labels.name_q = regime_q;
        }
    }
    expanded
}
