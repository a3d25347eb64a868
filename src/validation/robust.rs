//! validation::robust — supported robust variance choices.

use crate::validation::errors::InputError;
use std::str::FromStr;

/// Robust variance adjustment requested for an estimator.
///
/// - `Hac`: heteroskedasticity and autocorrelation consistent; needs
///   kernel weights.
/// - `White`: heteroskedasticity consistent; incompatible with kernel
///   weights.
/// - `Ogmm`: optimal GMM weighting; incompatible with kernel weights.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"hac"`, `"white"`, `"ogmm"`). Unknown names return
/// `InputError::InvalidRobust`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobustChoice {
    Hac,
    White,
    Ogmm,
}

impl RobustChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            RobustChoice::Hac => "hac",
            RobustChoice::White => "white",
            RobustChoice::Ogmm => "ogmm",
        }
    }

    /// True for the variant that is computed from kernel weights.
    pub fn requires_kernel(&self) -> bool {
        matches!(self, RobustChoice::Hac)
    }
}

impl FromStr for RobustChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hac" => Ok(RobustChoice::Hac),
            "white" => Ok(RobustChoice::White),
            "ogmm" => Ok(RobustChoice::Ogmm),
            _ => Err(InputError::InvalidRobust { value: s.to_string() }),
        }
    }
}

impl std::fmt::Display for RobustChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
