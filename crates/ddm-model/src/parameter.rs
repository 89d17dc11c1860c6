//! Drift-diffusion model parameters.
//!
//! Parameter tags use the short names the inference engine expects
//! (`v`, `a`, `z`, `dc`, `sv`, `sz`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::link::LinkFunction;

/// A parameter of the diffusion model that a recipe may modulate or include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    /// Drift rate (evidence-accumulation speed).
    V,
    /// Boundary separation.
    A,
    /// Drift criterion: additive, response-independent offset to the drift rate.
    Dc,
    /// Starting point between the boundaries, constrained to (0, 1).
    Z,
    /// Across-trial drift-rate variability.
    Sv,
    /// Across-trial starting-point variability.
    Sz,
}

impl Parameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::V => "v",
            Parameter::A => "a",
            Parameter::Dc => "dc",
            Parameter::Z => "z",
            Parameter::Sv => "sv",
            Parameter::Sz => "sz",
        }
    }

    /// Position in the canonical output order: rate, boundary, drift
    /// criterion, bias, then the variability parameters.
    pub fn canonical_rank(&self) -> u8 {
        match self {
            Parameter::V => 0,
            Parameter::A => 1,
            Parameter::Dc => 2,
            Parameter::Z => 3,
            Parameter::Sv => 4,
            Parameter::Sz => 5,
        }
    }

    /// Link function used when this parameter is the target of a regression.
    ///
    /// Only the bias lives on a bounded domain; everything else is modelled on
    /// the real line.
    pub fn default_link(&self) -> LinkFunction {
        match self {
            Parameter::Z => LinkFunction::Logistic,
            _ => LinkFunction::Identity,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
