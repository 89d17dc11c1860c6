//! Link functions for regression targets.
//!
//! Links are a closed set dispatched by tag so a specification stays
//! serializable; the inference engine maps the tag back to its own callable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Link function applied to the linear predictor of a regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkFunction {
    /// `f(x) = x`, unconstrained real domain.
    Identity,
    /// `f(x) = 1 / (1 + exp(-x))`, maps onto the unit interval.
    Logistic,
}

impl LinkFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkFunction::Identity => "identity",
            LinkFunction::Logistic => "logistic",
        }
    }

    /// Evaluate the link at `x`.
    ///
    /// The logistic branch uses the split formulation so `exp` only ever sees
    /// a non-positive argument and cannot overflow.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            LinkFunction::Identity => x,
            LinkFunction::Logistic => logistic(x),
        }
    }
}

fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

impl fmt::Display for LinkFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
