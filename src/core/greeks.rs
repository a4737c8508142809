//! Option Greeks
//!
//! Sensitivities of the option price. This crate computes vega and theta;
//! both use market conventions (per 1% vol move, per calendar day).

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Vega: dV/dσ, per 1% (0.01 absolute) vol move
    pub vega: f64,
    /// Theta: dV/dt, per calendar day
    pub theta: f64,
}

impl Greeks {
    pub fn new(vega: f64, theta: f64) -> Self {
        Self { vega, theta }
    }

    /// Sensitivities at zero volatility are undefined
    pub fn undefined() -> Self {
        Self {
            vega: f64::NAN,
            theta: f64::NAN,
        }
    }

    /// True unless this is the zero-vol NaN pair
    pub fn is_defined(&self) -> bool {
        !self.vega.is_nan() && !self.theta.is_nan()
    }

    /// Scale Greeks by a factor (e.g., for contract multiplier)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            vega: self.vega * factor,
            theta: self.theta * factor,
        }
    }
}
