//! Option Greeks
//!
//! First and second order sensitivities plus price elasticity.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot). +infinity at the
    /// forward with zero volatility.
    #[serde(with = "super::json_float")]
    pub gamma: f64,
    /// Theta: dV/dt (time decay, per year)
    pub theta: f64,
    /// Vega: dV/dσ (per unit of volatility)
    pub vega: f64,
    /// Lambda: Δ·S/V (price elasticity to spot). May be ±infinity.
    #[serde(with = "super::json_float")]
    pub lambda: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, lambda: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            lambda,
        }
    }

    /// Round every field to `decimals` places for display.
    ///
    /// Infinite lambda passes through unchanged.
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            delta: round_to(self.delta, decimals),
            gamma: round_to(self.gamma, decimals),
            theta: round_to(self.theta, decimals),
            vega: round_to(self.vega, decimals),
            lambda: round_to(self.lambda, decimals),
        }
    }
}

/// Round to a number of decimal places, ties to even
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.12345, 2), 0.12);
        assert_eq!(round_to(-1.005001, 2), -1.01);
        // halfway cases go to the even digit
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }

    #[test]
    fn test_rounded_greeks() {
        let g = Greeks::new(0.56789, 0.0261, -7.4321, 19.876, f64::INFINITY).rounded(2);
        assert_eq!(g.delta, 0.57);
        assert_eq!(g.gamma, 0.03);
        assert_eq!(g.theta, -7.43);
        assert_eq!(g.vega, 19.88);
        assert!(g.lambda.is_infinite() && g.lambda > 0.0);
    }
}
