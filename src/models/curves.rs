//! Price and Greek curves across a grid of underlying prices
//!
//! Reprices the same contract at every grid spot, holding strike, maturity,
//! rate, volatility and yield fixed. Used for charting how each quantity
//! moves with the underlying.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::black_scholes::BsmOption;
use crate::core::{display_bounds, display_grid, BsmResult, OptionParams};

/// Price and unrounded Greeks, one entry per grid spot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionCurves {
    pub spots: Array1<f64>,
    pub price: Array1<f64>,
    pub delta: Array1<f64>,
    #[serde(with = "crate::core::json_float::array")]
    pub gamma: Array1<f64>,
    pub theta: Array1<f64>,
    pub vega: Array1<f64>,
    #[serde(with = "crate::core::json_float::array")]
    pub lambda: Array1<f64>,
}

impl OptionCurves {
    /// Evaluate at each spot of `grid`
    pub fn compute(params: &OptionParams, grid: &Array1<f64>) -> BsmResult<Self> {
        let n = grid.len();
        let mut curves = Self {
            spots: grid.clone(),
            price: Array1::zeros(n),
            delta: Array1::zeros(n),
            gamma: Array1::zeros(n),
            theta: Array1::zeros(n),
            vega: Array1::zeros(n),
            lambda: Array1::zeros(n),
        };

        for (i, &spot) in grid.iter().enumerate() {
            let option = BsmOption::new(params.with_spot(spot)?);
            let greeks = option.raw_greeks();
            curves.price[i] = option.price();
            curves.delta[i] = greeks.delta;
            curves.gamma[i] = greeks.gamma;
            curves.theta[i] = greeks.theta;
            curves.vega[i] = greeks.vega;
            curves.lambda[i] = greeks.lambda;
        }

        tracing::debug!(
            "Computed {} curves over {} spots [{:.2}, {:.2}]",
            params.option_type(),
            n,
            grid.iter().next().copied().unwrap_or_default(),
            grid.iter().last().copied().unwrap_or_default()
        );
        Ok(curves)
    }

    /// Evaluate on the chart grid derived from the strike
    pub fn for_display(params: &OptionParams, spread: f64, points: usize) -> BsmResult<Self> {
        let (min, max) = display_bounds(params.strike(), spread)?;
        let grid = display_grid(min, max, points)?;
        Self::compute(params, &grid)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionType, DISPLAY_POINTS, DISPLAY_SPREAD};

    fn params(option_type: OptionType) -> OptionParams {
        OptionParams::new(option_type, 100.0, 100.0, 0.25, 0.02, 0.30, 0.0).unwrap()
    }

    #[test]
    fn test_display_curves_shape() {
        let c = OptionCurves::for_display(&params(OptionType::Call), DISPLAY_SPREAD, DISPLAY_POINTS)
            .unwrap();
        assert_eq!(c.len(), 150);
        assert_eq!(c.spots[0], 40.0);
        assert_eq!(c.price.len(), 150);
        assert_eq!(c.lambda.len(), 150);
    }

    #[test]
    fn test_call_delta_increases_with_spot() {
        let c = OptionCurves::for_display(&params(OptionType::Call), DISPLAY_SPREAD, 50).unwrap();
        for w in c.delta.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert!(c.delta.iter().all(|&d| (0.0..=1.0).contains(&d)));
    }

    #[test]
    fn test_matches_single_option() {
        let p = params(OptionType::Put);
        let grid = Array1::from(vec![90.0, 100.0, 110.0]);
        let c = OptionCurves::compute(&p, &grid).unwrap();

        let at_100 = BsmOption::new(p);
        assert_eq!(c.price[1], at_100.price());
        assert_eq!(c.gamma[1], at_100.gamma());
        assert_eq!(c.vega[1], at_100.vega());
    }

    #[test]
    fn test_tiny_strike_display_curves() {
        let p = OptionParams::new(OptionType::Call, 0.3, 0.3, 0.25, 0.03, 0.30, 0.0).unwrap();
        let c = OptionCurves::for_display(&p, DISPLAY_SPREAD, DISPLAY_POINTS).unwrap();
        assert_eq!(c.len(), 150);
        assert!((c.spots[0] - 0.12).abs() < 1e-12);
        assert!((c.spots[149] - 0.48).abs() < 1e-12);
        assert!(c.price.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_zero_vol_curves_json() {
        let p = OptionParams::new(OptionType::Put, 100.0, 100.0, 0.25, 0.0, 0.0, 0.0).unwrap();
        let grid = Array1::from(vec![90.0, 100.0, 110.0]);
        let c = OptionCurves::compute(&p, &grid).unwrap();
        assert_eq!(c.gamma[1], f64::INFINITY);
        assert_eq!(c.lambda[2], f64::NEG_INFINITY);

        let json = serde_json::to_string(&c).unwrap();
        let back: OptionCurves = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gamma, c.gamma);
        assert_eq!(back.lambda, c.lambda);
        assert_eq!(back.price, c.price);
    }

    #[test]
    fn test_invalid_grid_spot() {
        let grid = Array1::from(vec![-1.0, 100.0]);
        assert!(OptionCurves::compute(&params(OptionType::Call), &grid).is_err());
    }
}
