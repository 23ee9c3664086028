//! Underlying price grids
//!
//! Two grids are used:
//! - the pricing sweep: 199 points around a reference spot, denser split
//!   at the spot itself, used for price and payoff curves
//! - the display grid: evenly spaced points between whole-unit bounds
//!   derived from the strike, used for the Greek charts

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::{BsmError, BsmResult};

/// Spread fraction for price and payoff curves
pub const PRICING_SPREAD: f64 = 0.4;
/// Spread fraction for the chart range around the strike
pub const DISPLAY_SPREAD: f64 = 0.6;
/// Points on each side of the reference spot (the spot itself is shared)
pub const SWEEP_HALF_POINTS: usize = 100;
/// Total points in a pricing sweep
pub const SWEEP_POINTS: usize = 2 * SWEEP_HALF_POINTS - 1;
/// Default number of points in the display grid
pub const DISPLAY_POINTS: usize = 150;

/// Spot values from `spot·(1-spread)` to `spot·(1+spread)`.
///
/// 99 points below the spot (spot excluded) followed by 100 points from
/// the spot up, so index 99 is exactly `spot`.
pub fn underlying_sweep(spot: f64, spread: f64) -> BsmResult<Array1<f64>> {
    if spot.is_nan() || spot <= 0.0 {
        return Err(BsmError::InvalidUnderlying(spot));
    }
    if spread.is_nan() || spread <= 0.0 || spread >= 1.0 {
        return Err(BsmError::out_of_range("spread", spread, 0.0, 1.0));
    }

    let lower = Array1::linspace(spot * (1.0 - spread), spot, SWEEP_HALF_POINTS);
    let upper = Array1::linspace(spot, spot * (1.0 + spread), SWEEP_HALF_POINTS);

    Ok(lower
        .iter()
        .take(SWEEP_HALF_POINTS - 1)
        .chain(upper.iter())
        .copied()
        .collect())
}

/// Chart bounds around a strike, rounded to whole units.
///
/// Falls back to the unrounded lower bound when rounding would reach zero
/// (strikes of one or two units), and to the unrounded upper bound when
/// rounding would leave it at or below the lower one (strikes under one
/// unit).
pub fn display_bounds(strike: f64, spread: f64) -> BsmResult<(f64, f64)> {
    if strike.is_nan() || strike <= 0.0 {
        return Err(BsmError::InvalidStrike(strike));
    }
    if spread.is_nan() || spread <= 0.0 || spread >= 1.0 {
        return Err(BsmError::out_of_range("spread", spread, 0.0, 1.0));
    }

    let raw_min = strike * (1.0 - spread);
    let min = match raw_min.round() {
        m if m > 0.0 => m,
        _ => raw_min,
    };
    let raw_max = strike * (1.0 + spread);
    let max = match raw_max.round() {
        m if m > min => m,
        _ => raw_max,
    };
    Ok((min, max))
}

/// Evenly spaced grid including both bounds
pub fn display_grid(min: f64, max: f64, points: usize) -> BsmResult<Array1<f64>> {
    if min.is_nan() || min <= 0.0 {
        return Err(BsmError::InvalidUnderlying(min));
    }
    if max.is_nan() || max < min {
        return Err(BsmError::out_of_range("upper bound", max, min, f64::INFINITY));
    }
    if points < 2 {
        return Err(BsmError::out_of_range(
            "points",
            points as f64,
            2.0,
            f64::INFINITY,
        ));
    }
    Ok(Array1::linspace(min, max, points))
}

/// A spot -> value series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub spots: Array1<f64>,
    pub values: Array1<f64>,
}

impl Curve {
    /// Zero-valued curve over the given spots
    pub fn zeros(spots: Array1<f64>) -> Self {
        let values = Array1::zeros(spots.len());
        Self { spots, values }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// (spot, value) pairs in grid order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.spots.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_shape() {
        let s = underlying_sweep(100.0, PRICING_SPREAD).unwrap();
        assert_eq!(s.len(), SWEEP_POINTS);
        assert_eq!(s.len(), 199);
        assert!((s[0] - 60.0).abs() < 1e-12);
        assert!((s[198] - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_brackets_spot() {
        let s = underlying_sweep(250.0, DISPLAY_SPREAD).unwrap();
        assert!(s[98] < 250.0);
        assert_eq!(s[99], 250.0);
        assert!(s[100] > 250.0);
    }

    #[test]
    fn test_sweep_strictly_increasing() {
        let s = underlying_sweep(42.0, PRICING_SPREAD).unwrap();
        for w in s.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_sweep_rejects_bad_inputs() {
        assert!(matches!(
            underlying_sweep(0.0, 0.4),
            Err(BsmError::InvalidUnderlying(_))
        ));
        assert!(matches!(
            underlying_sweep(100.0, 1.0),
            Err(BsmError::OutOfRange { field: "spread", .. })
        ));
    }

    #[test]
    fn test_display_bounds() {
        assert_eq!(display_bounds(100.0, DISPLAY_SPREAD).unwrap(), (40.0, 160.0));
        assert_eq!(display_bounds(33.0, DISPLAY_SPREAD).unwrap(), (13.0, 53.0));

        let (min, max) = display_bounds(1.0, DISPLAY_SPREAD).unwrap();
        assert!((min - 0.4).abs() < 1e-12);
        assert_eq!(max, 2.0);

        let (min, max) = display_bounds(0.3, DISPLAY_SPREAD).unwrap();
        assert!((min - 0.12).abs() < 1e-12);
        assert!((max - 0.48).abs() < 1e-12);
        assert!(display_grid(min, max, DISPLAY_POINTS).is_ok());
    }

    #[test]
    fn test_display_grid() {
        let g = display_grid(40.0, 160.0, DISPLAY_POINTS).unwrap();
        assert_eq!(g.len(), 150);
        assert_eq!(g[0], 40.0);
        assert!((g[149] - 160.0).abs() < 1e-9);
        assert!(display_grid(40.0, 160.0, 1).is_err());
        assert!(display_grid(0.0, 160.0, 10).is_err());
        assert!(matches!(
            display_grid(40.0, 30.0, 10),
            Err(BsmError::OutOfRange { field: "upper bound", .. })
        ));
    }

    #[test]
    fn test_curve_zeros() {
        let c = Curve::zeros(underlying_sweep(100.0, 0.4).unwrap());
        assert_eq!(c.len(), 199);
        assert!(c.points().all(|(_, v)| v == 0.0));
    }
}
