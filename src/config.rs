//! Configuration for the pricing playground
//!
//! Every section has defaults; a JSON file only needs the fields it
//! overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{
    BsmError, BsmResult, InputLimits, DISPLAY_POINTS, DISPLAY_SPREAD, PRICING_SPREAD,
};
use crate::strategy::LegSpec;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Front-end input ranges
    pub limits: InputLimits,
    /// Spot grids for curves and charts
    pub sweep: SweepConfig,
    /// Strategy market data and default leg
    pub strategy: StrategyDefaults,
}

impl PlaygroundConfig {
    /// Load from a JSON file, filling missing fields with defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> BsmResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.check()?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Reject settings no grid or strategy could use
    pub fn check(&self) -> BsmResult<()> {
        for (name, spread) in [
            ("sweep.pricing_spread", self.sweep.pricing_spread),
            ("sweep.display_spread", self.sweep.display_spread),
        ] {
            if !(spread > 0.0 && spread < 1.0) {
                return Err(BsmError::config(format!(
                    "{} must be in (0, 1), got {}",
                    name, spread
                )));
            }
        }
        if self.sweep.display_points < 2 {
            return Err(BsmError::config(format!(
                "sweep.display_points must be at least 2, got {}",
                self.sweep.display_points
            )));
        }
        if self.limits.max_maturity < self.limits.min_maturity
            || self.limits.max_rate_pct < self.limits.min_rate_pct
            || self.limits.max_volatility_pct < self.limits.min_volatility_pct
        {
            return Err(BsmError::config("limits: a maximum is below its minimum"));
        }
        Ok(())
    }
}

/// Spot grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Fraction around the spot for price and payoff curves
    /// Default: 0.4
    pub pricing_spread: f64,
    /// Fraction around the strike for Greek charts
    /// Default: 0.6
    pub display_spread: f64,
    /// Points in the chart grid
    /// Default: 150
    pub display_points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            pricing_spread: PRICING_SPREAD,
            display_spread: DISPLAY_SPREAD,
            display_points: DISPLAY_POINTS,
        }
    }
}

/// Defaults for building strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyDefaults {
    /// Underlying price. Default: 100
    pub spot: f64,
    /// Risk-free rate (decimal). Default: 0.03
    pub rate: f64,
    /// Dividend yield (decimal). Default: 0
    pub dividend_yield: f64,
    /// Default: 100
    pub strike: f64,
    /// Years. Default: 0.25
    pub maturity: f64,
    /// Default: 0.30
    pub volatility: f64,
    /// Default: 100
    pub multiplier: u32,
}

impl Default for StrategyDefaults {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.03,
            dividend_yield: 0.0,
            strike: 100.0,
            maturity: 0.25,
            volatility: 0.30,
            multiplier: 100,
        }
    }
}

impl StrategyDefaults {
    /// Long one call with the default contract terms
    pub fn default_call(&self) -> LegSpec {
        LegSpec::call(1, self.strike, self.maturity, self.volatility, self.multiplier)
    }

    /// Long one put with the default contract terms
    pub fn default_put(&self) -> LegSpec {
        LegSpec::put(1, self.strike, self.maturity, self.volatility, self.multiplier)
    }
}
