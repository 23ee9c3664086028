//! Strategy payoff aggregation
//!
//! Accumulates option legs into two payoff curves over a common spot
//! sweep: one valued with each leg's remaining maturity, one at expiry.
//! Legs are append-only and each addition updates the running totals by
//! adding that leg's contribution.

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::leg::{LegSpec, StrategyLeg};
use crate::core::{underlying_sweep, BsmError, BsmResult, Curve, OptionParams, PRICING_SPREAD};
use crate::models::BsmOption;

/// Net premium of a strategy plus its leg identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    /// `Option_1`, `Option_2`, ... in insertion order
    pub legs: Vec<String>,
    /// Sum of price * net position * multiplier.
    /// Positive = net debit paid, negative = net credit received.
    pub cost: f64,
}

/// Per-leg payoffs at expiry: one row per spot, one column per leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryTable {
    pub spots: Array1<f64>,
    pub payoffs: Array2<f64>,
}

impl ExpiryTable {
    pub fn num_legs(&self) -> usize {
        self.payoffs.ncols()
    }

    /// Column for the n-th leg added (1-based, matching `Option_n`)
    pub fn leg(&self, number: usize) -> Option<ArrayView1<'_, f64>> {
        if number == 0 || number > self.num_legs() {
            return None;
        }
        Some(self.payoffs.column(number - 1))
    }

    /// Column labels 1..=n
    pub fn labels(&self) -> Vec<usize> {
        (1..=self.num_legs()).collect()
    }
}

/// A multi-leg option strategy on a single underlying
#[derive(Debug, Clone)]
pub struct OptionStrategy {
    spot: f64,
    rate: f64,
    dividend_yield: f64,
    spots: Array1<f64>,
    legs: Vec<StrategyLeg>,
    payoffs: Array1<f64>,
    payoffs_at_expiry: Array1<f64>,
    leg_payoffs_at_expiry: Array2<f64>,
}

impl OptionStrategy {
    /// Empty strategy. Payoffs are swept over ±40% around `spot`.
    pub fn new(spot: f64, rate: f64, dividend_yield: f64) -> BsmResult<Self> {
        Self::with_spread(spot, rate, dividend_yield, PRICING_SPREAD)
    }

    /// Empty strategy swept over `spot·(1±spread)`
    pub fn with_spread(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        spread: f64,
    ) -> BsmResult<Self> {
        if rate.is_nan() || rate < 0.0 {
            return Err(BsmError::InvalidRate(rate));
        }
        if dividend_yield.is_nan() || dividend_yield < 0.0 {
            return Err(BsmError::InvalidDividendYield(dividend_yield));
        }
        let spots = underlying_sweep(spot, spread)?;
        let n = spots.len();

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            spots,
            legs: Vec::new(),
            payoffs: Array1::zeros(n),
            payoffs_at_expiry: Array1::zeros(n),
            leg_payoffs_at_expiry: Array2::zeros((n, 0)),
        })
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    pub fn spots(&self) -> &Array1<f64> {
        &self.spots
    }

    pub fn legs(&self) -> &[StrategyLeg] {
        &self.legs
    }

    /// Add a call leg
    pub fn add_call(
        &mut self,
        net_position: i64,
        strike: f64,
        maturity: f64,
        volatility: f64,
        multiplier: u32,
        entry_price: Option<f64>,
    ) -> BsmResult<&StrategyLeg> {
        self.add_leg(LegSpec {
            entry_price,
            ..LegSpec::call(net_position, strike, maturity, volatility, multiplier)
        })
    }

    /// Add a put leg
    pub fn add_put(
        &mut self,
        net_position: i64,
        strike: f64,
        maturity: f64,
        volatility: f64,
        multiplier: u32,
        entry_price: Option<f64>,
    ) -> BsmResult<&StrategyLeg> {
        self.add_leg(LegSpec {
            entry_price,
            ..LegSpec::put(net_position, strike, maturity, volatility, multiplier)
        })
    }

    /// Price a leg and fold it into the running payoffs.
    ///
    /// Per spot s the leg contributes `(V(s) - entry) * NP * M`, where V is
    /// the model value with the leg's maturity (pre-expiry curve) or its
    /// intrinsic value (expiry curve). Nothing is mutated if the leg is
    /// rejected.
    pub fn add_leg(&mut self, spec: LegSpec) -> BsmResult<&StrategyLeg> {
        if spec.multiplier == 0 {
            return Err(BsmError::invalid_leg("multiplier must be a positive integer"));
        }
        if let Some(price) = spec.entry_price {
            if !price.is_finite() {
                return Err(BsmError::invalid_leg(format!(
                    "entry price {} must be a finite number",
                    price
                )));
            }
        }

        let params = OptionParams::new(
            spec.option_type,
            self.spot,
            spec.strike,
            spec.maturity,
            self.rate,
            spec.volatility,
            self.dividend_yield,
        )?;
        let option = BsmOption::new(params);
        let expired = BsmOption::new(params.with_maturity(0.0)?);

        let leg = StrategyLeg {
            option_type: spec.option_type,
            entry_price: spec.entry_price.unwrap_or_else(|| option.price()),
            net_position: spec.net_position,
            strike: spec.strike,
            maturity: spec.maturity,
            volatility: spec.volatility,
            multiplier: spec.multiplier,
        };
        let scale = leg.scale();

        let payoffs = (option.curve_over(self.spots.clone()).values - leg.entry_price) * scale;
        let payoffs_at_expiry =
            (expired.curve_over(self.spots.clone()).values - leg.entry_price) * scale;

        self.leg_payoffs_at_expiry
            .push_column(payoffs_at_expiry.view())?;
        self.payoffs += &payoffs;
        self.payoffs_at_expiry += &payoffs_at_expiry;

        tracing::debug!(
            "Added leg {}: {} {:+} x{} K={} T={} v={} at {:.4}",
            self.legs.len() + 1,
            leg.option_type,
            leg.net_position,
            leg.multiplier,
            leg.strike,
            leg.maturity,
            leg.volatility,
            leg.entry_price
        );

        self.legs.push(leg);
        Ok(&self.legs[self.legs.len() - 1])
    }

    /// Leg identifiers and the net premium of entering the strategy
    pub fn describe(&self) -> StrategySummary {
        StrategySummary {
            legs: (1..=self.legs.len())
                .map(|n| format!("Option_{}", n))
                .collect(),
            cost: self.legs.iter().map(StrategyLeg::cost).sum(),
        }
    }

    /// Strategy payoff before expiry
    pub fn payoffs(&self) -> Curve {
        Curve {
            spots: self.spots.clone(),
            values: self.payoffs.clone(),
        }
    }

    /// Strategy payoff at expiry
    pub fn payoffs_at_expiry(&self) -> Curve {
        Curve {
            spots: self.spots.clone(),
            values: self.payoffs_at_expiry.clone(),
        }
    }

    /// Payoff at expiry of every leg, columns in insertion order
    pub fn expiry_table(&self) -> ExpiryTable {
        ExpiryTable {
            spots: self.spots.clone(),
            payoffs: self.leg_payoffs_at_expiry.clone(),
        }
    }

    /// Break-even spots at expiry, interpolated between sweep points where
    /// the expiry payoff changes sign
    pub fn break_evens(&self) -> Vec<f64> {
        let s = &self.spots;
        let p = &self.payoffs_at_expiry;
        let mut out = Vec::new();
        if self.legs.is_empty() {
            return out;
        }

        for i in 1..s.len() {
            let (p0, p1) = (p[i - 1], p[i]);
            if p0 == 0.0 {
                out.push(s[i - 1]);
            } else if p0 * p1 < 0.0 {
                out.push(s[i - 1] + (s[i] - s[i - 1]) * p0 / (p0 - p1));
            }
        }
        let n = s.len();
        if n > 0 && p[n - 1] == 0.0 {
            out.push(s[n - 1]);
        }
        out.dedup_by(|a, b| (*a - *b).abs() < 1e-12);
        out
    }
}
