//! Black-Scholes-Merton Model
//!
//! Provides:
//! - Standard normal CDF/PDF primitive
//! - European option pricing with continuous dividend yield
//! - Greeks (Delta, Gamma, Theta, Vega, Lambda)
//!
//! Every quantity has a closed form. At expiry (T = 0) price collapses to
//! intrinsic value and the Greeks to their boundary values before d1/d2
//! are ever evaluated.

use std::f64::consts::{PI, SQRT_2};

use ndarray::Array1;
use statrs::function::erf::erfc;

use crate::core::{
    underlying_sweep, BsmResult, Curve, Greeks, OptionParams, OptionType, PRICING_SPREAD,
};

/// Cut-off below which price or delta counts as zero for lambda
pub const LAMBDA_EPSILON: f64 = 1e-10;

/// Decimal places used by [`BsmOption::greeks`]
pub const GREEKS_DECIMALS: i32 = 2;

/// Which function of the standard normal distribution to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormMode {
    Cumulative,
    Density,
}

/// Standard normal CDF or PDF at `x`
pub fn n(x: f64, mode: NormMode) -> f64 {
    match mode {
        NormMode::Cumulative => norm_cdf(x),
        NormMode::Density => norm_pdf(x),
    }
}

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
///
/// With zero volatility this is the v -> 0 limit: ±infinity by the sign of
/// forward moneyness, or 0 exactly at the forward.
pub fn d1(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    let drift = (spot / strike).ln() + (rate - div + 0.5 * vol * vol) * time;
    let std_dev = vol * time.sqrt();
    if std_dev > 0.0 {
        return drift / std_dev;
    }
    if drift > 0.0 {
        f64::INFINITY
    } else if drift < 0.0 {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, div, vol, time) - vol * time.sqrt()
}

/// Black-Scholes-Merton European option price
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    div: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> f64 {
    if time <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    let d1 = d1(spot, strike, rate, div, vol, time);
    let d2 = d2(spot, strike, rate, div, vol, time);
    let div_factor = (-div * time).exp();
    let df = (-rate * time).exp();

    let phi = option_type.phi();
    phi * (spot * div_factor * norm_cdf(phi * d1) - strike * df * norm_cdf(phi * d2))
}

/// A priced European option
///
/// Thin wrapper over validated [`OptionParams`]; every method is a pure
/// function of those parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsmOption {
    params: OptionParams,
}

impl BsmOption {
    pub fn new(params: OptionParams) -> Self {
        Self { params }
    }

    /// Validate inputs and build the option in one step
    pub fn from_inputs(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> BsmResult<Self> {
        OptionParams::new(
            option_type,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            dividend_yield,
        )
        .map(Self::new)
    }

    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    fn d1(&self) -> f64 {
        let p = &self.params;
        d1(p.spot(), p.strike(), p.rate(), p.dividend_yield(), p.volatility(), p.maturity())
    }

    fn d2(&self) -> f64 {
        let p = &self.params;
        d2(p.spot(), p.strike(), p.rate(), p.dividend_yield(), p.volatility(), p.maturity())
    }

    fn div_factor(&self) -> f64 {
        (-self.params.dividend_yield() * self.params.maturity()).exp()
    }

    fn discount_factor(&self) -> f64 {
        (-self.params.rate() * self.params.maturity()).exp()
    }

    /// Option premium at the contract's own spot
    pub fn price(&self) -> f64 {
        self.price_at(self.params.spot())
    }

    /// Option premium with the underlying at `spot`, other inputs fixed
    pub fn price_at(&self, spot: f64) -> f64 {
        let p = &self.params;
        price(
            spot,
            p.strike(),
            p.rate(),
            p.dividend_yield(),
            p.volatility(),
            p.maturity(),
            p.option_type(),
        )
    }

    /// Delta. At expiry: ±1 when in the money, otherwise 0.
    pub fn delta(&self) -> f64 {
        let p = &self.params;
        if p.is_expired() {
            return match (p.option_type(), self.price() > 0.0) {
                (OptionType::Call, true) => 1.0,
                (OptionType::Put, true) => -1.0,
                (_, false) => 0.0,
            };
        }

        let call_delta = self.div_factor() * norm_cdf(self.d1());
        match p.option_type() {
            OptionType::Call => call_delta,
            OptionType::Put => call_delta - 1.0,
        }
    }

    /// Gamma (same for call and put)
    pub fn gamma(&self) -> f64 {
        let p = &self.params;
        if p.is_expired() {
            return 0.0;
        }

        let pdf_d1 = norm_pdf(self.d1());
        let denom = p.spot() * p.volatility() * p.maturity().sqrt();
        if denom == 0.0 {
            // zero vol: a spike at the forward, flat elsewhere
            return if pdf_d1 > 0.0 { f64::INFINITY } else { 0.0 };
        }
        self.div_factor() * pdf_d1 / denom
    }

    /// Theta (per year)
    pub fn theta(&self) -> f64 {
        let p = &self.params;
        if p.is_expired() {
            return 0.0;
        }

        let d1 = self.d1();
        let d2 = self.d2();
        let spot_div = p.spot() * self.div_factor();
        let strike_df = p.strike() * self.discount_factor();
        let decay = -spot_div * p.volatility() * norm_pdf(d1) / (2.0 * p.maturity().sqrt());

        match p.option_type() {
            OptionType::Call => {
                decay + p.dividend_yield() * spot_div * norm_cdf(d1)
                    - p.rate() * strike_df * norm_cdf(d2)
            }
            OptionType::Put => {
                decay - p.dividend_yield() * spot_div * (1.0 - norm_cdf(d1))
                    + p.rate() * strike_df * (1.0 - norm_cdf(d2))
            }
        }
    }

    /// Vega (per unit of volatility, same for call and put)
    pub fn vega(&self) -> f64 {
        let p = &self.params;
        if p.is_expired() {
            return 0.0;
        }
        self.div_factor() * p.spot() * p.maturity().sqrt() * norm_pdf(self.d1())
    }

    /// Lambda (elasticity): delta·S/price.
    ///
    /// Returns +infinity for a call and -infinity for a put when the price
    /// or delta is too close to zero for the ratio to mean anything.
    pub fn lambda(&self) -> f64 {
        let delta = self.delta();
        let price = self.price();

        match self.params.option_type() {
            OptionType::Call if delta < LAMBDA_EPSILON || price < LAMBDA_EPSILON => f64::INFINITY,
            OptionType::Put if delta > -LAMBDA_EPSILON || price < LAMBDA_EPSILON => {
                f64::NEG_INFINITY
            }
            _ => delta * self.params.spot() / price,
        }
    }

    /// Unrounded Greeks
    pub fn raw_greeks(&self) -> Greeks {
        Greeks::new(
            self.delta(),
            self.gamma(),
            self.theta(),
            self.vega(),
            self.lambda(),
        )
    }

    /// Greeks rounded to two decimals for display
    pub fn greeks(&self) -> Greeks {
        self.raw_greeks().rounded(GREEKS_DECIMALS)
    }

    /// Premium across the pricing sweep around the contract's spot
    pub fn price_curve(&self) -> BsmResult<Curve> {
        let spots = underlying_sweep(self.params.spot(), PRICING_SPREAD)?;
        Ok(self.curve_over(spots))
    }

    /// Premium at each given spot
    pub fn curve_over(&self, spots: Array1<f64>) -> Curve {
        let values = spots.mapv(|s| self.price_at(s));
        Curve { spots, values }
    }
}
