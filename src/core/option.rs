//! Option contract parameters
//!
//! Represents a European vanilla option priced under Black-Scholes-Merton.
//! Parameters are validated once at construction and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{BsmError, BsmResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Single-letter code ("C" or "P")
    pub fn code(&self) -> &'static str {
        match self {
            OptionType::Call => "C",
            OptionType::Put => "P",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = BsmError;

    fn from_str(s: &str) -> BsmResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(BsmError::InvalidOptionType(s.to_string())),
        }
    }
}

/// Validated Black-Scholes-Merton inputs
///
/// Fields are private so a value can only exist once every check in
/// [`OptionParams::new`] has passed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionParams {
    option_type: OptionType,
    /// Underlying price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to maturity in years (T)
    maturity: f64,
    /// Continuously compounded risk-free rate (r)
    rate: f64,
    /// Implied volatility (v)
    volatility: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
}

impl OptionParams {
    /// Validate and build option parameters.
    ///
    /// Fails on the first out-of-domain field, in argument order. NaN is
    /// never in domain.
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> BsmResult<Self> {
        if spot.is_nan() || spot <= 0.0 {
            return Err(BsmError::InvalidUnderlying(spot));
        }
        if strike.is_nan() || strike <= 0.0 {
            return Err(BsmError::InvalidStrike(strike));
        }
        if maturity.is_nan() || maturity < 0.0 {
            return Err(BsmError::InvalidMaturity(maturity));
        }
        if rate.is_nan() || rate < 0.0 {
            return Err(BsmError::InvalidRate(rate));
        }
        if volatility.is_nan() || volatility < 0.0 {
            return Err(BsmError::InvalidVolatility(volatility));
        }
        if dividend_yield.is_nan() || dividend_yield < 0.0 {
            return Err(BsmError::InvalidDividendYield(dividend_yield));
        }

        Ok(Self {
            option_type,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Build from a textual option type ("C"/"P")
    pub fn parse(
        option_type: &str,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> BsmResult<Self> {
        let option_type = option_type.parse()?;
        Self::new(
            option_type,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            dividend_yield,
        )
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Same contract at another underlying price
    pub fn with_spot(&self, spot: f64) -> BsmResult<Self> {
        Self::new(
            self.option_type,
            spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            self.dividend_yield,
        )
    }

    /// Same contract with a different time to maturity
    pub fn with_maturity(&self, maturity: f64) -> BsmResult<Self> {
        Self::new(
            self.option_type,
            self.spot,
            self.strike,
            maturity,
            self.rate,
            self.volatility,
            self.dividend_yield,
        )
    }

    /// Has the option reached expiry?
    pub fn is_expired(&self) -> bool {
        self.maturity == 0.0
    }

    /// Is this option in the money?
    pub fn is_itm(&self) -> bool {
        self.option_type.intrinsic(self.spot, self.strike) > 0.0
    }
}
