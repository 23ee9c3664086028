//! Front-end input limits
//!
//! Range checks applied to user-entered values before they reach the
//! pricing core. The core itself only rejects out-of-domain values; these
//! limits are narrower and configurable.

use serde::{Deserialize, Serialize};

use super::{BsmError, BsmResult, OptionParams, OptionType};

/// Raw values as a user types them.
///
/// Rate and volatility are in percent; the dividend yield is a decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInputs {
    pub option_type: String,
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate_pct: f64,
    pub volatility_pct: f64,
    pub dividend_yield: f64,
}

/// Allowed ranges for user input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Smallest accepted strike
    /// Default: 1.0
    pub min_strike: f64,
    /// Maturity range in years
    /// Default: [0, 5]
    pub min_maturity: f64,
    pub max_maturity: f64,
    /// Interest rate range in percent
    /// Default: [0.01, 10] (1 bp to 1000 bp)
    pub min_rate_pct: f64,
    pub max_rate_pct: f64,
    /// Volatility range in percent
    /// Default: [1, 100]
    pub min_volatility_pct: f64,
    pub max_volatility_pct: f64,
    /// Smallest accepted dividend yield
    /// Default: 0.0
    pub min_dividend_yield: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_strike: 1.0,
            min_maturity: 0.0,
            max_maturity: 5.0,
            min_rate_pct: 0.01,
            max_rate_pct: 10.0,
            min_volatility_pct: 1.0,
            max_volatility_pct: 100.0,
            min_dividend_yield: 0.0,
        }
    }
}

impl InputLimits {
    /// Check raw inputs against the limits and build option parameters.
    ///
    /// Rate and volatility are converted from percent to decimals.
    pub fn validate(&self, raw: &RawInputs) -> BsmResult<OptionParams> {
        let option_type: OptionType = raw.option_type.parse()?;

        check("strike", raw.strike, self.min_strike, f64::INFINITY)?;
        check("maturity", raw.maturity, self.min_maturity, self.max_maturity)?;
        check("rate_pct", raw.rate_pct, self.min_rate_pct, self.max_rate_pct)?;
        check(
            "volatility_pct",
            raw.volatility_pct,
            self.min_volatility_pct,
            self.max_volatility_pct,
        )?;
        check(
            "dividend_yield",
            raw.dividend_yield,
            self.min_dividend_yield,
            f64::INFINITY,
        )?;

        OptionParams::new(
            option_type,
            raw.spot,
            raw.strike,
            raw.maturity,
            raw.rate_pct / 100.0,
            raw.volatility_pct / 100.0,
            raw.dividend_yield,
        )
    }
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> BsmResult<()> {
    if value.is_nan() || value < min || value > max {
        tracing::warn!("{} = {} rejected, allowed [{}, {}]", field, value, min, max);
        return Err(BsmError::out_of_range(field, value, min, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawInputs {
        RawInputs {
            option_type: "C".to_string(),
            spot: 100.0,
            strike: 100.0,
            maturity: 0.25,
            rate_pct: 2.0,
            volatility_pct: 30.0,
            dividend_yield: 0.0,
        }
    }

    #[test]
    fn test_defaults_convert_percent() {
        let p = InputLimits::default().validate(&raw()).unwrap();
        assert!((p.rate() - 0.02).abs() < 1e-15);
        assert!((p.volatility() - 0.30).abs() < 1e-15);
        assert_eq!(p.dividend_yield(), 0.0);
    }

    #[test]
    fn test_volatility_above_limit() {
        let mut r = raw();
        r.volatility_pct = 150.0;
        let err = InputLimits::default().validate(&r).unwrap_err();
        assert!(matches!(
            err,
            BsmError::OutOfRange { field: "volatility_pct", max, .. } if max == 100.0
        ));
    }

    #[test]
    fn test_maturity_and_rate_limits() {
        let mut r = raw();
        r.maturity = 6.0;
        assert!(InputLimits::default().validate(&r).is_err());

        let mut r = raw();
        r.rate_pct = 0.0;
        assert!(matches!(
            InputLimits::default().validate(&r),
            Err(BsmError::OutOfRange { field: "rate_pct", .. })
        ));
    }

    #[test]
    fn test_strike_below_one() {
        let mut r = raw();
        r.strike = 0.5;
        assert!(matches!(
            InputLimits::default().validate(&r),
            Err(BsmError::OutOfRange { field: "strike", .. })
        ));
    }

    #[test]
    fn test_bad_type_reported_first() {
        let mut r = raw();
        r.option_type = "X".to_string();
        r.strike = -1.0;
        assert!(matches!(
            InputLimits::default().validate(&r),
            Err(BsmError::InvalidOptionType(_))
        ));
    }

    #[test]
    fn test_domain_check_still_applies() {
        // Limits say nothing about spot; the core rejects it
        let mut r = raw();
        r.spot = 0.0;
        assert!(matches!(
            InputLimits::default().validate(&r),
            Err(BsmError::InvalidUnderlying(_))
        ));
    }
}
