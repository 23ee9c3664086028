//! Error types for BSM pricing and strategies

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BsmError {
    #[error("Invalid option type '{0}': must be either 'C' (call) or 'P' (put)")]
    InvalidOptionType(String),

    #[error("Invalid underlying price {0}: spot must be greater than 0")]
    InvalidUnderlying(f64),

    #[error("Invalid strike price {0}: strike must be greater than 0")]
    InvalidStrike(f64),

    #[error("Invalid maturity {0}: maturity (years) cannot be negative")]
    InvalidMaturity(f64),

    #[error("Invalid interest rate {0}: rate cannot be negative")]
    InvalidRate(f64),

    #[error("Invalid volatility {0}: volatility cannot be negative")]
    InvalidVolatility(f64),

    #[error("Invalid dividend yield {0}: dividend yield cannot be negative")]
    InvalidDividendYield(f64),

    #[error("Invalid strategy leg: {0}")]
    InvalidLeg(String),

    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type BsmResult<T> = Result<T, BsmError>;

impl BsmError {
    pub fn invalid_leg(msg: impl Into<String>) -> Self {
        Self::InvalidLeg(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// True for the domain failures raised while constructing option parameters
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOptionType(_)
                | Self::InvalidUnderlying(_)
                | Self::InvalidStrike(_)
                | Self::InvalidMaturity(_)
                | Self::InvalidRate(_)
                | Self::InvalidVolatility(_)
                | Self::InvalidDividendYield(_)
        )
    }
}

impl From<serde_json::Error> for BsmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
