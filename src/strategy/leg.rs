//! Strategy legs
//!
//! A leg is one option position inside a multi-option strategy: a call or
//! put with its own strike, maturity, volatility, size and multiplier.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{round_to, BsmError, BsmResult, OptionType};

/// Description of a leg to add, before it is priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegSpec {
    pub option_type: OptionType,
    /// Signed contract count: positive = long, negative = short
    pub net_position: i64,
    pub strike: f64,
    /// Years to maturity
    pub maturity: f64,
    pub volatility: f64,
    /// Contract size, e.g. 100 for equity options
    pub multiplier: u32,
    /// Traded premium; when absent the model price is used
    pub entry_price: Option<f64>,
}

impl LegSpec {
    pub fn call(
        net_position: i64,
        strike: f64,
        maturity: f64,
        volatility: f64,
        multiplier: u32,
    ) -> Self {
        Self {
            option_type: OptionType::Call,
            net_position,
            strike,
            maturity,
            volatility,
            multiplier,
            entry_price: None,
        }
    }

    pub fn put(
        net_position: i64,
        strike: f64,
        maturity: f64,
        volatility: f64,
        multiplier: u32,
    ) -> Self {
        Self {
            option_type: OptionType::Put,
            ..Self::call(net_position, strike, maturity, volatility, multiplier)
        }
    }

    /// Use a fixed entry premium instead of the model price
    pub fn with_entry_price(mut self, price: f64) -> Self {
        self.entry_price = Some(price);
        self
    }
}

/// Parses `TYPE:NP:K:T:V:M[:PRICE]`, e.g. `C:+1:100:0.25:0.3:100` or
/// `P:-2:95:0.5:0.25:100:3.10`.
impl FromStr for LegSpec {
    type Err = BsmError;

    fn from_str(s: &str) -> BsmResult<Self> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.len() != 6 && parts.len() != 7 {
            return Err(BsmError::invalid_leg(format!(
                "'{}': expected TYPE:NP:K:T:V:M[:PRICE], got {} fields",
                s,
                parts.len()
            )));
        }

        let option_type = parts[0].parse()?;
        let net_position = parts[1]
            .parse::<i64>()
            .map_err(|e| BsmError::invalid_leg(format!("net position '{}': {}", parts[1], e)))?;
        let strike = parse_f64("strike", parts[2])?;
        let maturity = parse_f64("maturity", parts[3])?;
        let volatility = parse_f64("volatility", parts[4])?;
        let multiplier = parts[5]
            .parse::<u32>()
            .map_err(|e| BsmError::invalid_leg(format!("multiplier '{}': {}", parts[5], e)))?;
        let entry_price = parts
            .get(6)
            .map(|p| parse_f64("entry price", p))
            .transpose()?;

        Ok(Self {
            option_type,
            net_position,
            strike,
            maturity,
            volatility,
            multiplier,
            entry_price,
        })
    }
}

fn parse_f64(field: &str, raw: &str) -> BsmResult<f64> {
    raw.parse::<f64>()
        .map_err(|e| BsmError::invalid_leg(format!("{} '{}': {}", field, raw, e)))
}

/// A priced leg held by a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyLeg {
    pub option_type: OptionType,
    /// Premium paid (long) or received (short) per unit
    pub entry_price: f64,
    pub net_position: i64,
    pub strike: f64,
    pub maturity: f64,
    pub volatility: f64,
    pub multiplier: u32,
}

impl StrategyLeg {
    /// Position scale: net position times multiplier
    pub fn scale(&self) -> f64 {
        self.net_position as f64 * f64::from(self.multiplier)
    }

    /// Net liquidation value at entry: price * net position * multiplier.
    ///
    /// Positive for a debit (long), negative for a credit (short).
    pub fn cost(&self) -> f64 {
        self.entry_price * self.scale()
    }

    /// Entry price rounded to cents
    pub fn display_price(&self) -> f64 {
        round_to(self.entry_price, 2)
    }

    pub fn is_long(&self) -> bool {
        self.net_position > 0
    }
}
