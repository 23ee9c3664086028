//! # BSM Playground - Black-Scholes-Merton Pricing and Strategy Payoffs
//!
//! Closed-form European option pricing with continuous dividend yield, the
//! Greeks, and a calculator for multi-leg option strategy payoffs.
//!
//! ## Key Components
//!
//! - **Core**: validated option parameters, Greeks, spot sweeps, input limits
//! - **Black-Scholes-Merton**: price, Delta, Gamma, Theta, Vega, Lambda
//! - **Curves**: price and Greeks across a grid of underlying prices
//! - **Strategy**: payoffs before and at expiry for any mix of calls and puts
//!
//! ## Usage
//!
//! ```rust
//! use bsm_playground::prelude::*;
//!
//! // Price a 3-month ATM call
//! let call = BsmOption::from_inputs(OptionType::Call, 100.0, 100.0, 0.25, 0.03, 0.30, 0.0)?;
//! let premium = call.price();
//! let greeks = call.greeks();
//!
//! // Long straddle
//! let mut strategy = OptionStrategy::new(100.0, 0.03, 0.0)?;
//! strategy.add_call(1, 100.0, 0.25, 0.30, 100, None)?;
//! strategy.add_put(1, 100.0, 0.25, 0.30, 100, None)?;
//! let summary = strategy.describe();
//! let at_expiry = strategy.payoffs_at_expiry();
//! # assert!(premium > 0.0 && greeks.delta > 0.0);
//! # assert_eq!(summary.legs.len(), 2);
//! # assert_eq!(at_expiry.len(), 199);
//! # Ok::<(), BsmError>(())
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - American exercise, implied volatility or any numerical method
//! - Plotting or widgets (callers consume plain numeric series)
//! - Persist anything

pub mod config;
pub mod core;
pub mod models;
pub mod strategy;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        display_bounds, display_grid, underlying_sweep, BsmError, BsmResult, Curve, Greeks,
        InputLimits, OptionParams, OptionType, RawInputs, DISPLAY_POINTS, DISPLAY_SPREAD,
        PRICING_SPREAD, SWEEP_POINTS,
    };

    // Models
    pub use crate::models::{
        n, norm_cdf, norm_pdf, price as bs_price, BsmOption, NormMode, OptionCurves,
    };

    // Strategies
    pub use crate::strategy::{ExpiryTable, LegSpec, OptionStrategy, StrategyLeg, StrategySummary};

    // Configuration
    pub use crate::config::{PlaygroundConfig, StrategyDefaults, SweepConfig};
}

// Re-export main types at crate root
pub use crate::core::{BsmError, BsmResult, OptionParams, OptionType};
pub use crate::models::BsmOption;
pub use crate::strategy::OptionStrategy;
