//! Core data types for BSM pricing
//!
//! Defines fundamental types:
//! - OptionType / OptionParams: validated contract inputs
//! - Greeks: sensitivities bundle
//! - Underlying sweeps and curves
//! - Front-end input limits
//! - JSON encoding for infinite floats

pub mod option;
pub mod greeks;
pub mod sweep;
pub mod limits;
pub mod error;
pub mod json_float;

pub use option::*;
pub use greeks::*;
pub use sweep::*;
pub use limits::*;
pub use error::*;
