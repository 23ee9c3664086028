//! Pricing Models
//!
//! Implements:
//! - Black-Scholes-Merton (closed-form price and Greeks)
//! - Price/Greek curves across underlying grids

pub mod black_scholes;
pub mod curves;

pub use black_scholes::*;
pub use curves::*;
