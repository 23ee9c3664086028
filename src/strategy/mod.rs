//! Multi-leg option strategies
//!
//! Combines calls and puts on one underlying into aggregate payoff curves
//! before and at expiry, plus the net cost of entering the position.

pub mod leg;
pub mod payoff;

pub use leg::*;
pub use payoff::*;
