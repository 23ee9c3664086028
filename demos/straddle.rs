//! Example: Long straddle payoff
//!
//! Run with: cargo run --example straddle

use bsm_playground::prelude::*;

fn main() -> BsmResult<()> {
    let defaults = StrategyDefaults::default();
    let mut strategy =
        OptionStrategy::new(defaults.spot, defaults.rate, defaults.dividend_yield)?;

    strategy.add_leg(defaults.default_call())?;
    strategy.add_leg(defaults.default_put())?;

    let summary = strategy.describe();
    println!("=== Long Straddle ===\n");
    for (name, leg) in summary.legs.iter().zip(strategy.legs()) {
        println!(
            "{}: {} K={:.0} T={:.2} Pr={:.2}",
            name,
            leg.option_type,
            leg.strike,
            leg.maturity,
            leg.display_price()
        );
    }
    println!("Cost: {:.2}", summary.cost);
    println!("Break-evens: {:?}\n", strategy.break_evens());

    let today = strategy.payoffs();
    let at_expiry = strategy.payoffs_at_expiry();
    println!("    Spot      Today     Expiry");
    for i in (0..today.len()).step_by(18) {
        println!(
            "{:>8.2} {:>10.2} {:>10.2}",
            today.spots[i], today.values[i], at_expiry.values[i]
        );
    }

    // Same legs filled at quoted premiums instead of model prices
    let mut filled =
        OptionStrategy::new(defaults.spot, defaults.rate, defaults.dividend_yield)?;
    filled.add_leg(defaults.default_call().with_entry_price(6.10))?;
    filled.add_leg(defaults.default_put().with_entry_price(5.45))?;
    println!(
        "\nFilled at 6.10 / 5.45: cost {:.2}, break-evens {:?}",
        filled.describe().cost,
        filled.break_evens()
    );

    Ok(())
}
