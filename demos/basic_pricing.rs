//! Example: Basic options pricing with Black-Scholes-Merton
//!
//! Run with: cargo run --example basic_pricing

use bsm_playground::prelude::*;

fn main() -> BsmResult<()> {
    // Option parameters
    let spot = 500.0;
    let strike = 505.0;
    let time = 0.25; // 3 months
    let rate = 0.05; // 5% risk-free rate
    let div = 0.01; // 1% dividend yield
    let vol = 0.20; // 20% volatility

    println!("=== Black-Scholes-Merton Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.2} years ({:.0} days)", time, time * 365.0);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Div:      {:.1}%", div * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let call = BsmOption::from_inputs(OptionType::Call, spot, strike, time, rate, vol, div)?;
    let put = BsmOption::from_inputs(OptionType::Put, spot, strike, time, rate, vol, div)?;

    println!("Call Price: ${:.4}", call.price());
    println!("Put Price:  ${:.4}", put.price());

    // Verify put-call parity: C - P = S*e^(-qT) - K*e^(-rT)
    let parity_lhs = call.price() - put.price();
    let parity_rhs = spot * (-div * time).exp() - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S*e^(-qT) - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    println!("\n=== Greeks (Call) ===\n");
    let greeks = call.raw_greeks();
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.4}", greeks.gamma);
    println!("Theta:  {:.4} (per day: {:.4})", greeks.theta, greeks.theta / 365.0);
    println!("Vega:   {:.4}", greeks.vega);
    println!("Lambda: {:.4}", greeks.lambda);

    // Same contract at expiry collapses to intrinsic value
    println!("\n=== At Expiry ===\n");
    let expired = BsmOption::new(call.params().with_maturity(0.0)?);
    println!("Call value:  ${:.4}", expired.price());
    println!("Call delta:  {}", expired.delta());
    println!("Call lambda: {}", expired.lambda());

    // Premium across the pricing sweep
    println!("\n=== Call Price Curve ===\n");
    let curve = call.price_curve()?;
    for (s, v) in curve.points().step_by(22) {
        println!("  S = {:>7.2}  C = {:>8.4}", s, v);
    }

    Ok(())
}
