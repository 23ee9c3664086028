//! BSM Playground CLI
//!
//! Command-line front end for the pricing core.
//!
//! # Commands
//!
//! - `bsm price` - Price one option and show its Greeks (optionally curves)
//! - `bsm strategy --leg ...` - Payoffs and cost of a multi-leg strategy

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bsm_playground::prelude::*;

/// Black-Scholes-Merton option pricing and strategy payoffs
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single option and compute its Greeks
    Price {
        /// Option type: C or P
        #[arg(short = 't', long = "type", default_value = "C")]
        option_type: String,

        /// Underlying price
        #[arg(short, long, default_value_t = 100.0)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long, default_value_t = 100.0)]
        strike: f64,

        /// Maturity in years
        #[arg(short, long, default_value_t = 0.25)]
        maturity: f64,

        /// Interest rate in percent
        #[arg(short, long, default_value_t = 2.0)]
        rate: f64,

        /// Volatility in percent
        #[arg(long = "vol", default_value_t = 30.0)]
        volatility: f64,

        /// Dividend yield (decimal)
        #[arg(short, long = "div", default_value_t = 0.0)]
        dividend_yield: f64,

        /// Also compute price and Greek curves over the chart grid
        #[arg(long)]
        curve: bool,
    },

    /// Build a strategy from legs and report its payoffs
    Strategy {
        /// Underlying price (defaults to the configured value)
        #[arg(short, long)]
        spot: Option<f64>,

        /// Interest rate, decimal (defaults to the configured value)
        #[arg(short, long)]
        rate: Option<f64>,

        /// Dividend yield, decimal (defaults to the configured value)
        #[arg(short, long = "div")]
        dividend_yield: Option<f64>,

        /// Leg as TYPE:NP:K:T:V:M[:PRICE], e.g. C:+1:100:0.25:0.3:100
        #[arg(short, long = "leg", required = true)]
        legs: Vec<LegSpec>,

        /// Print every n-th sweep point
        #[arg(long, default_value_t = 11)]
        step: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_domain_error() {
                tracing::warn!("Rejected option parameters");
            }
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> BsmResult<()> {
    let config = match &cli.config {
        Some(path) => PlaygroundConfig::from_json_file(path)?,
        None => PlaygroundConfig::default(),
    };

    match cli.command {
        Commands::Price {
            option_type,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            dividend_yield,
            curve,
        } => {
            let raw = RawInputs {
                option_type,
                spot,
                strike,
                maturity,
                rate_pct: rate,
                volatility_pct: volatility,
                dividend_yield,
            };
            run_price(&config, &raw, curve, cli.json)
        }
        Commands::Strategy {
            spot,
            rate,
            dividend_yield,
            legs,
            step,
        } => {
            let defaults = &config.strategy;
            let spot = spot.unwrap_or(defaults.spot);
            let rate = rate.unwrap_or(defaults.rate);
            let dividend_yield = dividend_yield.unwrap_or(defaults.dividend_yield);
            run_strategy(&config, spot, rate, dividend_yield, legs, step, cli.json)
        }
    }
}

#[derive(Serialize)]
struct PriceReport<'a> {
    params: &'a OptionParams,
    price: f64,
    greeks: Greeks,
    curves: Option<OptionCurves>,
}

fn run_price(config: &PlaygroundConfig, raw: &RawInputs, curve: bool, json: bool) -> BsmResult<()> {
    let params = config.limits.validate(raw)?;
    let option = BsmOption::new(params);

    let curves = if curve {
        Some(OptionCurves::for_display(
            &params,
            config.sweep.display_spread,
            config.sweep.display_points,
        )?)
    } else {
        None
    };

    let report = PriceReport {
        params: option.params(),
        price: option.price(),
        greeks: option.greeks(),
        curves,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("BSM {} Option", params.option_type());
    println!("==================\n");
    println!("  Spot:     {:.2}", params.spot());
    println!("  Strike:   {:.2}", params.strike());
    println!("  Maturity: {:.4} years", params.maturity());
    println!("  Rate:     {:.2}%", params.rate() * 100.0);
    println!("  Vol:      {:.2}%", params.volatility() * 100.0);
    println!("  Div:      {:.4}", params.dividend_yield());
    println!("  Moneyness: {}\n", if params.is_itm() { "ITM" } else { "OTM" });

    println!("Price: {:.4}\n", report.price);
    println!("Greeks:");
    println!("  Lambda: {}", report.greeks.lambda);
    println!("  Delta:  {}", report.greeks.delta);
    println!("  Gamma:  {}", report.greeks.gamma);
    println!("  Theta:  {}", report.greeks.theta);
    println!("  Vega:   {}", report.greeks.vega);

    if let Some(c) = &report.curves {
        println!("\n    Spot      Price     Delta     Gamma      Theta      Vega     Lambda");
        let step = (c.len() / 15).max(1);
        for i in (0..c.len()).step_by(step) {
            println!(
                "{:>8.2} {:>10.4} {:>9.4} {:>9.5} {:>10.4} {:>9.4} {:>10.4}",
                c.spots[i], c.price[i], c.delta[i], c.gamma[i], c.theta[i], c.vega[i], c.lambda[i]
            );
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct StrategyReport<'a> {
    legs: &'a [StrategyLeg],
    summary: StrategySummary,
    break_evens: Vec<f64>,
    payoffs: Curve,
    payoffs_at_expiry: Curve,
    expiry_table: ExpiryTable,
}

fn run_strategy(
    config: &PlaygroundConfig,
    spot: f64,
    rate: f64,
    dividend_yield: f64,
    legs: Vec<LegSpec>,
    step: usize,
    json: bool,
) -> BsmResult<()> {
    let mut strategy =
        OptionStrategy::with_spread(spot, rate, dividend_yield, config.sweep.pricing_spread)?;
    for leg in legs {
        strategy.add_leg(leg)?;
    }

    let report = StrategyReport {
        legs: strategy.legs(),
        summary: strategy.describe(),
        break_evens: strategy.break_evens(),
        payoffs: strategy.payoffs(),
        payoffs_at_expiry: strategy.payoffs_at_expiry(),
        expiry_table: strategy.expiry_table(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Option Strategy (S={:.2}, r={:.4}, q={:.4})", spot, rate, dividend_yield);
    println!("=============================================\n");
    for (name, leg) in report.summary.legs.iter().zip(report.legs) {
        println!(
            "  {}: {} {:<5} NP={:+} K={:.2} T={:.4} v={:.4} M={} Pr={:.2}",
            name,
            leg.option_type.code(),
            if leg.is_long() { "long" } else { "short" },
            leg.net_position,
            leg.strike,
            leg.maturity,
            leg.volatility,
            leg.multiplier,
            leg.display_price()
        );
    }
    println!("\n  Cost: {:.2}", report.summary.cost);
    if !report.break_evens.is_empty() {
        let be: Vec<String> = report.break_evens.iter().map(|b| format!("{:.2}", b)).collect();
        println!("  Break-even at expiry: {}", be.join(", "));
    }

    print!("\n    Spot      Today     Expiry");
    for label in report.expiry_table.labels() {
        print!("  {:>9}", format!("#{}", label));
    }
    println!();

    let step = step.max(1);
    for i in (0..report.payoffs.len()).step_by(step) {
        print!(
            "{:>8.2} {:>10.2} {:>10.2}",
            report.payoffs.spots[i], report.payoffs.values[i], report.payoffs_at_expiry.values[i]
        );
        for value in report.expiry_table.payoffs.row(i) {
            print!("  {:>9.2}", value);
        }
        println!();
    }
    Ok(())
}
