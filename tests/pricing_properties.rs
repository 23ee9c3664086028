//! Integration tests for the pricing core
//!
//! Checks model identities across a spread of inputs rather than single
//! reference values.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use bsm_playground::prelude::*;

const SPOTS: [f64; 4] = [55.0, 90.0, 100.0, 140.0];
const STRIKES: [f64; 3] = [80.0, 100.0, 125.0];
const MATURITIES: [f64; 3] = [0.02, 0.5, 3.0];
const VOLS: [f64; 3] = [0.05, 0.3, 0.9];
const RATES: [f64; 2] = [0.0, 0.07];
const YIELDS: [f64; 2] = [0.0, 0.03];

fn pair(s: f64, k: f64, t: f64, r: f64, v: f64, q: f64) -> (BsmOption, BsmOption) {
    (
        BsmOption::from_inputs(OptionType::Call, s, k, t, r, v, q).unwrap(),
        BsmOption::from_inputs(OptionType::Put, s, k, t, r, v, q).unwrap(),
    )
}

fn for_each_input(mut f: impl FnMut(f64, f64, f64, f64, f64, f64)) {
    for &s in &SPOTS {
        for &k in &STRIKES {
            for &t in &MATURITIES {
                for &v in &VOLS {
                    for &r in &RATES {
                        for &q in &YIELDS {
                            f(s, k, t, r, v, q);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn put_call_parity_holds() {
    for_each_input(|s, k, t, r, v, q| {
        let (call, put) = pair(s, k, t, r, v, q);
        let forward_value = s * (-q * t).exp() - k * (-r * t).exp();
        assert_abs_diff_eq!(call.price() - put.price(), forward_value, epsilon = 1e-9);
    });
}

#[test]
fn gamma_and_vega_do_not_depend_on_type() {
    for_each_input(|s, k, t, r, v, q| {
        let (call, put) = pair(s, k, t, r, v, q);
        assert_eq!(call.gamma(), put.gamma());
        assert_eq!(call.vega(), put.vega());
    });
}

#[test]
fn prices_are_bounded() {
    for_each_input(|s, k, t, r, v, q| {
        let (call, put) = pair(s, k, t, r, v, q);
        // A call is never worth more than the discounted underlying
        assert!(call.price() >= -1e-12);
        assert!(call.price() <= s * (-q * t).exp() + 1e-9);
        assert!(put.price() >= -1e-12);
        assert!(put.price() <= k * (-r * t).exp() + 1e-9);
    });
}

#[test]
fn expiry_collapses_to_intrinsic() {
    for &s in &SPOTS {
        for &k in &STRIKES {
            let (call, put) = pair(s, k, 0.0, 0.05, 0.3, 0.02);

            assert_eq!(call.price(), (s - k).max(0.0));
            assert_eq!(put.price(), (k - s).max(0.0));

            for option in [&call, &put] {
                assert_eq!(option.gamma(), 0.0);
                assert_eq!(option.theta(), 0.0);
                assert_eq!(option.vega(), 0.0);
            }

            assert_eq!(call.delta(), if s > k { 1.0 } else { 0.0 });
            assert_eq!(put.delta(), if s < k { -1.0 } else { 0.0 });
        }
    }
}

#[test]
fn lambda_matches_definition_away_from_boundary() {
    let (call, put) = pair(100.0, 100.0, 0.5, 0.02, 0.25, 0.01);
    assert_relative_eq!(call.lambda(), call.delta() * 100.0 / call.price(), max_relative = 1e-12);
    assert_relative_eq!(put.lambda(), put.delta() * 100.0 / put.price(), max_relative = 1e-12);
    assert!(call.lambda() > 1.0);
    assert!(put.lambda() < -1.0);
}

#[test]
fn lambda_sentinels_for_worthless_options() {
    let (call, _) = pair(50.0, 150.0, 0.001, 0.01, 0.1, 0.0);
    assert!(call.price() < 1e-10);
    assert_eq!(call.lambda(), f64::INFINITY);

    let (_, put) = pair(150.0, 50.0, 0.001, 0.01, 0.1, 0.0);
    assert!(put.price() < 1e-10);
    assert_eq!(put.lambda(), f64::NEG_INFINITY);
}

#[test]
fn delta_matches_finite_difference() {
    let h = 1e-4;
    for_each_input(|s, k, t, r, v, q| {
        let (call, _) = pair(s, k, t, r, v, q);
        let fd = (call.price_at(s + h) - call.price_at(s - h)) / (2.0 * h);
        assert_abs_diff_eq!(call.delta(), fd, epsilon = 1e-4);
    });
}

#[test]
fn greeks_are_rounded_for_display() {
    let (call, _) = pair(100.0, 100.0, 0.25, 0.03, 0.30, 0.0);
    let g = call.greeks();
    for value in [g.delta, g.gamma, g.theta, g.vega, g.lambda] {
        assert_abs_diff_eq!(value * 100.0, (value * 100.0).round(), epsilon = 1e-9);
    }
}

#[test]
fn sweep_has_fixed_shape() {
    for &spot in &[0.5, 100.0, 4321.0] {
        for &spread in &[PRICING_SPREAD, DISPLAY_SPREAD] {
            let s = underlying_sweep(spot, spread).unwrap();
            assert_eq!(s.len(), SWEEP_POINTS);
            assert!(s.windows(2).into_iter().all(|w| w[1] > w[0]));
            assert!(s[98] < spot);
            assert_eq!(s[99], spot);
            assert_relative_eq!(s[0], spot * (1.0 - spread), max_relative = 1e-12);
            assert_relative_eq!(s[198], spot * (1.0 + spread), max_relative = 1e-12);
        }
    }
}

#[test]
fn construction_errors_name_the_field() {
    let err = OptionParams::new(OptionType::Call, 100.0, 100.0, -1.0, 0.0, 0.2, 0.0).unwrap_err();
    assert!(err.to_string().contains("maturity"));

    let err = OptionParams::new(OptionType::Call, 100.0, 100.0, 1.0, 0.0, 0.2, -0.5).unwrap_err();
    assert!(err.to_string().contains("dividend yield"));

    let err = "Q".parse::<OptionType>().unwrap_err();
    assert!(err.to_string().contains("'C'"));
}
