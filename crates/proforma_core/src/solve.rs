//! Numeric routines shared by the engine and the portfolio aggregator:
//! IRR root-finding and present-value discounting.
//!
//! IRR uses bisection rather than Newton's method for robustness against
//! pathological cash-flow sign patterns. The search runs in `f64` — its
//! result is an approximation by definition — while NPV discounting stays in
//! exact decimal arithmetic.

use rust_decimal::{Decimal, MathematicalOps};

/// Lower bound of the IRR search, just above total loss
const LOW_RATE: f64 = -0.99;
/// Upper bound of the IRR search (500% annual return)
const HIGH_RATE: f64 = 5.0;
const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: usize = 100;

/// Solve for the rate at which the cash-flow series' NPV is zero.
///
/// `cash_flows[0]` is the (negative) initial investment; `cash_flows[i]` is
/// discounted over `i` periods. Returns `None` when the search does not
/// converge within bounds — e.g. when the investment never recovers and no
/// root is bracketed. Callers typically degrade that to a zero rate.
pub fn internal_rate_of_return(cash_flows: &[f64]) -> Option<f64> {
    if cash_flows.len() < 2 {
        return None;
    }

    let mut low = LOW_RATE;
    let mut high = HIGH_RATE;

    for _ in 0..MAX_ITERATIONS {
        let mid = f64::midpoint(low, high);
        let npv = npv_at_rate(cash_flows, mid);

        if npv.abs() < TOLERANCE {
            return Some(mid);
        }

        // NPV decreases as the discount rate rises
        if npv > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    None
}

fn npv_at_rate(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + rate).powi(i as i32))
        .sum()
}

/// Net present value of a cash-flow series at a fixed discount rate,
/// in exact decimal arithmetic. Index 0 is undiscounted.
pub fn net_present_value(cash_flows: &[Decimal], rate: Decimal) -> Decimal {
    let base = Decimal::ONE + rate;
    cash_flows
        .iter()
        .enumerate()
        .map(|(i, cf)| *cf / base.powi(i as i64))
        .sum()
}
