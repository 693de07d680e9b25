//! Fixed-rate mortgage amortization
//!
//! The monthly payment comes from the standard annuity formula; the yearly
//! amortization step splits twelve payments into interest and principal
//! against a running balance. Principal is clamped to the remaining balance,
//! so a loan is never overpaid and the balance terminates at exactly zero.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;

/// One year's debt service against a loan balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebtService {
    pub principal: Decimal,
    pub interest: Decimal,
    pub ending_balance: Decimal,
}

/// Monthly payment for a fixed-rate loan.
///
/// A zero rate degenerates to straight-line principal repayment. The annuity
/// formula itself runs in `f64` (exponentiation over hundreds of periods) and
/// the result is rounded to cents, matching how lenders quote payments.
pub fn monthly_payment(loan_amount: Decimal, annual_rate: Decimal, term_years: u32) -> Decimal {
    if loan_amount <= Decimal::ZERO || term_years == 0 {
        return Decimal::ZERO;
    }

    let num_payments = term_years * 12;
    if annual_rate.is_zero() {
        return loan_amount / Decimal::from(num_payments);
    }

    let monthly_rate = (annual_rate / dec!(12)).to_f64().unwrap_or(0.0);
    let principal = loan_amount.to_f64().unwrap_or(0.0);
    let growth = (1.0 + monthly_rate).powi(num_payments as i32);
    let payment = principal * (monthly_rate * growth) / (growth - 1.0);

    Decimal::from_f64(payment)
        .unwrap_or(Decimal::ZERO)
        .round_dp(2)
}

/// Amortize one year (twelve monthly steps) of a loan.
///
/// Each month charges interest on the running balance and applies the rest of
/// the payment to principal, clamped so principal never exceeds what is owed.
/// Once the balance reaches zero the remaining months charge nothing.
pub fn amortize_year(balance: Decimal, annual_rate: Decimal, payment: Decimal) -> DebtService {
    let monthly_rate = annual_rate / dec!(12);

    let mut principal = Decimal::ZERO;
    let mut interest = Decimal::ZERO;
    let mut ending_balance = balance;

    for _ in 0..12 {
        if ending_balance <= Decimal::ZERO {
            break;
        }

        let month_interest = ending_balance * monthly_rate;
        let mut month_principal = payment - month_interest;
        if month_principal > ending_balance {
            month_principal = ending_balance;
        }

        interest += month_interest;
        principal += month_principal;
        ending_balance -= month_principal;
    }

    DebtService {
        principal,
        interest,
        ending_balance,
    }
}
