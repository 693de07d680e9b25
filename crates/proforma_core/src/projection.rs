//! Year-by-year projection strategies
//!
//! A strategy maps `(year, parameters, previous snapshot)` to one
//! [`YearSnapshot`]. Dispatch is a tagged enum rather than trait objects:
//! every variant implements the same contract and new exit strategies ship as
//! new variants. Only the buy-and-hold strategy exists today.
//!
//! The only state carried between years is the prior ending loan balance and
//! cumulative cash flow. Rent, expenses, and value are recomputed from the
//! year index with compound growth, so repeated projection cannot drift.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{PropertyParameters, YearSnapshot};
use crate::mortgage;

/// Exit strategy for a property simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Buy and hold for the whole horizon, with a hypothetical liquidation
    /// at the end for IRR/NPV purposes
    #[default]
    Hold,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Hold => "Buy and Hold",
        }
    }

    /// Project one year. `previous` is `None` for year 1.
    pub fn project(
        &self,
        year: u32,
        params: &PropertyParameters,
        previous: Option<&YearSnapshot>,
    ) -> YearSnapshot {
        match self {
            Strategy::Hold => project_hold(year, params, previous),
        }
    }
}

fn project_hold(
    year: u32,
    params: &PropertyParameters,
    previous: Option<&YearSnapshot>,
) -> YearSnapshot {
    // Year 1 means zero years of growth
    let elapsed = i64::from(year.saturating_sub(1));

    let monthly_rent = params.monthly_rent * (Decimal::ONE + params.rent_growth).powi(elapsed);
    let monthly_expenses =
        params.monthly_expenses * (Decimal::ONE + params.expense_growth).powi(elapsed);
    let property_value =
        params.purchase_price * (Decimal::ONE + params.appreciation).powi(elapsed);

    let monthly_payment =
        mortgage::monthly_payment(params.loan_amount, params.interest_rate, params.loan_term_years);

    let opening_balance = match previous {
        Some(prev) => prev.ending_balance,
        None => params.loan_amount,
    };

    let debt = mortgage::amortize_year(opening_balance, params.interest_rate, monthly_payment);

    let effective_rent = monthly_rent * (Decimal::ONE - params.vacancy_rate);
    let rental_income = effective_rent * dec!(12);
    let operating_expenses = monthly_expenses * dec!(12);
    // Debt service actually paid: 12 full payments while the balance covers
    // them, less in the payoff year, zero once the loan is gone. Cash flow
    // rises after payoff with no special casing.
    let mortgage_payment = debt.principal + debt.interest;

    let net_cash_flow = rental_income - operating_expenses - mortgage_payment;
    let cumulative_cash_flow = match previous {
        Some(prev) => prev.cumulative_cash_flow + net_cash_flow,
        None => net_cash_flow,
    };

    let equity = property_value - debt.ending_balance;

    let cash_on_cash = if params.down_payment > Decimal::ZERO {
        (net_cash_flow / params.down_payment) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    YearSnapshot {
        year,
        opening_balance,
        monthly_rent,
        rental_income,
        operating_expenses,
        mortgage_payment,
        principal_paid: debt.principal,
        interest_paid: debt.interest,
        net_cash_flow,
        cumulative_cash_flow,
        property_value,
        equity,
        ending_balance: debt.ending_balance,
        cash_on_cash,
    }
}
