//! Quick single-property indicators
//!
//! First-year screening numbers computed straight from the parameters, with
//! no growth applied. The simulation engine produces the multi-year view;
//! these feed comparison payloads and ad-hoc screening.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::PropertyParameters;
use crate::mortgage;

/// Monthly rent after vacancy loss.
pub fn effective_monthly_rent(params: &PropertyParameters) -> Decimal {
    params.monthly_rent * (Decimal::ONE - params.vacancy_rate)
}

/// First-year monthly cash flow: effective rent minus debt service and
/// operating expenses.
pub fn monthly_cash_flow(params: &PropertyParameters) -> Decimal {
    let payment =
        mortgage::monthly_payment(params.loan_amount, params.interest_rate, params.loan_term_years);
    effective_monthly_rent(params) - payment - params.monthly_expenses
}

pub fn annual_cash_flow(params: &PropertyParameters) -> Decimal {
    monthly_cash_flow(params) * dec!(12)
}

/// First-year cash-on-cash return as a percentage. Zero when nothing was
/// put down.
pub fn cash_on_cash_return(params: &PropertyParameters) -> Decimal {
    if params.down_payment <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (annual_cash_flow(params) / params.down_payment) * Decimal::ONE_HUNDRED
}

/// Capitalization rate: annual effective rent over purchase price, as a
/// percentage.
pub fn cap_rate(params: &PropertyParameters) -> Decimal {
    if params.purchase_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let annual_rent = effective_monthly_rent(params) * dec!(12);
    (annual_rent / params.purchase_price) * Decimal::ONE_HUNDRED
}

/// Return on investment as a percentage, for arbitrary income/expense totals.
pub fn annual_roi(
    annual_income: Decimal,
    annual_expenses: Decimal,
    initial_investment: Decimal,
) -> Decimal {
    if initial_investment <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    ((annual_income - annual_expenses) / initial_investment) * Decimal::ONE_HUNDRED
}

/// The 1% screening rule: monthly rent at or above 1% of purchase price.
pub fn meets_one_percent_rule(params: &PropertyParameters) -> bool {
    params.monthly_rent >= params.purchase_price * dec!(0.01)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertyBuilder;

    fn params() -> PropertyParameters {
        PropertyBuilder::single_family()
            .purchase_price(dec!(300000))
            .monthly_rent(dec!(3000))
            .monthly_expenses(dec!(500))
            .vacancy_rate(dec!(0.05))
            .build()
    }

    #[test]
    fn test_effective_rent_after_vacancy() {
        assert_eq!(effective_monthly_rent(&params()), dec!(2850));
    }

    #[test]
    fn test_cap_rate() {
        // 2850 * 12 / 300000 * 100 = 11.4
        assert_eq!(cap_rate(&params()), dec!(11.4));
    }

    #[test]
    fn test_one_percent_rule() {
        assert!(meets_one_percent_rule(&params())); // 3000 >= 3000
        let below = PropertyBuilder::single_family()
            .purchase_price(dec!(400000))
            .monthly_rent(dec!(3200))
            .build();
        assert!(!meets_one_percent_rule(&below));
    }

    #[test]
    fn test_roi_guards_zero_investment() {
        assert_eq!(
            annual_roi(dec!(30000), dec!(10000), Decimal::ZERO),
            Decimal::ZERO
        );
        assert_eq!(
            annual_roi(dec!(30000), dec!(10000), dec!(100000)),
            dec!(20)
        );
    }
}
