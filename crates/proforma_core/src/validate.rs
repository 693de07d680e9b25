//! Parameter validation
//!
//! Validation reports issues rather than mutating or rejecting input: the
//! surrounding layer decides what blocks a run. [`ensure_simulatable`] is the
//! strict gate used ahead of the engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{ValidationError, ValidationIssue};
use crate::model::PropertyParameters;

/// Inspect parameters and report every issue found.
pub fn validate_parameters(params: &PropertyParameters) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let monetary = [
        ("purchase_price", params.purchase_price),
        ("down_payment", params.down_payment),
        ("loan_amount", params.loan_amount),
        ("monthly_rent", params.monthly_rent),
        ("monthly_expenses", params.monthly_expenses),
        ("closing_costs", params.closing_costs),
    ];
    for (field, value) in monetary {
        if value < Decimal::ZERO {
            issues.push(ValidationIssue::NegativeValue { field, value });
        }
    }

    if params.down_payment > params.purchase_price {
        issues.push(ValidationIssue::DownPaymentExceedsPrice {
            down_payment: params.down_payment,
            purchase_price: params.purchase_price,
        });
    }

    let expected_loan = params.purchase_price - params.down_payment;
    if (params.loan_amount - expected_loan).abs() > dec!(0.01) {
        issues.push(ValidationIssue::LoanAmountMismatch {
            expected: expected_loan,
            actual: params.loan_amount,
        });
    }

    let fractions = [
        ("interest_rate", params.interest_rate),
        ("vacancy_rate", params.vacancy_rate),
    ];
    for (field, value) in fractions {
        if value < Decimal::ZERO || value > Decimal::ONE {
            issues.push(ValidationIssue::RateOutOfRange { field, value });
        }
    }

    if params.loan_term_years == 0 && params.loan_amount > Decimal::ZERO {
        issues.push(ValidationIssue::ZeroLoanTerm);
    }

    issues
}

/// Precondition gate ahead of the engine: any blocking issue stops the run.
/// Advisory issues (loan/price bookkeeping disagreements) pass through.
pub fn ensure_simulatable(params: &PropertyParameters) -> Result<(), ValidationError> {
    let mut issues = validate_parameters(params);
    issues.retain(ValidationIssue::is_blocking);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertyBuilder;

    fn valid_params() -> PropertyParameters {
        PropertyBuilder::single_family()
            .purchase_price(dec!(400000))
            .monthly_rent(dec!(3200))
            .monthly_expenses(dec!(650))
            .build()
    }

    #[test]
    fn test_clean_parameters_pass() {
        assert!(validate_parameters(&valid_params()).is_empty());
        assert!(ensure_simulatable(&valid_params()).is_ok());
    }

    #[test]
    fn test_negative_rent_reported() {
        let mut params = valid_params();
        params.monthly_rent = dec!(-100);
        let issues = validate_parameters(&params);
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::NegativeValue {
                field: "monthly_rent",
                ..
            }
        )));
    }

    #[test]
    fn test_down_payment_exceeding_price_reported() {
        let mut params = valid_params();
        params.down_payment = params.purchase_price + dec!(1);
        let issues = validate_parameters(&params);
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::DownPaymentExceedsPrice { .. })));
        // The loan amount now disagrees with price minus down too
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::LoanAmountMismatch { .. })));
    }

    #[test]
    fn test_rate_out_of_range_reported() {
        let mut params = valid_params();
        params.interest_rate = dec!(4.5); // percent, not a fraction
        let issues = validate_parameters(&params);
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::RateOutOfRange {
                field: "interest_rate",
                ..
            }
        )));
    }
}
