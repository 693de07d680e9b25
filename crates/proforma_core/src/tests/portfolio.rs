//! Portfolio aggregation, conversion fallbacks, and partial-failure policy

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::AnalysisConfig;
use crate::error::PortfolioError;
use crate::model::{PropertyId, PropertyRecord};
use crate::portfolio::{self, aggregate, resolve_parameters};
use crate::solve;

fn record(id: u32, name: &str, price: Decimal, rent: Decimal) -> PropertyRecord {
    PropertyRecord {
        id: PropertyId(id),
        name: name.to_string(),
        purchase_price: price,
        current_value: None,
        down_payment: None,
        loan_amount: None,
        interest_rate: None,
        loan_term_years: None,
        closing_costs: None,
        monthly_rent: rent,
        monthly_expenses: rent * dec!(0.2),
    }
}

#[test]
fn test_fallback_conversion() {
    let config = AnalysisConfig::default();
    let rec = record(1, "Maple St", dec!(300000), dec!(2500));
    let params = resolve_parameters(&rec, &config);

    assert_eq!(params.purchase_price, dec!(300000)); // current value fallback
    assert_eq!(params.down_payment, dec!(60000)); // 20% of current value
    assert_eq!(params.loan_amount, dec!(240000)); // value minus down
    assert_eq!(params.interest_rate, dec!(0.045));
    assert_eq!(params.loan_term_years, 30);
    assert_eq!(params.vacancy_rate, config.vacancy_rate);
    assert_eq!(params.rent_growth, config.rent_growth);
}

#[test]
fn test_explicit_fields_win_over_fallbacks() {
    let config = AnalysisConfig::default();
    let mut rec = record(1, "Maple St", dec!(300000), dec!(2500));
    rec.current_value = Some(dec!(350000));
    rec.down_payment = Some(dec!(70000));
    rec.interest_rate = Some(dec!(0.0375));

    let params = resolve_parameters(&rec, &config);
    assert_eq!(params.purchase_price, dec!(350000));
    assert_eq!(params.down_payment, dec!(70000));
    assert_eq!(params.loan_amount, dec!(280000));
    assert_eq!(params.interest_rate, dec!(0.0375));
}

#[test]
fn test_partial_failure_skips_bad_property() {
    let good_a = record(1, "Maple St", dec!(300000), dec!(2500));
    let good_b = record(2, "Oak Ave", dec!(450000), dec!(3600));
    let mut bad = record(3, "Elm Ct", dec!(250000), dec!(2000));
    bad.monthly_rent = dec!(-2000); // fails validation during the run

    let result = aggregate(&[good_a, bad, good_b], &AnalysisConfig::default()).unwrap();

    assert_eq!(result.property_count(), 2);
    assert!(result.outcome(PropertyId(1)).is_some());
    assert!(result.outcome(PropertyId(2)).is_some());
    assert!(result.outcome(PropertyId(3)).is_none());
    assert!(result.metrics.total_investment > Decimal::ZERO);
}

#[test]
fn test_empty_portfolio_is_an_error() {
    let err = aggregate(&[], &AnalysisConfig::default()).unwrap_err();
    assert_eq!(err, PortfolioError::NoProperties);
}

#[test]
fn test_all_failures_is_an_error() {
    let mut bad_a = record(1, "A", dec!(300000), dec!(2500));
    bad_a.monthly_rent = dec!(-1);
    let mut bad_b = record(2, "B", dec!(300000), dec!(2500));
    bad_b.monthly_rent = dec!(-1);

    let err = aggregate(&[bad_a, bad_b], &AnalysisConfig::default()).unwrap_err();
    assert_eq!(err, PortfolioError::NoSuccessfulSimulations { attempted: 2 });
}

#[test]
fn test_single_property_has_no_diversification() {
    let result = aggregate(
        &[record(1, "Maple St", dec!(300000), dec!(2500))],
        &AnalysisConfig::default(),
    )
    .unwrap();
    assert_eq!(result.metrics.diversification_score, 0.0);
}

#[test]
fn test_balanced_portfolio_diversification() {
    // Two identical values: zero variance, so the score is purely the
    // count term, 2/10
    let result = aggregate(
        &[
            record(1, "Maple St", dec!(300000), dec!(2500)),
            record(2, "Oak Ave", dec!(300000), dec!(2500)),
        ],
        &AnalysisConfig::default(),
    )
    .unwrap();
    assert!((result.metrics.diversification_score - 0.2).abs() < 1e-9);
}

#[test]
fn test_aggregate_sums() {
    let rec_a = record(1, "Maple St", dec!(300000), dec!(2500));
    let rec_b = record(2, "Oak Ave", dec!(450000), dec!(3600));
    let config = AnalysisConfig::default();
    let result = aggregate(&[rec_a, rec_b], &config).unwrap();
    let metrics = &result.metrics;

    assert_eq!(metrics.total_investment, dec!(750000)); // no closing costs
    assert_eq!(metrics.total_value, dec!(750000));

    let outcome_sum: Decimal = result
        .properties
        .values()
        .map(|o| o.total_cash_flow)
        .sum();
    assert_eq!(metrics.total_cash_flow, outcome_sum);

    // With a shared horizon, summed per-property annual averages equal the
    // portfolio total over the horizon
    assert_eq!(
        metrics.annual_cash_flow,
        metrics.total_cash_flow / Decimal::from(config.analysis_period)
    );
}

#[test]
fn test_equity_uses_simplified_estimator() {
    let mut rec = record(1, "Maple St", dec!(300000), dec!(2500));
    rec.current_value = Some(dec!(320000));
    rec.loan_amount = Some(dec!(240000));
    rec.down_payment = Some(dec!(60000));

    let result = aggregate(&[rec], &AnalysisConfig::default()).unwrap();
    // 320000 - 0.85 * 240000
    assert_eq!(result.metrics.total_equity, dec!(116000));
}

#[test]
fn test_underwater_equity_floors_at_zero() {
    let mut rec = record(1, "Elm Ct", dec!(200000), dec!(1800));
    rec.current_value = Some(dec!(100000));
    rec.down_payment = Some(dec!(0));
    rec.loan_amount = Some(dec!(200000)); // 0.85 * 200000 > 100000

    let result = aggregate(&[rec], &AnalysisConfig::default()).unwrap();
    assert_eq!(result.metrics.total_equity, Decimal::ZERO);
}

#[test]
fn test_portfolio_npv_matches_shared_routine() {
    let config = AnalysisConfig::default().with_discount_rate(Decimal::ZERO);
    let result = aggregate(
        &[
            record(1, "Maple St", dec!(300000), dec!(2500)),
            record(2, "Oak Ave", dec!(450000), dec!(3600)),
        ],
        &config,
    )
    .unwrap();
    let metrics = &result.metrics;

    // At zero discount, NPV is the plain sum of the combined vector
    let mut expected = -metrics.total_investment;
    for year in 1..=config.analysis_period {
        expected += result.cash_flow_for_year(year);
    }
    assert_eq!(metrics.portfolio_npv, expected);
}

#[test]
fn test_risk_adjusted_return_uses_fixed_constants() {
    use rust_decimal::prelude::ToPrimitive;

    let result = aggregate(
        &[record(1, "Maple St", dec!(300000), dec!(2500))],
        &AnalysisConfig::default(),
    )
    .unwrap();
    let metrics = &result.metrics;

    let irr = metrics.portfolio_irr.to_f64().unwrap();
    let expected = (irr - portfolio::RISK_FREE_RATE) / portfolio::RETURN_VOLATILITY;
    assert!((metrics.risk_adjusted_return - expected).abs() < 1e-9);
}

#[test]
fn test_combined_cash_flow_vector_matches_projections() {
    let config = AnalysisConfig::default();
    let result = aggregate(
        &[
            record(1, "Maple St", dec!(300000), dec!(2500)),
            record(2, "Oak Ave", dec!(450000), dec!(3600)),
        ],
        &config,
    )
    .unwrap();

    for year in 1..=config.analysis_period {
        let manual: Decimal = result
            .properties
            .values()
            .map(|o| o.projections[year as usize - 1].annual_cash_flow)
            .sum();
        assert_eq!(result.cash_flow_for_year(year), manual);
    }

    // Beyond the simulated horizon every property contributes zero
    assert_eq!(
        result.cash_flow_for_year(config.analysis_period + 1),
        Decimal::ZERO
    );
}

#[test]
fn test_irr_reuses_the_bisection_routine() {
    use rust_decimal::prelude::ToPrimitive;

    let config = AnalysisConfig::default();
    let result = aggregate(
        &[record(1, "Maple St", dec!(300000), dec!(2500))],
        &config,
    )
    .unwrap();

    let mut flows = vec![-result.metrics.total_investment.to_f64().unwrap()];
    for year in 1..=config.analysis_period {
        flows.push(result.cash_flow_for_year(year).to_f64().unwrap());
    }

    match solve::internal_rate_of_return(&flows) {
        Some(rate) => {
            let got = result.metrics.portfolio_irr.to_f64().unwrap();
            assert!((got - rate).abs() < 1e-3, "got {got}, want {rate}");
        }
        None => assert_eq!(result.metrics.portfolio_irr, Decimal::ZERO),
    }
}
