//! Portfolio aggregation across multiple properties
//!
//! Each property simulates independently (on the rayon pool when the
//! `parallel` feature is on); collection is the synchronization barrier
//! before the aggregation math. A single property's failure is logged and the
//! property skipped — aggregation only fails outright when nothing simulates.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use rustc_hash::FxHashMap;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::config::AnalysisConfig;
use crate::error::PortfolioError;
use crate::model::{
    CashFlowProjection, PortfolioMetrics, PortfolioResult, PropertyOutcome, PropertyParameters,
    PropertyRecord,
};
use crate::projection::Strategy;
use crate::simulation::{self, SimulationEngine};
use crate::solve;
use crate::validate;

/// Risk-free rate assumed by the Sharpe-ratio proxy
pub const RISK_FREE_RATE: f64 = 0.03;
/// Assumed portfolio return volatility (not property-specific)
pub const RETURN_VOLATILITY: f64 = 0.15;
/// Assumed fraction of the original loan still outstanding, for the
/// simplified portfolio equity estimate
const REMAINING_DEBT_FACTOR: Decimal = dec!(0.85);

/// Run every property through the simulation engine and combine the results.
///
/// Records with missing financing fields are filled in with explicit
/// fallbacks before simulation (see [`resolve_parameters`]). Properties whose
/// parameters fail validation are skipped with a warning; the aggregation
/// proceeds with whatever succeeded.
pub fn aggregate(
    records: &[PropertyRecord],
    config: &AnalysisConfig,
) -> Result<PortfolioResult, PortfolioError> {
    if records.is_empty() {
        return Err(PortfolioError::NoProperties);
    }

    let engine = SimulationEngine::new(Strategy::Hold).with_discount_rate(config.discount_rate);

    #[cfg(feature = "parallel")]
    let outcomes: Vec<PropertyOutcome> = records
        .par_iter()
        .filter_map(|record| simulate_property(&engine, record, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<PropertyOutcome> = records
        .iter()
        .filter_map(|record| simulate_property(&engine, record, config))
        .collect();

    if outcomes.is_empty() {
        return Err(PortfolioError::NoSuccessfulSimulations {
            attempted: records.len(),
        });
    }

    let metrics = combine(&outcomes, config);

    let properties: FxHashMap<_, _> = outcomes
        .into_iter()
        .map(|outcome| (outcome.property_id, outcome))
        .collect();

    Ok(PortfolioResult {
        metrics,
        properties,
        analysis_period: config.analysis_period,
    })
}

/// Convert a heterogeneous record into engine parameters.
///
/// Fallbacks: current value defaults to purchase price; down payment to 20%
/// of current value; loan amount to current value minus down payment; rate to
/// 4.5% over 30 years. The simulation values the property at its current
/// value, not its historical purchase price.
pub fn resolve_parameters(record: &PropertyRecord, config: &AnalysisConfig) -> PropertyParameters {
    let current_value = record.current_value.unwrap_or(record.purchase_price);
    let down_payment = record
        .down_payment
        .unwrap_or(current_value * dec!(0.20));
    let loan_amount = record.loan_amount.unwrap_or(current_value - down_payment);

    PropertyParameters {
        purchase_price: current_value,
        down_payment,
        loan_amount,
        interest_rate: record.interest_rate.unwrap_or(dec!(0.045)),
        loan_term_years: record.loan_term_years.unwrap_or(30),
        monthly_rent: record.monthly_rent,
        monthly_expenses: record.monthly_expenses,
        vacancy_rate: config.vacancy_rate,
        rent_growth: config.rent_growth,
        expense_growth: config.expense_growth,
        appreciation: config.appreciation,
        closing_costs: record.closing_costs.unwrap_or(Decimal::ZERO),
    }
}

/// Simulate one property; `None` means it was skipped.
fn simulate_property(
    engine: &SimulationEngine,
    record: &PropertyRecord,
    config: &AnalysisConfig,
) -> Option<PropertyOutcome> {
    let params = resolve_parameters(record, config);

    let run = validate::ensure_simulatable(&params)
        .map_err(crate::error::SimulationError::from)
        .and_then(|()| engine.run(&params, config.analysis_period));

    let (snapshots, summary) = match run {
        Ok(result) => result,
        Err(error) => {
            tracing::warn!(
                property_id = record.id.0,
                name = %record.name,
                %error,
                "skipping property in portfolio simulation"
            );
            return None;
        }
    };

    let years = Decimal::from(config.analysis_period);
    let projections: Vec<CashFlowProjection> = snapshots
        .iter()
        .map(|s| CashFlowProjection {
            year: s.year,
            annual_cash_flow: s.net_cash_flow,
            monthly_cash_flow: s.net_cash_flow / dec!(12),
        })
        .collect();

    let current_value = record.current_value.unwrap_or(record.purchase_price);
    let estimated_remaining_debt = params.loan_amount * REMAINING_DEBT_FACTOR;
    let estimated_equity = (current_value - estimated_remaining_debt).max(Decimal::ZERO);

    Some(PropertyOutcome {
        property_id: record.id,
        name: record.name.clone(),
        irr: summary.irr / Decimal::ONE_HUNDRED,
        npv: summary.npv,
        annual_cash_flow: summary.total_cash_flow / years,
        total_cash_flow: summary.total_cash_flow,
        cash_on_cash: summary.average_cash_on_cash / Decimal::ONE_HUNDRED,
        projections,
        snapshots,
        summary,
        current_value,
        investment_basis: record.purchase_price
            + record.closing_costs.unwrap_or(Decimal::ZERO),
        estimated_equity,
    })
}

fn combine(outcomes: &[PropertyOutcome], config: &AnalysisConfig) -> PortfolioMetrics {
    let total_investment: Decimal = outcomes.iter().map(|o| o.investment_basis).sum();
    let total_value: Decimal = outcomes.iter().map(|o| o.current_value).sum();
    let total_equity: Decimal = outcomes.iter().map(|o| o.estimated_equity).sum();

    let annual_cash_flow: Decimal = outcomes.iter().map(|o| o.annual_cash_flow).sum();
    let total_cash_flow: Decimal = outcomes.iter().map(|o| o.total_cash_flow).sum();

    // Combined per-calendar-year vector; shorter histories contribute zero
    let mut flows: Vec<Decimal> = Vec::with_capacity(config.analysis_period as usize + 1);
    flows.push(-total_investment);
    for year in 1..=config.analysis_period {
        let year_flow: Decimal = outcomes
            .iter()
            .map(|o| {
                o.projections
                    .get(year as usize - 1)
                    .map(|p| p.annual_cash_flow)
                    .unwrap_or(Decimal::ZERO)
            })
            .sum();
        flows.push(year_flow);
    }

    let portfolio_irr = simulation::solve_irr_percent(&flows) / Decimal::ONE_HUNDRED;
    let portfolio_npv = solve::net_present_value(&flows, config.discount_rate);

    let diversification_score = diversification(outcomes, total_value);

    let irr_f64 = portfolio_irr.to_f64().unwrap_or(0.0);
    let risk_adjusted_return = (irr_f64 - RISK_FREE_RATE) / RETURN_VOLATILITY;

    PortfolioMetrics {
        total_investment,
        total_value,
        total_equity,
        portfolio_irr,
        portfolio_npv,
        annual_cash_flow,
        total_cash_flow,
        diversification_score,
        risk_adjusted_return,
    }
}

/// Heuristic in [0, 1]: rewards property count (capped at 10) and value
/// balance (penalizes variance relative to total value). A single property
/// scores zero.
fn diversification(outcomes: &[PropertyOutcome], total_value: Decimal) -> f64 {
    let count = outcomes.len();
    if count < 2 {
        return 0.0;
    }
    let total = total_value.to_f64().unwrap_or(0.0);
    if total <= 0.0 {
        return 0.0;
    }

    let values: Vec<f64> = outcomes
        .iter()
        .map(|o| o.current_value.to_f64().unwrap_or(0.0))
        .collect();
    let mean = values.iter().sum::<f64>() / count as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

    (count as f64 / 10.0).min(1.0) * (1.0 - (variance / total).min(1.0))
}
