//! Presentation payloads
//!
//! JSON structures handed to whatever renders results (dashboard charts,
//! API responses). The engine itself never depends on a presentation layer —
//! these are plain `serde_json` values derived from finished results.

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::metrics;
use crate::model::{PortfolioResult, SimulationSummary, YearSnapshot};
use crate::portfolio;
use crate::projection::Strategy;

/// Package a single-property run for presentation.
pub fn simulation_report(
    strategy: Strategy,
    snapshots: &[YearSnapshot],
    summary: &SimulationSummary,
) -> Value {
    json!({
        "strategy": strategy.name(),
        "summary": summary,
        "yearly_results": snapshots,
        "generated_at": jiff::Timestamp::now().to_string(),
    })
}

/// Chart and dashboard payloads for a portfolio aggregation.
pub fn portfolio_report(result: &PortfolioResult) -> Value {
    let metrics = &result.metrics;
    let outcomes = result.outcomes_by_id();

    let property_comparison: Vec<Value> = outcomes
        .iter()
        .map(|o| {
            let cap_rate = if o.current_value > Decimal::ZERO {
                (o.annual_cash_flow / o.current_value) * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            json!({
                "propertyName": o.name,
                "irr": o.irr * Decimal::ONE_HUNDRED,
                "npv": o.npv,
                "currentValue": o.current_value,
                "cashFlow": o.annual_cash_flow,
                "capRate": cap_rate,
            })
        })
        .collect();

    let mut portfolio_cash_flow: Vec<Value> = Vec::with_capacity(result.analysis_period as usize);
    for year in 1..=result.analysis_period {
        let mut row = serde_json::Map::new();
        row.insert("year".into(), json!(year));
        let mut total = Decimal::ZERO;
        for outcome in &outcomes {
            let flow = outcome
                .projections
                .get(year as usize - 1)
                .map(|p| p.annual_cash_flow)
                .unwrap_or(Decimal::ZERO);
            total += flow;
            row.insert(outcome.name.clone(), json!(flow));
        }
        row.insert("total".into(), json!(total));
        portfolio_cash_flow.push(Value::Object(row));
    }

    let diversification_data: Vec<Value> = outcomes
        .iter()
        .map(|o| {
            let percentage = if metrics.total_value > Decimal::ZERO {
                (o.current_value / metrics.total_value) * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            json!({
                "name": o.name,
                "value": o.current_value,
                "percentage": percentage,
            })
        })
        .collect();

    let risk_metrics: Vec<Value> = (1..=result.analysis_period)
        .map(|year| {
            json!({
                "year": year,
                "portfolioReturn": metrics.portfolio_irr * Decimal::ONE_HUNDRED,
                "sharpeRatio": metrics.risk_adjusted_return,
                "volatility": portfolio::RETURN_VOLATILITY * 100.0,
            })
        })
        .collect();

    json!({
        "portfolioSummary": {
            "totalProperties": result.property_count(),
            "totalInvestment": metrics.total_investment,
            "totalValue": metrics.total_value,
            "totalEquity": metrics.total_equity,
            "portfolioIRR": metrics.portfolio_irr * Decimal::ONE_HUNDRED,
            "portfolioNPV": metrics.portfolio_npv,
            "annualCashFlow": metrics.annual_cash_flow,
            "totalCashFlow": metrics.total_cash_flow,
            "diversificationScore": metrics.diversification_score * 100.0,
            "riskAdjustedReturn": metrics.risk_adjusted_return,
        },
        "propertyComparison": property_comparison,
        "portfolioCashFlow": portfolio_cash_flow,
        "diversificationData": diversification_data,
        "riskMetrics": risk_metrics,
        "generated_at": jiff::Timestamp::now().to_string(),
    })
}

/// Screening payload for one property's first-year indicators.
pub fn screening_report(params: &crate::model::PropertyParameters) -> Value {
    json!({
        "effectiveMonthlyRent": metrics::effective_monthly_rent(params),
        "monthlyCashFlow": metrics::monthly_cash_flow(params),
        "annualCashFlow": metrics::annual_cash_flow(params),
        "cashOnCashReturn": metrics::cash_on_cash_return(params),
        "capRate": metrics::cap_rate(params),
        "onePercentRule": metrics::meets_one_percent_rule(params),
    })
}
