//! Simulation and aggregation outputs
//!
//! One `YearSnapshot` per simulated year, a `SimulationSummary` derived once
//! from the full snapshot sequence, and the portfolio-level rollups. All of
//! these are computed once and never partially updated.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ids::PropertyId;

/// One simulated year of a property's income, debt service, and equity.
///
/// Each snapshot depends only on the immutable parameters and the previous
/// snapshot's `ending_balance`/`cumulative_cash_flow`; everything else is
/// recomputed from the year index, so repeated projection does not drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// 1-based year index
    pub year: u32,
    /// Loan balance at the start of the year
    pub opening_balance: Decimal,
    /// Monthly rent for this year, after compound growth
    pub monthly_rent: Decimal,
    /// Annual rental income after vacancy
    pub rental_income: Decimal,
    /// Annual operating expenses after compound growth
    pub operating_expenses: Decimal,
    /// Annual debt service actually paid (12 monthly payments while the loan
    /// has a balance, zero after payoff)
    pub mortgage_payment: Decimal,
    pub principal_paid: Decimal,
    pub interest_paid: Decimal,
    pub net_cash_flow: Decimal,
    pub cumulative_cash_flow: Decimal,
    /// Property value after compound appreciation
    pub property_value: Decimal,
    /// Property value minus remaining debt
    pub equity: Decimal,
    /// Loan balance at the end of the year
    pub ending_balance: Decimal,
    /// Net cash flow over down payment, as a percentage
    pub cash_on_cash: Decimal,
}

/// Return metrics derived from a complete snapshot sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Down payment plus closing costs
    pub total_investment: Decimal,
    pub total_cash_flow: Decimal,
    pub final_property_value: Decimal,
    pub final_equity: Decimal,
    /// Cash flow plus final equity minus investment
    pub total_return: Decimal,
    pub total_return_pct: Decimal,
    pub average_annual_return: Decimal,
    /// Internal rate of return, as a percentage rounded to 4 decimal places
    pub irr: Decimal,
    /// Net present value at the engine's discount rate
    pub npv: Decimal,
    /// Mean of per-year cash-on-cash percentages
    pub average_cash_on_cash: Decimal,
}

/// One year's cash flow in a property's projection series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub year: u32,
    pub annual_cash_flow: Decimal,
    pub monthly_cash_flow: Decimal,
}

/// Per-property results inside a portfolio aggregation.
///
/// Rates here are fractions (the portfolio surface), unlike the percentage
/// fields on [`SimulationSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyOutcome {
    pub property_id: PropertyId,
    pub name: String,
    /// Internal rate of return as a fraction
    pub irr: Decimal,
    pub npv: Decimal,
    /// Average annual cash flow (total over the horizon divided by years)
    pub annual_cash_flow: Decimal,
    pub total_cash_flow: Decimal,
    /// Average cash-on-cash return as a fraction
    pub cash_on_cash: Decimal,
    pub projections: Vec<CashFlowProjection>,
    pub snapshots: Vec<YearSnapshot>,
    pub summary: SimulationSummary,
    /// Market value used for portfolio weighting (current value when known,
    /// purchase price otherwise)
    pub current_value: Decimal,
    /// Purchase price plus closing costs from the source record
    pub investment_basis: Decimal,
    /// Simplified equity estimate: value minus 85% of the loan, floored at zero
    pub estimated_equity: Decimal,
}

/// Aggregate metrics over all successfully simulated properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_investment: Decimal,
    pub total_value: Decimal,
    /// Sum of per-property simplified equity estimates. This deliberately uses
    /// the 85%-remaining-debt heuristic rather than the full amortization
    /// schedule.
    pub total_equity: Decimal,
    /// Portfolio IRR as a fraction, solved over the combined yearly cash-flow
    /// vector (not averaged per-property IRRs)
    pub portfolio_irr: Decimal,
    pub portfolio_npv: Decimal,
    /// Sum of per-property average annual cash flows
    pub annual_cash_flow: Decimal,
    pub total_cash_flow: Decimal,
    /// Heuristic in [0, 1] rewarding property count and value balance
    pub diversification_score: f64,
    /// Sharpe-ratio proxy with fixed risk-free rate and volatility constants
    pub risk_adjusted_return: f64,
}

/// Complete results from one portfolio aggregation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioResult {
    pub metrics: PortfolioMetrics,
    pub properties: FxHashMap<PropertyId, PropertyOutcome>,
    /// Analysis horizon the aggregation ran with
    pub analysis_period: u32,
}

impl PortfolioResult {
    /// Number of properties that simulated successfully
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Get a property's outcome by id
    pub fn outcome(&self, id: PropertyId) -> Option<&PropertyOutcome> {
        self.properties.get(&id)
    }

    /// Outcomes ordered by property id, for deterministic presentation
    pub fn outcomes_by_id(&self) -> Vec<&PropertyOutcome> {
        let mut outcomes: Vec<_> = self.properties.values().collect();
        outcomes.sort_by_key(|o| o.property_id);
        outcomes
    }

    /// Combined portfolio cash flow for a given 1-based year.
    ///
    /// Properties whose simulated history is shorter than `year` contribute
    /// zero for that year.
    pub fn cash_flow_for_year(&self, year: u32) -> Decimal {
        self.properties
            .values()
            .map(|o| {
                o.projections
                    .get(year as usize - 1)
                    .map(|p| p.annual_cash_flow)
                    .unwrap_or(Decimal::ZERO)
            })
            .sum()
    }
}
