//! Simulation engine: drives a projection strategy across the analysis
//! horizon and derives summary return metrics from the year sequence.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;

use crate::error::SimulationError;
use crate::model::{PropertyParameters, SimulationSummary, YearSnapshot};
use crate::projection::Strategy;
use crate::solve;

/// Discount rate applied to NPV when none is configured
pub const DEFAULT_DISCOUNT_RATE: Decimal = dec!(0.08);

/// Runs a projection strategy year by year and summarizes the results.
///
/// Years are strictly sequential: each snapshot feeds the next as `previous`,
/// carrying the loan balance and cumulative cash flow. That chain is the only
/// statefulness in the engine, so runs over different properties are
/// independent and freely parallelizable.
#[derive(Debug, Clone, Copy)]
pub struct SimulationEngine {
    strategy: Strategy,
    discount_rate: Decimal,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(Strategy::Hold)
    }
}

impl SimulationEngine {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }

    #[must_use]
    pub fn with_discount_rate(mut self, rate: Decimal) -> Self {
        self.discount_rate = rate;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Run the full simulation over `years` and derive the summary.
    ///
    /// The engine assumes parameters have already passed validation; the only
    /// precondition it checks itself is a non-empty horizon.
    pub fn run(
        &self,
        params: &PropertyParameters,
        years: u32,
    ) -> Result<(Vec<YearSnapshot>, SimulationSummary), SimulationError> {
        if years < 1 {
            return Err(SimulationError::EmptyHorizon);
        }

        let mut snapshots: Vec<YearSnapshot> = Vec::with_capacity(years as usize);
        for year in 1..=years {
            let snapshot = self.strategy.project(year, params, snapshots.last());
            snapshots.push(snapshot);
        }

        let summary = self.summarize(params, &snapshots);
        Ok((snapshots, summary))
    }

    fn summarize(&self, params: &PropertyParameters, snapshots: &[YearSnapshot]) -> SimulationSummary {
        let years = snapshots.len();
        let total_investment = params.down_payment + params.closing_costs;

        let total_cash_flow: Decimal = snapshots.iter().map(|s| s.net_cash_flow).sum();
        // run() guarantees at least one snapshot
        let final_snapshot = &snapshots[years - 1];
        let final_property_value = final_snapshot.property_value;
        let final_equity = final_snapshot.equity;

        let total_return = total_cash_flow + final_equity - total_investment;
        let total_return_pct = if total_investment > Decimal::ZERO {
            (total_return / total_investment) * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        let average_annual_return = total_return_pct / Decimal::from(years as u32);

        // Cash-flow vector with a hypothetical liquidation in the final year
        let flows = cash_flow_vector(total_investment, snapshots, final_equity);

        let irr = solve_irr_percent(&flows);
        let npv = solve::net_present_value(&flows, self.discount_rate);

        let cash_on_cash_sum: Decimal = snapshots.iter().map(|s| s.cash_on_cash).sum();
        let average_cash_on_cash = cash_on_cash_sum / Decimal::from(years as u32);

        SimulationSummary {
            total_investment,
            total_cash_flow,
            final_property_value,
            final_equity,
            total_return,
            total_return_pct,
            average_annual_return,
            irr,
            npv,
            average_cash_on_cash,
        }
    }
}

/// Build `[-investment, cf_1, ..., cf_n + final_equity]`.
///
/// Adding the final equity to the last year's cash flow models selling the
/// property at the end of the horizon.
pub(crate) fn cash_flow_vector(
    total_investment: Decimal,
    snapshots: &[YearSnapshot],
    final_equity: Decimal,
) -> Vec<Decimal> {
    let mut flows = Vec::with_capacity(snapshots.len() + 1);
    flows.push(-total_investment);
    for (i, snapshot) in snapshots.iter().enumerate() {
        if i == snapshots.len() - 1 {
            flows.push(snapshot.net_cash_flow + final_equity);
        } else {
            flows.push(snapshot.net_cash_flow);
        }
    }
    flows
}

/// Solve IRR over a decimal flow vector, returning a percentage rounded to
/// 4 decimal places. Non-convergence degrades to zero: "no real return" is a
/// meaningful answer, and failing the whole calculation would be worse.
pub(crate) fn solve_irr_percent(flows: &[Decimal]) -> Decimal {
    let flows_f64: Vec<f64> = flows.iter().map(|d| d.to_f64().unwrap_or(0.0)).collect();
    match solve::internal_rate_of_return(&flows_f64) {
        Some(rate) => Decimal::from_f64(rate * 100.0)
            .unwrap_or(Decimal::ZERO)
            .round_dp(4),
        None => {
            tracing::debug!("IRR search did not converge; reporting 0");
            Decimal::ZERO
        }
    }
}
