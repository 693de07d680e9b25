mod ids;
mod property;
mod results;

pub use ids::PropertyId;
pub use property::{PropertyParameters, PropertyRecord};
pub use results::{
    CashFlowProjection, PortfolioMetrics, PortfolioResult, PropertyOutcome, SimulationSummary,
    YearSnapshot,
};
