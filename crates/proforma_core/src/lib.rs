//! Real-estate investment simulation library
//!
//! This crate projects a rental property's cash flows year by year under a
//! chosen exit strategy and rolls the results up into return metrics:
//! - Fixed-rate mortgage amortization with exact decimal balances
//! - Year-by-year projections with compound rent/expense/value growth
//! - IRR (bisection), NPV, total return, and cash-on-cash summaries
//! - Portfolio aggregation across many properties with partial-failure
//!   tolerance and combined IRR/NPV over the summed cash-flow vector
//!
//! The engine is a pure in-process component: it receives parameter records
//! and a horizon, and returns snapshot sequences and summaries. Persistence,
//! transport, and rendering live elsewhere.
//!
//! # Builder DSL
//!
//! ```ignore
//! use proforma_core::config::PropertyBuilder;
//! use proforma_core::projection::Strategy;
//! use proforma_core::simulation::SimulationEngine;
//! use rust_decimal_macros::dec;
//!
//! let params = PropertyBuilder::single_family()
//!     .purchase_price(dec!(400_000))
//!     .down_payment(dec!(80_000))
//!     .interest_rate(dec!(0.045))
//!     .monthly_rent(dec!(3_200))
//!     .monthly_expenses(dec!(650))
//!     .build();
//!
//! let engine = SimulationEngine::new(Strategy::Hold);
//! let (snapshots, summary) = engine.run(&params, 10)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod metrics;
pub mod mortgage;
pub mod portfolio;
pub mod projection;
pub mod report;
pub mod simulation;
pub mod solve;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{AnalysisConfig, PropertyBuilder};
pub use error::{PortfolioError, SimulationError, ValidationError, ValidationIssue};
pub use model::{
    PortfolioMetrics, PortfolioResult, PropertyId, PropertyOutcome, PropertyParameters,
    PropertyRecord, SimulationSummary, YearSnapshot,
};
pub use projection::Strategy;
pub use simulation::SimulationEngine;
