//! Integration tests for the proforma simulation engine
//!
//! Tests are organized by topic:
//! - `amortization` - Loan payoff conservation across full simulations
//! - `engine` - Driver sequencing and summary metric derivation
//! - `portfolio` - Aggregation, fallbacks, and partial-failure policy
//! - `builder_dsl` - Property builder presets and derived fields
//! - `reports` - Presentation payload shapes

mod portfolio;
