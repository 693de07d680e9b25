//! Property input records
//!
//! `PropertyParameters` is the fully-resolved, immutable input the simulation
//! engine runs on. `PropertyRecord` is the looser portfolio-side shape where
//! financing fields may be absent and are filled in with explicit fallbacks
//! during aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::PropertyId;

/// Economic parameters for a single property simulation.
///
/// All monetary amounts are decimal quantities; rates are fractions
/// (0.045 means 4.5%). The engine assumes consistent input — use
/// [`crate::validate::ensure_simulatable`] to gate untrusted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyParameters {
    pub purchase_price: Decimal,
    pub down_payment: Decimal,
    pub loan_amount: Decimal,
    /// Annual interest rate as a fraction
    pub interest_rate: Decimal,
    pub loan_term_years: u32,
    pub monthly_rent: Decimal,
    /// Total monthly operating expenses (taxes, insurance, maintenance, ...)
    pub monthly_expenses: Decimal,
    /// Fraction of gross rent lost to vacancy
    pub vacancy_rate: Decimal,
    /// Annual rent growth as a fraction
    pub rent_growth: Decimal,
    /// Annual operating expense growth as a fraction
    pub expense_growth: Decimal,
    /// Annual property appreciation as a fraction
    pub appreciation: Decimal,
    pub closing_costs: Decimal,
}

/// A possibly partially-populated property as it arrives from heterogeneous
/// portfolio sources. Missing financing fields are derived during conversion
/// (see `portfolio` module), which is deliberate tolerance rather than
/// validation laxity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub name: String,
    pub purchase_price: Decimal,
    /// Current market value; falls back to `purchase_price`
    #[serde(default)]
    pub current_value: Option<Decimal>,
    /// Falls back to 20% of current value
    #[serde(default)]
    pub down_payment: Option<Decimal>,
    /// Falls back to current value minus down payment
    #[serde(default)]
    pub loan_amount: Option<Decimal>,
    /// Falls back to 4.5%
    #[serde(default)]
    pub interest_rate: Option<Decimal>,
    /// Falls back to 30
    #[serde(default)]
    pub loan_term_years: Option<u32>,
    #[serde(default)]
    pub closing_costs: Option<Decimal>,
    pub monthly_rent: Decimal,
    pub monthly_expenses: Decimal,
}
