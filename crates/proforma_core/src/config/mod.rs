//! Analysis configuration and the property builder DSL.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

mod builder;

pub use builder::PropertyBuilder;

fn default_analysis_period() -> u32 {
    10
}

fn default_discount_rate() -> Decimal {
    dec!(0.08)
}

fn default_rent_growth() -> Decimal {
    dec!(0.03)
}

fn default_expense_growth() -> Decimal {
    dec!(0.025)
}

fn default_appreciation() -> Decimal {
    dec!(0.04)
}

fn default_vacancy_rate() -> Decimal {
    dec!(0.05)
}

/// Portfolio-wide analysis assumptions.
///
/// Growth rates here apply to every property in the aggregation; per-property
/// records carry only their own financing facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Simulation horizon in years
    #[serde(default = "default_analysis_period")]
    pub analysis_period: u32,
    #[serde(default = "default_discount_rate")]
    pub discount_rate: Decimal,
    #[serde(default = "default_rent_growth")]
    pub rent_growth: Decimal,
    #[serde(default = "default_expense_growth")]
    pub expense_growth: Decimal,
    #[serde(default = "default_appreciation")]
    pub appreciation: Decimal,
    #[serde(default = "default_vacancy_rate")]
    pub vacancy_rate: Decimal,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            analysis_period: default_analysis_period(),
            discount_rate: default_discount_rate(),
            rent_growth: default_rent_growth(),
            expense_growth: default_expense_growth(),
            appreciation: default_appreciation(),
            vacancy_rate: default_vacancy_rate(),
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant with a different horizon, for comparing analysis periods
    #[must_use]
    pub fn with_period(mut self, years: u32) -> Self {
        self.analysis_period = years;
        self
    }

    #[must_use]
    pub fn with_discount_rate(mut self, rate: Decimal) -> Self {
        self.discount_rate = rate;
        self
    }
}
