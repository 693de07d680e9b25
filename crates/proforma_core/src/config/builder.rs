//! Fluent builder for [`PropertyParameters`]
//!
//! Presets carry typical underwriting assumptions per property class
//! (single-family rental, 2-4 unit multifamily, commercial). Unset financing
//! fields are derived at build time: down payment from the preset percentage,
//! loan amount from price minus down payment.
//!
//! ```ignore
//! use proforma_core::config::PropertyBuilder;
//! use rust_decimal_macros::dec;
//!
//! let params = PropertyBuilder::single_family()
//!     .purchase_price(dec!(400_000))
//!     .monthly_rent(dec!(3_200))
//!     .monthly_expenses(dec!(650))
//!     .build();
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::PropertyParameters;

/// Builder for property parameters with per-class presets.
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    purchase_price: Decimal,
    down_payment: Option<Decimal>,
    down_payment_pct: Decimal,
    loan_amount: Option<Decimal>,
    interest_rate: Decimal,
    loan_term_years: u32,
    monthly_rent: Decimal,
    monthly_expenses: Decimal,
    vacancy_rate: Decimal,
    rent_growth: Decimal,
    expense_growth: Decimal,
    appreciation: Decimal,
    closing_costs: Decimal,
}

impl PropertyBuilder {
    /// Single-family rental: 20% down, 4.0% over 30 years, 5% vacancy.
    #[must_use]
    pub fn single_family() -> Self {
        Self {
            purchase_price: Decimal::ZERO,
            down_payment: None,
            down_payment_pct: dec!(0.20),
            loan_amount: None,
            interest_rate: dec!(0.04),
            loan_term_years: 30,
            monthly_rent: Decimal::ZERO,
            monthly_expenses: Decimal::ZERO,
            vacancy_rate: dec!(0.05),
            rent_growth: dec!(0.02),
            expense_growth: dec!(0.025),
            appreciation: dec!(0.03),
            closing_costs: dec!(3000),
        }
    }

    /// 2-4 unit multifamily: higher down payment, rate, vacancy, and upkeep.
    #[must_use]
    pub fn multifamily() -> Self {
        Self {
            down_payment_pct: dec!(0.25),
            interest_rate: dec!(0.045),
            vacancy_rate: dec!(0.07),
            rent_growth: dec!(0.025),
            expense_growth: dec!(0.03),
            appreciation: dec!(0.035),
            closing_costs: dec!(5000),
            ..Self::single_family()
        }
    }

    /// Commercial: 30% down, shorter term, conservative appreciation.
    #[must_use]
    pub fn commercial() -> Self {
        Self {
            down_payment_pct: dec!(0.30),
            interest_rate: dec!(0.05),
            loan_term_years: 20,
            vacancy_rate: dec!(0.10),
            rent_growth: dec!(0.03),
            expense_growth: dec!(0.03),
            appreciation: dec!(0.025),
            closing_costs: dec!(8000),
            ..Self::single_family()
        }
    }

    #[must_use]
    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = price;
        self
    }

    /// Explicit down payment; overrides the preset percentage
    #[must_use]
    pub fn down_payment(mut self, amount: Decimal) -> Self {
        self.down_payment = Some(amount);
        self
    }

    /// Down payment as a fraction of purchase price
    #[must_use]
    pub fn down_payment_pct(mut self, pct: Decimal) -> Self {
        self.down_payment_pct = pct;
        self
    }

    /// Explicit loan amount; otherwise derived as price minus down payment
    #[must_use]
    pub fn loan_amount(mut self, amount: Decimal) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = rate;
        self
    }

    #[must_use]
    pub fn loan_term_years(mut self, years: u32) -> Self {
        self.loan_term_years = years;
        self
    }

    #[must_use]
    pub fn monthly_rent(mut self, rent: Decimal) -> Self {
        self.monthly_rent = rent;
        self
    }

    /// Annual rent, for markets quoted annually (commercial leases)
    #[must_use]
    pub fn annual_rent(mut self, rent: Decimal) -> Self {
        self.monthly_rent = rent / dec!(12);
        self
    }

    #[must_use]
    pub fn monthly_expenses(mut self, expenses: Decimal) -> Self {
        self.monthly_expenses = expenses;
        self
    }

    #[must_use]
    pub fn vacancy_rate(mut self, rate: Decimal) -> Self {
        self.vacancy_rate = rate;
        self
    }

    #[must_use]
    pub fn rent_growth(mut self, rate: Decimal) -> Self {
        self.rent_growth = rate;
        self
    }

    #[must_use]
    pub fn expense_growth(mut self, rate: Decimal) -> Self {
        self.expense_growth = rate;
        self
    }

    #[must_use]
    pub fn appreciation(mut self, rate: Decimal) -> Self {
        self.appreciation = rate;
        self
    }

    #[must_use]
    pub fn closing_costs(mut self, costs: Decimal) -> Self {
        self.closing_costs = costs;
        self
    }

    /// Resolve derived financing fields and produce the immutable parameters.
    #[must_use]
    pub fn build(self) -> PropertyParameters {
        let down_payment = self
            .down_payment
            .unwrap_or(self.purchase_price * self.down_payment_pct);
        let loan_amount = self
            .loan_amount
            .unwrap_or(self.purchase_price - down_payment);

        PropertyParameters {
            purchase_price: self.purchase_price,
            down_payment,
            loan_amount,
            interest_rate: self.interest_rate,
            loan_term_years: self.loan_term_years,
            monthly_rent: self.monthly_rent,
            monthly_expenses: self.monthly_expenses,
            vacancy_rate: self.vacancy_rate,
            rent_growth: self.rent_growth,
            expense_growth: self.expense_growth,
            appreciation: self.appreciation,
            closing_costs: self.closing_costs,
        }
    }
}
