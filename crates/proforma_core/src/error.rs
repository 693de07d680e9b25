use std::fmt;

use rust_decimal::Decimal;

/// A single problem found while inspecting property parameters.
///
/// Issues are reported, not rejected: callers decide whether a given issue
/// blocks simulation or merely gets surfaced alongside the results.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    NegativeValue {
        field: &'static str,
        value: Decimal,
    },
    DownPaymentExceedsPrice {
        down_payment: Decimal,
        purchase_price: Decimal,
    },
    /// Loan amount disagrees with purchase price minus down payment
    LoanAmountMismatch {
        expected: Decimal,
        actual: Decimal,
    },
    RateOutOfRange {
        field: &'static str,
        value: Decimal,
    },
    ZeroLoanTerm,
}

impl ValidationIssue {
    /// Whether this issue should block a simulation run.
    ///
    /// A loan amount that disagrees with price minus down payment is
    /// reported but never rejected: heterogeneous portfolio records
    /// routinely carry a current value alongside an original loan.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, ValidationIssue::LoanAmountMismatch { .. })
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NegativeValue { field, value } => {
                write!(f, "{field} cannot be negative (got {value})")
            }
            ValidationIssue::DownPaymentExceedsPrice {
                down_payment,
                purchase_price,
            } => {
                write!(
                    f,
                    "down payment {down_payment} exceeds purchase price {purchase_price}"
                )
            }
            ValidationIssue::LoanAmountMismatch { expected, actual } => {
                write!(
                    f,
                    "loan amount {actual} should equal purchase price minus down payment ({expected})"
                )
            }
            ValidationIssue::RateOutOfRange { field, value } => {
                write!(f, "{field} must be a fraction between 0 and 1 (got {value})")
            }
            ValidationIssue::ZeroLoanTerm => write!(f, "loan term must be at least one year"),
        }
    }
}

/// Precondition violation: the input failed validation and the simulation
/// did not run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid property data: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors from a single-property simulation run
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The requested horizon was zero years
    EmptyHorizon,
    Validation(ValidationError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EmptyHorizon => {
                write!(f, "simulation horizon must be at least one year")
            }
            SimulationError::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Validation(e) => Some(e),
            SimulationError::EmptyHorizon => None,
        }
    }
}

impl From<ValidationError> for SimulationError {
    fn from(e: ValidationError) -> Self {
        SimulationError::Validation(e)
    }
}

/// Errors from portfolio aggregation.
///
/// Individual property failures are not errors at this level — they are
/// logged and skipped. Aggregation only fails when nothing simulated.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioError {
    NoProperties,
    /// Every property's simulation failed
    NoSuccessfulSimulations { attempted: usize },
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioError::NoProperties => {
                write!(f, "no properties provided for simulation")
            }
            PortfolioError::NoSuccessfulSimulations { attempted } => {
                write!(
                    f,
                    "no valid property simulations completed ({attempted} attempted)"
                )
            }
        }
    }
}

impl std::error::Error for PortfolioError {}
