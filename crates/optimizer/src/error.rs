use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizerError {
    #[error("Budget must be greater than zero, got {0}")]
    InvalidBudget(Decimal),

    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Weight normalization failed: {0}")]
    Normalization(String),
}
