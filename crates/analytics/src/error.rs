use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Weights do not form a valid portfolio: {0}")]
    InvalidWeights(String),

    #[error("An unexpected error occurred during analytics calculation: {0}")]
    InternalError(String),
}
