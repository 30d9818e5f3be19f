//! Model and evaluation error types.

use thiserror::Error;

/// Result type alias for split/fit/predict operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while splitting, fitting, or predicting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Too few rows for the operation
    #[error("Insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The regression is underdetermined or the predictors are collinear
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,
}

/// Errors raised while scoring predictions against held-out actuals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// No (predicted, actual) pairs to score
    #[error("Empty evaluation set")]
    EmptyEvaluationSet,

    /// Predicted and actual sequences differ in length
    #[error("Length mismatch: {actual} actual vs {predicted} predicted values")]
    LengthMismatch { actual: usize, predicted: usize },

    /// A metric is undefined for this input
    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),
}
