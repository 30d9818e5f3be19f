//! Regression accuracy metrics
//!
//! Free functions over already-validated pairs, plus [`evaluate`] which
//! checks the evaluation-set preconditions and fails with a typed
//! [`EvalError`] instead of leaking NaN into the report.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences. Same scale as the data; lower is
/// better. Callers are expected to have validated lengths; mismatched
/// or empty inputs yield NaN.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();
    sum / actual.len() as f64
}

/// Mean Squared Error (MSE)
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    sum / actual.len() as f64
}

/// Root Mean Squared Error (RMSE)
///
/// Square root of MSE; penalizes large errors more heavily than MAE.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// R-squared (coefficient of determination)
///
/// 1.0 = perfect, 0.0 = no better than predicting the mean, negative =
/// worse than the mean. NaN when the actual values are constant.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    if ss_tot < 1e-10 {
        return f64::NAN;
    }
    1.0 - ss_res / ss_tot
}

/// Held-out accuracy of a fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Root mean squared error
    pub rmse: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

/// Score predictions against held-out actuals.
///
/// Fails on empty or unequal-length inputs, and when R² is undefined
/// because the actual values carry zero variance.
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<Evaluation, EvalError> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(EvalError::EmptyEvaluationSet);
    }
    if actual.len() != predicted.len() {
        return Err(EvalError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }

    let rsq = r_squared(actual, predicted);
    if rsq.is_nan() {
        return Err(EvalError::UndefinedMetric(
            "actual values have zero variance".to_string(),
        ));
    }

    Ok(Evaluation {
        rmse: rmse(actual, predicted),
        mae: mae(actual, predicted),
        r_squared: rsq,
    })
}
