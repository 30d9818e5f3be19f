//! Report error types.

use thiserror::Error;

/// Errors raised while shaping or rendering report artifacts.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// The view has nothing to draw
    #[error("Empty view: {0}")]
    EmptyView(String),

    /// Actual and predicted series differ in length
    #[error("Shape mismatch: {actual} actual vs {predicted} predicted values")]
    ShapeMismatch { actual: usize, predicted: usize },

    /// The chart backend failed
    #[error("Render error: {0}")]
    Render(String),

    /// Failed to write an artifact
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_view_display() {
        let error = ReportError::EmptyView("no rows for season 2023".to_string());
        assert_eq!(error.to_string(), "Empty view: no rows for season 2023");
    }

    #[test]
    fn test_shape_mismatch_display() {
        let error = ReportError::ShapeMismatch {
            actual: 3,
            predicted: 2,
        };
        assert_eq!(
            error.to_string(),
            "Shape mismatch: 3 actual vs 2 predicted values"
        );
    }

    #[test]
    fn test_render_error_display() {
        let error = ReportError::Render("backend failure".to_string());
        assert_eq!(error.to_string(), "Render error: backend failure");
    }
}
