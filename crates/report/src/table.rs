//! Plain-text metrics table.

use model::metrics::Evaluation;
use serde::{Deserialize, Serialize};

/// One metric row of the summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRow {
    /// Metric name
    pub metric: String,
    /// Metric value on the held-out partition
    pub estimate: f64,
}

/// The report's accuracy summary: rmse, rsq, mae.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsTable {
    /// Table rows, in display order
    pub rows: Vec<MetricsRow>,
}

impl MetricsTable {
    /// Build the table from a held-out evaluation.
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        Self {
            rows: vec![
                MetricsRow {
                    metric: "rmse".to_string(),
                    estimate: evaluation.rmse,
                },
                MetricsRow {
                    metric: "rsq".to_string(),
                    estimate: evaluation.r_squared,
                },
                MetricsRow {
                    metric: "mae".to_string(),
                    estimate: evaluation.mae,
                },
            ],
        }
    }

    /// Render the table as aligned plain text.
    pub fn render(&self) -> String {
        let mut out = String::from("metric      estimate\n");
        for row in &self.rows {
            out.push_str(&format!("{:<10}{:>10.4}\n", row.metric, row.estimate));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation() -> Evaluation {
        Evaluation {
            rmse: 12.3456,
            mae: 9.8765,
            r_squared: 0.8123,
        }
    }

    #[test]
    fn test_table_rows_in_report_order() {
        let table = MetricsTable::from_evaluation(&evaluation());
        let names: Vec<&str> = table.rows.iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(names, vec!["rmse", "rsq", "mae"]);
    }

    #[test]
    fn test_table_render_contains_values() {
        let rendered = MetricsTable::from_evaluation(&evaluation()).render();
        assert!(rendered.starts_with("metric      estimate"));
        assert!(rendered.contains("rmse"));
        assert!(rendered.contains("12.3456"));
        assert!(rendered.contains("0.8123"));
        assert!(rendered.contains("9.8765"));
    }
}
