//! Chart-shaped views over pipeline output.
//!
//! Views carry exactly what the renderer needs and nothing else, so the
//! charts can be redrawn (or a different backend swapped in) without
//! touching the pipeline.

use pipeline::{top_by_rate, AggregateRecord};

use crate::error::{ReportError, Result};

/// One season's players ranked by yards per game, ready for a bar chart.
#[derive(Debug, Clone)]
pub struct RankedBarView {
    /// Season the bars describe
    pub season: u16,
    /// (player, rate) pairs, best first
    pub bars: Vec<(String, f64)>,
}

impl RankedBarView {
    /// Rank one season's aggregates by rate and keep the top n.
    pub fn from_aggregates(
        rows: &[AggregateRecord],
        season: u16,
        top_n: usize,
    ) -> Result<Self> {
        let ranked = top_by_rate(rows, season, top_n);
        if ranked.is_empty() {
            return Err(ReportError::EmptyView(format!(
                "no rows for season {}",
                season
            )));
        }
        Ok(Self {
            season,
            bars: ranked
                .into_iter()
                .map(|r| (r.player, r.yards_per_game))
                .collect(),
        })
    }

    /// Largest rate in the view.
    pub fn max_rate(&self) -> f64 {
        self.bars
            .iter()
            .map(|(_, rate)| *rate)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// (actual, predicted) pairs with an identity reference and a fitted
/// trend line, ready for a scatter chart.
#[derive(Debug, Clone)]
pub struct ScatterView {
    /// (actual, predicted) pairs
    pub points: Vec<(f64, f64)>,
    /// (slope, intercept) of predicted regressed on actual; `None` when
    /// the actual values carry no variance
    pub trend: Option<(f64, f64)>,
}

impl ScatterView {
    /// Pair up the two series and fit the trend line.
    pub fn new(actual: &[f64], predicted: &[f64]) -> Result<Self> {
        if actual.is_empty() || predicted.is_empty() {
            return Err(ReportError::EmptyView("no pairs to plot".to_string()));
        }
        if actual.len() != predicted.len() {
            return Err(ReportError::ShapeMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        let n = actual.len() as f64;
        let mean_a = actual.iter().sum::<f64>() / n;
        let mean_p = predicted.iter().sum::<f64>() / n;
        let var_a: f64 = actual.iter().map(|a| (a - mean_a).powi(2)).sum();
        let cov: f64 = actual
            .iter()
            .zip(predicted.iter())
            .map(|(a, p)| (a - mean_a) * (p - mean_p))
            .sum();

        let trend = if var_a > 1e-10 {
            let slope = cov / var_a;
            Some((slope, mean_p - slope * mean_a))
        } else {
            None
        };

        Ok(Self {
            points: actual.iter().copied().zip(predicted.iter().copied()).collect(),
            trend,
        })
    }

    /// Shared axis bounds covering both series, padded for readability.
    pub fn bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (a, p) in &self.points {
            lo = lo.min(*a).min(*p);
            hi = hi.max(*a).max(*p);
        }
        let pad = ((hi - lo) * 0.05).max(1.0);
        (lo - pad, hi + pad)
    }
}
