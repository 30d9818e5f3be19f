//! Ordinary least squares rate model.
//!
//! Fits `rate ≈ β0 + Σ βi·xi` over a configured list of aggregate
//! predictor columns by solving the normal equations directly. The
//! matrices here are (predictors + 1)-square, so a small Gaussian
//! elimination with partial pivoting is all the linear algebra needed.

use pipeline::AggregateRecord;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Aggregate columns usable as regression inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictorColumn {
    /// Summed passing yards for the player-season
    TotalPassingYards,
    /// Summed passing touchdowns
    TotalPassingTds,
    /// Summed interceptions
    TotalInterceptions,
    /// Number of contributing games
    Games,
}

impl PredictorColumn {
    /// Extract this column's value from an aggregate row.
    pub fn value(&self, record: &AggregateRecord) -> f64 {
        match self {
            PredictorColumn::TotalPassingYards => record.total_passing_yards,
            PredictorColumn::TotalPassingTds => record.total_passing_tds,
            PredictorColumn::TotalInterceptions => record.total_interceptions,
            PredictorColumn::Games => record.games as f64,
        }
    }

    /// Column name, for artifact dumps and logs.
    pub fn label(&self) -> &'static str {
        match self {
            PredictorColumn::TotalPassingYards => "total_passing_yards",
            PredictorColumn::TotalPassingTds => "total_passing_tds",
            PredictorColumn::TotalInterceptions => "total_interceptions",
            PredictorColumn::Games => "games",
        }
    }

    /// The report's default predictor set: yards, touchdowns,
    /// interceptions.
    pub fn default_set() -> Vec<PredictorColumn> {
        vec![
            PredictorColumn::TotalPassingYards,
            PredictorColumn::TotalPassingTds,
            PredictorColumn::TotalInterceptions,
        ]
    }
}

/// OLS model predicting yards per game from aggregate totals.
///
/// # Example
///
/// ```rust
/// use model::RateModel;
/// # use pipeline::AggregateRecord;
/// # fn rows() -> Vec<AggregateRecord> {
/// #     (0..6).map(|i| AggregateRecord {
/// #         player: format!("P{}", i),
/// #         season: 2023,
/// #         games: 16,
/// #         total_passing_yards: 3000.0 + 100.0 * i as f64,
/// #         total_passing_tds: 20.0 + (i % 3) as f64,
/// #         total_interceptions: 8.0 + (i % 2) as f64,
/// #         yards_per_game: 190.0 + 6.0 * i as f64,
/// #     }).collect()
/// # }
///
/// let train = rows();
/// let mut model = RateModel::new();
/// model.fit(&train).unwrap();
/// let predictions = model.predict(&train).unwrap();
/// assert_eq!(predictions.len(), train.len());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateModel {
    /// Configured predictor columns
    predictors: Vec<PredictorColumn>,
    /// β0
    intercept: f64,
    /// One βi per predictor, in predictor order
    coefficients: Vec<f64>,
    /// Rows used in fitting
    n_observations: usize,
    /// R² of the training fit
    r_squared: f64,
    /// Whether the model has been fitted
    fitted: bool,
}

impl Default for RateModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RateModel {
    /// Create a model over the default three predictors.
    pub fn new() -> Self {
        let predictors = PredictorColumn::default_set();
        Self {
            coefficients: vec![0.0; predictors.len()],
            predictors,
            intercept: 0.0,
            n_observations: 0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Create a model over a custom predictor list.
    pub fn with_predictors(predictors: Vec<PredictorColumn>) -> Result<Self> {
        if predictors.is_empty() {
            return Err(ModelError::InvalidParameter {
                name: "predictors".to_string(),
                reason: "must name at least one column".to_string(),
            });
        }
        Ok(Self {
            coefficients: vec![0.0; predictors.len()],
            predictors,
            intercept: 0.0,
            n_observations: 0,
            r_squared: 0.0,
            fitted: false,
        })
    }

    /// Get the fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the fitted per-predictor coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Get the configured predictor columns.
    pub fn predictors(&self) -> &[PredictorColumn] {
        &self.predictors
    }

    /// Get R² of the training fit.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Whether the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fit the model on a training partition.
    ///
    /// Solves (Xᵀ X) β = Xᵀ y for the design matrix with an intercept
    /// column. Fails when the partition has fewer rows than
    /// predictors + 1, or when the predictors are perfectly collinear.
    pub fn fit(&mut self, train: &[AggregateRecord]) -> Result<()> {
        let k = self.predictors.len();
        if train.len() < k + 1 {
            return Err(ModelError::InsufficientData {
                required: k + 1,
                actual: train.len(),
            });
        }

        let dim = k + 1;
        let mut xtx = vec![vec![0.0f64; dim]; dim];
        let mut xty = vec![0.0f64; dim];

        for record in train {
            let mut row = Vec::with_capacity(dim);
            row.push(1.0);
            for predictor in &self.predictors {
                row.push(predictor.value(record));
            }
            let y = record.yards_per_game;

            for i in 0..dim {
                for j in 0..dim {
                    xtx[i][j] += row[i] * row[j];
                }
                xty[i] += row[i] * y;
            }
        }

        let beta = solve(xtx, xty).ok_or_else(|| {
            ModelError::DegenerateFit("normal equations matrix is singular".to_string())
        })?;

        self.intercept = beta[0];
        self.coefficients = beta[1..].to_vec();
        self.n_observations = train.len();

        // R² of the in-sample fit
        let mean_y: f64 =
            train.iter().map(|r| r.yards_per_game).sum::<f64>() / train.len() as f64;
        let ss_tot: f64 = train
            .iter()
            .map(|r| (r.yards_per_game - mean_y).powi(2))
            .sum();
        let ss_res: f64 = train
            .iter()
            .map(|r| (r.yards_per_game - self.predict_one(r)).powi(2))
            .sum();
        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.fitted = true;
        log::debug!(
            "fitted rate model on {} rows, training R² {:.4}",
            self.n_observations,
            self.r_squared
        );
        Ok(())
    }

    /// Predict the rate for each row of any aggregate set sharing the
    /// predictor schema. Pure; usable on rows outside the training
    /// partition.
    pub fn predict(&self, records: &[AggregateRecord]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        Ok(records.iter().map(|r| self.predict_one(r)).collect())
    }

    /// Residuals (actual − predicted) for the given rows. Empty before
    /// the model is fitted.
    pub fn residuals(&self, records: &[AggregateRecord]) -> Vec<f64> {
        if !self.fitted {
            return Vec::new();
        }
        records
            .iter()
            .map(|r| r.yards_per_game - self.predict_one(r))
            .collect()
    }

    fn predict_one(&self, record: &AggregateRecord) -> f64 {
        let mut rate = self.intercept;
        for (predictor, coefficient) in self.predictors.iter().zip(&self.coefficients) {
            rate += coefficient * predictor.value(record);
        }
        rate
    }
}

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
/// Returns `None` when the matrix is singular.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot][col].abs() < 1e-10 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for j in col..n {
                a[row][j] -= factor * a[col][j];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for j in (row + 1)..n {
            sum -= a[row][j] * x[j];
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}
