//! Split, fit, and score stages for the rate model
//!
//! - [`split_records`]: seedable random train/test partition of the
//!   aggregated player-seasons.
//! - [`RateModel`]: ordinary least squares over a configured list of
//!   aggregate predictor columns, targeting mean passing yards per game.
//! - [`metrics`]: RMSE / MAE / R² with typed failure modes for empty and
//!   degenerate evaluation sets.
//!
//! ## Example
//!
//! ```rust
//! use model::{split_records, RateModel, SplitSpec};
//! use model::metrics::evaluate;
//! # use pipeline::AggregateRecord;
//! # fn rows() -> Vec<AggregateRecord> {
//! #     (0..8).map(|i| AggregateRecord {
//! #         player: format!("P{}", i),
//! #         season: 2023,
//! #         games: 16,
//! #         total_passing_yards: 3000.0 + 150.0 * i as f64,
//! #         total_passing_tds: 15.0 + 0.5 * (i * i) as f64,
//! #         total_interceptions: 5.0 + 0.05 * (i * i * i) as f64,
//! #         yards_per_game: 190.0 + 9.0 * i as f64,
//! #     }).collect()
//! # }
//!
//! let aggregates = rows();
//! let spec = SplitSpec::new(0.75).with_seed(42);
//! let (train, test) = split_records(&aggregates, &spec).unwrap();
//!
//! let mut model = RateModel::new();
//! model.fit(&train).unwrap();
//!
//! let predicted = model.predict(&test).unwrap();
//! let actual: Vec<f64> = test.iter().map(|r| r.yards_per_game).collect();
//! let evaluation = evaluate(&actual, &predicted).unwrap();
//! assert!(evaluation.rmse >= evaluation.mae);
//! ```

mod error;
pub mod metrics;
mod regression;
mod split;

pub use error::{EvalError, ModelError, Result};
pub use regression::{PredictorColumn, RateModel};
pub use split::{split_records, SplitSpec};
