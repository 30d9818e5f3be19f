//! Report artifacts: chart views, SVG rendering, metrics table
//!
//! The pipeline crates hand this one two shaped views (a ranked-bar
//! view of one season's rates and a predicted-vs-actual scatter view)
//! plus the held-out [`model::metrics::Evaluation`]. Nothing upstream
//! knows about rendering; this crate owns the plotters SVG backend and
//! the plain-text metrics table.

mod charts;
mod error;
mod table;
mod views;

pub use charts::{render_ranked_bar, render_scatter};
pub use error::{ReportError, Result};
pub use table::{MetricsRow, MetricsTable};
pub use views::{RankedBarView, ScatterView};
