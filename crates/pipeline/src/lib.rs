//! Filter and aggregation stages
//!
//! Pure transformations from raw game rows to per-(player, season)
//! aggregates:
//!
//! - [`filter_records`]: restrict rows to a position, season segment,
//!   and minimum season.
//! - [`aggregate_seasons`]: group by (player, season) and compute totals
//!   plus the mean passing yards per game.
//!
//! Both stages are total functions: empty input yields empty output and
//! nothing here allocates global state.

mod aggregate;
mod filter;

pub use aggregate::{aggregate_seasons, top_by_rate, AggregateRecord};
pub use filter::{filter_records, FilterSpec};
