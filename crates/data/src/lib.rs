//! Game-level stat records and the sources that supply them
//!
//! This crate owns the raw input side of the report pipeline: the
//! [`StatRecord`] row type, the [`StatSource`] seam, and file-based
//! sources for CSV and JSON datasets. Everything downstream (filtering,
//! aggregation, modeling) depends only on the record schema, never on
//! where the rows came from.

mod error;
mod record;
mod source;

pub use error::{DataError, Result};
pub use record::{StatRecord, REQUIRED_COLUMNS};
pub use source::{load_records, CsvSource, FixtureSource, JsonSource, StatSource};
