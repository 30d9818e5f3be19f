//! Row filtering stage.

use data::StatRecord;
use serde::{Deserialize, Serialize};

/// Predicates applied to raw game rows before aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Roster position to keep, e.g. "QB"
    pub position: String,
    /// Season segment to keep, e.g. "REG"
    pub season_type: String,
    /// Earliest season to keep (inclusive)
    pub min_season: u16,
}

impl FilterSpec {
    /// Create a spec keeping regular-season rows for one position.
    pub fn new(position: &str, min_season: u16) -> Self {
        Self {
            position: position.to_string(),
            season_type: "REG".to_string(),
            min_season,
        }
    }

    /// Create a spec for regular-season quarterback rows.
    pub fn quarterbacks(min_season: u16) -> Self {
        Self::new("QB", min_season)
    }

    /// Override the season segment.
    pub fn with_season_type(mut self, season_type: &str) -> Self {
        self.season_type = season_type.to_string();
        self
    }

    fn matches(&self, record: &StatRecord) -> bool {
        record.position == self.position
            && record.season_type == self.season_type
            && record.season >= self.min_season
    }
}

/// Keep the rows satisfying all three predicates of the spec.
///
/// Zero matches is not an error; downstream stages handle empty
/// aggregates on their own terms.
pub fn filter_records(records: &[StatRecord], spec: &FilterSpec) -> Vec<StatRecord> {
    let kept: Vec<StatRecord> = records
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect();
    log::debug!(
        "filter kept {}/{} rows ({} {} seasons >= {})",
        kept.len(),
        records.len(),
        spec.position,
        spec.season_type,
        spec.min_season
    );
    kept
}
