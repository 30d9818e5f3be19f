//! Per-game stat record type.

use serde::{Deserialize, Serialize};

/// Columns every input dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "player",
    "season",
    "season_type",
    "position",
    "passing_yards",
    "passing_tds",
    "interceptions",
];

/// One row per player per game.
///
/// Records are immutable once ingested and live for a single pipeline
/// run. Numeric stats are `f64` because public stat feeds occasionally
/// carry fractional values (e.g. sack-adjusted yardage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatRecord {
    /// Player display name
    pub player: String,
    /// Season year
    pub season: u16,
    /// Season segment, e.g. "REG" or "POST"
    pub season_type: String,
    /// Roster position, e.g. "QB"
    pub position: String,
    /// Passing yards in this game
    pub passing_yards: f64,
    /// Passing touchdowns in this game
    pub passing_tds: f64,
    /// Interceptions thrown in this game
    pub interceptions: f64,
}

impl StatRecord {
    /// Create a new StatRecord.
    pub fn new(
        player: &str,
        season: u16,
        season_type: &str,
        position: &str,
        passing_yards: f64,
        passing_tds: f64,
        interceptions: f64,
    ) -> Self {
        Self {
            player: player.to_string(),
            season,
            season_type: season_type.to_string(),
            position: position.to_string(),
            passing_yards,
            passing_tds,
            interceptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = StatRecord::new("J. Allen", 2023, "REG", "QB", 312.0, 3.0, 1.0);
        assert_eq!(record.player, "J. Allen");
        assert_eq!(record.season, 2023);
        assert_eq!(record.season_type, "REG");
        assert_eq!(record.position, "QB");
        assert_eq!(record.passing_yards, 312.0);
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = StatRecord::new("P. Mahomes", 2023, "REG", "QB", 286.0, 2.0, 0.0);
        let json = serde_json::to_string(&record).unwrap();
        let back: StatRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player, record.player);
        assert_eq!(back.passing_yards, record.passing_yards);
    }

    #[test]
    fn test_required_columns_match_fields() {
        let record = StatRecord::new("X", 2023, "REG", "QB", 0.0, 0.0, 0.0);
        let value = serde_json::to_value(&record).unwrap();
        for column in REQUIRED_COLUMNS {
            assert!(value.get(column).is_some(), "missing {}", column);
        }
    }
}
