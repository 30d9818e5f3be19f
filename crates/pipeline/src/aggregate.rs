//! Per-(player, season) aggregation stage.

use std::collections::HashMap;

use data::StatRecord;
use serde::{Deserialize, Serialize};

/// Season totals and the per-game passing rate for one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Player display name
    pub player: String,
    /// Season year
    pub season: u16,
    /// Number of contributing game rows
    pub games: usize,
    /// Summed passing yards
    pub total_passing_yards: f64,
    /// Summed passing touchdowns
    pub total_passing_tds: f64,
    /// Summed interceptions
    pub total_interceptions: f64,
    /// Mean passing yards per game, taken over the filtered rows only.
    /// Whether that reads as "per game played" or "per game on roster"
    /// is up to the report author; the formula is fixed.
    pub yards_per_game: f64,
}

/// Group rows by (player, season) and compute totals plus the rate.
///
/// Duplicate rows for the same player/game contribute independently to
/// both the sums and the mean; no deduplication happens here. Output
/// order is the insertion order of each key's first appearance, which is
/// stable for display but carries no other meaning.
pub fn aggregate_seasons(records: &[StatRecord]) -> Vec<AggregateRecord> {
    let mut index: HashMap<(String, u16), usize> = HashMap::new();
    let mut groups: Vec<AggregateRecord> = Vec::new();

    for record in records {
        let key = (record.player.clone(), record.season);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(AggregateRecord {
                player: record.player.clone(),
                season: record.season,
                games: 0,
                total_passing_yards: 0.0,
                total_passing_tds: 0.0,
                total_interceptions: 0.0,
                yards_per_game: 0.0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.games += 1;
        group.total_passing_yards += record.passing_yards;
        group.total_passing_tds += record.passing_tds;
        group.total_interceptions += record.interceptions;
    }

    // Groups are formed from existing rows, so games is never zero.
    for group in &mut groups {
        group.yards_per_game = group.total_passing_yards / group.games as f64;
    }

    log::debug!(
        "aggregated {} rows into {} player-seasons",
        records.len(),
        groups.len()
    );
    groups
}

/// The season's top-n player rows ranked by yards per game, descending.
pub fn top_by_rate(rows: &[AggregateRecord], season: u16, n: usize) -> Vec<AggregateRecord> {
    let mut ranked: Vec<AggregateRecord> = rows
        .iter()
        .filter(|r| r.season == season)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        b.yards_per_game
            .partial_cmp(&a.yards_per_game)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}
