//! Full pipeline on fixture data: filter, aggregate, fit, score, render.
//!
//! Run with `cargo run -p report --example season_report`. Artifacts are
//! written to the system temp directory.

use data::{FixtureSource, StatRecord, StatSource};
use model::metrics::evaluate;
use model::{split_records, RateModel, SplitSpec};
use pipeline::{aggregate_seasons, filter_records, FilterSpec};
use report::{render_ranked_bar, render_scatter, MetricsTable, RankedBarView, ScatterView};

fn fixture_games() -> Vec<StatRecord> {
    let players = [
        ("Alpha", 255.0),
        ("Bravo", 231.0),
        ("Charlie", 288.0),
        ("Delta", 204.0),
        ("Echo", 266.0),
        ("Foxtrot", 219.0),
        ("Golf", 247.0),
        ("Hotel", 193.0),
    ];

    let mut rows = Vec::new();
    for (p, (player, base)) in players.iter().enumerate() {
        for season in [2022u16, 2023] {
            for game in 0..10usize {
                // deterministic spread around each player's base rate
                let wobble = ((p + game) % 5) as f64 * 9.0 - 18.0;
                rows.push(StatRecord::new(
                    player,
                    season,
                    "REG",
                    "QB",
                    base + wobble + (season - 2022) as f64 * 6.0,
                    ((game + p) % 4) as f64,
                    ((game + 2 * p) % 3) as f64,
                ));
            }
        }
    }
    rows
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::temp_dir().join("gridiron-season-report");
    std::fs::create_dir_all(&out_dir)?;

    let raw = FixtureSource::new(fixture_games()).load()?;
    let filtered = filter_records(&raw, &FilterSpec::quarterbacks(2022));
    let aggregates = aggregate_seasons(&filtered);
    println!(
        "{} game rows -> {} player-seasons",
        filtered.len(),
        aggregates.len()
    );

    let bar = RankedBarView::from_aggregates(&aggregates, 2023, 8)?;
    render_ranked_bar(&bar, &out_dir.join("rate_by_player.svg"))?;

    let (train, test) = split_records(&aggregates, &SplitSpec::new(0.75).with_seed(42))?;
    let mut model = RateModel::new();
    model.fit(&train)?;

    let predicted = model.predict(&test)?;
    let actual: Vec<f64> = test.iter().map(|r| r.yards_per_game).collect();
    let evaluation = evaluate(&actual, &predicted)?;

    let scatter = ScatterView::new(&actual, &predicted)?;
    render_scatter(&scatter, &out_dir.join("predicted_vs_actual.svg"))?;

    println!("{}", MetricsTable::from_evaluation(&evaluation).render());
    println!("artifacts in {}", out_dir.display());
    Ok(())
}
