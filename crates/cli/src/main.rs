//! # gridiron
//!
//! One command, one report: load game rows, aggregate quarterback
//! seasons, chart the rates, fit the OLS rate model, and score it on a
//! held-out split.

mod config;

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use config::{PartialSettings, RunSettings};
use data::load_records;
use model::metrics::evaluate;
use model::{split_records, RateModel, SplitSpec};
use pipeline::{aggregate_seasons, filter_records, FilterSpec};
use report::{render_ranked_bar, render_scatter, MetricsTable, RankedBarView, ScatterView};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(
    about = "Quarterback season report: aggregate, chart, and model passing rates",
    long_about = None
)]
struct Cli {
    /// Input dataset (CSV or JSON)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Config file carrying the same settings as the flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Roster position to keep
    #[arg(long)]
    position: Option<String>,

    /// Season segment to keep (REG, POST)
    #[arg(long)]
    season_type: Option<String>,

    /// Earliest season to keep, inclusive
    #[arg(long)]
    min_season: Option<u16>,

    /// Season shown in the ranked bar chart (default: latest present)
    #[arg(long)]
    season: Option<u16>,

    /// Fraction of player-seasons used for training
    #[arg(long)]
    train_fraction: Option<f64>,

    /// Seed for the train/test shuffle; omit for a fresh draw each run
    #[arg(long)]
    seed: Option<u64>,

    /// Number of players in the bar chart
    #[arg(long)]
    top: Option<usize>,

    /// Output directory for the artifacts
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> PartialSettings {
        PartialSettings {
            input: self.input.clone(),
            position: self.position.clone(),
            season_type: self.season_type.clone(),
            min_season: self.min_season,
            season: self.season,
            train_fraction: self.train_fraction,
            seed: self.seed,
            top: self.top,
            out_dir: self.out_dir.clone(),
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let file = match &cli.config {
        Some(path) => PartialSettings::load(path)?,
        None => PartialSettings::default(),
    };
    let settings = RunSettings::resolve(cli.overrides(), file)?;

    let records = load_records(&settings.input).map_err(|e| e.to_string())?;
    println!(
        "Loaded {} game rows from {:?}",
        records.len(),
        settings.input.file_name().unwrap_or_default()
    );

    let filter = FilterSpec::new(&settings.position, settings.min_season)
        .with_season_type(&settings.season_type);
    let filtered = filter_records(&records, &filter);
    let aggregates = aggregate_seasons(&filtered);
    if aggregates.is_empty() {
        return Err(format!(
            "no {} {} rows at or after season {}",
            settings.position, settings.season_type, settings.min_season
        ));
    }
    println!(
        "Kept {} rows -> {} player-seasons",
        filtered.len(),
        aggregates.len()
    );

    fs::create_dir_all(&settings.out_dir)
        .map_err(|e| format!("Failed to create output directory: {}", e))?;

    // Bar chart over the requested (or latest) season
    let bar_season = match settings.season {
        Some(season) => season,
        None => aggregates.iter().map(|r| r.season).max().unwrap_or(0),
    };
    let bar = RankedBarView::from_aggregates(&aggregates, bar_season, settings.top)
        .map_err(|e| e.to_string())?;
    let bar_path = settings.out_dir.join("rate_by_player.svg");
    render_ranked_bar(&bar, &bar_path).map_err(|e| e.to_string())?;
    println!("Wrote {:?}", bar_path);

    // Split, fit, score
    let split = SplitSpec {
        train_fraction: settings.train_fraction,
        seed: settings.seed,
    };
    let (train, test) = split_records(&aggregates, &split).map_err(|e| e.to_string())?;
    log::info!("{} training rows, {} test rows", train.len(), test.len());

    let mut model = RateModel::new();
    model.fit(&train).map_err(|e| e.to_string())?;
    println!("Model: intercept {:.4}", model.intercept());
    for (predictor, coefficient) in model.predictors().iter().zip(model.coefficients()) {
        println!("  {:<22} {:>10.6}", predictor.label(), coefficient);
    }

    let predicted = model.predict(&test).map_err(|e| e.to_string())?;
    let actual: Vec<f64> = test.iter().map(|r| r.yards_per_game).collect();
    let evaluation = evaluate(&actual, &predicted).map_err(|e| e.to_string())?;

    let scatter = ScatterView::new(&actual, &predicted).map_err(|e| e.to_string())?;
    let scatter_path = settings.out_dir.join("predicted_vs_actual.svg");
    render_scatter(&scatter, &scatter_path).map_err(|e| e.to_string())?;
    println!("Wrote {:?}", scatter_path);

    // Metrics table, as text and inside the JSON artifact
    let table = MetricsTable::from_evaluation(&evaluation);
    let rendered = table.render();
    print!("\n{}", rendered);

    let table_path = settings.out_dir.join("metrics.txt");
    fs::write(&table_path, &rendered).map_err(|e| format!("Failed to write table: {}", e))?;
    println!("Wrote {:?}", table_path);

    let artifact = serde_json::json!({
        "settings": settings,
        "train_rows": train.len(),
        "test_rows": test.len(),
        "model": {
            "intercept": model.intercept(),
            "coefficients": model
                .predictors()
                .iter()
                .zip(model.coefficients())
                .map(|(p, c)| serde_json::json!({ "column": p.label(), "coefficient": c }))
                .collect::<Vec<_>>(),
            "train_r_squared": model.r_squared(),
        },
        "metrics": table,
    });
    let json_path = settings.out_dir.join("report.json");
    let file = fs::File::create(&json_path)
        .map_err(|e| format!("Failed to create report.json: {}", e))?;
    serde_json::to_writer_pretty(file, &artifact)
        .map_err(|e| format!("Failed to write report.json: {}", e))?;
    println!("Wrote {:?}", json_path);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
