//! Run settings: defaults, optional TOML file, flag overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Partial settings, as they arrive from flags or a config file.
/// `None` means "not given here".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSettings {
    pub input: Option<PathBuf>,
    pub position: Option<String>,
    pub season_type: Option<String>,
    pub min_season: Option<u16>,
    pub season: Option<u16>,
    pub train_fraction: Option<f64>,
    pub seed: Option<u64>,
    pub top: Option<usize>,
    pub out_dir: Option<PathBuf>,
}

impl PartialSettings {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let body = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&body).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

/// Fully resolved settings for one report run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSettings {
    /// Input dataset path
    pub input: PathBuf,
    /// Roster position to keep
    pub position: String,
    /// Season segment to keep
    pub season_type: String,
    /// Earliest season to keep (inclusive)
    pub min_season: u16,
    /// Season shown in the bar chart; `None` = latest present
    pub season: Option<u16>,
    /// Fraction of player-seasons used for training
    pub train_fraction: f64,
    /// Shuffle seed; `None` = entropy (run-to-run metric variance)
    pub seed: Option<u64>,
    /// Number of players in the bar chart
    pub top: usize,
    /// Output directory for artifacts
    pub out_dir: PathBuf,
}

impl RunSettings {
    /// Merge flag values over file values over defaults. The input path
    /// has no default and must come from one of the two.
    pub fn resolve(flags: PartialSettings, file: PartialSettings) -> Result<Self, String> {
        let input = flags
            .input
            .or(file.input)
            .ok_or_else(|| "no input dataset given (use --input or a config file)".to_string())?;

        Ok(Self {
            input,
            position: flags
                .position
                .or(file.position)
                .unwrap_or_else(|| "QB".to_string()),
            season_type: flags
                .season_type
                .or(file.season_type)
                .unwrap_or_else(|| "REG".to_string()),
            min_season: flags.min_season.or(file.min_season).unwrap_or(2020),
            season: flags.season.or(file.season),
            train_fraction: flags.train_fraction.or(file.train_fraction).unwrap_or(0.75),
            seed: flags.seed.or(file.seed),
            top: flags.top.or(file.top).unwrap_or(10),
            out_dir: flags
                .out_dir
                .or(file.out_dir)
                .unwrap_or_else(|| PathBuf::from("report-out")),
        })
    }
}
