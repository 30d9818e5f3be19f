//! End-to-end split → fit → predict → evaluate over literal aggregates.

use model::metrics::evaluate;
use model::{split_records, RateModel, SplitSpec};
use pipeline::AggregateRecord;

fn season_2023(
    player: &str,
    total_yards: f64,
    total_tds: f64,
    total_ints: f64,
    rate: f64,
) -> AggregateRecord {
    AggregateRecord {
        player: player.to_string(),
        season: 2023,
        games: 17,
        total_passing_yards: total_yards,
        total_passing_tds: total_tds,
        total_interceptions: total_ints,
        yards_per_game: rate,
    }
}

fn literal_aggregates() -> Vec<AggregateRecord> {
    vec![
        season_2023("A", 4000.0, 30.0, 10.0, 235.3),
        season_2023("B", 3000.0, 21.0, 12.0, 200.1),
        season_2023("C", 4500.0, 35.0, 8.0, 264.7),
        season_2023("D", 3600.0, 24.0, 11.0, 211.8),
        season_2023("E", 2800.0, 19.0, 14.0, 164.7),
        season_2023("F", 4200.0, 28.0, 7.0, 247.1),
        season_2023("G", 3300.0, 22.0, 9.0, 194.1),
        season_2023("H", 3900.0, 26.0, 13.0, 229.4),
    ]
}

#[test]
fn full_pipeline_produces_finite_metrics() {
    let aggregates = literal_aggregates();

    let spec = SplitSpec::new(0.75).with_seed(42);
    let (train, test) = split_records(&aggregates, &spec).unwrap();
    assert_eq!(train.len() + test.len(), aggregates.len());
    assert_eq!(train.len(), 6);

    let mut model = RateModel::new();
    model.fit(&train).unwrap();

    let predicted = model.predict(&test).unwrap();
    let actual: Vec<f64> = test.iter().map(|r| r.yards_per_game).collect();

    let evaluation = evaluate(&actual, &predicted).unwrap();
    assert!(evaluation.rmse.is_finite());
    assert!(evaluation.mae.is_finite());
    assert!(evaluation.r_squared.is_finite());
    assert!(evaluation.r_squared <= 1.0);
    assert!(evaluation.rmse >= evaluation.mae);
}

#[test]
fn fixed_seed_reproduces_the_same_report_numbers() {
    let aggregates = literal_aggregates();
    let spec = SplitSpec::new(0.75).with_seed(42);

    let mut results = Vec::new();
    for _ in 0..2 {
        let (train, test) = split_records(&aggregates, &spec).unwrap();
        let mut model = RateModel::new();
        model.fit(&train).unwrap();
        let predicted = model.predict(&test).unwrap();
        let actual: Vec<f64> = test.iter().map(|r| r.yards_per_game).collect();
        results.push(evaluate(&actual, &predicted).unwrap());
    }

    assert_eq!(results[0].rmse, results[1].rmse);
    assert_eq!(results[0].mae, results[1].mae);
    assert_eq!(results[0].r_squared, results[1].r_squared);
}

#[test]
fn model_predicts_outside_the_training_partition() {
    let aggregates = literal_aggregates();
    let (train, test) = split_records(&aggregates, &SplitSpec::new(0.75).with_seed(7)).unwrap();

    let mut model = RateModel::new();
    model.fit(&train).unwrap();

    // Any set sharing the predictor schema is valid input.
    let everything: Vec<AggregateRecord> =
        train.iter().chain(test.iter()).cloned().collect();
    let predicted = model.predict(&everything).unwrap();
    assert_eq!(predicted.len(), everything.len());
    assert!(predicted.iter().all(|p| p.is_finite()));
}
