//! File-based source tests for the data crate.

use std::fs;
use std::path::PathBuf;

use data::{load_records, CsvSource, DataError, JsonSource, StatSource};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("gridiron-data-test-{}-{}", std::process::id(), name));
    path
}

const CSV_BODY: &str = "\
player,season,season_type,position,passing_yards,passing_tds,interceptions
J. Allen,2023,REG,QB,312.0,3,1
J. Allen,2023,REG,QB,265.0,2,0
P. Mahomes,2023,POST,QB,290.0,2,1
";

#[test]
fn csv_source_reads_all_rows() {
    let path = temp_path("rows.csv");
    fs::write(&path, CSV_BODY).unwrap();

    let records = CsvSource::new(&path).load().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].player, "J. Allen");
    assert_eq!(records[0].passing_yards, 312.0);
    assert_eq!(records[2].season_type, "POST");

    fs::remove_file(&path).ok();
}

#[test]
fn csv_source_reports_missing_column_by_name() {
    let path = temp_path("missing.csv");
    fs::write(
        &path,
        "player,season,season_type,position,passing_tds,interceptions\nA,2023,REG,QB,1,0\n",
    )
    .unwrap();

    let err = CsvSource::new(&path).load().unwrap_err();
    match err {
        DataError::SchemaMismatch { column } => assert_eq!(column, "passing_yards"),
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }

    fs::remove_file(&path).ok();
}

#[test]
fn csv_source_empty_body_is_no_data() {
    let path = temp_path("empty.csv");
    fs::write(
        &path,
        "player,season,season_type,position,passing_yards,passing_tds,interceptions\n",
    )
    .unwrap();

    assert!(matches!(
        CsvSource::new(&path).load(),
        Err(DataError::NoData)
    ));

    fs::remove_file(&path).ok();
}

#[test]
fn json_source_reads_array_of_objects() {
    let path = temp_path("rows.json");
    fs::write(
        &path,
        r#"[
            {"player":"A","season":2023,"season_type":"REG","position":"QB",
             "passing_yards":200.0,"passing_tds":1.0,"interceptions":0.0},
            {"player":"B","season":2022,"season_type":"REG","position":"QB",
             "passing_yards":150.0,"passing_tds":0.0,"interceptions":2.0}
        ]"#,
    )
    .unwrap();

    let records = JsonSource::new(&path).load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].season, 2022);

    fs::remove_file(&path).ok();
}

#[test]
fn json_source_reports_missing_column_by_name() {
    let path = temp_path("missing.json");
    fs::write(
        &path,
        r#"[{"player":"A","season":2023,"season_type":"REG","position":"QB",
             "passing_yards":200.0,"passing_tds":1.0}]"#,
    )
    .unwrap();

    let err = JsonSource::new(&path).load().unwrap_err();
    match err {
        DataError::SchemaMismatch { column } => assert_eq!(column, "interceptions"),
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }

    fs::remove_file(&path).ok();
}

#[test]
fn load_records_picks_source_by_extension() {
    let csv_path = temp_path("auto.csv");
    fs::write(&csv_path, CSV_BODY).unwrap();

    let records = load_records(&csv_path).unwrap();
    assert_eq!(records.len(), 3);

    fs::remove_file(&csv_path).ok();
}
