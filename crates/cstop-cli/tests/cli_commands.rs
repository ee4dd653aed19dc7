#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate – no public API to document

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cstop() -> Command {
    Command::cargo_bin("cstop").unwrap()
}

// ---------------------------------------------------------------------------
// table
// ---------------------------------------------------------------------------

#[test]
fn table_prints_the_distribution() {
    cstop().arg("table").assert().success().stdout(
        predicate::str::contains("Total")
            .and(predicate::str::contains("0.643519"))
            .and(predicate::str::contains("1296 equally likely rolls")),
    );
}

#[test]
fn table_includes_the_unreachable_total() {
    // Total 1 is listed with probability zero.
    cstop()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.000000"));
}

// ---------------------------------------------------------------------------
// eval
// ---------------------------------------------------------------------------

#[test]
fn eval_reports_combined_probability() {
    cstop()
        .args(["eval", "6", "7", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Probability of seeing any of (6, 7, 8) in one roll: 0.919753",
        ));
}

#[test]
fn eval_prints_table_by_default() {
    cstop()
        .args(["eval", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total").and(predicate::str::contains("0.643519")));
}

#[test]
fn eval_no_table_skips_the_table() {
    cstop()
        .args(["eval", "--no-table", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("0.643519").and(predicate::str::contains("Total").not()),
        );
}

#[test]
fn eval_rejects_totals_above_twelve() {
    cstop()
        .args(["eval", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2..=12"));
}

#[test]
fn eval_rejects_totals_below_two() {
    cstop()
        .args(["eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2..=12"));
}

#[test]
fn eval_requires_at_least_one_total() {
    cstop().arg("eval").assert().failure();
}

// ---------------------------------------------------------------------------
// rank
// ---------------------------------------------------------------------------

#[test]
fn rank_shows_best_combo_first() {
    cstop()
        .args(["rank", "--top", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("6-7-8")
                .and(predicate::str::contains("0.919753"))
                .and(predicate::str::contains("165 column choices")),
        );
}

#[test]
fn rank_writes_the_full_ranking_as_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ranking.csv");

    cstop()
        .args(["rank", "--top", "1", "--output", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full ranking written to"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("x,y,z,probability\n"));
    assert_eq!(content.lines().count(), 166); // header + 165 combos
    assert!(content.contains("6,7,8,0.919753"));
}

#[test]
fn rank_clamps_oversized_top() {
    cstop()
        .args(["rank", "--top", "9999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 165"));
}

// ---------------------------------------------------------------------------
// slices
// ---------------------------------------------------------------------------

#[test]
fn slices_writes_a_table_per_lowest_column() {
    let dir = TempDir::new().unwrap();

    cstop()
        .args(["slices", "--output-dir", dir.path().to_str().unwrap(), "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tables written to"));

    let tables = dir.path().join("tables");
    for x in 2..=10 {
        assert!(tables.join(format!("slice_{x:02}.csv")).exists(), "slice {x}");
    }

    let slice_two = fs::read_to_string(tables.join("slice_02.csv")).unwrap();
    assert!(slice_two.starts_with("x,y,z,probability\n"));
    assert_eq!(slice_two.lines().count(), 46); // header + C(10, 2) rows

    let all = fs::read_to_string(tables.join("all_combinations.csv")).unwrap();
    assert_eq!(all.lines().count(), 166);
}

#[test]
fn slices_renders_heatmaps_unless_quiet() {
    let dir = TempDir::new().unwrap();

    cstop()
        .args(["slices", "--output-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lowest column"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_is_parseable() {
    let output = cstop().args(["export", "json"]).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["dice"], 4);
    assert_eq!(parsed["outcomes"], 1296);
    assert_eq!(parsed["totals"].as_array().unwrap().len(), 12);
}

#[test]
fn export_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("distribution.csv");

    cstop()
        .args(["export", "csv", "--output", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("total,hits,probability\n"));
    assert_eq!(content.lines().count(), 13); // header + totals 1..=12
    assert!(content.contains("7,834,0.643519"));
}

#[test]
fn export_markdown_to_stdout() {
    cstop()
        .args(["export", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Total | Probability |"));
}

#[test]
fn export_rejects_unknown_formats() {
    cstop()
        .args(["export", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}
