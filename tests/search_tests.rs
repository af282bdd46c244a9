//! Integration tests for date range search

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{as_user, init_workspace, insert_entry, register};

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_workspace(&temp);
    register(&temp, "ayse");
    insert_entry(&temp, "ayse", "new year eve", Some("2023-12-31 23:59:59"));
    insert_entry(&temp, "ayse", "first day", Some("2024-01-01 00:00:00"));
    insert_entry(&temp, "ayse", "mid month", Some("2024-01-15 12:30:00"));
    insert_entry(&temp, "ayse", "last day", Some("2024-01-31 23:59:59"));
    insert_entry(&temp, "ayse", "february", Some("2024-02-01 00:00:00"));
    insert_entry(&temp, "mehmet", "someone else", Some("2024-01-10 08:00:00"));
    temp
}

#[test]
fn test_search_january_inclusive() {
    let temp = setup();

    let output = as_user(&temp, "ayse")
        .args(["search", "2024-01-01", "2024-01-31"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Found 3 entries"));
    assert!(stdout.contains("first day"));
    assert!(stdout.contains("mid month"));
    assert!(stdout.contains("last day"));
    assert!(!stdout.contains("new year eve"));
    assert!(!stdout.contains("february"));
    assert!(!stdout.contains("someone else"));

    // Ascending by id
    let first = stdout.find("first day").unwrap();
    let last = stdout.find("last day").unwrap();
    assert!(first < last);
}

#[test]
fn test_search_single_day() {
    let temp = setup();

    as_user(&temp, "ayse")
        .args(["search", "2024-01-15", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 entries"))
        .stdout(predicate::str::contains("mid month"));
}

#[test]
fn test_search_inverted_range() {
    let temp = setup();

    as_user(&temp, "ayse")
        .args(["search", "2024-01-31", "2024-01-01"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("is after end date"));
}

#[test]
fn test_search_no_results() {
    let temp = setup();

    as_user(&temp, "ayse")
        .args(["search", "2020-01-01", "2020-12-31"])
        .assert()
        .success()
        .stdout("No entries found\n");
}

#[test]
fn test_search_bad_date_format() {
    let temp = setup();

    as_user(&temp, "ayse")
        .args(["search", "01-01-2024", "2024-01-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_search_skips_undated_entries() {
    let temp = setup();
    insert_entry(&temp, "ayse", "undated", None);

    as_user(&temp, "ayse")
        .args(["search", "1900-01-01", "2999-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 entries"))
        .stdout(predicate::str::contains("undated").not());
}

#[test]
fn test_search_skips_unparseable_timestamps() {
    let temp = setup();
    insert_entry(&temp, "ayse", "iso separator", Some("2024-01-15T12:30:00"));
    insert_entry(&temp, "ayse", "fractional", Some("2024-01-15 12:30:00.500"));

    as_user(&temp, "ayse")
        .args(["search", "2024-01-01", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 entries"))
        .stdout(predicate::str::contains("(no date)").not())
        .stdout(predicate::str::contains("iso separator").not());
}
