use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_INSIGHTS_DATA_DIR", data_dir)
        .env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &Path, amount: &str, category: &str, date: &str) {
    expenses(data_dir)
        .args(["expense", "add", amount, "--category", category])
        .args(["--description", "Test expense", "--date", date])
        .assert()
        .success();
}

/// Jan 100, Feb 60 (two categories), plus one record outside the range
fn seed(data_dir: &Path) {
    add(data_dir, "100", "Food & Dining", "2024-01-05");
    add(data_dir, "50", "food & dining", "2024-02-05");
    add(data_dir, "10.00", "Transportation", "2024-02-10");
    add(data_dir, "999", "Travel", "2023-06-01");
}

const RANGE: [&str; 4] = ["--start", "2024-01-01", "--end", "2024-02-29"];

#[test]
fn init_creates_settings() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn categories_lists_predefined_labels() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn add_and_list() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    expenses(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("$999.00"));

    expenses(dir.path())
        .args(["expense", "list", "--category", "Transportation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$10.00"))
        .stdout(predicate::str::contains("Food & Dining").not());
}

#[test]
fn add_rejects_invalid_expense() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .args(["expense", "add", "0", "--category", "Other", "--description", "Nothing"])
        .args(["--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));

    expenses(dir.path())
        .args(["expense", "add", "abc", "--category", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn delete_unknown_expense_fails() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .args(["expense", "delete", "exp-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn trends_are_chronological() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let output = expenses(dir.path())
        .args(["analytics", "trends", "--granularity", "monthly"])
        .args(RANGE)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let jan = stdout.find("Jan 2024").unwrap();
    let feb = stdout.find("Feb 2024").unwrap();
    assert!(jan < feb);
    assert!(stdout.contains("$100.00"));
    assert!(stdout.contains("$60.00"));
    assert!(!stdout.contains("Jun 2023"));
}

#[test]
fn inverted_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .args(["analytics", "trends", "--start", "2024-03-01", "--end", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("after end date"));
}

#[test]
fn compare_wraps_january() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "40", "Shopping", "2023-12-20");
    add(dir.path(), "25", "Shopping", "2024-01-03");
    add(dir.path(), "70", "Shopping", "2022-12-20");

    expenses(dir.path())
        .args(["analytics", "compare", "--reference", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2024"))
        .stdout(predicate::str::contains("$25.00"))
        .stdout(predicate::str::contains("$40.00"))
        .stdout(predicate::str::contains("$70.00").not());
}

#[test]
fn forecast_projects_following_months() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    expenses(dir.path())
        .args(["analytics", "forecast", "--horizon", "2"])
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mar 2024"))
        .stdout(predicate::str::contains("Apr 2024"))
        .stdout(predicate::str::contains("May 2024").not())
        .stdout(predicate::str::contains("Next period estimate: $20.00"));
}

#[test]
fn report_prints_every_section() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    expenses(dir.path())
        .args(["analytics", "report", "--reference", "2024-02-15"])
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: $160.00"))
        .stdout(predicate::str::contains("Spending Patterns"))
        .stdout(predicate::str::contains("NEXT PERIOD ESTIMATE"));
}

#[test]
fn import_then_export_records() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("import.csv");
    fs::write(
        &csv_path,
        "date,category,description,amount\n\
         2024-01-05,Food & Dining,Groceries run,100.00\n\
         2/10/2024,Transportation,Bus pass,10.00\n\
         2024-02-11,Transportation,x,5.00\n",
    )
    .unwrap();

    expenses(dir.path())
        .args(["expense", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 expense(s)"))
        .stdout(predicate::str::contains("line 4"));

    let out = dir.path().join("out").join("records.csv");
    expenses(dir.path())
        .args(["export", "records", "--output"])
        .arg(&out)
        .args(RANGE)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "Date,Category,Description,Amount");
    assert_eq!(lines[1], "2024-01-05,Food & Dining,Groceries run,100.00");
    assert_eq!(lines[2], "2024-02-10,Transportation,Bus pass,10.00");
}

#[test]
fn export_summary_and_report() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let summary = dir.path().join("summary.csv");
    expenses(dir.path())
        .args(["export", "summary", "--output"])
        .arg(&summary)
        .args(RANGE)
        .assert()
        .success();
    let written = fs::read_to_string(&summary).unwrap();
    assert!(written.starts_with("Total Expenses,160.00"));
    assert!(written.contains("Food & Dining,150.00,93.75%"));

    let report = dir.path().join("report.json");
    expenses(dir.path())
        .args(["export", "report", "--reference", "2024-02-15", "--output"])
        .arg(&report)
        .args(RANGE)
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["report"]["buckets"][0]["key"], "Jan 2024");
    assert_eq!(value["report"]["summary"]["total"], 16000);
}
