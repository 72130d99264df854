use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("credit-tracker").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn init(home: &TempDir) {
    let data = home.path().join("data");
    tracker(home)
        .args(["init", "--data-dir", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized credit-tracker"));
    tracker(home).args(["year", "2025"]).assert().success();
}

fn state_json(home: &TempDir) -> serde_json::Value {
    let path = home.path().join("data").join("credit-tracker.json");
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_init_writes_defaults() {
    let home = TempDir::new().unwrap();
    init(&home);
    let state = state_json(&home);
    assert_eq!(state["year"], 2025);
    assert_eq!(state["cards"].as_array().unwrap().len(), 3);
    assert!(state["usage"].as_object().unwrap().is_empty());
}

#[test]
fn test_summary_without_usage() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Credits for 2025"))
        .stdout(predicate::str::contains("Annual Fees:       $1,515"))
        .stdout(predicate::str::contains("Credits Used:      $0"));
}

#[test]
fn test_mark_by_label_and_toggle_back() {
    let home = TempDir::new().unwrap();
    init(&home);
    for month in ["jan", "feb", "mar"] {
        tracker(&home)
            .args(["mark", "amex-gold", "uber-cash", month])
            .assert()
            .success()
            .stdout(predicate::str::contains("used"));
    }
    let state = state_json(&home);
    assert_eq!(state["usage"]["2025::amex-gold::uber-cash::0"], true);
    assert_eq!(state["usage"]["2025::amex-gold::uber-cash::2"], true);

    tracker(&home)
        .args(["mark", "1", "1", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unused"));
    let state = state_json(&home);
    assert_eq!(state["usage"]["2025::amex-gold::uber-cash::0"], false);
}

#[test]
fn test_mark_rejects_bad_period() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home)
        .args(["mark", "csr", "csr-travel", "jan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown period"));
}

#[test]
fn test_reset_monthly_keeps_other_cadences() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home).args(["mark", "csr", "csr-lyft", "may"]).assert().success();
    tracker(&home).args(["mark", "csr", "csr-edit", "h1"]).assert().success();
    tracker(&home)
        .args(["reset", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries cleared"));
    let usage = state_json(&home)["usage"].clone();
    assert!(usage.get("2025::csr::csr-lyft::4").is_none());
    assert_eq!(usage["2025::csr::csr-edit::0"], true);
}

#[test]
fn test_unknown_cadence_argument_fails() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home).args(["reset", "quarterly"]).assert().failure();
}

#[test]
fn test_card_and_credit_editing() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home)
        .args(["cards", "add", "--name", "Test Card", "--fee", "95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added card: Test Card"));
    tracker(&home)
        .args(["credits", "add", "4", "--label", "Hotel", "--amount", "oops", "--cadence", "annual"])
        .assert()
        .success();
    tracker(&home).args(["cards", "move", "4", "1"]).assert().success();

    let state = state_json(&home);
    let first = &state["cards"][0];
    assert_eq!(first["name"], "Test Card");
    assert_eq!(first["annualFee"], 95.0);
    assert_eq!(first["credits"][0]["amount"], 0.0);
    assert_eq!(first["credits"][0]["cadence"], "annual");

    tracker(&home).args(["cards", "remove", "amex-gold"]).assert().success();
    assert_eq!(state_json(&home)["cards"].as_array().unwrap().len(), 3);
    tracker(&home).args(["cards", "remove", "nope"]).assert().failure();
}

#[test]
fn test_export_then_import_round_trip() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home).args(["mark", "venture-x", "c1-anniv", "annual"]).assert().success();

    let out = home.path().join("backup.json");
    tracker(&home)
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success();
    let exported = state_json(&home);

    tracker(&home).args(["cards", "remove", "csr"]).assert().success();
    tracker(&home).args(["year", "2030"]).assert().success();
    tracker(&home)
        .args(["import", out.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(state_json(&home), exported);
}

#[test]
fn test_default_export_name_uses_year() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("credit-tracker-2025.json"));
    assert!(home.path().join("data/exports/credit-tracker-2025.json").exists());
}

#[test]
fn test_malformed_import_leaves_state() {
    let home = TempDir::new().unwrap();
    init(&home);
    let bad = home.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    let before = state_json(&home);
    tracker(&home)
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import failed"));
    assert_eq!(state_json(&home), before);
}

#[test]
fn test_corrupt_state_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    init(&home);
    let path = home.path().join("data").join("credit-tracker.json");
    std::fs::write(&path, "garbage").unwrap();
    tracker(&home)
        .args(["cards", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chase Sapphire Reserve"))
        .stderr(predicate::str::contains("Failed to load saved state"));
}

#[test]
fn test_changing_year_keeps_usage() {
    let home = TempDir::new().unwrap();
    init(&home);
    tracker(&home)
        .args(["mark", "amex-gold", "uber-cash", "jan"])
        .assert()
        .success();
    let before = std::fs::read_to_string(home.path().join("data").join("credit-tracker.json")).unwrap();
    let usage_before = serde_json::to_string(&state_json(&home)["usage"]).unwrap();

    tracker(&home).args(["year", "2030"]).assert().success();
    let state = state_json(&home);
    assert_eq!(state["year"], 2030);
    assert_eq!(serde_json::to_string(&state["usage"]).unwrap(), usage_before);
    tracker(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Credits for 2030"))
        .stdout(predicate::str::contains("Credits Used:      $0"));
    tracker(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Used by year:  2025: 1"));

    tracker(&home).args(["year", "2025"]).assert().success();
    let after = std::fs::read_to_string(home.path().join("data").join("credit-tracker.json")).unwrap();
    assert_eq!(after, before);
    tracker(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Credits for 2025"))
        .stdout(predicate::str::contains("Credits Used:      $10"));
}
