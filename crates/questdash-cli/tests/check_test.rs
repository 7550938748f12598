//! Integration tests for `check`: envelope verdict and advisories.

mod common;

use common::{TIE_BREAK_PAYLOAD, TestFixture};
use predicates::prelude::*;

#[test]
fn test_check_reports_clean_payload() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(TIE_BREAK_PAYLOAD);

    fixture
        .cmd()
        .args(["check", "--data", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Envelope OK"))
        .stdout(predicate::str::contains("No advisories."));
}

#[test]
fn test_check_reports_advisories_without_failing() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(
        r#"{
            "summary": { "total": 5, "by_status": { "finished": 1 } },
            "quests": [
                { "title": "undated", "quest_id": "q-1", "status": "finished" },
                { "slug": "mystery", "status": "weird" }
            ]
        }"#,
    );

    fixture
        .cmd()
        .args(["check", "--data", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("finished without a completed_date"))
        .stdout(predicate::str::contains("unrecognized status"))
        .stdout(predicate::str::contains(
            "summary.total is 5 but 2 quest records are present",
        ));
}

#[test]
fn test_check_rejects_invalid_envelope() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(r#"{ "quests": [] }"#);

    fixture
        .cmd()
        .args(["check", "--data", payload.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Data format invalid."));
}

#[test]
fn test_check_json_report() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(TIE_BREAK_PAYLOAD);

    let output = fixture
        .cmd()
        .args([
            "check",
            "--data",
            payload.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["quest_count"], 2);
    assert_eq!(report["summary_total"], 2);
    assert_eq!(report["by_status"].as_array().unwrap().len(), 5);
    assert!(report["advisories"].as_array().unwrap().is_empty());
}
