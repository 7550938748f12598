//! Integration tests for the `show` render pass: one test per banner
//! state, plus sort order and JSON output shape.

mod common;

use common::{EMPTY_PAYLOAD, TIE_BREAK_PAYLOAD, TestFixture};
use predicates::prelude::*;

#[test]
fn test_show_renders_ready_dashboard() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(TIE_BREAK_PAYLOAD);

    fixture
        .cmd()
        .args(["show", "--data", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quest Dashboard"))
        .stdout(predicate::str::contains("2 quests represented"))
        .stdout(predicate::str::contains("Mar 5, 2024, 10:00 AM UTC"));
}

#[test]
fn test_show_is_the_default_command() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(TIE_BREAK_PAYLOAD);

    fixture
        .cmd()
        .args(["--data", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 quests represented"));
}

#[test]
fn test_show_sorts_tie_break_by_title() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(TIE_BREAK_PAYLOAD);

    let output = fixture
        .cmd()
        .args(["show", "--data", payload.to_str().unwrap()])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let pos_a = stdout.find("\nA [").expect("quest A rendered");
    let pos_b = stdout.find("\nB [").expect("quest B rendered");
    assert!(pos_a < pos_b, "equal dates must order by title ascending");
}

#[test]
fn test_show_empty_state_hides_charts() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(EMPTY_PAYLOAD);

    fixture
        .cmd()
        .args(["show", "--data", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quests available yet."))
        .stdout(predicate::str::contains("0 quests represented"))
        .stdout(predicate::str::contains("Status Distribution").not());
}

#[test]
fn test_show_missing_file_is_unavailable_error() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["show", "--data", fixture.missing_payload().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Dashboard data unavailable."))
        .stdout(predicate::str::contains("Quest Dashboard").not());
}

#[test]
fn test_show_malformed_json_is_format_error() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("{ not json");

    fixture
        .cmd()
        .args(["show", "--data", payload.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Data format invalid."));
}

#[test]
fn test_show_missing_by_status_is_format_error() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(
        r#"{ "summary": { "total": 0 }, "quests": [] }"#,
    );

    fixture
        .cmd()
        .args(["show", "--data", payload.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Data format invalid."))
        .stdout(predicate::str::contains("Quest Dashboard").not());
}

#[test]
fn test_show_json_output_shape() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(TIE_BREAK_PAYLOAD);

    let output = fixture
        .cmd()
        .args([
            "show",
            "--data",
            payload.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let vm: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(vm["banner"]["state"], "ready");
    assert_eq!(vm["kpis"]["finished"], 2);
    assert_eq!(vm["count_label"], "2 quests represented");
    assert_eq!(vm["cards"][0]["title"], "A");
    assert_eq!(vm["cards"][1]["title"], "B");
    assert_eq!(vm["charts"]["status"]["segments"].as_array().unwrap().len(), 5);
}

#[test]
fn test_show_json_error_shape() {
    let fixture = TestFixture::new();

    let output = fixture
        .cmd()
        .args([
            "show",
            "--data",
            fixture.missing_payload().to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let banner: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(banner["state"], "error");
    assert!(
        banner["message"]
            .as_str()
            .unwrap()
            .contains("Dashboard data unavailable.")
    );
}

#[test]
fn test_show_piped_output_degrades_charts_to_fallback_note() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(TIE_BREAK_PAYLOAD);

    // assert_cmd captures stdout, so no tty: the chart backend is
    // unavailable and both panels carry the fallback note.
    fixture
        .cmd()
        .args(["show", "--data", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Charts unavailable: terminal cannot render charts.")
                .count(2),
        );
}
