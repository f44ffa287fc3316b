use predicates::str::contains;

mod common;
use common::trc;

#[test]
fn test_check_valid_pair_is_padded() {
    trc()
        .args(["--test", "check", "--start-hour", "9", "--start-minute", "5"])
        .assert()
        .success()
        .stdout(contains("09:05"))
        .stdout(contains("--:--"));
}

#[test]
fn test_check_all_empty_is_valid() {
    trc()
        .args(["--test", "check"])
        .assert()
        .success()
        .stdout(contains("Time range is valid"));
}

#[test]
fn test_check_missing_minute_fails_with_required() {
    trc()
        .args(["--test", "check", "--start-hour", "9"])
        .assert()
        .failure()
        .stderr(contains("start.minute"))
        .stderr(contains("required"))
        .stderr(contains("validation failed with 1 error(s)"));
}

#[test]
fn test_check_reports_errors_across_both_pairs() {
    trc()
        .args([
            "--test",
            "check",
            "--start-hour",
            "25",
            "--start-minute",
            "30",
            "--end-hour",
            "10",
            "--end-minute",
            "61",
        ])
        .assert()
        .failure()
        .stderr(contains("start.hour"))
        .stderr(contains("00-23"))
        .stderr(contains("end.minute"))
        .stderr(contains("00-59"))
        .stderr(contains("validation failed with 2 error(s)"));
}

#[test]
fn test_check_shows_span_for_full_range() {
    trc()
        .args([
            "--test",
            "check",
            "--start-hour",
            "9",
            "--start-minute",
            "0",
            "--end-hour",
            "17",
            "--end-minute",
            "30",
        ])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("17:30"))
        .stdout(contains("+08h 30m"));
}

#[test]
fn test_check_json_format_reports_error_map() {
    trc()
        .args([
            "--test",
            "check",
            "--start-hour",
            "24",
            "--start-minute",
            "00",
            "--format",
            "json",
        ])
        .assert()
        .failure()
        .stdout(contains("\"ok\": false"))
        .stdout(contains("\"start.hour\": \"00-23\""));
}

#[test]
fn test_check_json_format_emits_normalized_values() {
    trc()
        .args([
            "--test",
            "check",
            "--start-hour",
            "7",
            "--start-minute",
            "5",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(contains("\"ok\": true"))
        .stdout(contains("\"hour\": \"07\""))
        .stdout(contains("\"minute\": \"05\""));
}

#[test]
fn test_check_rejects_unknown_output_format() {
    trc()
        .args(["--test", "check", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(contains("Invalid output format: yaml"));
}
