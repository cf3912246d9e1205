//! CLI surface specs
//!
//! Verify help, argument errors and the statuses listing.

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    pitstop()
        .args(&["--help"])
        .passes()
        .stdout_has("progress")
        .stdout_has("visible")
        .stdout_has("nav")
        .stdout_has("route")
        .stdout_has("statuses");
}

#[test]
fn statuses_in_lifecycle_order() {
    pitstop().args(&["statuses"]).passes().stdout_eq(
        " 0 入庫待ち (awaiting_intake)
 1 入庫済み (intake_complete)
 2 見積作成待ち (awaiting_estimate)
 3 見積提示済み (estimate_presented)
 4 お客様承認待ち (awaiting_customer_approval)
 5 部品発注待ち (awaiting_parts_order)
 6 部品調達待ち (awaiting_parts)
 7 作業待ち (awaiting_work)
 8 出庫待ち (awaiting_release)
 9 出庫済み (released)
",
    );
}

#[test]
fn statuses_as_json() {
    let run = pitstop().args(&["statuses", "--format", "json"]).passes();
    let json = run.json();
    assert_eq!(json.as_array().unwrap().len(), 10);
    assert_eq!(json[7]["label"], "作業待ち");
    assert_eq!(json[7]["alias"], "awaiting_work");
}

#[test]
fn unknown_role_is_a_usage_error() {
    let run = pitstop()
        .args(&["visible", "--role", "driver"])
        .fails()
        .stderr_has("unknown role 'driver'");
    assert_eq!(run.code(), Some(2));
}

#[test]
fn out_of_range_phase_is_a_usage_error() {
    let run = pitstop()
        .args(&["route", "--phase", "7", "--job-id", "J-1"])
        .fails();
    assert_eq!(run.code(), Some(2));
}

#[test]
fn unknown_job_fails_with_suggestions() {
    let shop = Shop::empty();
    shop.pitstop()
        .args(&["progress", "--job", "J-404", "--role", "customer"])
        .fails()
        .stderr_has("error: Failed to load job 'J-404'")
        .stderr_has(".pitstop/jobs/<id>.json");
}

#[test]
fn malformed_job_fails() {
    let shop = Shop::empty();
    shop.job("J-bad", "{not json");
    shop.pitstop()
        .args(&["progress", "--job", "J-bad", "--role", "customer"])
        .fails()
        .stderr_has("Failed to load job 'J-bad'");
}

#[test]
fn completions_are_generated() {
    pitstop()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("pitstop");
}
