//! Navigation specs
//!
//! Verify next/previous stepping, blocking notices and route output.

use crate::prelude::*;

#[test]
fn customer_steps_around_approval() {
    let shop = Shop::empty();
    shop.job("J-4", ESTIMATE_PRESENTED);

    shop.pitstop()
        .args(&["nav", "prev", "--job", "J-4", "--role", "customer", "--from", "4"])
        .passes()
        .stdout_eq("0 (pre-checkin) /customer/pre-checkin/J-4\n");

    shop.pitstop()
        .args(&["nav", "next", "--job", "J-4", "--role", "customer", "--from", "4"])
        .passes()
        .stdout_eq("6 (report) /customer/report/J-4\n");
}

#[test]
fn skipped_phases_are_stepped_over() {
    let shop = Shop::empty();
    shop.job("J-3", INSPECTION_NO_EXTRAS);

    shop.pitstop()
        .args(&["nav", "next", "--job", "J-3", "--role", "front-desk", "--from", "2"])
        .passes()
        .stdout_eq("5 (work) /mechanic/work/J-3\n");
}

#[test]
fn pending_phase_blocks_next() {
    let shop = Shop::empty();
    shop.job("J-1", OIL_CHANGE_INTAKE);

    shop.pitstop()
        .args(&["nav", "next", "--job", "J-1", "--role", "front-desk", "--from", "diagnosis"])
        .passes()
        .stdout_eq("notice: 現在のフェーズを完了してください\n");

    let run = shop
        .pitstop()
        .args(&[
            "nav", "next", "--job", "J-1", "--role", "front-desk", "--from", "2", "--format",
            "json",
        ])
        .passes();
    let json = run.json();
    assert_eq!(json["outcome"], "denied");
    assert_eq!(json["notice"]["kind"], "finish_current_phase");
    assert_eq!(json["notice"]["phase"], 2);
}

#[test]
fn pending_phase_still_allows_previous() {
    let shop = Shop::empty();
    shop.job("J-1", OIL_CHANGE_INTAKE);

    shop.pitstop()
        .args(&["nav", "prev", "--job", "J-1", "--role", "front-desk", "--from", "2"])
        .passes()
        .stdout_eq("1 (intake) /admin/intake/J-1\n");
}

#[test]
fn first_visible_phase_has_no_previous() {
    let shop = Shop::empty();
    shop.job("J-2", REPAIR_AWAITING_WORK);

    shop.pitstop()
        .args(&["nav", "prev", "--job", "J-2", "--role", "mechanic", "--from", "2"])
        .passes()
        .stdout_eq("none\n");

    shop.pitstop()
        .args(&["nav", "prev", "--job", "J-2", "--role", "mechanic", "--from", "2", "--format", "json"])
        .passes()
        .stdout_eq("null\n");
}

#[test]
fn from_defaults_to_current_phase() {
    let shop = Shop::empty();
    shop.job("J-2", REPAIR_AWAITING_WORK);

    shop.pitstop()
        .args(&["nav", "next", "--job", "J-2", "--role", "front-desk"])
        .passes()
        .stdout_eq("6 (report) /customer/report/J-2\n");
}

#[test]
fn job_without_id_cannot_build_a_route() {
    let shop = Shop::empty();
    shop.file(
        "job.json",
        r#"{"status": "作業待ち", "service_category": "修理"}"#,
    );
    let path = shop.path().join("job.json");

    shop.pitstop()
        .args(&[
            "nav",
            "next",
            "--job",
            path.to_str().unwrap(),
            "--role",
            "front-desk",
            "--from",
            "5",
        ])
        .fails()
        .stderr_has("Cannot build a route for phase 6")
        .stderr_has("--job-id");
}

#[test]
fn phase_outside_the_visible_list_is_rejected() {
    let shop = Shop::empty();
    shop.job("J-2", REPAIR_AWAITING_WORK);

    shop.pitstop()
        .args(&["nav", "next", "--job", "J-2", "--role", "mechanic", "--from", "4"])
        .fails()
        .stderr_has("Phase 4 is not visible to 'mechanic'")
        .stderr_has("Visible phases: 2, 5");
}

#[test]
fn walk_in_inspection_steps_from_its_current_phase() {
    let shop = Shop::empty();
    shop.job("J-3", INSPECTION_NO_EXTRAS);

    let run = shop
        .pitstop()
        .args(&["nav", "next", "--job", "J-3", "--role", "front-desk", "--format", "json"])
        .passes();
    let json = run.json();
    assert_eq!(json["outcome"], "denied");
    assert_eq!(json["notice"]["phase"], 5);

    shop.pitstop()
        .args(&["nav", "prev", "--job", "J-3", "--role", "front-desk"])
        .passes()
        .stdout_eq("2 (diagnosis) /mechanic/diagnosis/J-3\n");
}
