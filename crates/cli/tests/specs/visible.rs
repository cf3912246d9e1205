//! Visible phase specs
//!
//! Verify role filtering, exclusions and skip rules.

use crate::prelude::*;

fn phases(run: &Run) -> Vec<u64> {
    run.json()
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["phase"].as_u64().unwrap())
        .collect()
}

#[test]
fn mechanic_sees_diagnosis_and_work() {
    let shop = Shop::empty();
    shop.pitstop()
        .args(&["visible", "--role", "mechanic"])
        .passes()
        .stdout_eq("2 diagnosis    故障診断\n5 work         作業実施\n");
}

#[test]
fn customer_sees_pre_checkin_approval_and_report() {
    let shop = Shop::empty();
    let run = shop
        .pitstop()
        .args(&["visible", "--role", "customer", "--format", "json"])
        .passes();
    assert_eq!(phases(&run), vec![0, 4, 6]);
}

#[test]
fn front_desk_sees_everything_minus_exclusions() {
    let shop = Shop::empty();
    let run = shop
        .pitstop()
        .args(&[
            "visible", "--role", "front-desk", "--exclude", "0", "--exclude", "4", "--format",
            "json",
        ])
        .passes();
    assert_eq!(phases(&run), vec![1, 2, 3, 5, 6]);
}

#[test]
fn job_skip_rules_apply() {
    let shop = Shop::empty();
    shop.job("J-3", INSPECTION_NO_EXTRAS);

    shop.pitstop()
        .args(&["visible", "--role", "front-desk", "--job", "J-3"])
        .passes()
        .stdout_has("2 diagnosis    受入点検")
        .stdout_has("5 work         完成検査")
        .stdout_lacks("見積作成")
        .stdout_lacks("お客様承認");
}

#[test]
fn inspection_with_extra_estimate_keeps_all_phases() {
    let shop = Shop::empty();
    shop.job(
        "J-7",
        r#"{"id": "J-7", "status": "見積作成待ち", "service_category": "12ヵ月点検", "has_additional_estimate": true}"#,
    );

    let run = shop
        .pitstop()
        .args(&["visible", "--role", "front-desk", "--job", "J-7", "--format", "json"])
        .passes();
    assert_eq!(phases(&run), vec![0, 1, 2, 3, 4, 5, 6]);
}
