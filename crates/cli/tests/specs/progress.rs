//! Progress specs
//!
//! Verify per-phase classification, labels and the current phase.

use crate::prelude::*;

fn classes(run: &Run) -> Vec<(u64, String)> {
    run.json()["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| {
            (
                step["phase"].as_u64().unwrap(),
                step["classification"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[test]
fn awaiting_intake_shows_intake_active() {
    let shop = Shop::empty();
    shop.job("J-1", OIL_CHANGE_INTAKE);

    shop.pitstop()
        .args(&["progress", "--job", "J-1", "--role", "front-desk"])
        .passes()
        .stdout_eq(
            "Job: J-1
  Role: front-desk
  Current: 1 (intake)

  0 pending    事前チェックイン
> 1 active     入庫受付
  2 pending    故障診断
  3 pending    見積作成
  4 pending    お客様承認
  5 pending    作業実施
  6 pending    作業報告・出庫
",
        );
}

#[test]
fn awaiting_work_completes_earlier_phases() {
    let shop = Shop::empty();
    shop.job("J-2", REPAIR_AWAITING_WORK);

    let run = shop
        .pitstop()
        .args(&["progress", "--job", "J-2", "--role", "admin", "--format", "json"])
        .passes();

    assert_eq!(
        classes(&run),
        vec![
            (0, "completed".to_string()),
            (1, "completed".to_string()),
            (2, "completed".to_string()),
            (3, "completed".to_string()),
            (4, "completed".to_string()),
            (5, "active".to_string()),
            (6, "pending".to_string()),
        ]
    );
    let json = run.json();
    assert_eq!(json["current"], 5);
    assert_eq!(json["initial"], 0);
    assert_eq!(json["finished"], false);
}

#[test]
fn inspection_without_extras_skips_estimate_and_approval() {
    let shop = Shop::empty();
    shop.job("J-3", INSPECTION_NO_EXTRAS);

    let run = shop
        .pitstop()
        .args(&["progress", "--job", "J-3", "--role", "front-desk", "--format", "json"])
        .passes();

    let phases: Vec<u64> = classes(&run).into_iter().map(|(p, _)| p).collect();
    assert_eq!(phases, vec![0, 1, 2, 5, 6]);

    let json = run.json();
    assert_eq!(json["category"], "inspection");
    assert_eq!(json["steps"][2]["classification"], "completed");
    assert_eq!(json["steps"][2]["label"], "受入点検");
    assert_eq!(json["steps"][3]["label"], "完成検査");
    assert_eq!(json["steps"][3]["short_label"], "完成");
    assert_eq!(json["current"], 5);
}

#[test]
fn unrecognized_status_leaves_everything_pending() {
    let shop = Shop::empty();
    shop.job(
        "J-5",
        r#"{"id": "J-5", "status": "保留中", "service_category": "修理"}"#,
    );

    let run = shop
        .pitstop()
        .args(&["progress", "--job", "J-5", "--role", "front-desk", "--format", "json"])
        .passes();

    assert!(classes(&run).iter().all(|(_, c)| c == "pending"));
    assert_eq!(run.json()["current"], 0);
}

#[test]
fn released_job_is_finished() {
    let shop = Shop::empty();
    shop.job(
        "J-6",
        r#"{"id": "J-6", "status": "released", "service_category": "修理"}"#,
    );

    shop.pitstop()
        .args(&["progress", "--job", "J-6", "--role", "customer"])
        .passes()
        .stdout_has("  Finished\n")
        .stdout_has("  Current: 6 (report)");
}

#[test]
fn job_can_be_read_from_a_file_path() {
    let shop = Shop::empty();
    shop.file("incoming/job.json", OIL_CHANGE_INTAKE);
    let path = shop.path().join("incoming/job.json");

    pitstop()
        .args(&[
            "progress",
            "--job",
            path.to_str().unwrap(),
            "--role",
            "mechanic",
        ])
        .passes()
        .stdout_has("> 2 pending    故障診断")
        .stdout_has("  5 pending    作業実施")
        .stdout_lacks("入庫受付");
}

#[test]
fn excluded_phases_are_hidden() {
    let shop = Shop::empty();
    shop.job("J-2", REPAIR_AWAITING_WORK);

    let run = shop
        .pitstop()
        .args(&[
            "progress", "--job", "J-2", "--role", "customer", "--exclude", "0", "--exclude",
            "approval", "--format", "json",
        ])
        .passes();

    assert_eq!(classes(&run), vec![(6, "pending".to_string())]);
    assert_eq!(run.json()["initial"], 6);
}
