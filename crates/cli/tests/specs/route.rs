//! Route specs

use crate::prelude::*;

#[test]
fn route_for_each_phase() {
    let shop = Shop::empty();
    let cases = [
        ("0", "/customer/pre-checkin/J-9"),
        ("1", "/admin/intake/J-9"),
        ("2", "/mechanic/diagnosis/J-9"),
        ("3", "/admin/estimate/J-9"),
        ("4", "/customer/approval/J-9"),
        ("5", "/mechanic/work/J-9"),
        ("6", "/customer/report/J-9"),
    ];
    for (phase, route) in cases {
        shop.pitstop()
            .args(&["route", "--phase", phase, "--job-id", "J-9"])
            .passes()
            .stdout_eq(&format!("{}\n", route));
    }
}

#[test]
fn mechanic_is_not_permitted_into_approval() {
    let shop = Shop::empty();
    shop.pitstop()
        .args(&["route", "--phase", "4", "--job-id", "J-9", "--role", "mechanic"])
        .passes()
        .stdout_eq("notice: このフェーズへのアクセス権限がありません\n");
}

#[test]
fn permitted_role_gets_the_route() {
    let shop = Shop::empty();
    let run = shop
        .pitstop()
        .args(&[
            "route", "--phase", "work", "--job-id", "J-9", "--role", "mechanic", "--format",
            "json",
        ])
        .passes();
    let json = run.json();
    assert_eq!(json["outcome"], "allowed");
    assert_eq!(json["phase"], 5);
    assert_eq!(json["route"], "/mechanic/work/J-9");
}

#[test]
fn missing_job_id_fails() {
    let shop = Shop::empty();
    shop.pitstop()
        .args(&["route", "--phase", "5"])
        .fails()
        .stderr_has("error: Cannot build a route for phase 5");

    shop.pitstop()
        .args(&["route", "--phase", "5", "--job-id", "  "])
        .fails()
        .stderr_has("The job has no id");
}

#[test]
fn refused_request_needs_no_job_id() {
    let shop = Shop::empty();
    shop.pitstop()
        .args(&["route", "--phase", "0", "--role", "mechanic"])
        .passes()
        .stdout_has("このフェーズへのアクセス権限がありません");
}
