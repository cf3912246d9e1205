//! Shop profile specs
//!
//! Verify category aliases, route overrides and widgets from
//! .pitstop/profile.toml.

use crate::prelude::*;

const PROFILE: &str = r#"
[categories]
inspection = ["法定点検"]

[routes]
6 = "/portal/${PITSTOP_PORTAL:-shop}/report/{job_id}"

[widget.summary]
exclude = [0, 4]
"#;

#[test]
fn extra_inspection_alias_applies_skip_rules() {
    let shop = Shop::empty();
    shop.profile(PROFILE).job(
        "J-8",
        r#"{"id": "J-8", "status": "入庫済み", "service_category": "法定点検"}"#,
    );

    shop.pitstop()
        .args(&["visible", "--role", "front-desk", "--job", "J-8"])
        .passes()
        .stdout_has("受入点検")
        .stdout_lacks("見積作成");
}

#[test]
fn route_override_expands_environment_defaults() {
    let shop = Shop::empty();
    shop.profile(PROFILE);

    shop.pitstop()
        .args(&["route", "--phase", "6", "--job-id", "J-9"])
        .passes()
        .stdout_eq("/portal/shop/report/J-9\n");

    shop.pitstop()
        .env("PITSTOP_PORTAL", "north")
        .args(&["route", "--phase", "6", "--job-id", "J-9"])
        .passes()
        .stdout_eq("/portal/north/report/J-9\n");

    shop.pitstop()
        .args(&["route", "--phase", "1", "--job-id", "J-9"])
        .passes()
        .stdout_eq("/admin/intake/J-9\n");
}

#[test]
fn widget_hides_its_phases() {
    let shop = Shop::empty();
    shop.profile(PROFILE);

    shop.pitstop()
        .args(&["visible", "--role", "customer", "--widget", "summary"])
        .passes()
        .stdout_eq("6 report       作業報告・出庫\n");
}

#[test]
fn unknown_widget_lists_defined_ones() {
    let shop = Shop::empty();
    shop.profile(PROFILE);

    shop.pitstop()
        .args(&["visible", "--role", "customer", "--widget", "board"])
        .fails()
        .stderr_has("Unknown widget 'board'")
        .stderr_has("Defined widgets: summary");
}

#[test]
fn explicit_profile_path_is_used() {
    let shop = Shop::empty();
    shop.file("profiles/north.toml", "[routes]\n1 = \"/desk/{job_id}\"\n");
    let path = shop.path().join("profiles/north.toml");

    shop.pitstop()
        .args(&[
            "--profile",
            path.to_str().unwrap(),
            "route",
            "--phase",
            "1",
            "--job-id",
            "J-9",
        ])
        .passes()
        .stdout_eq("/desk/J-9\n");
}

#[test]
fn out_of_range_phase_is_rejected() {
    let shop = Shop::empty();
    shop.profile("[widget.summary]\nexclude = [9]\n");

    shop.pitstop()
        .args(&["visible", "--role", "customer"])
        .fails()
        .stderr_has("Failed to load profile")
        .stderr_has("invalid phase in widget.summary.exclude: 9");
}

#[test]
fn route_template_with_unknown_placeholder_is_rejected() {
    let shop = Shop::empty();
    shop.profile("[routes]\n2 = \"/diag/{vehicle}\"\n");

    shop.pitstop()
        .args(&["route", "--phase", "2", "--job-id", "J-9"])
        .fails()
        .stderr_has("unknown placeholder {vehicle}");
}
