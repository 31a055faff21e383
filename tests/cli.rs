use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("pubstyle").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pubstyle"));
}

#[test]
fn profile_prints_json() {
    let mut cmd = Command::cargo_bin("pubstyle").unwrap();
    cmd.args([
        "profile",
        "--font-family",
        "serif",
        "--columns",
        "2",
        "--width-cm",
        "15.99",
        "--aspect",
        "1.1:1",
    ]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["typography"]["family"], "serif");
    assert_eq!(v["typography"]["fonts"][0], "DejaVu Serif");
    let w = v["figure"]["size"]["width_in"].as_f64().unwrap();
    assert!((w - 3.1476).abs() < 1e-4);
}

#[test]
fn profile_rejects_bad_family_and_columns() {
    Command::cargo_bin("pubstyle")
        .unwrap()
        .args(["profile", "--font-family", "italic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("family must be serif or sans-serif"));

    Command::cargo_bin("pubstyle")
        .unwrap()
        .args(["profile", "--columns", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported column count"));
}

#[test]
fn profile_reads_config_file() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("req.json");
    fs::write(&cfg, r#"{"font_size": 9, "dpi": 300}"#).unwrap();
    let out = Command::cargo_bin("pubstyle")
        .unwrap()
        .args(["profile", "--config"])
        .arg(&cfg)
        .args(["--dpi", "150"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["typography"]["base_size_pt"], 9.0);
    assert_eq!(v["figure"]["dpi"], 150);
}

#[test]
fn palette_lists_hue() {
    Command::cargo_bin("pubstyle")
        .unwrap()
        .args(["palette", "--hue", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("green80"))
        .stdout(predicate::str::contains("#009682"));
}

#[test]
fn demo_exports_svg() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("pubstyle")
        .unwrap()
        .args(["demo", "--name", "fig1", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();
    let svg = fs::read_to_string(dir.path().join("fig1.svg")).unwrap();
    assert!(svg.contains("Scatter"));
}
