//! Integration tests for the ssd-explorer binary.

mod common;

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from any config file on the host
fn explorer(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ssd-explorer").unwrap();
    cmd.current_dir(dir)
        .env_remove("SSD_EXPLORER_CONFIG")
        .env_remove("CLICOLOR_FORCE")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ssds.json"), common::FIXTURE_JSON).unwrap();
    dir
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("ssd-explorer exited with {}", output.status);
    }
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

fn models(json: &Value) -> Vec<String> {
    json["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["model"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn list_json_applies_filters_and_sort() {
    let dir = workspace();
    let json = stdout_json(explorer(dir.path()).args([
        "list",
        "--catalog",
        "ssds.json",
        "--format",
        "json",
        "--category",
        "Budget",
        "--sort",
        "throughput",
        "--sort",
        "throughput",
    ]));

    assert_eq!(json["total"], 6);
    assert_eq!(json["matched"], 3);
    assert_eq!(json["sort"]["field"], "throughput");
    assert_eq!(json["sort"]["direction"], "desc");
    assert_eq!(json["filters"]["category"][0], "Budget");
    assert_eq!(models(&json), vec!["Premium", "MX500", "870 QVO"]);
}

#[test]
fn list_terminal_reports_empty_result() {
    let dir = workspace();
    let output = explorer(dir.path())
        .args(["list", "--catalog", "ssds.json", "--search", "optane"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Showing 0 of 6 SSDs"));
    assert!(stdout.contains("No SSDs match your filters"));
}

#[test]
fn repeated_facet_flag_cancels_itself() {
    let dir = workspace();
    let json = stdout_json(explorer(dir.path()).args([
        "list",
        "--catalog",
        "ssds.json",
        "--format",
        "json",
        "--brand",
        "WD",
        "--brand",
        "WD",
    ]));
    assert_eq!(json["matched"], 6);
}

#[test]
fn show_falls_back_to_second_product_page() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ssds.json"),
        indoc::indoc! {r#"
            [{
              "brand": "WD",
              "model": "Blue SN580",
              "interface": "PCIe 4.0 x4",
              "capacities": "250GB / 500GB / 1TB / 2TB",
              "rw_speed": "4150/4150",
              "product_page": "",
              "product_page_2": "https://example.com/sn580"
            }]
        "#},
    )
    .unwrap();

    let output = explorer(dir.path())
        .args(["show", "sn580", "--catalog", "ssds.json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WD Blue SN580"));
    assert!(stdout.contains("Read: 4150 MB/s, Write: 4150 MB/s"));
    assert!(stdout.contains("Product Page: https://example.com/sn580"));
    assert!(!stdout.contains("Buy Now:"));
}

#[test]
fn show_unknown_record_fails() {
    let dir = workspace();
    explorer(dir.path())
        .args(["show", "#42", "--catalog", "ssds.json"])
        .assert()
        .failure();
}

#[test]
fn vocab_lists_sorted_distinct_values() {
    let dir = workspace();
    let json = stdout_json(explorer(dir.path()).args([
        "vocab",
        "category",
        "--catalog",
        "ssds.json",
        "--format",
        "json",
    ]));
    assert_eq!(
        json["category"],
        serde_json::json!(["Budget", "High-end", "Mid-range"])
    );
}

#[test]
fn vocab_rejects_unknown_facet() {
    let dir = workspace();
    explorer(dir.path())
        .args(["vocab", "price", "--catalog", "ssds.json"])
        .assert()
        .failure();
}

#[test]
fn discovered_config_sets_catalog_and_format() {
    let dir = workspace();
    let nested = dir.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        dir.path().join(".ssd-explorer.toml"),
        indoc::indoc! {r#"
            [catalog]
            path = "ssds.json"

            [query]
            sort = "model"
            direction = "desc"

            [output]
            format = "json"
        "#},
    )
    .unwrap();

    let json = stdout_json(explorer(&nested).args(["list", "--interface", "SATA"]));
    assert_eq!(json["total"], 6);
    assert_eq!(json["sort"]["field"], "model");
    assert_eq!(models(&json), vec!["MX500", "870 QVO"]);
}

#[test]
fn explicit_config_must_exist() {
    let dir = workspace();
    explorer(dir.path())
        .args(["list", "--config", "missing.toml"])
        .assert()
        .failure();
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    explorer(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".ssd-explorer.toml").exists());

    explorer(dir.path()).arg("init").assert().failure();
    explorer(dir.path()).args(["init", "--force"]).assert().success();
}
