//! End-to-end tests for the pkgorder binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SHARED: &str = r#"
{
  "packages": [
    { "name": "A", "dependencies": ["B", "C"] },
    { "name": "B", "dependencies": ["D"] },
    { "name": "C", "dependencies": ["D"] },
    { "name": "D", "dependencies": [] }
  ]
}
"#;

const CYCLIC: &str = r#"
{
  "packages": [
    { "name": "A", "dependencies": ["B"] },
    { "name": "B", "dependencies": ["A"] },
    { "name": "E", "dependencies": [] }
  ]
}
"#;

fn write_manifest(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    path
}

fn pkgorder(manifest: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pkgorder").unwrap();
    cmd.env_remove("PKGORDER_MANIFEST")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--manifest")
        .arg(manifest);
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--format").arg("json").output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_order_json() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    let json = json_output(pkgorder(&manifest).args(["order", "A"]));
    assert_eq!(json["package"], "A");
    assert_eq!(json["order"], serde_json::json!(["D", "B", "C", "A"]));
}

#[test]
fn test_order_text() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    pkgorder(&manifest)
        .args(["order", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. D"))
        .stdout(predicate::str::contains("2. B"));
}

#[test]
fn test_install_json() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    let json = json_output(pkgorder(&manifest).args(["install", "A", "--installed", "B"]));
    assert_eq!(json["to_install"], serde_json::json!(["C", "A"]));
}

#[test]
fn test_install_already_covered() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    pkgorder(&manifest)
        .args(["install", "D", "-i", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already installed"));
}

#[test]
fn test_order_all_json() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    let json = json_output(pkgorder(&manifest).arg("order-all"));
    assert!(json.get("package").is_none());
    assert_eq!(json["order"], serde_json::json!(["D", "B", "C", "A"]));
}

#[test]
fn test_max_json() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    let json = json_output(pkgorder(&manifest).arg("max"));
    assert_eq!(json["package"], "A");
    assert_eq!(json["dependencies"], 3);
}

#[test]
fn test_list_toml_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "packages.toml",
        r#"
[[packages]]
name = "app"
dependencies = ["log", "net"]

[[packages]]
name = "net"
dependencies = ["log"]
"#,
    );

    let json = json_output(pkgorder(&manifest).arg("list"));
    assert_eq!(json["packages"], serde_json::json!(["app", "log", "net"]));
}

#[test]
fn test_stats_json() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    let json = json_output(pkgorder(&manifest).arg("stats"));
    assert_eq!(json["packages"], 4);
    assert_eq!(json["edges"], 4);
    assert_eq!(json["leaves"], 1);
    assert_eq!(json["roots"], 1);
}

#[test]
fn test_tree_text() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    pkgorder(&manifest)
        .args(["tree", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└── D (already resolved)"));
}

#[test]
fn test_cycle_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", CYCLIC);

    pkgorder(&manifest)
        .args(["order", "A"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Circular dependency detected: A -> B -> A",
        ))
        .stderr(predicate::str::contains("HINT:"));
}

#[test]
fn test_unrelated_cycle_does_not_fail() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", CYCLIC);

    let json = json_output(pkgorder(&manifest).args(["order", "E"]));
    assert_eq!(json["order"], serde_json::json!(["E"]));
}

#[test]
fn test_unknown_package() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "packages.json", SHARED);

    pkgorder(&manifest)
        .args(["order", "Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package 'Z' not found"));
}

#[test]
fn test_missing_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("missing.json");

    pkgorder(&manifest)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load package manifest"));
}

#[test]
fn test_manifest_from_env() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "deps.json", SHARED);

    Command::cargo_bin("pkgorder")
        .unwrap()
        .env("PKGORDER_MANIFEST", &manifest)
        .args(["--format", "json", "max"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"A\""));
}

#[test]
fn test_manifest_warnings_are_logged() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "packages.json",
        r#"{"packages": [{"name": "A", "dependencies": ["B", "B"]}]}"#,
    );

    pkgorder(&manifest)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("more than once"));
}
