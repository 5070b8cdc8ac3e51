use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const DEPLOY_WORKFLOW: &str = r#"name: Deploy to Pages

on:
  push:
    branches: [main]
  workflow_dispatch:

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
      - uses: actions/setup-node@v4
        with:
          node-version: 20
      - name: Build site
        run: npm run build
  deploy:
    needs: build
    runs-on: ubuntu-latest
    steps:
      - name: Deploy
        uses: actions/deploy-pages@v4
"#;

fn workspace_with(contents: &str) -> TempDir {
    let dir = tempdir().unwrap();
    let workflows = dir.path().join(".github").join("workflows");
    fs::create_dir_all(&workflows).unwrap();
    fs::write(workflows.join("deploy.yml"), contents).unwrap();
    dir
}

fn inspect_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("workflow-inspect").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("WORKFLOW_INSPECT_CONSOLE_OUTPUT")
        .env_remove("WORKFLOW_INSPECT_LOG_DIR");
    cmd
}

#[test]
fn test_default_path_prints_full_report() {
    let dir = workspace_with(DEPLOY_WORKFLOW);

    let expected = "\
✓ YAML 语法检查通过

工作流信息:
  - 名称: Deploy to Pages
  - 触发事件: ['push', 'workflow_dispatch']
  - 作业数: 2
    - 'build': 3 steps
      [1] Checkout
      [2] Unnamed
      [3] Build site
    - 'deploy': 1 steps
      [1] Deploy
";

    inspect_in(dir.path())
        .assert()
        .success()
        .code(0)
        .stdout(expected);
}

#[test]
fn test_flow_style_example() {
    let dir = workspace_with(
        "{name: Deploy, on: {push: {}}, jobs: {build: {steps: [{name: Checkout}, {}]}}}\n",
    );

    inspect_in(dir.path()).assert().success().stdout(
        predicate::str::contains("  - 名称: Deploy\n")
            .and(predicate::str::contains("  - 触发事件: ['push']\n"))
            .and(predicate::str::contains("  - 作业数: 1\n"))
            .and(predicate::str::contains(
                "    - 'build': 2 steps\n      [1] Checkout\n      [2] Unnamed\n",
            )),
    );
}

#[test]
fn test_missing_name_and_jobs() {
    let dir = workspace_with("on:\n  pull_request: {}\n");

    inspect_in(dir.path()).assert().success().stdout(predicate::str::ends_with(
        "  - 名称: N/A\n  - 触发事件: ['pull_request']\n  - 作业数: 0\n",
    ));
}

#[test]
fn test_positional_file_overrides_default_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ci.yaml"), "name: CI\njobs: {}\n").unwrap();

    inspect_in(dir.path())
        .arg("ci.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("  - 名称: CI\n"));
}

#[test]
fn test_json_format() {
    let dir = workspace_with(DEPLOY_WORKFLOW);

    let output = inspect_in(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["name"], "Deploy to Pages");
    assert_eq!(
        summary["triggers"],
        serde_json::json!(["push", "workflow_dispatch"])
    );
    assert_eq!(summary["job_count"], 2);
    assert_eq!(summary["jobs"][0]["name"], "build");
    assert_eq!(summary["jobs"][0]["step_count"], 3);
    assert_eq!(summary["jobs"][0]["steps"][1]["name"], "Unnamed");
    assert_eq!(summary["jobs"][1]["steps"][0]["index"], 1);
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let dir = workspace_with("name: Quiet\n");

    inspect_in(dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("✓ YAML 语法检查通过\n"))
        .stderr(predicate::str::contains("inspecting workflow"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("workflow-inspect").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("workflow-inspect"));
}

#[test]
fn test_help_mentions_default_path() {
    let mut cmd = Command::cargo_bin("workflow-inspect").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(".github/workflows/deploy.yml"));
}
