use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

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
fn test_missing_file_reports_not_found() {
    let dir = tempdir().unwrap();

    inspect_in(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout("✗ 文件未找到\n");
}

#[test]
fn test_missing_positional_file_reports_not_found() {
    let dir = workspace_with("name: Present\n");

    inspect_in(dir.path())
        .arg("absent.yml")
        .assert()
        .code(1)
        .stdout("✗ 文件未找到\n");
}

#[test]
fn test_unterminated_quote_reports_syntax_error() {
    let dir = workspace_with("name: 'Deploy\njobs: {}\n");

    let output = inspect_in(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("✗ YAML 语法错误:"));
    let detail = lines.next().unwrap_or_default();
    assert!(!detail.trim().is_empty(), "missing decoder message: {stdout}");
    assert!(!stdout.contains("✓"));
}

#[test]
fn test_syntax_error_in_json_mode_uses_same_report() {
    let dir = workspace_with("jobs: [unclosed\n");

    inspect_in(dir.path())
        .args(["--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("✗ YAML 语法错误:\n"));
}

#[test]
fn test_root_sequence_reports_generic_error_after_marker() {
    let dir = workspace_with("- build\n- deploy\n");

    inspect_in(dir.path()).assert().code(1).stdout(
        "✓ YAML 语法检查通过\n\n工作流信息:\n✗ 错误: workflow root must be a mapping, found a sequence\n",
    );
}

#[test]
fn test_broken_job_keeps_earlier_lines() {
    let dir = workspace_with(
        "name: Partial\njobs:\n  build:\n    steps:\n      - name: Compile\n  deploy: 3\n",
    );

    inspect_in(dir.path()).assert().code(1).stdout(predicate::str::ends_with(
        "  - 作业数: 2\n    - 'build': 1 steps\n      [1] Compile\n✗ 错误: job 'deploy' must be a mapping, found a number\n",
    ));
}

#[test]
fn test_invalid_utf8_reports_generic_error() {
    let dir = tempdir().unwrap();
    let workflows = dir.path().join(".github").join("workflows");
    fs::create_dir_all(&workflows).unwrap();
    fs::write(workflows.join("deploy.yml"), [b'n', b':', b' ', 0xff, b'\n']).unwrap();

    inspect_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("✗ 错误: failed to read"));
}

#[test]
fn test_invalid_logging_config_is_generic_error() {
    let dir = workspace_with("name: Fine\n");
    let config_dir = dir.path().join(".workflow-inspect");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("logging.toml"),
        "[logging]\ndefault_level = \"workflow_inspect=loudest\"\n",
    )
    .unwrap();

    inspect_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("✗ 错误: "))
        .stdout(predicate::str::contains("default_level"));
}
