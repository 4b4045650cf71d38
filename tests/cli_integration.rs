use assert_cmd::Command;
use std::fs;

fn annolint() -> Command {
    Command::cargo_bin("annolint").unwrap()
}

#[test]
fn clean_project_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ok.py"), "x: int = 1\n").unwrap();

    let output = annolint().arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("no annotation issues found"));
}

#[test]
fn deep_annotation_fails_with_tae001() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("deep.py"),
        "x: List[Dict[str, List[int]]] = []\n",
    )
    .unwrap();

    let output = annolint().arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("TAE001"));
    assert!(stdout.contains("4 > 3"));
    assert!(stdout.contains("deep.py:1:3:"));
}

#[test]
fn raised_threshold_silences_the_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("deep.py"),
        "x: List[Dict[str, List[int]]] = []\n",
    )
    .unwrap();

    annolint()
        .arg(dir.path())
        .args(["--max-annotations-complexity", "4"])
        .assert()
        .success();
}

#[test]
fn old_style_flag_suppresses_tae003() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("legacy.py"),
        "def f(a, b):\n    # type: (int, str) -> bool\n    return True\n",
    )
    .unwrap();

    let output = annolint().arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().contains("TAE003"));

    annolint()
        .arg(dir.path())
        .arg("--enable-old-style-annotations")
        .assert()
        .success();
}

#[test]
fn json_output_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("deep.py"),
        "x: List[Dict[str, List[int]]] = []\n",
    )
    .unwrap();

    let output = annolint()
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let violations = &report["files"][0]["violations"];
    assert_eq!(violations[0]["rule"], "complexity");
    assert_eq!(violations[0]["line"], 1);
}

#[test]
fn config_file_sets_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("deep.py"),
        "x: List[Dict[str, List[int]]] = []\n",
    )
    .unwrap();
    let config = dir.path().join("annolint.toml");
    fs::write(&config, "max_annotations_complexity = 10\n").unwrap();

    annolint()
        .arg(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn invalid_config_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ok.py"), "x: int = 1\n").unwrap();
    let config = dir.path().join("annolint.toml");
    fs::write(&config, "max_annotations_len = \"seven\"\n").unwrap();

    let output = annolint()
        .arg(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("invalid configuration"));
}

#[test]
fn unparsable_file_does_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.py"), "def f(:\n").unwrap();
    fs::write(
        dir.path().join("deep.py"),
        "x: List[Dict[str, List[int]]] = []\n",
    )
    .unwrap();

    let output = annolint().arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().contains("TAE001"));
}
