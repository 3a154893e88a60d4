use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn asset(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn run_cli(workdir: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_engineering-insights"));
    command.current_dir(workdir).args(args).env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("INSIGHTS_") {
            command.env_remove(key);
        }
    }
    command.output().expect("binary runs")
}

#[test]
fn missing_data_file_exits_with_status_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("report.html");
    let template = asset("templates/template.html");

    let output = run_cli(
        dir.path(),
        &[
            "report",
            "--data",
            "absent.csv",
            "--template",
            template.to_str().expect("utf8 path"),
            "--output",
            output_path.to_str().expect("utf8 path"),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("application error: input error: failed to read review data from absent.csv"),
        "unexpected stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
    assert!(!output_path.exists());
}

#[test]
fn report_prints_the_written_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("report.html");
    let data = asset("data/data.csv");
    let template = asset("templates/template.html");

    let output = run_cli(
        dir.path(),
        &[
            "report",
            "--data",
            data.to_str().expect("utf8 path"),
            "--template",
            template.to_str().expect("utf8 path"),
            "--output",
            output_path.to_str().expect("utf8 path"),
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), output_path.display().to_string());
    let html = std::fs::read_to_string(&output_path).expect("report written");
    assert_eq!(html.matches("Plotly.newPlot(").count(), 5);
}

#[test]
fn scores_prints_six_cohorts_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = asset("data/data.csv");

    let output = run_cli(
        dir.path(),
        &["scores", "--data", data.to_str().expect("utf8 path")],
    );

    assert!(output.status.success());
    let cohorts: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    let cohorts = cohorts.as_array().expect("json array");
    assert_eq!(cohorts.len(), 6);
    assert_eq!(cohorts[0]["level"], "entry");
    assert_eq!(cohorts[0]["track"], "data");
}
