use std::path::Path;
use std::process::{Command, Output};

const EXE: &str = env!("CARGO_BIN_EXE_hourgrid");

fn run(args: &[&str]) -> Output {
    Command::new(EXE)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run hourgrid")
}

fn write_series(dir: &Path, name: &str, values: &[f64]) -> String {
    let path = dir.join(name);
    let body: Vec<String> = values.iter().map(|v| format!("{{\"value\": {v}}}")).collect();
    std::fs::write(&path, format!("[{}]", body.join(", "))).expect("write series");
    path.to_string_lossy().to_string()
}

#[test]
fn grid_command_reports_columns() {
    let output = run(&["grid", "--width", "300", "--items", "30"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[hourgrid][INFO] columns=21 rows=2 cell=10"), "{stdout}");
}

#[test]
fn grid_command_rejects_zero_width() {
    let output = run(&["grid", "--width", "0", "--items", "30"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[hourgrid][ERROR]"), "{stderr}");
}

#[test]
fn bins_command_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let series = write_series(dir.path(), "hours.json", &[2.0, 4.0, 6.0, 8.0]);
    let output = run(&["bins", &series, "--bins", "2", "--json"]);
    assert!(output.status.success());

    let bins: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(bins[0]["average_value"], 3.0);
    assert_eq!(bins[0]["source_range"]["start"], 0);
    assert_eq!(bins[0]["source_range"]["end"], 2);
    assert_eq!(bins[1]["average_value"], 7.0);
}

#[test]
fn matrix_command_draws_rows() {
    let dir = tempfile::tempdir().unwrap();
    let series = write_series(dir.path(), "hours.json", &[10.0, 5.0, 0.0]);
    let settings = dir.path().join("widgets.toml");
    std::fs::write(&settings, "[dot_matrix]\nrows = 2\npalette_size = 2\n").unwrap();

    let output = run(&[
        "matrix",
        &series,
        "--width",
        "200",
        "--settings",
        &settings.to_string_lossy(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(lines, vec!["1..", "11."]);
}

#[test]
fn matrix_command_uses_fallback_cell_for_zero_width() {
    let dir = tempfile::tempdir().unwrap();
    let series = write_series(dir.path(), "hours.json", &[10.0, 5.0, 0.0]);
    let settings = dir.path().join("widgets.toml");
    std::fs::write(&settings, "[dot_matrix]\nrows = 2\npalette_size = 2\n").unwrap();

    let output = run(&[
        "matrix",
        &series,
        "--width",
        "0",
        "--settings",
        &settings.to_string_lossy(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("[hourgrid][INFO] columns=1 rows=2 cell=12 gap=4 width=12")
    );
    assert_eq!(lines.collect::<Vec<_>>(), vec![".", "1"]);
}

#[test]
fn curve_command_prints_svg_path() {
    let dir = tempfile::tempdir().unwrap();
    let series = write_series(dir.path(), "hours.json", &[7.0]);
    let output = run(&["curve", &series, "--width", "200"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|line| line == "M 24 80"), "{stdout}");
}

#[test]
fn empty_series_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let series = write_series(dir.path(), "empty.json", &[]);
    let output = run(&["matrix", &series, "--width", "300"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No samples to render"));
}

#[test]
fn settings_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("widgets.toml");
    let path_arg = path.to_string_lossy().to_string();

    let output = run(&["settings", "init", &path_arg]);
    assert!(output.status.success());
    assert!(std::fs::read_to_string(&path).unwrap().contains("[dot_matrix]"));

    let output = run(&["settings", "init", &path_arg]);
    assert!(!output.status.success());

    let output = run(&["settings", "show", "--settings", &path_arg, "--json"]);
    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["line_chart"]["domain"]["min"], 4.0);
}

#[test]
fn missing_series_file_fails() {
    let output = run(&["curve", "/nonexistent/hours.json", "--width", "100"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load series"), "{stderr}");
}
