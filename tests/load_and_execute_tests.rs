use std::fs;
use std::path::PathBuf;

use gcode_interpreter::config::{Config, ConfigFile};
use gcode_interpreter::machine::{OutputFormat, RecordingController};
use gcode_interpreter::runner::run_with;
use gcode_interpreter::{RunState, load_and_execute};
use tempfile::TempDir;

fn write_program(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).expect("write program");
    path
}

fn config_for(file: PathBuf, format: OutputFormat, parse_only: bool) -> Config {
    Config {
        file,
        format,
        precision: 1,
        parse_only,
        log_level: "off".to_string(),
    }
}

#[test]
fn test_load_and_execute() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "part.nc", "%\nO5\nG00 X1 Y2\nM30\n%\n");

    let mut controller = RecordingController::new();
    let state = load_and_execute(&path, &mut controller).expect("run");

    assert_eq!(state, RunState::Halted);
    assert_eq!(controller.moves().len(), 1);
}

#[test]
fn test_parse_failure_executes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "bad.nc", "%\nO5\nG28\nG01 X1 @@\n%\n");

    let mut controller = RecordingController::new();
    let err = load_and_execute(&path, &mut controller).unwrap_err();

    assert!(format!("{:#}", err).contains("line 4"));
    assert!(controller.commands().is_empty());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_and_execute(&dir.path().join("nope.nc"), RecordingController::new())
        .unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn test_run_with_text_output() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "part.nc", "%\nO5\nF250\nG01 X1 Y2.5\nM30\n%\n");

    let mut out = Vec::new();
    run_with(&config_for(path, OutputFormat::Text, false), &mut out).expect("run");

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "FEED RATE 250.0\nMOVE X1.0 Y2.5 Z0.0\n"
    );
}

#[test]
fn test_run_with_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "part.nc", "%\nO5\nT2 M06\nM30\n%\n");

    let mut out = Vec::new();
    run_with(&config_for(path, OutputFormat::Json, false), &mut out).expect("run");

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"command\":\"change_tool\",\"tool\":\"2\"}\n"
    );
}

#[test]
fn test_run_with_parse_only() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "part.nc", "%\nO5\nN1 G00 X1. (go)\nM30\n%\n");

    let mut out = Vec::new();
    run_with(&config_for(path, OutputFormat::Text, true), &mut out).expect("run");

    assert_eq!(String::from_utf8(out).unwrap(), "%\nO5\nG00 X1\nM30\n%\n");
}

#[test]
fn test_config_file_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "format = \"json\"\nprecision = 5\n").unwrap();

    let file = ConfigFile::load(&path).expect("load");
    assert_eq!(file.format, Some(OutputFormat::Json));
    assert_eq!(file.precision, Some(5));
    assert_eq!(file.log_level, None);
}

#[test]
fn test_config_file_rejects_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "colour = \"red\"\n").unwrap();

    assert!(ConfigFile::load(&path).is_err());
    assert!(ConfigFile::load(&dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_explicit_config_path() {
    use clap::Parser;
    use gcode_interpreter::config::Args;

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "format = \"json\"\nlog_level = \"debug\"\n").unwrap();

    let args = Args::try_parse_from([
        "gcode-run",
        "part.nc",
        "--config",
        config_path.to_str().unwrap(),
        "--precision",
        "2",
    ])
    .unwrap();
    let config = Config::from_args(args).expect("config");

    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.precision, 2);
}
