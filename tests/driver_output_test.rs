use anyhow::Result;
use branch_cov_demo::domain::model::ReportLine;
use branch_cov_demo::{CoverageDriver, JsonSink, TextSink};
use std::process::Command;

const EXPECTED: &str = "\
foo(1, 2) = 3
bar(1) = 1
--- New Test Cases ---
foo(-1, -2) = 3
foo(0, 0) = 0
foo(1, -1) = 0
foo(-1, 1) = 0
bar(0) = 0
bar(2) = 2
bar(3) = -1
";

fn demo() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_branch-cov-demo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_driver_text_report_in_process() -> Result<()> {
    let mut sink = TextSink::new(Vec::new());
    let summary = CoverageDriver::default().run(&mut sink)?;

    assert_eq!(summary.lines_emitted, 10);
    assert_eq!(String::from_utf8(sink.into_inner())?, EXPECTED);
    Ok(())
}

#[test]
fn test_driver_json_report_in_process() -> Result<()> {
    let mut sink = JsonSink::new(Vec::new());
    CoverageDriver::default().run(&mut sink)?;

    let text = String::from_utf8(sink.into_inner())?;
    let lines: Vec<ReportLine> = text
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<_, _>>()?;

    let rendered: String = lines.iter().map(|line| format!("{line}\n")).collect();
    assert_eq!(rendered, EXPECTED);
    Ok(())
}

#[test]
fn test_binary_prints_fixed_sequence() -> Result<()> {
    let output = demo().output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    Ok(())
}

#[test]
fn test_binary_ignores_positional_arguments() -> Result<()> {
    let output = demo().args(["one", "two", "three"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    Ok(())
}

#[test]
fn test_binary_json_format() -> Result<()> {
    let output = demo().args(["--format", "json"]).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 10);
    assert_eq!(
        stdout.lines().next(),
        Some(r#"{"kind":"result","label":"foo(1, 2)","value":3}"#)
    );
    Ok(())
}

#[test]
fn test_binary_verbose_keeps_stdout_clean() -> Result<()> {
    let output = demo().arg("--verbose").output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    Ok(())
}

#[test]
fn test_binary_bails_out_above_argument_limit() -> Result<()> {
    let args: Vec<String> = (0..100).map(|i| format!("arg{i}")).collect();
    let output = demo().args(&args).output()?;

    assert_eq!(output.status.code(), Some(255));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_binary_runs_at_argument_limit() -> Result<()> {
    let args: Vec<String> = (0..99).map(|i| format!("arg{i}")).collect();
    let output = demo().args(&args).output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    Ok(())
}

#[test]
fn test_binary_counts_flags_toward_argument_limit() -> Result<()> {
    let mut args = vec!["-v".to_string()];
    args.extend((0..99).map(|i| format!("a{i}")));
    let output = demo().args(&args).output()?;

    assert_eq!(output.status.code(), Some(255));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_binary_ignores_unknown_leading_flags() -> Result<()> {
    for flag in ["--bogus", "-x"] {
        let output = demo().arg(flag).output()?;

        assert_eq!(output.status.code(), Some(0), "{flag}");
        assert_eq!(String::from_utf8(output.stdout)?, EXPECTED, "{flag}");
    }
    Ok(())
}

#[test]
fn test_binary_help_replaces_report() -> Result<()> {
    let output = demo().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("--format"));
    assert!(!stdout.contains("foo(1, 2) = 3"));
    Ok(())
}

#[test]
fn test_binary_format_without_value_is_usage_error() -> Result<()> {
    let output = demo().arg("--format").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_binary_json_logs_go_to_stderr() -> Result<()> {
    let output = demo().arg("--json-logs").output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    let stderr = String::from_utf8(output.stderr)?;
    let first = stderr.lines().next().unwrap_or_default();
    let event: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(event["level"], "INFO");
    Ok(())
}
