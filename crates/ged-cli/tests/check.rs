//! Tests for the `check`, `lines` and `rules` commands.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use ged_cli::cli::{CheckArgs, Cli, Command, OutputFormatArg};
use ged_cli::commands::{EXIT_FINDINGS, check_exit_code, run_check, validation_options, write_check};
use ged_cli::summary::{Styling, render_check, render_json, rules_table};
use ged_validate::RuleId;
use tempfile::TempDir;

const SAMPLE: &str = include_str!("../../ged-ingest/tests/data/sample.ged");

fn write_sample(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("family.ged");
    fs::write(&path, contents).unwrap();
    path
}

fn check_args(argv: &[&str]) -> CheckArgs {
    let cli = Cli::try_parse_from(argv).expect("valid arguments");
    match cli.command {
        Command::Check(args) => args,
        _ => panic!("expected check subcommand"),
    }
}

fn args_for(path: &Path, extra: &[&str]) -> CheckArgs {
    let path = path.to_str().unwrap();
    let mut argv = vec!["gedcheck", "check", path, "--as-of", "2026-10-18"];
    argv.extend_from_slice(extra);
    check_args(&argv)
}

#[test]
fn test_parses_check_flags() {
    let args = check_args(&[
        "gedcheck",
        "check",
        "tree.ged",
        "--as-of",
        "2000-02-29",
        "--rule",
        "us04",
        "--rule",
        "US26",
        "--format",
        "json",
        "--deny-findings",
    ]);
    assert_eq!(args.file, PathBuf::from("tree.ged"));
    assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2000, 2, 29));
    assert_eq!(args.rules, vec![RuleId::Us04, RuleId::Us26]);
    assert_eq!(args.format, OutputFormatArg::Json);
    assert!(args.deny_findings);

    let options = validation_options(&args);
    assert_eq!(options.rules, Some(vec![RuleId::Us04, RuleId::Us26]));
    assert_eq!(options.today, NaiveDate::from_ymd_opt(2000, 2, 29));
}

#[test]
fn test_rejects_unknown_rule() {
    let result = Cli::try_parse_from(["gedcheck", "check", "tree.ged", "--rule", "US07"]);
    assert!(result.is_err());
}

#[test]
fn test_no_rule_flag_runs_full_catalog() {
    let args = check_args(&["gedcheck", "check", "tree.ged"]);
    assert_eq!(validation_options(&args).rules, None);
}

#[test]
fn test_clean_sample_renders_tables() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);
    let outcome = run_check(&args_for(&path, &[])).unwrap();

    assert!(!outcome.has_findings());
    assert_eq!(check_exit_code(&outcome, true), 0);

    let text = render_check(&outcome, true, Styling::Never);
    insta::assert_snapshot!(
        text.lines().nth(1).unwrap(),
        @"Lines: 41 (0 malformed, 3 unrecognized tags)"
    );
    assert!(text.contains("Individuals"));
    assert!(text.contains("John /Doe/"));
    assert!(text.contains("@I3@, @I4@"));
    assert!(text.contains("TOTAL"));
    assert!(!text.contains("\nFindings\n"));
    assert!(text.ends_with("0 error(s), 0 anomaly(ies)\n"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_findings_drive_exit_code() {
    let dir = TempDir::new().unwrap();
    let edited = SAMPLE.replace("2 DATE 1 JAN 2005", "2 DATE 1 JAN 2020");
    let path = write_sample(&dir, &edited);
    let outcome = run_check(&args_for(&path, &["--rule", "US04"])).unwrap();

    assert_eq!(outcome.report.rules, vec![RuleId::Us04]);
    assert_eq!(outcome.report.findings.len(), 2);
    assert_eq!(check_exit_code(&outcome, false), 0);
    assert_eq!(check_exit_code(&outcome, true), EXIT_FINDINGS);

    let text = render_check(&outcome, false, Styling::Never);
    assert!(text.contains("\nFindings\n"));
    assert!(text.contains("marriage date 1 JAN 2020 in family @F1@"));
    assert!(!text.contains("Individuals"));
    assert!(text.ends_with("2 error(s), 0 anomaly(ies)\n"));
}

#[test]
fn test_json_report_to_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);
    let report_path = dir.path().join("report.json");
    let args = args_for(
        &path,
        &["--format", "json", "--output", report_path.to_str().unwrap()],
    );
    let outcome = run_check(&args).unwrap();
    write_check(&outcome, &args, Styling::Always).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["individuals"].as_array().unwrap().len(), 4);
    assert_eq!(value["families"][0]["husband_name"], "John /Doe/");
    assert_eq!(value["families"][0]["married"], "1 JAN 2005");
    assert_eq!(value["rules"].as_array().unwrap().len(), RuleId::ALL.len());
    assert_eq!(value["errors"], 0);
    assert_eq!(value["findings"], serde_json::json!([]));
    assert_eq!(value["stats"]["malformed"], 0);

    assert_eq!(render_json(&outcome).unwrap(), fs::read_to_string(&report_path).unwrap());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let args = args_for(&dir.path().join("absent.ged"), &[]);
    let error = run_check(&args).unwrap_err();
    assert!(format!("{error:#}").contains("failed to read"));
}

#[test]
fn test_rules_table_lists_catalog() {
    let text = rules_table(Styling::Never).to_string();
    assert!(text.contains("US01"));
    assert!(text.contains("Corresponding entries"));
    assert!(!text.contains("US07"));
    assert!(!text.contains("US11"));
}

#[test]
fn test_parses_lines_and_rules_commands() {
    let cli = Cli::try_parse_from(["gedcheck", "-v", "lines", "tree.ged"]).unwrap();
    assert!(matches!(cli.command, Command::Lines(ref args) if args.file == Path::new("tree.ged")));
    assert!(cli.verbosity.is_present());

    let cli = Cli::try_parse_from(["gedcheck", "rules", "--log-format", "json"]).unwrap();
    assert!(matches!(cli.command, Command::Rules));
}
