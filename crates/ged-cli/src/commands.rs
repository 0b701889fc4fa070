use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use ged_ingest::{read_gedcom, trace_file};
use ged_validate::{ValidationOptions, validate};

use crate::cli::{CheckArgs, LinesArgs, OutputFormatArg};
use crate::summary::{Styling, render_check, render_json, rules_table};
use crate::types::CheckOutcome;

/// Exit status when `--deny-findings` is set and the report is not empty.
pub const EXIT_FINDINGS: i32 = 2;

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let parsed = read_gedcom(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let report = validate(&parsed.genealogy, &validation_options(args));
    Ok(CheckOutcome {
        file: args.file.clone(),
        parsed,
        report,
    })
}

/// Map CLI flags onto validation options.
pub fn validation_options(args: &CheckArgs) -> ValidationOptions {
    let mut options = ValidationOptions::new();
    if let Some(today) = args.as_of {
        options = options.with_today(today);
    }
    if !args.rules.is_empty() {
        options = options.with_rules(args.rules.iter().copied());
    }
    options
}

/// Write the report to `--output` or stdout.
pub fn write_check(outcome: &CheckOutcome, args: &CheckArgs, styling: Styling) -> Result<()> {
    let styling = if args.output.is_some() {
        Styling::Never
    } else {
        styling
    };
    let text = match args.format {
        OutputFormatArg::Table => render_check(outcome, !args.no_listing, styling),
        OutputFormatArg::Json => render_json(outcome).context("failed to serialize report")?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Exit status for a completed check.
pub fn check_exit_code(outcome: &CheckOutcome, deny_findings: bool) -> i32 {
    if deny_findings && outcome.has_findings() {
        debug!(
            findings = outcome.report.findings.len(),
            "findings present with --deny-findings"
        );
        EXIT_FINDINGS
    } else {
        0
    }
}

pub fn run_lines(args: &LinesArgs) -> Result<()> {
    let traces = trace_file(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let mut stdout = io::stdout().lock();
    for trace in &traces {
        writeln!(stdout, "{trace}")?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn run_rules(styling: Styling) {
    println!("{}", rules_table(styling));
}
