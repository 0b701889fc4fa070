use std::path::PathBuf;

use ged_ingest::{AssemblyStats, ParsedGedcom};
use ged_model::{FamilyRow, IndividualRow, family_rows, individual_rows};
use ged_validate::{Finding, RuleId, ValidationReport};
use serde::Serialize;

/// Everything `gedcheck check` produced for one file.
#[derive(Debug)]
pub struct CheckOutcome {
    pub file: PathBuf,
    pub parsed: ParsedGedcom,
    pub report: ValidationReport,
}

impl CheckOutcome {
    pub fn has_findings(&self) -> bool {
        self.report.has_findings()
    }

    pub fn json_report(&self) -> JsonReport<'_> {
        JsonReport {
            file: self.file.display().to_string(),
            stats: self.parsed.stats,
            individuals: individual_rows(&self.parsed.genealogy),
            families: family_rows(&self.parsed.genealogy),
            rules: &self.report.rules,
            errors: self.report.error_count(),
            anomalies: self.report.anomaly_count(),
            findings: &self.report.findings,
        }
    }
}

/// Shape of `--format json` output.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub file: String,
    pub stats: AssemblyStats,
    pub individuals: Vec<IndividualRow>,
    pub families: Vec<FamilyRow>,
    pub rules: &'a [RuleId],
    pub errors: usize,
    pub anomalies: usize,
    pub findings: &'a [Finding],
}
