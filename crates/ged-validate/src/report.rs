use serde::{Deserialize, Serialize};

use crate::finding::{Finding, Severity};
use crate::rule::RuleId;

/// Findings produced by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Rules that were evaluated, in catalog order.
    pub rules: Vec<RuleId>,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(rules: Vec<RuleId>) -> Self {
        Self {
            rules,
            findings: Vec::new(),
        }
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn anomaly_count(&self) -> usize {
        self.count(Severity::Anomaly)
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Findings reported by a single rule.
    pub fn for_rule(&self, rule: RuleId) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.rule == rule)
    }

    /// Number of findings per evaluated rule, including rules with none.
    pub fn counts_by_rule(&self) -> Vec<(RuleId, usize)> {
        self.rules
            .iter()
            .map(|&rule| (rule, self.for_rule(rule).count()))
            .collect()
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}
