//! Rule engine.
//!
//! Runs a selection of catalog rules over one genealogy. Rules never see each
//! other's output and never mutate the registries, so any subset can run in
//! any combination.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use ged_model::Genealogy;
use tracing::{debug, info, info_span};

use crate::checks;
use crate::finding::Finding;
use crate::report::ValidationReport;
use crate::rule::RuleId;

/// Read-only inputs shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub genealogy: &'a Genealogy,
    /// Reference date for "in the future" comparisons.
    pub today: NaiveDate,
}

impl<'a> RuleContext<'a> {
    pub fn new(genealogy: &'a Genealogy, today: NaiveDate) -> Self {
        Self { genealogy, today }
    }
}

/// Options for a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Overrides the local calendar date used by US01.
    pub today: Option<NaiveDate>,
    /// Restricts the run to these rules. `None` runs the full catalog.
    pub rules: Option<Vec<RuleId>>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = RuleId>) -> Self {
        self.rules = Some(rules.into_iter().collect());
        self
    }

    fn reference_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Executes catalog rules in declaration order.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<RuleId>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// An engine running the full catalog.
    pub fn new() -> Self {
        Self {
            rules: RuleId::ALL.to_vec(),
        }
    }

    /// An engine running only `rules`, reordered into catalog order with
    /// repeats removed.
    pub fn with_rules(rules: impl IntoIterator<Item = RuleId>) -> Self {
        let mut rules: Vec<RuleId> = rules.into_iter().collect();
        rules.sort();
        rules.dedup();
        Self { rules }
    }

    pub fn rules(&self) -> &[RuleId] {
        &self.rules
    }

    pub fn execute(&self, ctx: &RuleContext<'_>) -> ValidationReport {
        let mut report = ValidationReport::new(self.rules.clone());
        for &rule in &self.rules {
            let findings = execute_rule(rule, ctx);
            debug!(rule = %rule, findings = findings.len(), "rule evaluated");
            report.extend(findings);
        }
        report
    }
}

/// Evaluate one rule.
pub fn execute_rule(rule: RuleId, ctx: &RuleContext<'_>) -> Vec<Finding> {
    match rule {
        RuleId::Us01 => checks::dates::dates_before_today(ctx),
        RuleId::Us02 => checks::marriage::birth_before_marriage(ctx),
        RuleId::Us03 => checks::dates::birth_before_death(ctx),
        RuleId::Us04 => checks::marriage::marriage_before_divorce(ctx),
        RuleId::Us05 => checks::marriage::marriage_before_death(ctx),
        RuleId::Us06 => checks::marriage::divorce_before_death(ctx),
        RuleId::Us08 => checks::children::birth_after_parents_marriage(ctx),
        RuleId::Us09 => checks::children::birth_before_parents_death(ctx),
        RuleId::Us10 => checks::marriage::marriage_after_fourteen(ctx),
        RuleId::Us12 => checks::children::mother_not_too_old(ctx),
        RuleId::Us13 => checks::children::sibling_spacing(ctx),
        RuleId::Us14 => checks::children::multiple_births(ctx),
        RuleId::Us15 => checks::children::sibling_count(ctx),
        RuleId::Us16 => checks::spouses::shared_surname(ctx),
        RuleId::Us17 => checks::kinship::no_marriage_to_descendant(ctx),
        RuleId::Us18 => checks::kinship::no_sibling_marriage(ctx),
        RuleId::Us19 => checks::kinship::no_first_cousin_marriage(ctx),
        RuleId::Us20 => checks::kinship::no_aunt_or_uncle_marriage(ctx),
        RuleId::Us21 => checks::spouses::gender_matches_role(ctx),
        RuleId::Us22 => checks::uniqueness::unique_ids(ctx),
        RuleId::Us23 => checks::uniqueness::unique_name_and_birth(ctx),
        RuleId::Us24 => checks::uniqueness::unique_spouse_pairs(ctx),
        RuleId::Us25 => checks::uniqueness::unique_first_names(ctx),
        RuleId::Us26 => checks::membership::corresponding_entries(ctx),
    }
}

/// Validate a genealogy with the given options.
pub fn validate(genealogy: &Genealogy, options: &ValidationOptions) -> ValidationReport {
    let today = options.reference_date();
    let engine = match &options.rules {
        Some(rules) => RuleEngine::with_rules(rules.iter().copied()),
        None => RuleEngine::new(),
    };

    let span = info_span!(
        "validate",
        individuals = genealogy.individual_count(),
        families = genealogy.family_count(),
        rules = engine.rules().len(),
    );
    let _guard = span.enter();
    let start = Instant::now();

    let report = engine.execute(&RuleContext::new(genealogy, today));

    info!(
        errors = report.error_count(),
        anomalies = report.anomaly_count(),
        %today,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    report
}
