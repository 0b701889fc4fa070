//! Duplicate detection (US22, US23, US24, US25).
//!
//! The first record seen in id order is treated as the original; every later
//! match is reported against it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::engine::RuleContext;
use crate::finding::{Finding, Subject};
use crate::rule::RuleId;

/// US22: no record id is defined twice.
pub fn unique_ids(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let genealogy = ctx.genealogy;
    let individuals = genealogy.duplicate_individual_ids().iter().map(|id| {
        Finding::new(
            RuleId::Us22,
            Subject::individual_id(genealogy, id),
            "id is defined more than once; the last definition was kept",
        )
    });
    let families = genealogy.duplicate_family_ids().iter().map(|id| {
        Finding::new(
            RuleId::Us22,
            Subject::family_id(genealogy, id),
            "id is defined more than once; the last definition was kept",
        )
    });
    individuals.chain(families).collect()
}

/// US23: no two individuals share both name and birth date.
pub fn unique_name_and_birth(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut seen: BTreeMap<(&str, NaiveDate), &str> = BTreeMap::new();
    let mut findings = Vec::new();
    for individual in ctx.genealogy.individuals() {
        let (Some(name), Some(birth)) = (individual.name.as_deref(), individual.birth()) else {
            continue;
        };
        match seen.get(&(name, birth)) {
            Some(original) => findings.push(Finding::individual(
                RuleId::Us23,
                individual,
                format!("shares name and birth date with {original}"),
            )),
            None => {
                seen.insert((name, birth), individual.id.as_str());
            }
        }
    }
    findings
}

/// US24: no two families have the same husband and wife.
pub fn unique_spouse_pairs(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut seen: BTreeMap<(&str, &str), &str> = BTreeMap::new();
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let (Some(husband), Some(wife)) = (family.husband_id.as_deref(), family.wife_id.as_deref())
        else {
            continue;
        };
        let key = if husband <= wife {
            (husband, wife)
        } else {
            (wife, husband)
        };
        match seen.get(&key) {
            Some(original) => findings.push(Finding::family(
                RuleId::Us24,
                ctx.genealogy,
                family,
                format!("spouses {husband} and {wife} already form family {original}"),
            )),
            None => {
                seen.insert(key, family.id.as_str());
            }
        }
    }
    findings
}

/// US25: no two individuals share a first name.
pub fn unique_first_names(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    let mut findings = Vec::new();
    for individual in ctx.genealogy.individuals() {
        let Some(first_name) = individual.first_name() else {
            continue;
        };
        match seen.get(first_name) {
            Some(original) => findings.push(Finding::individual(
                RuleId::Us25,
                individual,
                format!("shares first name '{first_name}' with {original}"),
            )),
            None => {
                seen.insert(first_name, individual.id.as_str());
            }
        }
    }
    findings
}
