//! Checks anchored on a family's marriage and divorce (US02, US04, US05,
//! US06, US10).

use ged_model::add_years;

use super::{display, later};
use crate::engine::RuleContext;
use crate::finding::Finding;
use crate::rule::RuleId;

const MINIMUM_MARRIAGE_AGE: u32 = 14;

/// US02: an individual is born before the marriage of their spouse family.
pub fn birth_before_marriage(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for individual in ctx.genealogy.individuals() {
        let Some(family) = ctx.genealogy.spouse_family(individual) else {
            continue;
        };
        if later(individual.birth(), family.marriage()) {
            findings.push(Finding::individual(
                RuleId::Us02,
                individual,
                format!(
                    "birth date {} is after marriage date {} in family {}",
                    display(individual.birthday.as_ref()),
                    display(family.marriage_date.as_ref()),
                    family.id,
                ),
            ));
        }
    }
    findings
}

/// US04: the spouse family's marriage is not after its divorce.
pub fn marriage_before_divorce(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for individual in ctx.genealogy.individuals() {
        let Some(family) = ctx.genealogy.spouse_family(individual) else {
            continue;
        };
        if later(family.marriage(), family.divorce()) {
            findings.push(Finding::individual(
                RuleId::Us04,
                individual,
                format!(
                    "marriage date {} in family {} is after divorce date {}",
                    display(family.marriage_date.as_ref()),
                    family.id,
                    display(family.divorce_date.as_ref()),
                ),
            ));
        }
    }
    findings
}

/// US05: the spouse family's marriage is not after the individual's death.
pub fn marriage_before_death(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for individual in ctx.genealogy.individuals() {
        let Some(family) = ctx.genealogy.spouse_family(individual) else {
            continue;
        };
        if later(family.marriage(), individual.death()) {
            findings.push(Finding::individual(
                RuleId::Us05,
                individual,
                format!(
                    "marriage date {} in family {} is after death date {}",
                    display(family.marriage_date.as_ref()),
                    family.id,
                    display(individual.death_date.as_ref()),
                ),
            ));
        }
    }
    findings
}

/// US06: a divorce is not after the death of either spouse.
pub fn divorce_before_death(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        if family.divorce().is_none() {
            continue;
        }
        let spouses = [
            ("husband", ctx.genealogy.husband(family)),
            ("wife", ctx.genealogy.wife(family)),
        ];
        for (role, spouse) in spouses {
            let Some(spouse) = spouse else {
                continue;
            };
            if later(family.divorce(), spouse.death()) {
                findings.push(Finding::family(
                    RuleId::Us06,
                    ctx.genealogy,
                    family,
                    format!(
                        "divorce date {} is after the death of {role} {} on {}",
                        display(family.divorce_date.as_ref()),
                        spouse.id,
                        display(spouse.death_date.as_ref()),
                    ),
                ));
            }
        }
    }
    findings
}

/// US10: both spouses are at least 14 on the marriage date.
pub fn marriage_after_fourteen(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let Some(marriage) = family.marriage() else {
            continue;
        };
        let spouses = [
            ("husband", ctx.genealogy.husband(family)),
            ("wife", ctx.genealogy.wife(family)),
        ];
        for (role, spouse) in spouses {
            let Some(adult) = spouse
                .and_then(|s| s.birth())
                .and_then(|birth| add_years(birth, MINIMUM_MARRIAGE_AGE))
            else {
                continue;
            };
            if marriage < adult {
                let id = spouse.map_or("", |s| s.id.as_str());
                findings.push(Finding::family(
                    RuleId::Us10,
                    ctx.genealogy,
                    family,
                    format!(
                        "marriage date {} is before {role} {id} turned {MINIMUM_MARRIAGE_AGE}",
                        display(family.marriage_date.as_ref()),
                    ),
                ));
            }
        }
    }
    findings
}
