//! Checks over a family's children (US08, US09, US12, US13, US14, US15).

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate};
use ged_model::{Family, Individual, months_between, years_between};

use super::{display, later};
use crate::engine::RuleContext;
use crate::finding::Finding;
use crate::rule::RuleId;

/// Longest plausible gap between a father's death and a child's birth.
const GESTATION_DAYS: u64 = 270;
const MAX_MOTHER_AGE: i32 = 60;
const MIN_SIBLING_SPACING_MONTHS: i32 = 8;
const MAX_MULTIPLE_BIRTH: usize = 5;
const MAX_CHILDREN: usize = 15;

/// US08: children are not born before their parents' marriage.
pub fn birth_after_parents_marriage(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        if family.marriage().is_none() {
            continue;
        }
        for child in ctx.genealogy.children(family) {
            if later(family.marriage(), child.birth()) {
                findings.push(Finding::individual(
                    RuleId::Us08,
                    child,
                    format!(
                        "birth date {} is before parents' marriage date {} in family {}",
                        display(child.birthday.as_ref()),
                        display(family.marriage_date.as_ref()),
                        family.id,
                    ),
                ));
            }
        }
    }
    findings
}

/// US09: children are born before their mother's death and no later than
/// nine months after their father's death.
pub fn birth_before_parents_death(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let mother = ctx.genealogy.wife(family);
        let father = ctx.genealogy.husband(family);
        let father_limit = father
            .and_then(Individual::death)
            .and_then(|death| death.checked_add_days(Days::new(GESTATION_DAYS)));

        for child in ctx.genealogy.children(family) {
            if let Some(mother) = mother {
                if later(child.birth(), mother.death()) {
                    findings.push(Finding::individual(
                        RuleId::Us09,
                        child,
                        format!(
                            "birth date {} is after the death of mother {} on {}",
                            display(child.birthday.as_ref()),
                            mother.id,
                            display(mother.death_date.as_ref()),
                        ),
                    ));
                }
            }
            if let Some(father) = father {
                if later(child.birth(), father_limit) {
                    findings.push(Finding::individual(
                        RuleId::Us09,
                        child,
                        format!(
                            "birth date {} is more than nine months after the death of father {} on {}",
                            display(child.birthday.as_ref()),
                            father.id,
                            display(father.death_date.as_ref()),
                        ),
                    ));
                }
            }
        }
    }
    findings
}

/// US12: a mother is not more than 60 years older than her children.
pub fn mother_not_too_old(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let Some(mother) = ctx.genealogy.wife(family) else {
            continue;
        };
        let Some(mother_birth) = mother.birth() else {
            continue;
        };
        for child in ctx.genealogy.children(family) {
            let Some(child_birth) = child.birth() else {
                continue;
            };
            let age = years_between(mother_birth, child_birth);
            if age > MAX_MOTHER_AGE {
                findings.push(Finding::family(
                    RuleId::Us12,
                    ctx.genealogy,
                    family,
                    format!(
                        "mother {} was {age} years older than child {}",
                        mother.id, child.id
                    ),
                ));
            }
        }
    }
    findings
}

/// Distinct children with a known birth date, in `CHIL` order.
fn dated_children<'a>(ctx: &RuleContext<'a>, family: &'a Family) -> Vec<(&'a str, NaiveDate)> {
    let mut seen = BTreeSet::new();
    ctx.genealogy
        .children(family)
        .filter(|child| seen.insert(child.id.as_str()))
        .filter_map(|child| child.birth().map(|birth| (child.id.as_str(), birth)))
        .collect()
}

/// US13: sibling births are at least eight months apart.
///
/// Every pair is checked once; same-day births are reported as well.
pub fn sibling_spacing(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let children = dated_children(ctx, family);
        for (i, &(first, first_birth)) in children.iter().enumerate() {
            for &(second, second_birth) in &children[i + 1..] {
                let gap = months_between(first_birth, second_birth).abs();
                if gap < MIN_SIBLING_SPACING_MONTHS {
                    findings.push(Finding::family(
                        RuleId::Us13,
                        ctx.genealogy,
                        family,
                        format!("children {first} and {second} were born {gap} month(s) apart"),
                    ));
                }
            }
        }
    }
    findings
}

/// US14: no more than five siblings share a birth date.
pub fn multiple_births(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for (_, birth) in dated_children(ctx, family) {
            *by_date.entry(birth).or_default() += 1;
        }
        for (date, count) in by_date {
            if count > MAX_MULTIPLE_BIRTH {
                findings.push(Finding::family(
                    RuleId::Us14,
                    ctx.genealogy,
                    family,
                    format!(
                        "{count} children share the birth date {}",
                        date.format("%Y-%m-%d")
                    ),
                ));
            }
        }
    }
    findings
}

/// US15: a family lists fewer than sixteen children.
pub fn sibling_count(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.genealogy
        .families()
        .filter(|family| family.children.len() > MAX_CHILDREN)
        .map(|family| {
            Finding::family(
                RuleId::Us15,
                ctx.genealogy,
                family,
                format!(
                    "has {} children, more than {MAX_CHILDREN}",
                    family.children.len()
                ),
            )
        })
        .collect()
}
