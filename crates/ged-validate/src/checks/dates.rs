//! Single-record date checks (US01, US03).

use chrono::NaiveDate;
use ged_model::GedDate;

use super::display;
use crate::engine::RuleContext;
use crate::finding::Finding;
use crate::rule::RuleId;

fn in_future(date: Option<&GedDate>, today: NaiveDate) -> Option<&GedDate> {
    date.filter(|d| d.value().is_some_and(|v| v > today))
}

/// US01: no birth, death, marriage or divorce date after the reference date.
pub fn dates_before_today(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for individual in ctx.genealogy.individuals() {
        let events = [
            ("birth", individual.birthday.as_ref()),
            ("death", individual.death_date.as_ref()),
        ];
        for (label, date) in events {
            if let Some(date) = in_future(date, ctx.today) {
                findings.push(Finding::individual(
                    RuleId::Us01,
                    individual,
                    format!("{label} date {date} occurs after the current date"),
                ));
            }
        }
    }

    for family in ctx.genealogy.families() {
        let events = [
            ("marriage", family.marriage_date.as_ref()),
            ("divorce", family.divorce_date.as_ref()),
        ];
        for (label, date) in events {
            if let Some(date) = in_future(date, ctx.today) {
                findings.push(Finding::family(
                    RuleId::Us01,
                    ctx.genealogy,
                    family,
                    format!("{label} date {date} occurs after the current date"),
                ));
            }
        }
    }

    findings
}

/// US03: birth strictly before death.
pub fn birth_before_death(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for individual in ctx.genealogy.individuals() {
        let (Some(birth), Some(death)) = (individual.birth(), individual.death()) else {
            continue;
        };
        if birth >= death {
            findings.push(Finding::individual(
                RuleId::Us03,
                individual,
                format!(
                    "birth date {} is not before death date {}",
                    display(individual.birthday.as_ref()),
                    display(individual.death_date.as_ref()),
                ),
            ));
        }
    }
    findings
}
