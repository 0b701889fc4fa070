//! Checks on the two spouses of a family (US16, US21).

use crate::engine::RuleContext;
use crate::finding::Finding;
use crate::rule::RuleId;

/// US16: husband and wife carry the same surname.
pub fn shared_surname(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let (Some(husband), Some(wife)) = (ctx.genealogy.husband(family), ctx.genealogy.wife(family))
        else {
            continue;
        };
        let (Some(husband_surname), Some(wife_surname)) = (husband.surname(), wife.surname())
        else {
            continue;
        };
        if husband_surname != wife_surname {
            findings.push(Finding::family(
                RuleId::Us16,
                ctx.genealogy,
                family,
                format!(
                    "wife {} surname '{wife_surname}' differs from husband {} surname '{husband_surname}'",
                    wife.id, husband.id
                ),
            ));
        }
    }
    findings
}

/// US21: the husband is recorded as male and the wife as female.
pub fn gender_matches_role(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let spouses = [
            ("husband", "M", ctx.genealogy.husband(family)),
            ("wife", "F", ctx.genealogy.wife(family)),
        ];
        for (role, expected, spouse) in spouses {
            let Some(spouse) = spouse else {
                continue;
            };
            if spouse.sex.as_deref() != Some(expected) {
                findings.push(Finding::family(
                    RuleId::Us21,
                    ctx.genealogy,
                    family,
                    format!(
                        "{role} {} has sex '{}', expected '{expected}'",
                        spouse.id,
                        spouse.sex.as_deref().unwrap_or(ged_model::NOT_AVAILABLE),
                    ),
                ));
            }
        }
    }
    findings
}
