//! Registry cross-references (US26).

use std::collections::BTreeSet;

use crate::engine::RuleContext;
use crate::finding::Finding;
use crate::rule::RuleId;

/// US26: every individual is a spouse or a child somewhere.
///
/// A `FAMS` pointer counts as being a spouse. Being a child requires a
/// family whose `CHIL` list names the individual; a `FAMC` pointer alone
/// does not count.
pub fn corresponding_entries(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let referenced: BTreeSet<&str> = ctx
        .genealogy
        .families()
        .flat_map(|family| {
            family
                .spouse_ids()
                .chain(family.children.iter().map(String::as_str))
        })
        .collect();

    ctx.genealogy
        .individuals()
        .filter(|individual| {
            individual.spouse_family_id.is_none() && !referenced.contains(individual.id.as_str())
        })
        .map(|individual| {
            Finding::individual(
                RuleId::Us26,
                individual,
                "is not a spouse or child in any family",
            )
        })
        .collect()
}
