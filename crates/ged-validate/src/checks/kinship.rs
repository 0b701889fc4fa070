//! Marriages between close relatives (US17, US18, US19, US20).
//!
//! Parentage comes from both directions of the graph: a family's `CHIL`
//! list and an individual's `FAMC` pointer each make that family one of the
//! individual's parent families.

use std::collections::{BTreeMap, BTreeSet};

use ged_model::{Family, Genealogy};

use crate::engine::RuleContext;
use crate::finding::Finding;
use crate::rule::RuleId;

/// Parent-family lookup built once per rule evaluation.
#[derive(Debug)]
pub struct Kinship<'a> {
    genealogy: &'a Genealogy,
    parent_families: BTreeMap<&'a str, BTreeSet<&'a str>>,
}

impl<'a> Kinship<'a> {
    pub fn build(genealogy: &'a Genealogy) -> Self {
        let mut parent_families: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for family in genealogy.families() {
            for child in &family.children {
                parent_families
                    .entry(child.as_str())
                    .or_default()
                    .insert(family.id.as_str());
            }
        }
        for individual in genealogy.individuals() {
            if let Some(family_id) = individual.child_family_id.as_deref() {
                parent_families
                    .entry(individual.id.as_str())
                    .or_default()
                    .insert(family_id);
            }
        }
        Self {
            genealogy,
            parent_families,
        }
    }

    /// Families in which `id` is a child.
    pub fn parent_families(&self, id: &str) -> BTreeSet<&'a str> {
        self.parent_families.get(id).cloned().unwrap_or_default()
    }

    /// Spouses of every parent family of `id`.
    pub fn parents(&self, id: &str) -> BTreeSet<&'a str> {
        self.parent_families(id)
            .into_iter()
            .filter_map(|family_id| self.genealogy.family(family_id))
            .flat_map(Family::spouse_ids)
            .collect()
    }

    /// Parent families of the parents of `id`.
    pub fn grandparent_families(&self, id: &str) -> BTreeSet<&'a str> {
        self.parents(id)
            .into_iter()
            .flat_map(|parent| self.parent_families(parent))
            .collect()
    }

    /// Whether `a` and `b` share at least one parent family.
    pub fn are_siblings(&self, a: &str, b: &str) -> bool {
        let left = self.parent_families(a);
        !left.is_empty() && !left.is_disjoint(&self.parent_families(b))
    }
}

fn spouse_pair(family: &Family) -> Option<(&str, &str)> {
    Some((family.husband_id.as_deref()?, family.wife_id.as_deref()?))
}

/// US17: nobody marries their own child.
pub fn no_marriage_to_descendant(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let kinship = Kinship::build(ctx.genealogy);
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let Some((husband, wife)) = spouse_pair(family) else {
            continue;
        };
        if kinship.parents(husband).contains(wife) {
            findings.push(Finding::family(
                RuleId::Us17,
                ctx.genealogy,
                family,
                format!("husband {husband} is a child of wife {wife}"),
            ));
        } else if kinship.parents(wife).contains(husband) {
            findings.push(Finding::family(
                RuleId::Us17,
                ctx.genealogy,
                family,
                format!("wife {wife} is a child of husband {husband}"),
            ));
        }
    }
    findings
}

/// US18: both spouses appear as children in the family registry.
///
/// Any two children are treated as potential siblings; the families they
/// are listed in are not compared.
pub fn no_sibling_marriage(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let listed_children: BTreeSet<&str> = ctx
        .genealogy
        .families()
        .flat_map(|family| family.children.iter().map(String::as_str))
        .collect();

    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let Some((husband, wife)) = spouse_pair(family) else {
            continue;
        };
        if listed_children.contains(husband) && listed_children.contains(wife) {
            findings.push(Finding::family(
                RuleId::Us18,
                ctx.genealogy,
                family,
                format!("husband {husband} and wife {wife} are both listed as children"),
            ));
        }
    }
    findings
}

/// US19: spouses do not share a set of grandparents unless they are siblings.
pub fn no_first_cousin_marriage(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let kinship = Kinship::build(ctx.genealogy);
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let Some((husband, wife)) = spouse_pair(family) else {
            continue;
        };
        let shared: Vec<&str> = kinship
            .grandparent_families(husband)
            .intersection(&kinship.grandparent_families(wife))
            .copied()
            .collect();
        if !shared.is_empty() && !kinship.are_siblings(husband, wife) {
            findings.push(Finding::family(
                RuleId::Us19,
                ctx.genealogy,
                family,
                format!(
                    "husband {husband} and wife {wife} are first cousins through family {}",
                    shared.join(", ")
                ),
            ));
        }
    }
    findings
}

/// US20: nobody marries a child of their own sibling.
pub fn no_aunt_or_uncle_marriage(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let kinship = Kinship::build(ctx.genealogy);
    let mut findings = Vec::new();
    for family in ctx.genealogy.families() {
        let Some((husband, wife)) = spouse_pair(family) else {
            continue;
        };
        for (elder, younger) in [(husband, wife), (wife, husband)] {
            let sibling = kinship
                .parents(younger)
                .into_iter()
                .find(|&parent| parent != elder && kinship.are_siblings(parent, elder));
            if let Some(sibling) = sibling {
                findings.push(Finding::family(
                    RuleId::Us20,
                    ctx.genealogy,
                    family,
                    format!("{elder} is a sibling of {sibling}, a parent of {younger}"),
                ));
                break;
            }
        }
    }
    findings
}
