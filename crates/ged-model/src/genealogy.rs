//! The individual and family registries built by one parse.
//!
//! A [`Genealogy`] is filled by the record assembler and afterwards only
//! read. Lookups by id tolerate dangling references: a family pointing at an
//! individual that was never defined simply resolves to `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::UNKNOWN;
use crate::family::Family;
use crate::individual::Individual;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genealogy {
    individuals: BTreeMap<String, Individual>,
    families: BTreeMap<String, Family>,
    /// Ids of individuals that were defined more than once, in encounter order.
    duplicate_individual_ids: Vec<String>,
    /// Ids of families that were defined more than once, in encounter order.
    duplicate_family_ids: Vec<String>,
}

impl Genealogy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an individual, replacing any earlier record with the same id.
    ///
    /// The replaced id is remembered so the overwrite stays observable.
    pub fn insert_individual(&mut self, individual: Individual) -> Option<Individual> {
        let previous = self
            .individuals
            .insert(individual.id.clone(), individual);
        if let Some(previous) = &previous {
            self.duplicate_individual_ids.push(previous.id.clone());
        }
        previous
    }

    /// Insert a family, replacing any earlier record with the same id.
    pub fn insert_family(&mut self, family: Family) -> Option<Family> {
        let previous = self.families.insert(family.id.clone(), family);
        if let Some(previous) = &previous {
            self.duplicate_family_ids.push(previous.id.clone());
        }
        previous
    }

    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    pub fn individual_mut(&mut self, id: &str) -> Option<&mut Individual> {
        self.individuals.get_mut(id)
    }

    pub fn family_mut(&mut self, id: &str) -> Option<&mut Family> {
        self.families.get_mut(id)
    }

    /// Individuals ordered by id.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    /// Families ordered by id.
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    pub fn duplicate_individual_ids(&self) -> &[String] {
        &self.duplicate_individual_ids
    }

    pub fn duplicate_family_ids(&self) -> &[String] {
        &self.duplicate_family_ids
    }

    /// Resolve an optional individual reference.
    pub fn resolve_individual(&self, id: Option<&str>) -> Option<&Individual> {
        id.and_then(|id| self.individual(id))
    }

    /// Resolve an optional family reference.
    pub fn resolve_family(&self, id: Option<&str>) -> Option<&Family> {
        id.and_then(|id| self.family(id))
    }

    /// The family in which `individual` is a spouse.
    pub fn spouse_family(&self, individual: &Individual) -> Option<&Family> {
        self.resolve_family(individual.spouse_family_id.as_deref())
    }

    /// The family in which `individual` is a child.
    pub fn child_family(&self, individual: &Individual) -> Option<&Family> {
        self.resolve_family(individual.child_family_id.as_deref())
    }

    pub fn husband(&self, family: &Family) -> Option<&Individual> {
        self.resolve_individual(family.husband_id.as_deref())
    }

    pub fn wife(&self, family: &Family) -> Option<&Individual> {
        self.resolve_individual(family.wife_id.as_deref())
    }

    /// Children of `family` that resolve to an individual, in `CHIL` order.
    pub fn children<'a>(&'a self, family: &'a Family) -> impl Iterator<Item = &'a Individual> {
        family.children.iter().filter_map(|id| self.individual(id))
    }

    /// Display name for a reference; dangling or unset references are `Unknown`.
    pub fn name_of(&self, id: Option<&str>) -> &str {
        self.resolve_individual(id)
            .and_then(|individual| individual.name.as_deref())
            .unwrap_or(UNKNOWN)
    }
}
