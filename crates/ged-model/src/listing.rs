//! Row projections of a [`Genealogy`] for report emitters.

use serde::Serialize;

use crate::genealogy::Genealogy;
use crate::{NOT_AVAILABLE, UNKNOWN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualRow {
    pub id: String,
    pub name: String,
    pub sex: String,
    pub birthday: String,
    pub death: String,
    pub child_family: String,
    pub spouse_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyRow {
    pub id: String,
    pub married: String,
    pub divorced: String,
    pub husband_id: String,
    pub husband_name: String,
    pub wife_id: String,
    pub wife_name: String,
    /// Child ids joined with `", "`.
    pub children: String,
}

/// Individuals sorted by id. Family pointers that resolve to no family
/// render as `Unknown`.
pub fn individual_rows(genealogy: &Genealogy) -> Vec<IndividualRow> {
    genealogy
        .individuals()
        .map(|individual| IndividualRow {
            id: individual.id.clone(),
            name: individual.display_name().to_string(),
            sex: or_na(individual.sex.as_deref()),
            birthday: or_na(individual.birthday.as_ref().map(|d| d.raw())),
            death: or_na(individual.death_date.as_ref().map(|d| d.raw())),
            child_family: family_ref(genealogy, individual.child_family_id.as_deref()),
            spouse_family: family_ref(genealogy, individual.spouse_family_id.as_deref()),
        })
        .collect()
}

/// Families sorted by id, spouse names resolved against the registry.
pub fn family_rows(genealogy: &Genealogy) -> Vec<FamilyRow> {
    genealogy
        .families()
        .map(|family| FamilyRow {
            id: family.id.clone(),
            married: or_na(family.marriage_date.as_ref().map(|d| d.raw())),
            divorced: or_na(family.divorce_date.as_ref().map(|d| d.raw())),
            husband_id: family
                .husband_id
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            husband_name: genealogy.name_of(family.husband_id.as_deref()).to_string(),
            wife_id: family
                .wife_id
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            wife_name: genealogy.name_of(family.wife_id.as_deref()).to_string(),
            children: family.children.join(", "),
        })
        .collect()
}

fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn family_ref(genealogy: &Genealogy, id: Option<&str>) -> String {
    match id {
        None => NOT_AVAILABLE.to_string(),
        Some(id) if genealogy.family(id).is_some() => id.to_string(),
        Some(_) => UNKNOWN.to_string(),
    }
}
