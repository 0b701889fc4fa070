#![allow(dead_code)]

use chrono::NaiveDate;
use ged_model::{Family, GedDate, Genealogy, Individual};

pub const SAMPLE: &str = include_str!("../../../ged-ingest/tests/data/sample.ged");

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn sample() -> Genealogy {
    ged_ingest::parse_gedcom_str(SAMPLE).genealogy
}

pub fn date(raw: &str) -> Option<GedDate> {
    Some(GedDate::parse(raw))
}

pub fn person(id: &str, name: &str, sex: &str, birth: Option<&str>) -> Individual {
    Individual {
        name: Some(name.to_string()),
        sex: Some(sex.to_string()),
        birthday: birth.map(GedDate::parse),
        ..Individual::new(id)
    }
}

pub fn family(id: &str, husband: Option<&str>, wife: Option<&str>, children: &[&str]) -> Family {
    Family {
        husband_id: husband.map(str::to_string),
        wife_id: wife.map(str::to_string),
        children: children.iter().map(|c| (*c).to_string()).collect(),
        ..Family::new(id)
    }
}

/// Add a spouse pair plus its family, wiring the FAMS pointers.
pub fn couple(
    genealogy: &mut Genealogy,
    family_id: &str,
    mut husband: Individual,
    mut wife: Individual,
    children: &[&str],
) {
    husband.spouse_family_id = Some(family_id.to_string());
    wife.spouse_family_id = Some(family_id.to_string());
    let fam = family(family_id, Some(&husband.id), Some(&wife.id), children);
    genealogy.insert_individual(husband);
    genealogy.insert_individual(wife);
    genealogy.insert_family(fam);
}

/// Add a child with a FAMC pointer to `family_id`.
pub fn child(genealogy: &mut Genealogy, family_id: &str, mut individual: Individual) {
    individual.child_family_id = Some(family_id.to_string());
    genealogy.insert_individual(individual);
}
