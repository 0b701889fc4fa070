//! Record assembly state machine.
//!
//! Lines arrive in file order. A level-0 line opens (or closes) a record, a
//! level-1 line sets a field on the open record or arms a date-bearing event,
//! and a level-2 `DATE` line fills the armed date. Lines that do not fit this
//! grammar are ignored; a single bad line never aborts assembly.

use std::sync::LazyLock;

use ged_model::{Family, GedDate, Genealogy, Individual};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::line::{GedcomLine, Tag, classify_line};

static INDIVIDUAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@I\d+@$").expect("Invalid individual id regex"));

static FAMILY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@F\d+@$").expect("Invalid family id regex"));

/// Whether `value` looks like an individual record id (`@I<digits>@`).
pub fn is_individual_id(value: &str) -> bool {
    INDIVIDUAL_ID.is_match(value)
}

/// Whether `value` looks like a family record id (`@F<digits>@`).
pub fn is_family_id(value: &str) -> bool {
    FAMILY_ID.is_match(value)
}

fn is_record_id(value: &str) -> bool {
    is_individual_id(value) || is_family_id(value)
}

/// Date field waiting for the next level-2 `DATE` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateTarget {
    Birthday,
    DeathDate,
    MarriageDate,
    DivorceDate,
}

/// Line counts collected during assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    /// Non-empty lines seen.
    pub lines: usize,
    /// Lines that could not be classified.
    pub malformed: usize,
    /// Classified lines whose tag is outside the recognized set.
    pub unrecognized_tags: usize,
}

#[derive(Debug, Default)]
pub struct RecordAssembler {
    genealogy: Genealogy,
    current_individual: Option<String>,
    current_family: Option<String>,
    date_target: Option<DateTarget>,
    stats: AssemblyStats,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and apply one raw line.
    pub fn feed(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.stats.lines += 1;
        match classify_line(raw) {
            Ok(line) => {
                if !line.is_valid() && !is_record_id(line.tag) {
                    self.stats.unrecognized_tags += 1;
                    trace!(line = self.stats.lines, tag = line.tag, "unrecognized tag");
                }
                self.apply(&line);
            }
            Err(error) => {
                self.stats.malformed += 1;
                debug!(line = self.stats.lines, %error, "skipping malformed line");
            }
        }
    }

    /// Apply an already classified line.
    pub fn apply(&mut self, line: &GedcomLine<'_>) {
        match line.level {
            0 => self.apply_level0(line),
            1 => self.apply_level1(line),
            2 => self.apply_level2(line),
            level => trace!(level, tag = line.tag, "ignoring deeper level"),
        }
    }

    pub fn stats(&self) -> AssemblyStats {
        self.stats
    }

    /// The registries assembled so far.
    pub fn genealogy(&self) -> &Genealogy {
        &self.genealogy
    }

    pub fn finish(self) -> (Genealogy, AssemblyStats) {
        (self.genealogy, self.stats)
    }

    fn apply_level0(&mut self, line: &GedcomLine<'_>) {
        self.date_target = None;
        if is_individual_id(line.tag) {
            if self
                .genealogy
                .insert_individual(Individual::new(line.tag))
                .is_some()
            {
                debug!(id = line.tag, "individual redefined; earlier record replaced");
            }
            self.current_individual = Some(line.tag.to_string());
            self.current_family = None;
        } else if is_family_id(line.tag) {
            if self.genealogy.insert_family(Family::new(line.tag)).is_some() {
                debug!(id = line.tag, "family redefined; earlier record replaced");
            }
            self.current_family = Some(line.tag.to_string());
            self.current_individual = None;
        } else {
            self.current_individual = None;
            self.current_family = None;
        }
    }

    fn apply_level1(&mut self, line: &GedcomLine<'_>) {
        self.date_target = None;
        let Some(tag) = line.known_tag() else {
            return;
        };
        let value = line.value.to_string();

        if let Some(individual) = self
            .current_individual
            .as_deref()
            .and_then(|id| self.genealogy.individual_mut(id))
        {
            match tag {
                Tag::Name => individual.name = Some(value.clone()),
                Tag::Sex => individual.sex = Some(value.clone()),
                Tag::Famc => individual.child_family_id = Some(value.clone()),
                Tag::Fams => individual.spouse_family_id = Some(value.clone()),
                Tag::Birt => self.date_target = Some(DateTarget::Birthday),
                Tag::Deat => self.date_target = Some(DateTarget::DeathDate),
                _ => {}
            }
        }

        if let Some(family) = self
            .current_family
            .as_deref()
            .and_then(|id| self.genealogy.family_mut(id))
        {
            match tag {
                Tag::Husb => family.husband_id = Some(value),
                Tag::Wife => family.wife_id = Some(value),
                Tag::Chil => family.children.push(value),
                Tag::Marr => self.date_target = Some(DateTarget::MarriageDate),
                Tag::Div => self.date_target = Some(DateTarget::DivorceDate),
                _ => {}
            }
        }
    }

    fn apply_level2(&mut self, line: &GedcomLine<'_>) {
        let Some(target) = self.date_target else {
            return;
        };
        if line.known_tag() != Some(Tag::Date) {
            return;
        }
        let date = GedDate::parse(line.value);

        match target {
            DateTarget::Birthday | DateTarget::DeathDate => {
                let Some(individual) = self
                    .current_individual
                    .as_deref()
                    .and_then(|id| self.genealogy.individual_mut(id))
                else {
                    return;
                };
                if target == DateTarget::Birthday {
                    individual.birthday = Some(date);
                } else {
                    individual.death_date = Some(date);
                }
            }
            DateTarget::MarriageDate | DateTarget::DivorceDate => {
                let Some(family) = self
                    .current_family
                    .as_deref()
                    .and_then(|id| self.genealogy.family_mut(id))
                else {
                    return;
                };
                if target == DateTarget::MarriageDate {
                    family.marriage_date = Some(date);
                } else {
                    family.divorce_date = Some(date);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(lines: &[&str]) -> Genealogy {
        let mut assembler = RecordAssembler::new();
        for line in lines {
            assembler.feed(line);
        }
        assembler.finish().0
    }

    #[test]
    fn id_patterns() {
        assert!(is_individual_id("@I12@"));
        assert!(!is_individual_id("@I@"));
        assert!(!is_individual_id("@F1@"));
        assert!(!is_individual_id("@I1@X"));
        assert!(is_family_id("@F7@"));
        assert!(!is_family_id("FAM"));
    }

    #[test]
    fn birth_date_arrives_on_next_line() {
        let genealogy = assemble(&["0 @I1@ INDI", "1 BIRT", "2 DATE 17 MAR 1990"]);
        let person = genealogy.individual("@I1@").unwrap();
        assert_eq!(person.birthday.as_ref().unwrap().raw(), "17 MAR 1990");
    }

    #[test]
    fn level1_line_disarms_date_target() {
        let genealogy = assemble(&[
            "0 @I1@ INDI",
            "1 BIRT",
            "1 NAME Late /Date/",
            "2 DATE 1 JAN 1900",
        ]);
        let person = genealogy.individual("@I1@").unwrap();
        assert_eq!(person.birthday, None);
        assert_eq!(person.name.as_deref(), Some("Late /Date/"));
    }

    #[test]
    fn second_date_overwrites_first() {
        let genealogy = assemble(&[
            "0 @F1@ FAM",
            "1 MARR",
            "2 DATE 1 JAN 2000",
            "2 DATE 2 FEB 2002",
        ]);
        let family = genealogy.family("@F1@").unwrap();
        assert_eq!(family.marriage_date.as_ref().unwrap().raw(), "2 FEB 2002");
    }

    #[test]
    fn date_without_armed_event_is_ignored() {
        let genealogy = assemble(&["0 @I1@ INDI", "1 SEX M", "2 DATE 1 JAN 1900"]);
        let person = genealogy.individual("@I1@").unwrap();
        assert_eq!(person.birthday, None);
        assert_eq!(person.death_date, None);
    }

    #[test]
    fn family_tags_do_not_touch_individuals() {
        let genealogy = assemble(&["0 @I1@ INDI", "1 HUSB @I2@", "1 MARR", "2 DATE 2000"]);
        let person = genealogy.individual("@I1@").unwrap();
        assert_eq!(person, &Individual::new("@I1@"));
    }

    #[test]
    fn counts_malformed_and_unknown_lines() {
        let mut assembler = RecordAssembler::new();
        for line in ["0 HEAD", "0 @I1@ INDI", "garbage", "", "1 OCCU Smith", "0 TRLR"] {
            assembler.feed(line);
        }
        let stats = assembler.stats();
        assert_eq!(stats.lines, 5);
        assert_eq!(stats.malformed, 1);
        assert_eq!(stats.unrecognized_tags, 1);
    }
}
