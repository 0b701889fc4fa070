//! Integration tests for record assembly over complete GEDCOM documents.

use chrono::NaiveDate;
use ged_ingest::{RecordAssembler, parse_gedcom_str};

const SAMPLE: &str = include_str!("data/sample.ged");

fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn test_sample_individuals() {
    let parsed = parse_gedcom_str(SAMPLE);
    let genealogy = &parsed.genealogy;
    assert_eq!(genealogy.individual_count(), 4);

    let john = genealogy.individual("@I1@").unwrap();
    assert_eq!(john.name.as_deref(), Some("John /Doe/"));
    assert_eq!(john.sex.as_deref(), Some("M"));
    assert_eq!(john.birth(), ymd(1980, 1, 1));
    assert_eq!(john.death_date, None);
    assert_eq!(john.spouse_family_id.as_deref(), Some("@F1@"));
    assert_eq!(john.child_family_id, None);

    let jane = genealogy.individual("@I2@").unwrap();
    assert_eq!(jane.death(), ymd(2020, 2, 2));

    let alice = genealogy.individual("@I3@").unwrap();
    assert_eq!(alice.child_family_id.as_deref(), Some("@F1@"));
}

#[test]
fn test_sample_family() {
    let parsed = parse_gedcom_str(SAMPLE);
    let family = parsed.genealogy.family("@F1@").unwrap();
    assert_eq!(family.husband_id.as_deref(), Some("@I1@"));
    assert_eq!(family.wife_id.as_deref(), Some("@I2@"));
    assert_eq!(family.children, ["@I3@", "@I4@"]);
    assert_eq!(family.marriage(), ymd(2005, 1, 1));
    assert_eq!(family.divorce(), ymd(2015, 1, 1));
}

#[test]
fn test_sample_stats() {
    let parsed = parse_gedcom_str(SAMPLE);
    assert_eq!(parsed.stats.malformed, 0);
    // SOUR, GEDC, VERS
    assert_eq!(parsed.stats.unrecognized_tags, 3);
}

#[test]
fn test_header_lines_close_the_open_record() {
    let parsed = parse_gedcom_str(
        "0 @I1@ INDI\n\
         0 NOTE interruption\n\
         1 NAME Orphan /Line/\n\
         0 @I2@ INDI\n\
         1 NAME Kept /Name/\n",
    );
    let genealogy = &parsed.genealogy;
    assert_eq!(genealogy.individual("@I1@").unwrap().name, None);
    assert_eq!(
        genealogy.individual("@I2@").unwrap().name.as_deref(),
        Some("Kept /Name/")
    );
}

#[test]
fn test_redefined_record_is_replaced_not_merged() {
    let parsed = parse_gedcom_str(
        "0 @I1@ INDI\n\
         1 NAME First /Version/\n\
         1 SEX M\n\
         0 @I1@ INDI\n\
         1 NAME Second /Version/\n",
    );
    let genealogy = &parsed.genealogy;
    let person = genealogy.individual("@I1@").unwrap();
    assert_eq!(person.name.as_deref(), Some("Second /Version/"));
    assert_eq!(person.sex, None);
    assert_eq!(genealogy.duplicate_individual_ids(), ["@I1@".to_string()]);
}

#[test]
fn test_last_family_reference_wins() {
    let parsed = parse_gedcom_str(
        "0 @I1@ INDI\n\
         1 FAMS @F1@\n\
         1 FAMS @F2@\n\
         1 FAMC @F7@\n\
         1 FAMC @F8@\n",
    );
    let person = parsed.genealogy.individual("@I1@").unwrap();
    assert_eq!(person.spouse_family_id.as_deref(), Some("@F2@"));
    assert_eq!(person.child_family_id.as_deref(), Some("@F8@"));
}

#[test]
fn test_duplicate_children_are_kept() {
    let parsed = parse_gedcom_str("0 @F1@ FAM\n1 CHIL @I3@\n1 CHIL @I3@\n");
    let family = parsed.genealogy.family("@F1@").unwrap();
    assert_eq!(family.children, ["@I3@", "@I3@"]);
}

#[test]
fn test_garbage_lines_do_not_abort() {
    let parsed = parse_gedcom_str(
        "0 @I1@ INDI\n\
         ???\n\
         1\n\
         one NAME Bad /Level/\n\
         1 NAME Survivor /Doe/\n\
         1 BIRT\n\
         2 DATE sometime long ago\n",
    );
    let person = parsed.genealogy.individual("@I1@").unwrap();
    assert_eq!(person.name.as_deref(), Some("Survivor /Doe/"));
    let birthday = person.birthday.as_ref().unwrap();
    assert_eq!(birthday.raw(), "sometime long ago");
    assert!(!birthday.is_known());
    assert_eq!(parsed.stats.malformed, 3);
}

#[test]
fn test_assembler_exposes_progress() {
    let mut assembler = RecordAssembler::new();
    assembler.feed("0 @F1@ FAM");
    assembler.feed("1 HUSB @I1@");
    assert_eq!(
        assembler
            .genealogy()
            .family("@F1@")
            .and_then(|f| f.husband_id.as_deref()),
        Some("@I1@")
    );
}
