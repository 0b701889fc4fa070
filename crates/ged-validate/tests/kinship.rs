//! Relative-marriage rules (US17 to US20).

mod common;

use common::{child, couple, family, person, today};
use ged_model::{Genealogy, Individual};
use ged_validate::{Kinship, RuleContext, RuleId, execute_rule};

fn male(id: &str) -> Individual {
    person(id, &format!("{id} /Lee/"), "M", None)
}

fn female(id: &str) -> Individual {
    person(id, &format!("{id} /Lee/"), "F", None)
}

fn reported(genealogy: &Genealogy, rule: RuleId) -> Vec<String> {
    execute_rule(rule, &RuleContext::new(genealogy, today()))
        .into_iter()
        .map(|f| format!("{}: {}", f.subject.id(), f.message))
        .collect()
}

/// Grandparents @I1@ + @I2@ (@F1@) with children @I3@ (M) and @I4@ (F).
/// @I3@ + @I5@ (@F2@) have @I7@ (M); @I4@ + @I6@ (@F3@) have @I8@ (F).
fn two_branches() -> Genealogy {
    let mut genealogy = Genealogy::new();
    couple(&mut genealogy, "@F1@", male("@I1@"), female("@I2@"), &["@I3@", "@I4@"]);

    let mut son = male("@I3@");
    son.child_family_id = Some("@F1@".to_string());
    couple(&mut genealogy, "@F2@", son, female("@I5@"), &["@I7@"]);

    let mut daughter = female("@I4@");
    daughter.child_family_id = Some("@F1@".to_string());
    couple(&mut genealogy, "@F3@", male("@I6@"), daughter, &["@I8@"]);

    child(&mut genealogy, "@F2@", male("@I7@"));
    child(&mut genealogy, "@F3@", female("@I8@"));
    genealogy
}

#[test]
fn test_kinship_lookups() {
    let genealogy = two_branches();
    let kinship = Kinship::build(&genealogy);

    assert_eq!(kinship.parents("@I7@").into_iter().collect::<Vec<_>>(), vec!["@I3@", "@I5@"]);
    assert_eq!(
        kinship.grandparent_families("@I8@").into_iter().collect::<Vec<_>>(),
        vec!["@F1@"]
    );
    assert!(kinship.are_siblings("@I3@", "@I4@"));
    assert!(!kinship.are_siblings("@I7@", "@I8@"));
    assert!(!kinship.are_siblings("@I1@", "@I2@"));
}

#[test]
fn test_famc_pointer_counts_as_parentage() {
    let mut genealogy = Genealogy::new();
    genealogy.insert_family(family("@F1@", Some("@I1@"), Some("@I2@"), &[]));
    child(&mut genealogy, "@F1@", male("@I3@"));

    let kinship = Kinship::build(&genealogy);
    assert!(kinship.parents("@I3@").contains("@I2@"));
}

#[test]
fn test_marriage_to_own_child() {
    let mut genealogy = two_branches();
    genealogy.insert_family(family("@F4@", Some("@I1@"), Some("@I4@"), &[]));
    genealogy.insert_family(family("@F5@", Some("@I3@"), Some("@I2@"), &[]));

    assert_eq!(
        reported(&genealogy, RuleId::Us17),
        vec![
            "@F4@: wife @I4@ is a child of husband @I1@",
            "@F5@: husband @I3@ is a child of wife @I2@",
        ]
    );
}

#[test]
fn test_both_spouses_listed_as_children() {
    let mut genealogy = two_branches();
    genealogy.insert_family(family("@F4@", Some("@I3@"), Some("@I4@"), &[]));

    assert_eq!(
        reported(&genealogy, RuleId::Us18),
        vec!["@F4@: husband @I3@ and wife @I4@ are both listed as children"]
    );
    // siblings are not cousins
    assert!(reported(&genealogy, RuleId::Us19).is_empty());
}

#[test]
fn test_first_cousins() {
    let mut genealogy = two_branches();
    genealogy.insert_family(family("@F4@", Some("@I7@"), Some("@I8@"), &[]));

    assert_eq!(
        reported(&genealogy, RuleId::Us19),
        vec!["@F4@: husband @I7@ and wife @I8@ are first cousins through family @F1@"]
    );
    assert!(reported(&genealogy, RuleId::Us20).is_empty());
    assert!(reported(&genealogy, RuleId::Us17).is_empty());
}

#[test]
fn test_aunt_or_uncle() {
    let mut genealogy = two_branches();
    // @I8@'s mother @I4@ is a sibling of @I3@
    genealogy.insert_family(family("@F4@", Some("@I3@"), Some("@I8@"), &[]));
    // spouse order does not matter
    genealogy.insert_family(family("@F5@", Some("@I7@"), Some("@I4@"), &[]));

    assert_eq!(
        reported(&genealogy, RuleId::Us20),
        vec![
            "@F4@: @I3@ is a sibling of @I4@, a parent of @I8@",
            "@F5@: @I4@ is a sibling of @I3@, a parent of @I7@",
        ]
    );
}

#[test]
fn test_unrelated_spouses_are_clean() {
    let genealogy = two_branches();
    for rule in [RuleId::Us17, RuleId::Us18, RuleId::Us19, RuleId::Us20] {
        assert!(reported(&genealogy, rule).is_empty(), "{rule}");
    }
}
