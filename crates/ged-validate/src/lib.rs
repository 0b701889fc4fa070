//! Genealogical consistency rules.
//!
//! [`validate`] runs the rule catalog against a parsed [`Genealogy`] and
//! returns a [`ValidationReport`]. Rules read the registries only; they never
//! repair or drop records.
//!
//! [`Genealogy`]: ged_model::Genealogy

pub mod checks;
pub mod engine;
pub mod finding;
pub mod report;
pub mod rule;

pub use checks::kinship::Kinship;
pub use engine::{RuleContext, RuleEngine, ValidationOptions, execute_rule, validate};
pub use finding::{Finding, Severity, Subject};
pub use report::ValidationReport;
pub use rule::RuleId;
