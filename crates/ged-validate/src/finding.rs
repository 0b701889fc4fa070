//! Validation findings.
//!
//! A finding is one violation of one rule for one subject. Findings are the
//! designed output of validation, not errors.

use std::fmt;

use ged_model::{Family, Genealogy, Individual, UNKNOWN};
use serde::{Deserialize, Serialize};

use crate::rule::RuleId;

/// Finding severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Data that cannot be right.
    Error,
    /// Data that is unusual and worth a second look.
    Anomaly,
}

impl Severity {
    /// Label used in finding messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Anomaly => "ANOMALY",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The record a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Subject {
    Individual { id: String, name: Option<String> },
    Family {
        id: String,
        husband_name: String,
        wife_name: String,
    },
}

impl Subject {
    pub fn individual(individual: &Individual) -> Self {
        Self::Individual {
            id: individual.id.clone(),
            name: individual.name.clone(),
        }
    }

    /// Family subject naming both spouses; unresolved spouses are `Unknown`.
    pub fn family(genealogy: &Genealogy, family: &Family) -> Self {
        Self::Family {
            id: family.id.clone(),
            husband_name: genealogy.name_of(family.husband_id.as_deref()).to_string(),
            wife_name: genealogy.name_of(family.wife_id.as_deref()).to_string(),
        }
    }

    /// Subject for a family id that may not resolve.
    pub fn family_id(genealogy: &Genealogy, id: &str) -> Self {
        match genealogy.family(id) {
            Some(family) => Self::family(genealogy, family),
            None => Self::Family {
                id: id.to_string(),
                husband_name: UNKNOWN.to_string(),
                wife_name: UNKNOWN.to_string(),
            },
        }
    }

    /// Subject for an individual id that may not resolve.
    pub fn individual_id(genealogy: &Genealogy, id: &str) -> Self {
        Self::Individual {
            id: id.to_string(),
            name: genealogy.individual(id).and_then(|i| i.name.clone()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Individual { id, .. } | Self::Family { id, .. } => id,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual {
                id,
                name: Some(name),
            } => write!(f, "Individual {id} ({name})"),
            Self::Individual { id, name: None } => write!(f, "Individual {id}"),
            Self::Family {
                id,
                husband_name,
                wife_name,
            } => write!(f, "Family {id} ({husband_name} and {wife_name})"),
        }
    }
}

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub severity: Severity,
    pub subject: Subject,
    /// Human-readable reason, without trailing period.
    pub message: String,
}

impl Finding {
    pub fn new(rule: RuleId, subject: Subject, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            subject,
            message: message.into(),
        }
    }

    pub fn individual(rule: RuleId, individual: &Individual, message: impl Into<String>) -> Self {
        Self::new(rule, Subject::individual(individual), message)
    }

    pub fn family(
        rule: RuleId,
        genealogy: &Genealogy,
        family: &Family,
        message: impl Into<String>,
    ) -> Self {
        Self::new(rule, Subject::family(genealogy, family), message)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}: {}.",
            self.severity, self.rule, self.subject, self.message
        )
    }
}
