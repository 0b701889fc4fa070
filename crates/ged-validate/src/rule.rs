//! Rule catalog.
//!
//! Every rule has a stable identifier (`US01`..`US26`), a one-line
//! description, and a fixed severity. US07 and US11 are not part of the
//! catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::{RuleContext, execute_rule};
use crate::finding::{Finding, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleId {
    Us01,
    Us02,
    Us03,
    Us04,
    Us05,
    Us06,
    Us08,
    Us09,
    Us10,
    Us12,
    Us13,
    Us14,
    Us15,
    Us16,
    Us17,
    Us18,
    Us19,
    Us20,
    Us21,
    Us22,
    Us23,
    Us24,
    Us25,
    Us26,
}

impl RuleId {
    /// The full catalog in evaluation order.
    pub const ALL: [RuleId; 24] = [
        Self::Us01,
        Self::Us02,
        Self::Us03,
        Self::Us04,
        Self::Us05,
        Self::Us06,
        Self::Us08,
        Self::Us09,
        Self::Us10,
        Self::Us12,
        Self::Us13,
        Self::Us14,
        Self::Us15,
        Self::Us16,
        Self::Us17,
        Self::Us18,
        Self::Us19,
        Self::Us20,
        Self::Us21,
        Self::Us22,
        Self::Us23,
        Self::Us24,
        Self::Us25,
        Self::Us26,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us01 => "US01",
            Self::Us02 => "US02",
            Self::Us03 => "US03",
            Self::Us04 => "US04",
            Self::Us05 => "US05",
            Self::Us06 => "US06",
            Self::Us08 => "US08",
            Self::Us09 => "US09",
            Self::Us10 => "US10",
            Self::Us12 => "US12",
            Self::Us13 => "US13",
            Self::Us14 => "US14",
            Self::Us15 => "US15",
            Self::Us16 => "US16",
            Self::Us17 => "US17",
            Self::Us18 => "US18",
            Self::Us19 => "US19",
            Self::Us20 => "US20",
            Self::Us21 => "US21",
            Self::Us22 => "US22",
            Self::Us23 => "US23",
            Self::Us24 => "US24",
            Self::Us25 => "US25",
            Self::Us26 => "US26",
        }
    }

    /// Look up a rule by identifier, ignoring case (`us04`, `US04`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(value))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Us01 => "Dates before current date",
            Self::Us02 => "Birth before marriage",
            Self::Us03 => "Birth before death",
            Self::Us04 => "Marriage before divorce",
            Self::Us05 => "Marriage before death",
            Self::Us06 => "Divorce before death",
            Self::Us08 => "Birth before marriage of parents",
            Self::Us09 => "Birth before death of parents",
            Self::Us10 => "Marriage after 14",
            Self::Us12 => "Parents not too old",
            Self::Us13 => "Siblings spacing",
            Self::Us14 => "Multiple births <= 5",
            Self::Us15 => "Fewer than 15 siblings",
            Self::Us16 => "Male last names",
            Self::Us17 => "No marriages to descendants",
            Self::Us18 => "Siblings should not marry",
            Self::Us19 => "First cousins should not marry",
            Self::Us20 => "Aunts and uncles",
            Self::Us21 => "Correct gender for role",
            Self::Us22 => "Unique IDs",
            Self::Us23 => "Unique name and birth date",
            Self::Us24 => "Unique families by spouses",
            Self::Us25 => "Unique first names",
            Self::Us26 => "Corresponding entries",
        }
    }

    /// Impossible data is an error; suspicious data is an anomaly.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Us01
            | Self::Us02
            | Self::Us03
            | Self::Us04
            | Self::Us05
            | Self::Us06
            | Self::Us08
            | Self::Us09
            | Self::Us10
            | Self::Us21
            | Self::Us22 => Severity::Error,
            Self::Us12
            | Self::Us13
            | Self::Us14
            | Self::Us15
            | Self::Us16
            | Self::Us17
            | Self::Us18
            | Self::Us19
            | Self::Us20
            | Self::Us23
            | Self::Us24
            | Self::Us25
            | Self::Us26 => Severity::Anomaly,
        }
    }
}

impl RuleId {
    /// Run this rule alone.
    pub fn evaluate(self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        execute_rule(self, ctx)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown rule '{s}' (expected US01..US26)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ordered_and_unique() {
        let mut sorted = RuleId::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, RuleId::ALL.to_vec());
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(RuleId::parse("us04"), Some(RuleId::Us04));
        assert_eq!(" US26 ".parse::<RuleId>(), Ok(RuleId::Us26));
        assert_eq!(RuleId::parse("US07"), None);
        assert_eq!(RuleId::parse("US11"), None);
        assert!("bogus".parse::<RuleId>().is_err());
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&RuleId::Us13).unwrap();
        assert_eq!(json, "\"US13\"");
    }
}
