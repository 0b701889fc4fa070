use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::GedDate;

/// One `FAM` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Record id, e.g. `@F1@`.
    pub id: String,
    pub husband_id: Option<String>,
    pub wife_id: Option<String>,
    pub marriage_date: Option<GedDate>,
    pub divorce_date: Option<GedDate>,
    /// Child ids in `CHIL` order. Duplicates are kept.
    pub children: Vec<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn marriage(&self) -> Option<NaiveDate> {
        self.marriage_date.as_ref().and_then(GedDate::value)
    }

    pub fn divorce(&self) -> Option<NaiveDate> {
        self.divorce_date.as_ref().and_then(GedDate::value)
    }

    /// Husband and wife ids that are set, husband first.
    pub fn spouse_ids(&self) -> impl Iterator<Item = &str> {
        self.husband_id
            .as_deref()
            .into_iter()
            .chain(self.wife_id.as_deref())
    }
}
