use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::GedDate;

/// One `INDI` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Record id, e.g. `@I1@`.
    pub id: String,
    /// Name as written, surname usually wrapped in slashes (`John /Doe/`).
    pub name: Option<String>,
    /// `M`, `F`, or whatever the file says.
    pub sex: Option<String>,
    pub birthday: Option<GedDate>,
    pub death_date: Option<GedDate>,
    /// Family in which this individual is a child (`FAMC`, last one wins).
    pub child_family_id: Option<String>,
    /// Family in which this individual is a spouse (`FAMS`, last one wins).
    pub spouse_family_id: Option<String>,
}

impl Individual {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Normalized birth date, if present and understood.
    pub fn birth(&self) -> Option<NaiveDate> {
        self.birthday.as_ref().and_then(GedDate::value)
    }

    /// Normalized death date, if present and understood.
    pub fn death(&self) -> Option<NaiveDate> {
        self.death_date.as_ref().and_then(GedDate::value)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(crate::UNKNOWN)
    }

    /// Surname: the `/surname/` segment when present, otherwise the last word.
    ///
    /// Text after the closing `/` is a suffix (`John /Doe/ Jr.`) and is never
    /// taken as the surname.
    pub fn surname(&self) -> Option<&str> {
        let name = self.name.as_deref()?;
        if name.contains('/') {
            return name
                .split('/')
                .nth(1)
                .map(str::trim)
                .filter(|s| !s.is_empty());
        }
        name.split_whitespace().last()
    }

    /// First given-name token, ignoring any `/surname/` part.
    pub fn first_name(&self) -> Option<&str> {
        let name = self.name.as_deref()?;
        let given = name.split('/').next().unwrap_or_default();
        given.split_whitespace().next()
    }
}
