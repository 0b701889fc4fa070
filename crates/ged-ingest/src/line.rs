//! Line classification.
//!
//! Every GEDCOM line has the shape `<level> <tag> [<value>]`. Classification
//! splits a line into those parts and checks the tag against the recognized
//! set. Unrecognized tags are still returned; validity is informational.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Tags this checker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Indi,
    Name,
    Sex,
    Birt,
    Deat,
    Famc,
    Fams,
    Fam,
    Marr,
    Husb,
    Wife,
    Chil,
    Div,
    Date,
    Head,
    Trlr,
    Note,
}

impl Tag {
    pub const ALL: [Tag; 17] = [
        Tag::Indi,
        Tag::Name,
        Tag::Sex,
        Tag::Birt,
        Tag::Deat,
        Tag::Famc,
        Tag::Fams,
        Tag::Fam,
        Tag::Marr,
        Tag::Husb,
        Tag::Wife,
        Tag::Chil,
        Tag::Div,
        Tag::Date,
        Tag::Head,
        Tag::Trlr,
        Tag::Note,
    ];

    /// Look up a tag by its exact (uppercase) mnemonic.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Indi => "INDI",
            Tag::Name => "NAME",
            Tag::Sex => "SEX",
            Tag::Birt => "BIRT",
            Tag::Deat => "DEAT",
            Tag::Famc => "FAMC",
            Tag::Fams => "FAMS",
            Tag::Fam => "FAM",
            Tag::Marr => "MARR",
            Tag::Husb => "HUSB",
            Tag::Wife => "WIFE",
            Tag::Chil => "CHIL",
            Tag::Div => "DIV",
            Tag::Date => "DATE",
            Tag::Head => "HEAD",
            Tag::Trlr => "TRLR",
            Tag::Note => "NOTE",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified line borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GedcomLine<'a> {
    pub level: u8,
    /// Second token; an id such as `@I1@` on level-0 record lines.
    pub tag: &'a str,
    /// Rest of the line after the tag, possibly empty.
    pub value: &'a str,
}

impl GedcomLine<'_> {
    /// The recognized tag, if any.
    pub fn known_tag(&self) -> Option<Tag> {
        Tag::parse(self.tag)
    }

    pub fn is_valid(&self) -> bool {
        self.known_tag().is_some()
    }
}

/// Why a line could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("empty line")]
    Empty,

    #[error("line has no tag")]
    MissingTag,

    #[error("level '{level}' is not a small non-negative integer")]
    InvalidLevel { level: String },
}

/// Split one line into level, tag and value.
///
/// The line is trimmed first. The value is everything after the second
/// space, left unsplit.
pub fn classify_line(line: &str) -> Result<GedcomLine<'_>, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(LineError::Empty);
    }

    let mut parts = line.splitn(3, ' ');
    let level = parts.next().unwrap_or_default();
    let tag = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();

    if tag.is_empty() {
        return Err(LineError::MissingTag);
    }

    let level = level.parse::<u8>().map_err(|_| LineError::InvalidLevel {
        level: level.to_string(),
    })?;

    Ok(GedcomLine { level, tag, value })
}
