//! Data model for GEDCOM genealogies.
//!
//! Individuals and families are stored in id-ordered registries inside a
//! [`Genealogy`]. Dates keep their raw text next to a normalized
//! [`chrono::NaiveDate`] so rules can compare them while reports still show
//! what the file said.

pub mod date;
pub mod family;
pub mod genealogy;
pub mod individual;
pub mod listing;

pub use date::{
    DatePrecision, GedDate, add_years, months_between, normalize_date, parse_with_precision,
    years_between,
};
pub use family::Family;
pub use genealogy::Genealogy;
pub use individual::Individual;
pub use listing::{FamilyRow, IndividualRow, family_rows, individual_rows};

/// Display value for a reference that cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Display value for a field that was never set.
pub const NOT_AVAILABLE: &str = "NA";
