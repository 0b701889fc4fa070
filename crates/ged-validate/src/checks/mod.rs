//! Rule implementations.
//!
//! Each module groups rules over the same part of the graph. A rule is a
//! plain function from [`RuleContext`](crate::engine::RuleContext) to
//! findings. Comparisons involving an unknown date are skipped.

pub mod children;
pub mod dates;
pub mod kinship;
pub mod marriage;
pub mod membership;
pub mod spouses;
pub mod uniqueness;

use chrono::NaiveDate;
use ged_model::GedDate;

/// True only when both dates are known and `left > right`.
fn later(left: Option<NaiveDate>, right: Option<NaiveDate>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l > r)
}

/// Raw text of an optional date for messages.
fn display(date: Option<&GedDate>) -> &str {
    date.map_or("", GedDate::raw)
}
