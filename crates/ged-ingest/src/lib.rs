//! GEDCOM ingestion.
//!
//! Turns line-oriented GEDCOM text into a [`ged_model::Genealogy`]:
//! [`line`] classifies single lines, [`assembler`] runs the record state
//! machine, [`reader`] wires both to strings, readers and files.

pub mod assembler;
pub mod error;
pub mod line;
pub mod reader;

pub use assembler::{AssemblyStats, RecordAssembler, is_family_id, is_individual_id};
pub use error::{IngestError, Result};
pub use line::{GedcomLine, LineError, Tag, classify_line};
pub use reader::{
    ClassifiedLine, LineTrace, ParsedGedcom, parse_gedcom, parse_gedcom_str, read_gedcom,
    trace_file, trace_lines,
};
