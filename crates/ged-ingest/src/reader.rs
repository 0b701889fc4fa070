//! Ingestion entry points: strings, readers and files.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use ged_model::Genealogy;
use serde::Serialize;
use tracing::{info, info_span};

use crate::assembler::{AssemblyStats, RecordAssembler};
use crate::error::{IngestError, Result};
use crate::line::classify_line;

/// Outcome of one parse run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGedcom {
    pub genealogy: Genealogy,
    pub stats: AssemblyStats,
}

/// Parse GEDCOM text that is already in memory.
pub fn parse_gedcom_str(input: &str) -> ParsedGedcom {
    let mut assembler = RecordAssembler::new();
    for line in input.lines() {
        assembler.feed(strip_bom(line));
    }
    let (genealogy, stats) = assembler.finish();
    ParsedGedcom { genealogy, stats }
}

/// Parse GEDCOM lines from any buffered reader.
///
/// Invalid UTF-8 is replaced rather than rejected so a stray byte only
/// affects the line it appears on.
pub fn parse_gedcom<R: BufRead>(reader: R) -> std::io::Result<ParsedGedcom> {
    let mut assembler = RecordAssembler::new();
    for_each_line(reader, |_, line| assembler.feed(line))?;
    let (genealogy, stats) = assembler.finish();
    Ok(ParsedGedcom { genealogy, stats })
}

/// Read and assemble a GEDCOM file.
pub fn read_gedcom(path: &Path) -> Result<ParsedGedcom> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let file = File::open(path).map_err(|source| IngestError::from_io(path, source))?;
    let parsed =
        parse_gedcom(BufReader::new(file)).map_err(|source| IngestError::from_io(path, source))?;

    info!(
        individuals = parsed.genealogy.individual_count(),
        families = parsed.genealogy.family_count(),
        lines = parsed.stats.lines,
        malformed = parsed.stats.malformed,
        unrecognized_tags = parsed.stats.unrecognized_tags,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(parsed)
}

/// Per-line classification echo, for inspecting how a file is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTrace {
    pub line_number: usize,
    pub input: String,
    /// `None` when the line could not be classified.
    pub classified: Option<ClassifiedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    pub level: u8,
    pub tag: String,
    pub valid: bool,
    pub value: String,
}

impl fmt::Display for LineTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--> {}", self.input)?;
        match &self.classified {
            Some(line) => write!(
                f,
                "<-- {}|{}|{} : {}",
                line.level,
                line.tag,
                if line.valid { 'Y' } else { 'N' },
                line.value
            ),
            None => write!(f, "<-- Invalid GEDCOM line"),
        }
    }
}

/// Classify every non-empty line of a reader without assembling records.
pub fn trace_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<LineTrace>> {
    let mut traces = Vec::new();
    for_each_line(reader, |line_number, line| {
        let input = line.trim();
        if input.is_empty() {
            return;
        }
        let classified = classify_line(input).ok().map(|parsed| ClassifiedLine {
            level: parsed.level,
            tag: parsed.tag.to_string(),
            valid: parsed.is_valid(),
            value: parsed.value.to_string(),
        });
        traces.push(LineTrace {
            line_number,
            input: input.to_string(),
            classified,
        });
    })?;
    Ok(traces)
}

/// Classify every line of a file.
pub fn trace_file(path: &Path) -> Result<Vec<LineTrace>> {
    let file = File::open(path).map_err(|source| IngestError::from_io(path, source))?;
    trace_lines(BufReader::new(file)).map_err(|source| IngestError::from_io(path, source))
}

fn for_each_line<R: BufRead>(
    mut reader: R,
    mut visit: impl FnMut(usize, &str),
) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    let mut line_number = 0usize;
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }
        line_number += 1;
        let decoded = String::from_utf8_lossy(&buffer);
        let line = if line_number == 1 {
            strip_bom(&decoded)
        } else {
            decoded.as_ref()
        };
        visit(line_number, line);
    }
}

fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}
