use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ged_model::{FamilyRow, IndividualRow, family_rows, individual_rows};
use ged_validate::{RuleId, Severity, ValidationReport};

use crate::types::CheckOutcome;

/// How tables decide whether to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Styling {
    /// Style only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Render the full table report for one checked file.
pub fn render_check(outcome: &CheckOutcome, listing: bool, styling: Styling) -> String {
    let mut out = String::new();
    out.push_str(&format!("File: {}\n", outcome.file.display()));
    let stats = outcome.parsed.stats;
    out.push_str(&format!(
        "Lines: {} ({} malformed, {} unrecognized tags)\n",
        stats.lines, stats.malformed, stats.unrecognized_tags
    ));

    if listing {
        let genealogy = &outcome.parsed.genealogy;
        out.push_str("\nIndividuals\n");
        out.push_str(&individuals_table(&individual_rows(genealogy), styling).to_string());
        out.push_str("\n\nFamilies\n");
        out.push_str(&families_table(&family_rows(genealogy), styling).to_string());
        out.push('\n');
    }

    let report = &outcome.report;
    out.push_str("\nRules\n");
    out.push_str(&rule_summary_table(report, styling).to_string());
    out.push('\n');
    if report.has_findings() {
        out.push_str("\nFindings\n");
        out.push_str(&findings_table(report, styling).to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} error(s), {} anomaly(ies)\n",
        report.error_count(),
        report.anomaly_count()
    ));
    out
}

/// Render the JSON report for one checked file.
pub fn render_json(outcome: &CheckOutcome) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(&outcome.json_report())?;
    json.push('\n');
    Ok(json)
}

pub fn individuals_table(rows: &[IndividualRow], styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Sex"),
        header_cell("Birthday"),
        header_cell("Death"),
        header_cell("Child"),
        header_cell("Spouse"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 2, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            id_cell(&row.id),
            Cell::new(&row.name),
            Cell::new(&row.sex),
            value_cell(&row.birthday),
            value_cell(&row.death),
            value_cell(&row.child_family),
            value_cell(&row.spouse_family),
        ]);
    }
    table
}

pub fn families_table(rows: &[FamilyRow], styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Married"),
        header_cell("Divorced"),
        header_cell("Husband ID"),
        header_cell("Husband Name"),
        header_cell("Wife ID"),
        header_cell("Wife Name"),
        header_cell("Children"),
    ]);
    apply_table_style(&mut table, styling);
    for row in rows {
        table.add_row(vec![
            id_cell(&row.id),
            value_cell(&row.married),
            value_cell(&row.divorced),
            value_cell(&row.husband_id),
            value_cell(&row.husband_name),
            value_cell(&row.wife_id),
            value_cell(&row.wife_name),
            Cell::new(&row.children),
        ]);
    }
    table
}

/// Per-rule finding counts with a total row.
pub fn rule_summary_table(report: &ValidationReport, styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Description"),
        header_cell("Severity"),
        header_cell("Findings"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total = 0usize;
    for (rule, count) in report.counts_by_rule() {
        total += count;
        table.add_row(vec![
            Cell::new(rule),
            Cell::new(rule.description()),
            severity_cell(rule.severity()),
            count_cell(count, severity_color(rule.severity())),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rule(s)", report.rules.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total, Color::Red).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn findings_table(report: &ValidationReport, styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Rule"),
        header_cell("Subject"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table, styling);
    apply_findings_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for finding in &report.findings {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(finding.rule),
            Cell::new(&finding.subject),
            Cell::new(&finding.message),
        ]);
    }
    table
}

/// The rule catalog.
pub fn rules_table(styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Description"),
        header_cell("Severity"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 2, CellAlignment::Center);
    for rule in RuleId::ALL {
        table.add_row(vec![
            Cell::new(rule),
            Cell::new(rule.description()),
            severity_cell(rule.severity()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table, styling: Styling) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    match styling {
        Styling::Auto => {}
        Styling::Always => {
            table.enforce_styling();
        }
        Styling::Never => {
            // plain output is not wrapped to a terminal width
            table
                .force_no_tty()
                .set_content_arrangement(ContentArrangement::Disabled);
        }
    }
}

fn apply_findings_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new(severity.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Anomaly => Cell::new(severity.label()).fg(Color::Yellow),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Anomaly => Color::Yellow,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn id_cell(id: &str) -> Cell {
    Cell::new(id).fg(Color::Blue).add_attribute(Attribute::Bold)
}

/// Placeholder values (`NA`, `Unknown`) are dimmed.
fn value_cell(value: &str) -> Cell {
    if value == ged_model::NOT_AVAILABLE || value == ged_model::UNKNOWN {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
