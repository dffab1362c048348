//! Rendering of seed reports for the terminal

use crate::models::{OutputFormat, ReportSummary, SeedReport};
use anyhow::Result;
use prettytable::{format, Cell, Row, Table};

/// Render `report` in the requested format
pub fn render(report: &SeedReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ReportSummary::from(report))?),
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::List => Ok(render_list(report)),
    }
}

fn render_table(report: &SeedReport) -> String {
    if report.outcomes.is_empty() {
        return "No years processed.".to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.set_titles(Row::new(vec![
        Cell::new("YEAR").style_spec("b"),
        Cell::new("STATUS").style_spec("b"),
        Cell::new("DETAIL").style_spec("b"),
    ]));

    for item in &report.outcomes {
        table.add_row(Row::new(vec![
            Cell::new(&item.year.to_string()),
            Cell::new(item.outcome.as_str()),
            Cell::new(&item.outcome.detail()),
        ]));
    }

    format!(
        "{}{} saved, {} failed",
        table,
        report.saved(),
        report.failed()
    )
}

fn render_list(report: &SeedReport) -> String {
    if report.outcomes.is_empty() {
        return "[]".to_string();
    }

    report
        .outcomes
        .iter()
        .map(|item| {
            format!(
                " • {}: {} | {}",
                item.year,
                item.outcome.as_str(),
                item.outcome.detail()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
