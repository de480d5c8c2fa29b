//! Tabular and readable exports of a scenario.
//!
//! Both renderers are pure functions of the summary; the writers compose the
//! complete byte content first and persist it atomically. The third export,
//! the scenario JSON itself, lives in [`crate::scenario`]. All three carry
//! the same totals.

use crate::error::PlannerError;
use crate::summary::Summary;
use crate::write_atomic;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const TABLE_HEADER: [&str; 6] = ["Category", "Brand", "Model", "Variant", "Weight (g)", "Price"];
pub const CURRENCY_SUFFIX: &str = "SGD";

/// Renders the delimited table: header, one row per selected category, and a
/// closing totals row.
pub fn render_table(summary: &Summary) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(TABLE_HEADER)?;
        for row in &summary.rows {
            writer.write_record([
                row.category.as_str(),
                row.brand.as_str(),
                row.model.as_str(),
                row.variant.as_str(),
                &format!("{:.0}", row.weight_g),
                &format!("{:.0}", row.price),
            ])?;
        }
        writer.write_record([
            "Totals",
            "",
            "",
            "",
            &format!("{:.0}", summary.total_weight_g),
            &format!("{:.0}", summary.total_price),
        ])?;
        writer.flush()?;
    }
    String::from_utf8(buf).context("rendered table was not UTF-8")
}

/// Renders the Markdown summary: title, the same table, and a bold totals
/// line.
pub fn render_markdown(name: &str, summary: &Summary) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "# Scenario: {name}");
    doc.push('\n');
    doc.push_str("| Category | Brand | Model | Variant | Weight (g) | Price |\n");
    doc.push_str("|---|---|---|---|---:|---:|\n");
    for row in &summary.rows {
        let _ = writeln!(
            doc,
            "| {} | {} | {} | {} | {:.0} | {:.0} |",
            row.category, row.brand, row.model, row.variant, row.weight_g, row.price
        );
    }
    let _ = writeln!(
        doc,
        "\n**Totals:** {:.0} g,  ${:.0} {CURRENCY_SUFFIX}",
        summary.total_weight_g, summary.total_price
    );
    doc
}

/// Writes `<name>.csv` and `<name>.md` under `dir`, returning both paths.
pub fn write_reports(dir: &Path, name: &str, summary: &Summary) -> Result<(PathBuf, PathBuf)> {
    let table = render_table(summary)?;
    let markdown = render_markdown(name, summary);

    let csv_path = dir.join(format!("{name}.csv"));
    write_atomic(&csv_path, table.as_bytes())?;
    let md_path = dir.join(format!("{name}.md"));
    write_atomic(&md_path, markdown.as_bytes())?;
    Ok((csv_path, md_path))
}

/// The totals row of a rendered table, parsed back out. Test seam shared
/// with the CLI tests.
pub fn table_totals(table: &str) -> Result<(f64, f64), PlannerError> {
    let parse = |raw: &str| {
        raw.parse::<f64>()
            .map_err(|_| PlannerError::InvalidInput(format!("'{raw}' is not a number")))
    };
    let last = table
        .lines()
        .filter(|line| !line.trim().is_empty())
        .next_back()
        .ok_or_else(|| PlannerError::InvalidInput("empty table".to_string()))?;
    let fields: Vec<&str> = last.split(',').collect();
    if fields.len() != TABLE_HEADER.len() || fields[0] != "Totals" {
        return Err(PlannerError::InvalidInput(format!(
            "unexpected totals row '{last}'"
        )));
    }
    Ok((parse(fields[4])?, parse(fields[5])?))
}
