//! Part records and per-row parsing.

use crate::error::PlannerError;
use serde::{Deserialize, Serialize};

/// One row of the parts catalog.
///
/// Identity is positional; nothing beyond "one row per physical item option"
/// is enforced. Weight and price are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub category: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub variant: String,
    pub weight_g: f64,
    pub price: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub link: String,
}

impl Part {
    /// `Brand Model`, the label used for matching and display.
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// One-line listing used by prompts and file-driven output.
    pub fn display_line(&self) -> String {
        format!(
            "{} {}  [{}]  {:.0} g  ${:.0}",
            self.brand, self.model, self.variant, self.weight_g, self.price
        )
    }

    /// Parses one catalog record. `line` is the 1-based file line, used in
    /// diagnostics only.
    pub fn from_record(line: usize, record: &csv::StringRecord) -> Result<Self, PlannerError> {
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        let required = |idx: usize, name: &str| -> Result<String, PlannerError> {
            let value = field(idx);
            if value.is_empty() {
                return Err(PlannerError::CatalogFormat {
                    line,
                    reason: format!("missing required field '{name}'"),
                });
            }
            Ok(value)
        };

        Ok(Part {
            category: required(0, "category")?,
            brand: required(1, "brand")?,
            model: required(2, "model")?,
            variant: field(3),
            weight_g: parse_measure(record.get(4).unwrap_or(""), "weight_g", line)?,
            price: parse_measure(record.get(5).unwrap_or(""), "price", line)?,
            notes: field(6),
            source: field(7),
            link: field(8),
        })
    }
}

/// An empty measure reads as zero; anything else must parse non-negative.
fn parse_measure(raw: &str, name: &str, line: usize) -> Result<f64, PlannerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| PlannerError::CatalogFormat {
        line,
        reason: format!("{name} '{trimmed}' is not a number"),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::CatalogFormat {
            line,
            reason: format!("{name} '{trimmed}' must be non-negative"),
        });
    }
    Ok(value)
}

/// Formats a measure for the catalog file: integral values stay integral.
pub(crate) fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
