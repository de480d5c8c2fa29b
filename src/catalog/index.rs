//! Grouped, display-ordered view of the parts file.
//!
//! Grouping preserves file order within each category and first-seen order
//! across categories; both orders drive every prompt and report. The loader
//! is strict about the file being present but lenient about individual rows:
//! a malformed row is reported on stderr and skipped so one bad line cannot
//! take the whole catalog down.

use crate::catalog::model::Part;
use crate::error::PlannerError;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Parts grouped by their free-form category string.
#[derive(Debug, Default)]
pub struct Catalog {
    order: Vec<String>,
    by_category: BTreeMap<String, Vec<Part>>,
}

impl Catalog {
    /// Appends a part to its category, creating the category on first use.
    pub fn insert(&mut self, part: Part) {
        let slot = self.by_category.entry(part.category.clone()).or_default();
        if slot.is_empty() {
            self.order.push(part.category.clone());
        }
        slot.push(part);
    }

    /// Category names in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Parts of one category in file order. Empty for unknown categories.
    pub fn parts(&self, category: &str) -> &[Part] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn category_count(&self) -> usize {
        self.order.len()
    }

    pub fn part_count(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Loads and groups the catalog from disk.
///
/// A missing file is fatal ([`PlannerError::CatalogMissing`]); malformed rows
/// are reported and skipped.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    if !path.is_file() {
        return Err(PlannerError::CatalogMissing {
            path: path.to_path_buf(),
        }
        .into());
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut catalog = Catalog::default();
    for (idx, result) in reader.records().enumerate() {
        // Header occupies line 1; the position is exact unless a quoted
        // field spans lines, in which case the enumerate fallback is close.
        let fallback_line = idx + 2;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                eprintln!("skipping catalog row {fallback_line}: {err}");
                continue;
            }
        };
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(fallback_line);
        match Part::from_record(line, &record) {
            Ok(part) => catalog.insert(part),
            Err(err) => eprintln!("skipping {err}"),
        }
    }
    Ok(catalog)
}
