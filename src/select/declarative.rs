//! File-driven part resolution.
//!
//! A mapping file names one model-identifying query per category. Two
//! syntaxes land in the same in-memory mapping: a JSON object (`.json`) or
//! minimal `key: value` lines (anything else), with `#` comments and blank
//! lines ignored and surrounding quotes stripped from values.

use crate::catalog::{Catalog, Part};
use crate::error::PlannerError;
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Reads the category → query mapping from disk.
pub fn load_mapping(path: &Path) -> Result<BTreeMap<String, String>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let mapping: BTreeMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        return Ok(mapping);
    }
    parse_simple_mapping(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// One `key: value` mapping per line.
fn parse_simple_mapping(raw: &str) -> Result<BTreeMap<String, String>> {
    let mut mapping = BTreeMap::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            bail!("line {}: expected 'category: model'", idx + 1);
        };
        let value = value.trim().trim_matches(['"', '\'']);
        mapping.insert(key.trim().to_string(), value.to_string());
    }
    Ok(mapping)
}

/// Resolves every mapping entry against the catalog.
///
/// Per entry: a case-insensitive exact match on `model` or `brand model`
/// wins outright; otherwise a case-insensitive substring match against
/// `brand model` must be unique. Entries with an empty query, and catalog
/// categories absent from the mapping, are left unselected. Resolution is
/// pure, so repeated runs over the same inputs pick identical parts.
pub fn resolve(
    catalog: &Catalog,
    mapping: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, Part>, PlannerError> {
    let mut chosen = BTreeMap::new();
    for (category, query) in mapping {
        if query.trim().is_empty() {
            continue;
        }
        let part = resolve_in_category(category, query, catalog.parts(category))?;
        chosen.insert(category.clone(), part.clone());
    }
    Ok(chosen)
}

fn resolve_in_category<'a>(
    category: &str,
    query: &str,
    candidates: &'a [Part],
) -> Result<&'a Part, PlannerError> {
    let needle = query.trim().to_lowercase();

    let exact: Vec<&Part> = candidates
        .iter()
        .filter(|part| {
            part.model.to_lowercase() == needle || part.label().to_lowercase() == needle
        })
        .collect();
    match exact.len() {
        1 => return Ok(exact[0]),
        0 => {}
        _ => {
            return Err(PlannerError::AmbiguousPart {
                category: category.to_string(),
                query: query.to_string(),
                matches: exact.iter().map(|part| part.label()).collect(),
            });
        }
    }

    let substring: Vec<&Part> = candidates
        .iter()
        .filter(|part| part.label().to_lowercase().contains(&needle))
        .collect();
    match substring.len() {
        0 => Err(PlannerError::PartNotFound {
            category: category.to_string(),
            query: query.to_string(),
        }),
        1 => Ok(substring[0]),
        _ => Err(PlannerError::AmbiguousPart {
            category: category.to_string(),
            query: query.to_string(),
            matches: substring.iter().map(|part| part.label()).collect(),
        }),
    }
}
