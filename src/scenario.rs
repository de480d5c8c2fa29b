//! Saved build scenarios.
//!
//! A scenario is one complete or partial build: at most one chosen part per
//! category, keyed by the category string. Unselected categories are simply
//! absent from `chosen`; absence is the one encoding of "none selected"
//! used throughout. The saved JSON embeds the full part records plus totals
//! so a file round-trips without the catalog it was built from.

use crate::catalog::Part;
use crate::error::PlannerError;
use crate::summary::Summary;
use crate::write_atomic;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub created_at: DateTime<Local>,
    pub chosen: BTreeMap<String, Part>,
}

impl Scenario {
    pub fn new(name: String, chosen: BTreeMap<String, Part>) -> Self {
        Self {
            name,
            created_at: Local::now(),
            chosen,
        }
    }
}

/// Timestamp-derived fallback name for unnamed scenarios.
pub fn default_scenario_name() -> String {
    Local::now().format("scenario-%Y%m%d-%H%M%S").to_string()
}

/// Writes the scenario JSON to `dir`, named after the scenario.
///
/// The payload carries the totals alongside the choices; the write is atomic.
pub fn save(scenario: &Scenario, summary: &Summary, dir: &Path) -> Result<PathBuf, PlannerError> {
    let path = dir.join(format!("{}.json", scenario.name));
    let payload = json!({
        "name": scenario.name,
        "created_at": scenario.created_at,
        "chosen": scenario.chosen,
        "totals": {
            "weight_g": summary.total_weight_g,
            "price": summary.total_price,
        },
    });
    let mut bytes = serde_json::to_vec_pretty(&payload).map_err(|err| PlannerError::Write {
        path: path.clone(),
        source: std::io::Error::other(err),
    })?;
    bytes.push(b'\n');
    write_atomic(&path, &bytes)?;
    Ok(path)
}

/// Reads a saved scenario back. Extra fields (the stored totals) are ignored;
/// totals are always recomputed from the choices.
pub fn load(path: &Path) -> Result<Scenario> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing scenario {}", path.display()))
}

/// The most recently saved scenario in `dir`, by file modification time.
/// `None` when the directory is absent or holds no scenario files.
pub fn load_last(dir: &Path) -> Result<Option<Scenario>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(None),
    };

    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .with_context(|| format!("inspecting {}", path.display()))?;
        if newest.as_ref().is_none_or(|(best, _)| modified > *best) {
            newest = Some((modified, path));
        }
    }

    match newest {
        Some((_, path)) => Ok(Some(load(&path)?)),
        None => Ok(None),
    }
}
