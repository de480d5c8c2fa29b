//! Parts catalog build planner.
//!
//! Leaf-first: [`catalog`] loads and appends to the parts file, [`select`]
//! turns a catalog into a set of chosen parts (interactive, declarative, or
//! cloned from a saved scenario), [`summary`] folds the choices into totals,
//! and [`report`]/[`scenario`] write the exports. The `partsbench` binary
//! wires these together.

pub mod catalog;
pub mod error;
pub mod prompt;
pub mod report;
pub mod scenario;
pub mod select;
pub mod summary;

pub use catalog::{Catalog, Part, load_catalog_from_path};
pub use error::PlannerError;
pub use scenario::Scenario;
pub use summary::{Summary, summarize};

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{env, fs};

const ENV_DATA_DIR: &str = "PARTSBENCH_DATA_DIR";
const PARTS_FILE: &str = "parts.csv";
const SCENARIO_DIR: &str = "scenarios";
const REPORT_DIR: &str = "reports";

/// Directory holding the catalog, saved scenarios, and reports.
///
/// Resolution order: explicit flag, then `PARTSBENCH_DATA_DIR`, then the
/// current directory.
#[derive(Debug, Clone)]
pub struct DataRoot {
    root: PathBuf,
}

impl DataRoot {
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        if let Some(root) = flag {
            return Self { root };
        }
        if let Ok(env_root) = env::var(ENV_DATA_DIR) {
            if !env_root.is_empty() {
                return Self {
                    root: PathBuf::from(env_root),
                };
            }
        }
        Self {
            root: PathBuf::from("."),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(PARTS_FILE)
    }

    pub fn scenario_dir(&self) -> PathBuf {
        self.root.join(SCENARIO_DIR)
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root.join(REPORT_DIR)
    }

    /// Creates the scenario and report directories if absent.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.scenario_dir(), self.report_dir()] {
            fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Writes `bytes` to `path` as one complete file.
///
/// The content lands in a temp file in the destination directory and is
/// persisted over the target, so a failed write never leaves a partial file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PlannerError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source: std::io::Error| PlannerError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
