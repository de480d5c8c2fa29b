#![allow(dead_code)]

use partsbench::catalog::{Catalog, Part};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::{fs, io::Write};
use tempfile::TempDir;

/// Catalog fixture shared by the integration tests. Fork and Wheelset carry
/// the weights/prices the totals assertions are written against.
pub const SAMPLE_CATALOG: &str = "\
category,brand,model,variant,weight_g,price,notes,source,link
Fork,RockShox,Reba RL,100mm Boost,1650,689,takeoff,LBS,
Fork,Fox,32 Step-Cast,100mm,1446,1100,,,
Wheelset,DT Swiss,XR 1700 SPLINE 29,29in,1672,1250,,online,https://example.com/xr1700
Wheelset,DT Swiss,XR 1501 SPLINE ONE 29,29in,1602,1800,,,
Drivetrain,SRAM,GX Eagle,12s,2100,545,,,
";

pub fn part(category: &str, brand: &str, model: &str, weight_g: f64, price: f64) -> Part {
    Part {
        category: category.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        variant: String::new(),
        weight_g,
        price,
        notes: String::new(),
        source: String::new(),
        link: String::new(),
    }
}

/// The sample catalog built in memory, bypassing the filesystem.
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::default();
    catalog.insert(part("Fork", "RockShox", "Reba RL", 1650.0, 689.0));
    catalog.insert(part("Fork", "Fox", "32 Step-Cast", 1446.0, 1100.0));
    catalog.insert(part("Wheelset", "DT Swiss", "XR 1700 SPLINE 29", 1672.0, 1250.0));
    catalog.insert(part(
        "Wheelset",
        "DT Swiss",
        "XR 1501 SPLINE ONE 29",
        1602.0,
        1800.0,
    ));
    catalog.insert(part("Drivetrain", "SRAM", "GX Eagle", 2100.0, 545.0));
    catalog
}

/// Scratch data root seeded with the sample catalog.
pub struct TempData {
    pub dir: TempDir,
}

impl TempData {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp data root");
        fs::write(dir.path().join("parts.csv"), SAMPLE_CATALOG)
            .expect("failed to seed sample catalog");
        Self { dir }
    }

    /// A data root with no catalog file at all.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp data root");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root().join("parts.csv")
    }

    pub fn scenario_dir(&self) -> PathBuf {
        self.root().join("scenarios")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

/// Runs the planner binary against `root` with `stdin_data` piped in.
pub fn run_planner(root: &Path, args: &[&str], stdin_data: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_partsbench"));
    cmd.current_dir(root)
        .arg("--data-dir")
        .arg(root)
        .args(args)
        .env_remove("PARTSBENCH_DATA_DIR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("failed to spawn partsbench");
    child
        .stdin
        .take()
        .expect("child stdin missing")
        .write_all(stdin_data.as_bytes())
        .expect("failed to write child stdin");
    child
        .wait_with_output()
        .expect("failed to wait for partsbench")
}
