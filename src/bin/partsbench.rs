//! Build planner CLI.
//!
//! Usage:
//!   partsbench                          # interactive selection
//!   partsbench --clone-last --name v2   # seed from the last saved scenario
//!   partsbench --scenario race.yaml --save
//!   partsbench --add-part

use anyhow::{Context, Result, bail};
use clap::Parser;
use partsbench::report::CURRENCY_SUFFIX;
use partsbench::{
    Catalog, DataRoot, Scenario, Summary, catalog, load_catalog_from_path, prompt, report,
    scenario, select, summarize,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "partsbench")]
#[command(about = "Pick one part per category, total weight and cost, export reports")]
struct Cli {
    /// Seed choices from the most recently saved scenario.
    #[arg(long)]
    clone_last: bool,
    /// Scenario name; prompted for interactively when omitted.
    #[arg(long)]
    name: Option<String>,
    /// Save without the confirmation prompt.
    #[arg(long)]
    auto_save: bool,
    /// Declarative mapping file (category: model query); skips prompting.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Write the scenario and reports in file-driven mode.
    #[arg(long)]
    save: bool,
    /// Append a new part to the catalog and exit.
    #[arg(long)]
    add_part: bool,
    /// Data root holding parts.csv, scenarios/ and reports/.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = DataRoot::resolve(cli.data_dir.clone());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if cli.add_part {
        catalog::add_part_interactive(&mut input, &mut out, &root.catalog_path())?;
        return Ok(());
    }

    let catalog = load_catalog_from_path(&root.catalog_path())?;
    if catalog.is_empty() {
        bail!("no parts found in {}", root.catalog_path().display());
    }

    if let Some(mapping_path) = cli.scenario.clone() {
        return run_declarative(&root, &catalog, &mapping_path, cli.save, &mut out);
    }
    run_interactive(&root, &catalog, &cli, &mut input, &mut out)
}

fn run_declarative<W: Write>(
    root: &DataRoot,
    catalog: &Catalog,
    mapping_path: &Path,
    save: bool,
    out: &mut W,
) -> Result<()> {
    let mapping = select::load_mapping(mapping_path)?;
    let chosen = select::resolve(catalog, &mapping)
        .with_context(|| format!("resolving {}", mapping_path.display()))?;

    let name = mapping_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_else(scenario::default_scenario_name);
    let built = Scenario::new(name, chosen);
    let summary = summarize(catalog, &built);

    writeln!(out, "Scenario from file: {}", built.name)?;
    for row in &summary.rows {
        writeln!(
            out,
            "- {}: {} {}  [{}]  {:.0} g  ${:.0}",
            row.category, row.brand, row.model, row.variant, row.weight_g, row.price
        )?;
    }
    print_totals(out, &summary)?;

    if save {
        persist(root, &built, &summary, out)?;
    }
    Ok(())
}

fn run_interactive<R: BufRead, W: Write>(
    root: &DataRoot,
    catalog: &Catalog,
    cli: &Cli,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Parts Workbench")?;
    writeln!(out, "Catalog: {}", root.catalog_path().display())?;
    writeln!(out)?;
    for (idx, category) in catalog.categories().enumerate() {
        writeln!(
            out,
            "  {}. {} ({} options)",
            idx + 1,
            category,
            catalog.parts(category).len()
        )?;
    }
    writeln!(out)?;

    let seed = if cli.clone_last {
        match scenario::load_last(&root.scenario_dir())? {
            Some(previous) => {
                writeln!(out, "Cloning from: {}", previous.name)?;
                select::seed_from_scenario(catalog, &previous)
            }
            None => {
                eprintln!("no saved scenario to clone; starting fresh");
                Default::default()
            }
        }
    } else {
        Default::default()
    };

    let name = match cli.name.clone() {
        Some(name) => name,
        None => {
            let fallback = scenario::default_scenario_name();
            let answer = prompt::prompt_line(
                input,
                out,
                &format!("Scenario name (Enter for {fallback}): "),
            )?;
            answer.filter(|line| !line.is_empty()).unwrap_or(fallback)
        }
    };

    let chosen = select::select_interactive(input, out, catalog, &seed)?;
    let built = Scenario::new(name, chosen);
    let summary = summarize(catalog, &built);
    print_totals(out, &summary)?;

    if cli.auto_save || prompt::confirm(input, out, "Save scenario? [y/N]: ")? {
        persist(root, &built, &summary, out)?;
    }
    Ok(())
}

fn print_totals<W: Write>(out: &mut W, summary: &Summary) -> Result<()> {
    writeln!(
        out,
        "\nTotals: {:.0} g,  ${:.0} {CURRENCY_SUFFIX}",
        summary.total_weight_g, summary.total_price
    )?;
    Ok(())
}

fn persist<W: Write>(
    root: &DataRoot,
    built: &Scenario,
    summary: &Summary,
    out: &mut W,
) -> Result<()> {
    root.ensure_dirs()?;
    let json_path = scenario::save(built, summary, &root.scenario_dir())?;
    let (csv_path, md_path) = report::write_reports(&root.report_dir(), &built.name, summary)?;
    writeln!(
        out,
        "Saved: {} (reports: {}, {})",
        json_path.display(),
        csv_path.display(),
        md_path.display()
    )?;
    Ok(())
}
