//! Interactive per-category selection.
//!
//! For each category (first-seen order) the selector prints the numbered
//! option list and loops on input until it gets a pick, a skip, or a kept
//! seed. `/text` filters the list by case-insensitive substring against
//! `brand model`; a number then picks from the filtered view, an empty line
//! clears the filter. Out-of-range or unrecognized input re-prompts with no
//! retry cap.

use crate::catalog::{Catalog, Part};
use crate::error::PlannerError;
use crate::prompt::read_line;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

const PROMPT_FULL: &str = "Choose # (or /text to search, Enter to skip): ";
const PROMPT_FILTERED: &str = "Pick # from results (/text to search again, Enter to clear): ";

/// Walks every category and collects the chosen parts.
///
/// `seed` supplies per-category defaults (from `--clone-last`); an empty
/// line keeps the seed where one exists and otherwise selects nothing.
pub fn select_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    catalog: &Catalog,
    seed: &BTreeMap<String, Part>,
) -> Result<BTreeMap<String, Part>> {
    let mut chosen = BTreeMap::new();
    for category in catalog.categories() {
        let pick = pick_for_category(input, out, category, catalog.parts(category), seed.get(category))?;
        if let Some(part) = pick {
            chosen.insert(category.to_string(), part.clone());
        }
        let weight: f64 = chosen.values().map(|part: &Part| part.weight_g).sum();
        let price: f64 = chosen.values().map(|part: &Part| part.price).sum();
        writeln!(out, "Current totals: {weight:.0} g,  ${price:.0}")?;
    }
    Ok(chosen)
}

fn pick_for_category<'a, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    category: &str,
    options: &'a [Part],
    seed: Option<&'a Part>,
) -> Result<Option<&'a Part>> {
    writeln!(out, "\nCategory: {category}")?;
    print_options(out, options)?;
    if let Some(part) = seed {
        writeln!(out, "  (press Enter to keep current: {})", part.label())?;
    }

    let mut view: Vec<&Part> = options.iter().collect();
    let mut filtered = false;
    loop {
        write!(out, "{}", if filtered { PROMPT_FILTERED } else { PROMPT_FULL })?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            // Input ended; treat like a skip so partial transcripts finish.
            return Ok(seed);
        };
        let line = line.trim();

        if line.is_empty() {
            if filtered {
                view = options.iter().collect();
                filtered = false;
                print_options(out, options)?;
                continue;
            }
            return Ok(seed);
        }

        if let Some(token) = line.strip_prefix('/') {
            let needle = token.trim().to_lowercase();
            let hits: Vec<&Part> = options
                .iter()
                .filter(|part| part.label().to_lowercase().contains(&needle))
                .collect();
            if hits.is_empty() {
                writeln!(out, "  no match for '{}'", token.trim())?;
                continue;
            }
            for (idx, part) in hits.iter().enumerate() {
                writeln!(out, "  {}. {}", idx + 1, part.display_line())?;
            }
            view = hits;
            filtered = true;
            continue;
        }

        match parse_choice(line, view.len()) {
            Ok(idx) => return Ok(Some(view[idx - 1])),
            Err(err) => writeln!(out, "  {err}")?,
        }
    }
}

fn print_options<W: Write>(out: &mut W, options: &[Part]) -> Result<()> {
    for (idx, part) in options.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, part.display_line())?;
    }
    Ok(())
}

fn parse_choice(raw: &str, len: usize) -> Result<usize, PlannerError> {
    let idx: usize = raw.parse().map_err(|_| {
        PlannerError::InvalidInput(format!("expected a number between 1 and {len}"))
    })?;
    if idx == 0 || idx > len {
        return Err(PlannerError::InvalidInput(format!(
            "{idx} is out of range (1-{len})"
        )));
    }
    Ok(idx)
}
