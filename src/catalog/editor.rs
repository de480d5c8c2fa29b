//! Appends new rows to the parts file.
//!
//! The editor gathers one part interactively and appends it as a single
//! complete CSV line; prior bytes are never rewritten. The file handle lives
//! only for the duration of the append.

use crate::catalog::CATALOG_HEADER;
use crate::catalog::model::{Part, format_measure};
use crate::error::PlannerError;
use crate::prompt::{prompt_line, prompt_number, prompt_required};
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::Path;

/// Prompts for every field of a new part and appends it to `catalog_path`.
///
/// Category, brand, and model are required; weight and price must parse as
/// non-negative numbers (the prompts loop until they do); notes, source, and
/// link are optional.
pub fn add_part_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    catalog_path: &Path,
) -> Result<Part> {
    writeln!(out, "Add a new part to {}", catalog_path.display())?;
    let optional = |value: Option<String>| value.unwrap_or_default();

    let part = Part {
        category: prompt_required(input, out, "Category (e.g., Fork, Wheelset): ")?,
        brand: prompt_required(input, out, "Brand: ")?,
        model: prompt_required(input, out, "Model: ")?,
        variant: optional(prompt_line(input, out, "Variant (e.g., 29x2.35 TLR): ")?),
        weight_g: prompt_number(input, out, "Weight in grams: ")?,
        price: prompt_number(input, out, "Price: ")?,
        notes: optional(prompt_line(input, out, "Notes (optional): ")?),
        source: optional(prompt_line(input, out, "Source/store (optional): ")?),
        link: optional(prompt_line(input, out, "Link (optional): ")?),
    };

    append_part(catalog_path, &part)?;
    writeln!(out, "added {} to {}", part.label(), catalog_path.display())?;
    Ok(part)
}

/// Appends one row, writing the header first when the file does not exist.
///
/// The row is serialized in full before the file is touched, then written in
/// one call, so an interrupted append never leaves a partial record.
pub fn append_part(path: &Path, part: &Part) -> Result<(), PlannerError> {
    let write_err = |source: std::io::Error| PlannerError::Write {
        path: path.to_path_buf(),
        source,
    };

    let include_header = !path.exists();
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        let record_err = |err: csv::Error| write_err(std::io::Error::other(err));
        if include_header {
            writer.write_record(CATALOG_HEADER).map_err(record_err)?;
        }
        writer
            .write_record([
                part.category.as_str(),
                part.brand.as_str(),
                part.model.as_str(),
                part.variant.as_str(),
                &format_measure(part.weight_g),
                &format_measure(part.price),
                part.notes.as_str(),
                part.source.as_str(),
                part.link.as_str(),
            ])
            .map_err(record_err)?;
        writer.flush().map_err(write_err)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(&buf).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}
