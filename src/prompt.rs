//! Line-oriented prompt helpers.
//!
//! Every interactive loop runs through these so tests can script stdin and
//! stdout with in-memory buffers. Loops re-prompt until the input validates;
//! there is no retry cap. End of input mid-prompt aborts the run.

use crate::error::PlannerError;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Reads one line, stripping the trailing newline. `None` on end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
}

/// Prints `prompt` and reads one trimmed line. `None` on end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}

/// Re-prompts until a non-empty value is given.
pub fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        let Some(line) = prompt_line(input, out, prompt)? else {
            bail!("input ended while waiting for '{}'", prompt.trim_end());
        };
        if !line.is_empty() {
            return Ok(line);
        }
        writeln!(out, "  a value is required")?;
    }
}

/// Re-prompts until the value parses as a non-negative number.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<f64> {
    loop {
        let Some(line) = prompt_line(input, out, prompt)? else {
            bail!("input ended while waiting for '{}'", prompt.trim_end());
        };
        match parse_non_negative(&line) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(out, "  {err}")?,
        }
    }
}

/// `y`/`yes` (any case) confirms; anything else declines.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    let answer = prompt_line(input, out, prompt)?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

pub fn parse_non_negative(raw: &str) -> Result<f64, PlannerError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "'{trimmed}' must be a non-negative number"
        )));
    }
    Ok(value)
}
