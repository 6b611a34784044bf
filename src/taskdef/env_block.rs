//! Parsing of the two environment override inputs.

use super::EnvPair;
use crate::error::{RenderError, Result};

/// Parse a newline-separated block of `NAME=value` lines.
///
/// Lines are trimmed and blank lines skipped. Each line splits at its first
/// `=`; the value keeps any later `=` characters. A non-blank line without
/// `=` fails the whole block with `MalformedPair`.
pub fn parse_env_block(block: &str) -> Result<Vec<EnvPair>> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Result<EnvPair> {
    let (name, value) = line
        .split_once('=')
        .ok_or_else(|| RenderError::MalformedPair(line.to_string()))?;
    Ok(EnvPair::new(name, value))
}

/// Split a comma-separated list of variable names.
///
/// Names are trimmed and empty segments dropped. Order and duplicates are
/// kept. This differs from splitting verbatim: `"A, B,"` requests `A` and
/// `B`, so an existing entry literally named `" B"` is not matched.
pub fn parse_name_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
