use anyhow::{anyhow, Result};
use std::{fs, path::Path};

/// Parses a whitespace separated list of integers, e.g. the contents of a
/// `p01_w.txt` data file.
pub fn parse_int_list(input: &str) -> Result<Vec<i64>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(pos, token)| {
            token
                .parse::<i64>()
                .map_err(|e| anyhow!("Token {} ({:?}) is not an integer: {}", pos, token, e))
        })
        .collect()
}

/// Parses a list that must hold exactly one integer.
pub fn parse_single_int(input: &str) -> Result<i64> {
    match parse_int_list(input)?.as_slice() {
        [value] => Ok(*value),
        other => Err(anyhow!("Expected exactly one integer, found {}", other.len())),
    }
}

pub fn read_int_list<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    parse_int_list(&content)
}

pub fn read_single_int<P: AsRef<Path>>(path: P) -> Result<i64> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    parse_single_int(&content)
}
