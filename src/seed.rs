//! Plain-text seed lists.
//!
//! One entry per line, `word<TAB>popularity`. Blank lines and lines starting
//! with `#` are skipped. The word is taken verbatim; the popularity is trimmed
//! and parsed as a base-10 integer.

use std::{fs, path::Path};

use num::PrimInt;
use tracing::debug;

/// Errors raised while loading a seed list
#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    /// Line has no tab separator.
    #[error("line {line}: expected `word<TAB>popularity`")]
    MissingPopularity { line: usize },
    /// Popularity field is not an integer of the target type.
    #[error("line {line}: invalid popularity {value:?}")]
    InvalidPopularity { line: usize, value: String },
    /// Seed file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a seed list into `(word, popularity)` pairs, in file order.
pub fn parse_seed<P>(text: &str) -> Result<Vec<(String, P)>, SeedError>
where
    P: PrimInt,
{
    let mut pairs = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (word, value) = raw
            .split_once('\t')
            .ok_or(SeedError::MissingPopularity { line })?;
        let value = value.trim();
        let popularity = P::from_str_radix(value, 10).map_err(|_| SeedError::InvalidPopularity {
            line,
            value: value.to_string(),
        })?;
        pairs.push((word.to_string(), popularity));
    }
    debug!(entries = pairs.len(), "parsed seed list");
    Ok(pairs)
}

/// Read and parse a seed file
pub fn read_seed<P, T>(path: T) -> Result<Vec<(String, P)>, SeedError>
where
    P: PrimInt,
    T: AsRef<Path>,
{
    let text = fs::read_to_string(path.as_ref())?;
    parse_seed(&text)
}
