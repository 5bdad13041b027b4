//! Text normalization and block segmentation.

use crate::models::Block;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A line of four or more dashes standing alone between two newlines.
    static ref SEPARATOR_RE: Regex = Regex::new(r"\n-{4,}\n").unwrap();
}

/// Canonicalize line endings to `\n` and trim outer whitespace.
pub fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Split normalized text into blocks of trimmed, non-empty lines.
///
/// Segments left empty after filtering are dropped, so indices in the
/// returned list are dense.
pub fn split_blocks(text: &str) -> Vec<Block> {
    SEPARATOR_RE
        .split(text)
        .map(split_lines)
        .filter(|block| !block.is_empty())
        .collect()
}

fn split_lines(segment: &str) -> Block {
    segment
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
