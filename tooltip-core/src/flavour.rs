//! Positional flavour-text detection.
//!
//! Flavour text has no marker of its own. It is recognised as the block
//! sitting directly above one of the anchor blocks, provided the block
//! reads like prose rather than stats.

use crate::anchors::{Anchor, is_instruction_block};
use crate::classify::{has_trailing_tag, is_property_line};
use crate::header::strip_prefix_ci;
use lazy_static::lazy_static;
use regex::Regex;

/// Prefixes of lines that only ever carry item data.
const SYSTEM_PREFIXES: [&str; 6] = [
    "requires:",
    "sockets:",
    "item level:",
    "rarity:",
    "item class:",
    "limited to:",
];

const QUOTE_CHARS: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

lazy_static! {
    /// "- Name, Title" is an attribution; "-10 to Strength" is not.
    static ref HYPHEN_ATTRIBUTION_RE: Regex = Regex::new(r"^- \p{L}").unwrap();
    // "to" is not a keyword.
    static ref MODIFIER_KEYWORD_RE: Regex = Regex::new(
        r"(?i)\b(adds|increased|reduced|more|less|chance|resistance|damage|armour|evasion|energy shield|gain|cannot|skills|modifiers|maximum|minimum)\b"
    )
    .unwrap();
}

fn is_system_line(line: &str) -> bool {
    line == "Corrupted"
        || SYSTEM_PREFIXES
            .iter()
            .any(|prefix| strip_prefix_ci(line, prefix).is_some())
        || is_property_line(line)
}

fn is_attribution_line(line: &str) -> bool {
    line.starts_with('\u{2014}') || HYPHEN_ATTRIBUTION_RE.is_match(line)
}

fn looks_like_modifier(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit() || c == '%') || MODIFIER_KEYWORD_RE.is_match(line)
}

/// Decide whether a block reads like narrative flavour text.
pub fn is_likely_flavour_block(block: &[String]) -> bool {
    if block.is_empty() {
        return false;
    }
    if block.iter().any(|line| is_system_line(line)) {
        return false;
    }
    if block.iter().any(|line| has_trailing_tag(line)) {
        return false;
    }
    // Quotations may span several lines, so any quote mark anywhere counts.
    if block.iter().any(|line| line.contains(QUOTE_CHARS)) {
        return true;
    }
    if block.iter().any(|line| is_attribution_line(line)) {
        return true;
    }
    if block.iter().any(|line| looks_like_modifier(line)) {
        return false;
    }
    true
}

/// Index of the block to treat as flavour text, if any.
///
/// Anchors are tried jewel, then flask, then corrupted; for each only its
/// first occurrence is considered and the first accepted candidate wins.
/// Instruction blocks are never candidates themselves.
pub fn find_flavour_block(blocks: &[Vec<String>]) -> Option<usize> {
    Anchor::PRIORITY.iter().find_map(|anchor| {
        let position = anchor.position(blocks)?;
        let candidate = position.checked_sub(1)?;
        let block = &blocks[candidate];
        (!is_instruction_block(block) && is_likely_flavour_block(block)).then_some(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    const JEWEL: &str = "Place into an allocated Jewel Socket on the Passive Skill Tree.";
    const FLASK: &str =
        "Right click to drink. Can only hold charges while in belt. Refill at Wells.";

    #[test]
    fn test_empty_block_is_not_flavour() {
        assert!(!is_likely_flavour_block(&[]));
    }

    #[test]
    fn test_system_lines_reject() {
        assert!(!is_likely_flavour_block(&block(&["A quiet line", "Requires: Level 4"])));
        assert!(!is_likely_flavour_block(&block(&["Corrupted"])));
        assert!(!is_likely_flavour_block(&block(&["Quality: +5%"])));
        assert!(!is_likely_flavour_block(&block(&["limited to: 1"])));
    }

    #[test]
    fn test_tagged_lines_reject_even_with_quotes() {
        assert!(!is_likely_flavour_block(&block(&["\"Quoted\" (implicit)"])));
    }

    #[test]
    fn test_quotes_accept_despite_digits() {
        assert!(is_likely_flavour_block(&block(&[
            "\u{201C}In 1000 years,",
            "they will remember.\u{201D}"
        ])));
        assert!(is_likely_flavour_block(&block(&["\"More damage,\" he said."])));
    }

    #[test]
    fn test_attribution_lines() {
        assert!(is_likely_flavour_block(&block(&["\u{2014} Izaro"])));
        assert!(is_likely_flavour_block(&block(&["Increased zeal", "- Voll, Emperor"])));
        assert!(!is_likely_flavour_block(&block(&["-10 to Strength"])));
    }

    #[test]
    fn test_hyphen_attribution_needs_single_space() {
        assert!(!is_likely_flavour_block(&block(&["Increased zeal", "-  Voll, Emperor"])));
        assert!(!is_likely_flavour_block(&block(&["Increased zeal", "-Voll, Emperor"])));
        assert!(is_likely_flavour_block(&block(&["Increased zeal", "- Voll, Emperor"])));
    }

    #[test]
    fn test_modifier_shapes_reject() {
        assert!(!is_likely_flavour_block(&block(&["8% increased Fire Damage"])));
        assert!(!is_likely_flavour_block(&block(&["Cannot be Frozen"])));
        assert!(!is_likely_flavour_block(&block(&["Grants immunity to Chill", "Gain Onslaught"])));
    }

    #[test]
    fn test_keywords_match_whole_words() {
        assert!(is_likely_flavour_block(&block(&["Endless the night, nevermore the dawn."])));
        assert!(is_likely_flavour_block(&block(&["Shattered hopes echo through stone."])));
        assert!(is_likely_flavour_block(&block(&["A letter to the king"])));
    }

    #[test]
    fn test_find_flavour_above_jewel() {
        let blocks = vec![
            block(&["+10 to Strength (implicit)"]),
            block(&["\u{2014} Izaro"]),
            block(&[JEWEL]),
        ];
        assert_eq!(find_flavour_block(&blocks), Some(1));
    }

    #[test]
    fn test_find_flavour_priority_jewel_over_flask() {
        let blocks = vec![
            block(&["The first whisper."]),
            block(&[FLASK]),
            block(&["The second whisper."]),
            block(&[JEWEL]),
        ];
        assert_eq!(find_flavour_block(&blocks), Some(2));
    }

    #[test]
    fn test_falls_through_to_corrupted() {
        let blocks = vec![
            block(&["8% increased Fire Damage"]),
            block(&[JEWEL]),
            block(&["Corrupted"]),
        ];
        assert_eq!(find_flavour_block(&blocks), None);

        let blocks = vec![
            block(&["8% increased Fire Damage"]),
            block(&["Born of ash."]),
            block(&["Corrupted"]),
        ];
        assert_eq!(find_flavour_block(&blocks), Some(1));
    }

    #[test]
    fn test_anchor_at_start_has_no_candidate() {
        let blocks = vec![block(&[JEWEL]), block(&["Drifting words."])];
        assert_eq!(find_flavour_block(&blocks), None);
    }

    #[test]
    fn test_only_first_anchor_occurrence_is_used() {
        let blocks = vec![
            block(&["5% reduced Mana Cost"]),
            block(&["Corrupted"]),
            block(&["Silent prose."]),
            block(&["Corrupted"]),
        ];
        assert_eq!(find_flavour_block(&blocks), None);
    }
}
