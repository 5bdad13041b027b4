//! Line classification.
//!
//! Every line outside the header, the instruction blocks and the flavour
//! block is run through [`LINE_RULES`] in order. The first rule that
//! matches consumes the line.

use crate::header::strip_prefix_ci;
use crate::models::{Category, KnownTag};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref GRANTS_SKILL_RE: Regex = Regex::new(r"(?i)^Grants Skill:\s*").unwrap();
    static ref LIMITED_TO_RE: Regex = Regex::new(r"(?i)^Limited to:\s*(.+)$").unwrap();
    static ref LEADING_INT_RE: Regex = Regex::new(r"^[+-]?\d+").unwrap();
    /// Trailing annotation marker with any whitespace before it.
    static ref TRAILING_TAG_RE: Regex = Regex::new(
        r"(?i)\s*\((augmented|implicit|enchant|rune|desecrated|mutated)\)\s*$"
    )
    .unwrap();
}

/// Lower-case prefixes of property lines such as `Quality: +20%`.
pub const PROPERTY_PREFIXES: [&str; 7] = [
    "quality",
    "physical damage:",
    "elemental damage:",
    "armour:",
    "evasion rating:",
    "energy shield:",
    "block chance:",
];

const ITEM_LEVEL_PREFIX: &str = "item level:";
const REQUIRES_PREFIX: &str = "requires:";
const SOCKETS_PREFIX: &str = "sockets:";

/// Outcome of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Entry(Category, String),
    ItemLevel(i32),
    /// Consumed without producing a value.
    Dropped,
}

/// One step of the rule chain.
pub struct LineRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<Classified>,
}

/// Rules in priority order. The last rule always matches.
pub static LINE_RULES: [LineRule; 8] = [
    LineRule { name: "granted_skill", apply: granted_skill },
    LineRule { name: "corrupted", apply: corrupted },
    LineRule { name: "limited_to", apply: limited_to },
    LineRule { name: "item_level", apply: item_level },
    LineRule { name: "requires", apply: requires },
    LineRule { name: "sockets", apply: sockets },
    LineRule { name: "property", apply: property },
    LineRule { name: "modifier", apply: modifier },
];

pub fn is_property_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    PROPERTY_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix))
}

pub fn has_trailing_tag(line: &str) -> bool {
    TRAILING_TAG_RE.is_match(line)
}

/// Remove a trailing annotation marker and report which tag it carried.
pub fn strip_trailing_tag(line: &str) -> (String, KnownTag) {
    match TRAILING_TAG_RE.captures(line) {
        Some(caps) => {
            let tag = caps
                .get(1)
                .map(|m| KnownTag::from_marker(m.as_str()))
                .unwrap_or(KnownTag::None);
            let start = caps.get(0).map(|m| m.start()).unwrap_or(line.len());
            (line[..start].trim_end().to_string(), tag)
        }
        None => (line.trim_end().to_string(), KnownTag::None),
    }
}

fn stripped(line: &str) -> String {
    strip_trailing_tag(line).0
}

fn granted_skill(line: &str) -> Option<Classified> {
    let m = GRANTS_SKILL_RE.find(line)?;
    let skill = line[m.end()..].trim();
    Some(Classified::Entry(
        Category::GrantedSkill,
        format!("Grants Skill: {}", skill),
    ))
}

fn corrupted(line: &str) -> Option<Classified> {
    (line == "Corrupted").then(|| Classified::Entry(Category::FooterFlag, line.to_string()))
}

fn limited_to(line: &str) -> Option<Classified> {
    let caps = LIMITED_TO_RE.captures(line)?;
    let limit = caps.get(1)?.as_str();
    Some(Classified::Entry(
        Category::Limit,
        format!("Limited to: {}", stripped(limit)),
    ))
}

fn item_level(line: &str) -> Option<Classified> {
    let rest = strip_prefix_ci(line, ITEM_LEVEL_PREFIX)?;
    let level = LEADING_INT_RE
        .find(rest.trim_start())
        .and_then(|m| m.as_str().parse::<i32>().ok());
    Some(match level {
        Some(level) => Classified::ItemLevel(level),
        None => Classified::Dropped,
    })
}

fn requires(line: &str) -> Option<Classified> {
    let rest = strip_prefix_ci(line, REQUIRES_PREFIX)?;
    Some(Classified::Entry(Category::Requirement, stripped(rest.trim())))
}

fn sockets(line: &str) -> Option<Classified> {
    let rest = strip_prefix_ci(line, SOCKETS_PREFIX)?;
    Some(Classified::Entry(Category::Socket, stripped(rest.trim())))
}

fn property(line: &str) -> Option<Classified> {
    is_property_line(line).then(|| Classified::Entry(Category::Property, stripped(line)))
}

fn modifier(line: &str) -> Option<Classified> {
    let (text, tag) = strip_trailing_tag(line);
    Some(Classified::Entry(tag.category(), text))
}

/// Run a line through the rule chain.
pub fn classify_line(line: &str) -> Classified {
    for rule in LINE_RULES.iter() {
        if let Some(classified) = (rule.apply)(line) {
            trace!(rule = rule.name, line, "classified line");
            return classified;
        }
    }
    Classified::Entry(Category::Mod, line.to_string())
}
