//! Ordered section view over a parsed item, in the order a tooltip
//! renderer lays them out.

use crate::models::{Category, ParsedItem};
use std::fmt;

/// One display section with its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub lines: Vec<String>,
}

/// Category-backed sections following the header and meta line.
const BODY_ORDER: [(Category, &str); 13] = [
    (Category::Property, "Properties"),
    (Category::Limit, "Limits"),
    (Category::Requirement, "Requirements"),
    (Category::Socket, "Sockets"),
    (Category::Implicit, "Implicits"),
    (Category::Enchant, "Enchants"),
    (Category::Rune, "Runes"),
    (Category::GrantedSkill, "Granted Skills"),
    (Category::Mod, "Mods"),
    (Category::Desecrated, "Desecrated"),
    (Category::Mutated, "Mutated"),
    (Category::FooterFlag, "Corrupted"),
    (Category::Flavour, "Flavour"),
];

impl ParsedItem {
    /// "class • Item Level N", with absent parts left out.
    pub fn meta_line(&self) -> Option<String> {
        let parts: Vec<String> = self
            .item_class
            .iter()
            .cloned()
            .chain(self.item_level.map(|level| format!("Item Level {}", level)))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" \u{2022} "))
        }
    }

    /// Non-empty sections in display order.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();

        let header: Vec<String> = self.name.iter().chain(self.base_type.iter()).cloned().collect();
        if !header.is_empty() {
            sections.push(Section { label: "Header", lines: header });
        }
        if let Some(meta) = self.meta_line() {
            sections.push(Section { label: "Meta", lines: vec![meta] });
        }

        for (category, label) in BODY_ORDER {
            let lines = self.lines(category);
            if !lines.is_empty() {
                sections.push(Section { label, lines: lines.to_vec() });
            }
        }

        sections
    }
}

/// Plain-text rendering of [`ParsedItem::sections`], one blank line
/// between sections.
pub struct TextView<'a>(pub &'a ParsedItem);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.0.rarity)?;
        for section in self.0.sections() {
            writeln!(f)?;
            writeln!(f, "{}:", section.label)?;
            for line in &section.lines {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
